//! Request/response log events for `log_all()`.

use verbs_domain::request::{Headers, RequestSpec};
use verbs_domain::response::ResponseSpec;

fn format_headers(headers: &Headers) -> String {
    headers
        .iter()
        .map(|h| format!("{}={}", h.name, h.value))
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn log_request(request: &RequestSpec) {
    tracing::info!(
        request_id = %request.id,
        method = %request.method,
        url = %request.url,
        content_type = request.content_type().unwrap_or("<none>"),
        headers = %format_headers(&request.headers),
        body = %request.body.content,
        "request"
    );
}

pub(crate) fn log_response(request: &RequestSpec, response: &ResponseSpec) {
    tracing::info!(
        request_id = %request.id,
        status = %response.status_code(),
        duration = %response.duration_display(),
        headers = %format_headers(&response.headers),
        body = %response.body,
        "response"
    );
}
