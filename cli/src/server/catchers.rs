use rocket::{Request, catch, http::Status, serde::json::Json};

use crate::server::ErrorBody;

#[catch(default)]
pub fn default_catcher(
    status: Status,
    request: &Request<'_>,
) -> (Status, Json<ErrorBody>) {
    let error = match status.code {
        404 => format!("Not found: {} {}", request.method(), request.uri()),
        500 => "Internal server error".to_string(),
        _ => status.reason().unwrap_or("Request failed").to_string(),
    };
    tracing::debug!(status = status.code, uri = %request.uri(), "{error}");
    (status, Json(ErrorBody {
        error,
    }))
}
