use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    Error, HttpRequest, HttpResponse,
};

/// Standardized `{"error": {"code", "message"}}` response
pub fn error_response(status_code: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message.into(),
        }
    }))
}

/// Renders malformed JSON bodies in the standard error shape.
/// Registered through `web::JsonConfig::error_handler`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid request body: {}", err);
    tracing::warn!("{}", message);
    let response = error_response(StatusCode::BAD_REQUEST, message.clone());
    InternalError::from_response(message, response).into()
}
