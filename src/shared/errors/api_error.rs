use reqwest::StatusCode;
use serde::Deserialize;

use super::AppError;

/// Error body returned by the activity service.
///
/// Handlers raise `{"detail": "..."}`; request-shape failures come back as a
/// list of field errors under the same key.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl ApiErrorDetail {
    pub fn message(&self) -> String {
        match self {
            ApiErrorDetail::Message(message) => message.clone(),
            ApiErrorDetail::Fields(fields) => fields
                .iter()
                .map(|field| match field.loc.last() {
                    Some(serde_json::Value::String(name)) => format!("{}: {}", name, field.msg),
                    _ => field.msg.clone(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Extract the server-provided message from a raw error body, if any
pub fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.detail.message())
        .filter(|message| !message.trim().is_empty())
}

/// Map a non-success response onto the crate error type
pub fn status_to_app_error(status: StatusCode, body: &str) -> AppError {
    let detail = extract_detail(body);
    let message = |default: &str| detail.clone().unwrap_or_else(|| default.to_string());

    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(message("Resource not found")),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            AppError::ValidationError(message("Request rejected by activity service"))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::Unauthorized(message("Not authorized"))
        }
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitError(message("Too many requests")),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AppError::ExternalServiceError(message("Request timeout"))
        }
        _ if status.is_server_error() => AppError::ExternalServiceError(format!(
            "Activity service unavailable ({}){}",
            status,
            detail.map(|d| format!(": {}", d)).unwrap_or_default()
        )),
        _ => AppError::ApiError(format!(
            "Unexpected status {}{}",
            status,
            detail.map(|d| format!(": {}", d)).unwrap_or_default()
        )),
    }
}
