mod api_error;
mod app_error;

pub use api_error::{extract_detail, status_to_app_error, ApiErrorBody, ApiErrorDetail};
pub use app_error::{AppError, AppResult};
