use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    fn required_text(field: &str, value: &str, max_chars: usize) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Self::optional_text(field, value, max_chars)
    }

    fn optional_text(field: &str, value: &str, max_chars: usize) -> Result<(), AppError> {
        if value.chars().count() > max_chars {
            return Err(AppError::ValidationError(format!(
                "{} too long (max {} characters)",
                field, max_chars
            )));
        }
        Ok(())
    }

    pub fn validate_activity_title(title: &str) -> Result<(), AppError> {
        Self::required_text("Title", title, 200)
    }

    pub fn validate_location(location: &str) -> Result<(), AppError> {
        Self::required_text("Location", location, 200)
    }

    pub fn validate_category(category: &str) -> Result<(), AppError> {
        Self::required_text("Category", category, 50)
    }

    pub fn validate_contact_name(name: &str) -> Result<(), AppError> {
        Self::required_text("Name", name, 100)
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        Self::required_text("Email", email, 100)?;

        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {}", e)))?;
        if !re.is_match(email.trim()) {
            return Err(AppError::ValidationError(
                "Email address is not valid".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_phone(phone: &str) -> Result<(), AppError> {
        Self::optional_text("Phone", phone, 20)?;

        let re = Regex::new(r"^[0-9+\-() ]*$")
            .map_err(|e| AppError::InternalError(format!("Invalid phone pattern: {}", e)))?;
        if !re.is_match(phone) {
            return Err(AppError::ValidationError(
                "Phone number contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_availability(availability: &str) -> Result<(), AppError> {
        Self::optional_text("Availability", availability, 200)
    }

    pub fn validate_notes(notes: &str) -> Result<(), AppError> {
        Self::optional_text("Notes", notes, 1000)
    }

    pub fn validate_plan_type(plan_type: &str) -> Result<(), AppError> {
        Self::required_text("Plan type", plan_type, 50)
    }

    pub fn validate_id(kind: &str, id: i64) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::ValidationError(format!(
                "{} ID must be positive",
                kind
            )));
        }
        Ok(())
    }
}
