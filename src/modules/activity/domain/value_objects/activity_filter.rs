use serde::{Deserialize, Serialize};

/// Optional narrowing of the activity list.
///
/// Category is an exact match against the service's category list; location
/// is a substring match done by the service. Blank values mean "no filter" and
/// are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ActivityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    /// Build from raw form input, where an empty string means "all"
    pub fn from_form(category: &str, location: &str) -> Self {
        Self::new().with_category(category).with_location(location)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.location.is_none()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
