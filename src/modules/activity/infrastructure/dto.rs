use serde::Deserialize;

/// `GET /categories` wraps the list in an object
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
