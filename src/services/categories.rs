//! Category Service
//!
//! CRUD against `/api/categories`.

use serde::Serialize;

use super::{get_json, send_empty, send_json, ApiError};
use crate::models::{slugify, Category, CategoryStatus};

const CATEGORIES_ENDPOINT: &str = "/api/categories";

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<u32>,
    pub status: CategoryStatus,
    pub sort_order: i32,
}

impl CategoryInput {
    /// Blank slug falls back to one derived from the name
    pub fn new(name: &str, slug: &str, parent_id: Option<u32>, status: CategoryStatus, sort_order: i32) -> Self {
        let slug = if slug.trim().is_empty() { slugify(name) } else { slugify(slug) };
        Self {
            name: name.trim().to_string(),
            slug,
            parent_id,
            status,
            sort_order,
        }
    }

}

fn category_endpoint(id: u32) -> String {
    format!("{}/{}", CATEGORIES_ENDPOINT, id)
}

pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    get_json(CATEGORIES_ENDPOINT).await
}

pub async fn create_category(input: &CategoryInput) -> Result<Category, ApiError> {
    send_json("POST", CATEGORIES_ENDPOINT, input).await
}

pub async fn update_category(id: u32, input: &CategoryInput) -> Result<Category, ApiError> {
    send_json("PUT", &category_endpoint(id), input).await
}

pub async fn delete_category(id: u32) -> Result<(), ApiError> {
    send_empty("DELETE", &category_endpoint(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_derives_slug() {
        let input = CategoryInput::new("  Home Decor ", "", None, CategoryStatus::Active, 3);
        assert_eq!(input.name, "Home Decor");
        assert_eq!(input.slug, "home-decor");

        let input = CategoryInput::new("Home Decor", "Decor & More", Some(1), CategoryStatus::Inactive, 0);
        assert_eq!(input.slug, "decor-more");
    }

    #[test]
    fn test_input_wire_format() {
        let input = CategoryInput::new("Audio", "audio", Some(1), CategoryStatus::Active, 2);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["parentId"], 1);
        assert_eq!(json["sortOrder"], 2);
        assert_eq!(json["status"], "active");
        assert_eq!(category_endpoint(9), "/api/categories/9");
    }
}
