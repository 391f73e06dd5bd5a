//! Product Service
//!
//! Catalogue reads for the storefront and admin pages. Served from fixtures.

use super::{simulate_latency, ApiError};
use crate::category_tree::descendant_ids;
use crate::mock;
use crate::models::{Category, CategoryStatus, Product};

pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    simulate_latency().await;
    Ok(mock::products())
}

pub async fn get_product(id: u32) -> Result<Option<Product>, ApiError> {
    simulate_latency().await;
    Ok(mock::products().into_iter().find(|p| p.id == id))
}

/// Categories shown in the storefront navigation (active only)
pub async fn list_catalog_categories() -> Result<Vec<Category>, ApiError> {
    Ok(mock::categories().into_iter().filter(|c| c.status == CategoryStatus::Active).collect())
}

pub async fn update_product(product: Product) -> Result<Product, ApiError> {
    simulate_latency().await;
    log::info!("saved product {} (mock)", product.id);
    Ok(product)
}

/// Products in `category_id` or any of its subcategories
pub fn filter_by_category(products: &[Product], categories: &[Category], category_id: Option<u32>) -> Vec<Product> {
    match category_id {
        None => products.to_vec(),
        Some(id) => {
            let ids = descendant_ids(categories, id);
            products.iter().filter(|p| ids.contains(&p.category_id)).cloned().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_category_includes_subcategories() {
        let products = mock::products();
        let categories = mock::categories();

        let electronics: Vec<u32> = filter_by_category(&products, &categories, Some(1))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(electronics, vec![1, 2, 3, 7]);

        let audio: Vec<u32> = filter_by_category(&products, &categories, Some(6))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(audio, vec![3, 7]);

        assert_eq!(filter_by_category(&products, &categories, None).len(), products.len());
    }
}
