//! Mock Data
//!
//! Static fixtures rendered by the storefront and dashboards.

use crate::models::{
    Category, CategoryStatus, DashboardStats, Inspection, InspectionResult, Order, OrderStatus, Product,
    Vendor, VendorStatus,
};

fn category(id: u32, name: &str, parent_id: Option<u32>, sort_order: i32) -> Category {
    Category {
        sort_order,
        ..Category::new(id, name, parent_id)
    }
}

pub fn categories() -> Vec<Category> {
    let mut list = vec![
        category(1, "Electronics", None, 0),
        category(2, "Fashion", None, 1),
        category(3, "Home & Kitchen", None, 2),
        category(4, "Mobiles", Some(1), 0),
        category(5, "Laptops", Some(1), 1),
        category(6, "Audio", Some(1), 2),
        category(7, "Men's Wear", Some(2), 0),
        category(8, "Women's Wear", Some(2), 1),
        category(9, "Cookware", Some(3), 0),
        category(10, "Headphones", Some(6), 0),
        category(11, "Furniture", Some(3), 1),
    ];
    list[10].status = CategoryStatus::Inactive;
    list
}

fn product(
    id: u32,
    name: &str,
    category_id: u32,
    vendor_id: u32,
    price_cents: u64,
    stock: u32,
    rating: f32,
    featured: bool,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
        vendor_id,
        price_cents,
        stock,
        rating,
        description: description.to_string(),
        featured,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Aurora X2 Smartphone", 4, 1, 2_499_900, 34, 4.5, true,
            "6.5\" AMOLED display with **120Hz** refresh.\n\n- 128 GB storage\n- 5000 mAh battery\n- Dual SIM"),
        product(2, "Nimbus 14 Laptop", 5, 1, 6_899_900, 12, 4.3, true,
            "Thin and light, *1.2 kg*.\n\n| Spec | Value |\n|---|---|\n| CPU | 8-core |\n| RAM | 16 GB |"),
        product(3, "Pulse Wireless Headphones", 10, 2, 399_900, 80, 4.1, false,
            "Active noise cancellation with 30 hours of playback."),
        product(4, "Cotton Kurta", 7, 3, 129_900, 150, 4.0, true,
            "Hand-block printed, 100% cotton.\n\nMachine wash cold."),
        product(5, "Silk Saree", 8, 3, 849_900, 9, 4.8, false,
            "Pure Kanjeevaram silk with zari border."),
        product(6, "Tri-Ply Kadai", 9, 4, 219_900, 40, 4.4, true,
            "Induction friendly. ~~Aluminium~~ stainless steel body."),
        product(7, "Bluetooth Speaker", 6, 2, 179_900, 0, 3.9, false,
            "Splash-proof, 12 hours playback."),
    ]
}

pub fn orders() -> Vec<Order> {
    let order = |id, customer: &str, product_id, quantity, total_cents, status, placed_on: &str| Order {
        id,
        customer: customer.to_string(),
        product_id,
        quantity,
        total_cents,
        status,
        placed_on: placed_on.to_string(),
    };
    vec![
        order(1001, "Asha Rao", 1, 1, 2_499_900, OrderStatus::Delivered, "2024-03-02"),
        order(1002, "Vikram Shah", 4, 3, 389_700, OrderStatus::Shipped, "2024-03-05"),
        order(1003, "Meera Iyer", 6, 1, 219_900, OrderStatus::Pending, "2024-03-06"),
        order(1004, "Rohan Das", 3, 2, 799_800, OrderStatus::Cancelled, "2024-03-06"),
        order(1005, "Fatima Khan", 2, 1, 6_899_900, OrderStatus::Pending, "2024-03-07"),
    ]
}

pub fn vendors() -> Vec<Vendor> {
    let vendor = |id, business_name: &str, contact_email: &str, status, product_count, joined_on: &str| Vendor {
        id,
        business_name: business_name.to_string(),
        contact_email: contact_email.to_string(),
        status,
        product_count,
        joined_on: joined_on.to_string(),
    };
    vec![
        vendor(1, "Aurora Electronics", "sales@aurora.in", VendorStatus::Approved, 2, "2023-11-14"),
        vendor(2, "SoundWorks", "hello@soundworks.in", VendorStatus::Approved, 2, "2024-01-09"),
        vendor(3, "Kiran Textiles", "kiran@textiles.in", VendorStatus::Pending, 2, "2024-02-27"),
        vendor(4, "HomeCraft", "care@homecraft.in", VendorStatus::Suspended, 1, "2023-08-30"),
    ]
}

pub fn inspections() -> Vec<Inspection> {
    let inspection = |id, vendor_id, product_id, scheduled_for: &str, result, notes: Option<&str>| Inspection {
        id,
        vendor_id,
        product_id,
        scheduled_for: scheduled_for.to_string(),
        result,
        notes: notes.map(str::to_string),
    };
    vec![
        inspection(501, 3, 4, "2024-03-10", InspectionResult::Scheduled, None),
        inspection(502, 3, 5, "2024-03-11", InspectionResult::Scheduled, None),
        inspection(503, 1, 1, "2024-02-20", InspectionResult::Passed, Some("Packaging meets spec")),
        inspection(504, 4, 6, "2024-02-18", InspectionResult::Failed, Some("Handle rivets loose")),
    ]
}

/// Aggregates derived from the fixtures above
pub fn dashboard_stats() -> DashboardStats {
    let orders = orders();
    let vendors = vendors();
    DashboardStats {
        total_revenue_cents: orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total_cents)
            .sum(),
        order_count: orders.len() as u32,
        active_vendors: vendors.iter().filter(|v| v.status == VendorStatus::Approved).count() as u32,
        pending_vendors: vendors.iter().filter(|v| v.status == VendorStatus::Pending).count() as u32,
        product_count: products().len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_tree::validate_categories;

    #[test]
    fn test_mock_categories_are_well_formed() {
        assert_eq!(validate_categories(&categories()), Ok(()));
    }

    #[test]
    fn test_mock_references_resolve() {
        let cats = categories();
        let vendors = vendors();
        let products = products();
        for p in &products {
            assert!(cats.iter().any(|c| c.id == p.category_id), "product {}", p.id);
            assert!(vendors.iter().any(|v| v.id == p.vendor_id), "product {}", p.id);
        }
        for o in orders() {
            assert!(products.iter().any(|p| p.id == o.product_id), "order {}", o.id);
        }
        for i in inspections() {
            assert!(products.iter().any(|p| p.id == i.product_id), "inspection {}", i.id);
        }
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = dashboard_stats();
        assert_eq!(stats.order_count, 5);
        assert_eq!(stats.active_vendors, 2);
        assert_eq!(stats.pending_vendors, 1);
        assert_eq!(stats.total_revenue_cents, 2_499_900 + 389_700 + 219_900 + 6_899_900);
    }
}
