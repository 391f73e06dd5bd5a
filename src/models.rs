//! Frontend Models
//!
//! Data structures matching backend entities and mock data.

use serde::{Deserialize, Deserializer, Serialize};

/// Category publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "inactive" => CategoryStatus::Inactive,
            _ => CategoryStatus::Active,
        }
    }
}

/// Product category (matches backend, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub status: CategoryStatus,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub subcategories: Vec<Category>,
}

impl Category {
    pub fn new(id: u32, name: &str, parent_id: Option<u32>) -> Self {
        Self {
            id,
            name: name.to_string(),
            slug: slugify(name),
            parent_id,
            status: CategoryStatus::Active,
            sort_order: 0,
            subcategories: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Lowercase, hyphen-separated slug
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Signed-in user as returned by the auth backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backends send either `"42"` or `42`; kept as text
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl User {
    /// Role comparison is case-insensitive
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

/// Token plus user, as persisted in browser storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAuth {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    pub vendor_id: u32,
    /// Price in minor units (paise / cents)
    pub price_cents: u64,
    pub stock: u32,
    pub rating: f32,
    /// Markdown
    pub description: String,
    pub featured: bool,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_price(self.price_cents)
    }
}

/// `12345` -> `"₹123.45"`
pub fn format_price(cents: u64) -> String {
    format!("₹{}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub product_id: u32,
    pub quantity: u32,
    pub total_cents: u64,
    pub status: OrderStatus,
    pub placed_on: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl VendorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "Pending",
            VendorStatus::Approved => "Approved",
            VendorStatus::Rejected => "Rejected",
            VendorStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: u32,
    pub business_name: String,
    pub contact_email: String,
    pub status: VendorStatus,
    pub product_count: u32,
    pub joined_on: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionResult {
    Scheduled,
    Passed,
    Failed,
}

impl InspectionResult {
    pub fn label(&self) -> &'static str {
        match self {
            InspectionResult::Scheduled => "Scheduled",
            InspectionResult::Passed => "Passed",
            InspectionResult::Failed => "Failed",
        }
    }
}

/// Quality inspection assigned to a checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: u32,
    pub vendor_id: u32,
    pub product_id: u32,
    pub scheduled_for: String,
    pub result: InspectionResult,
    pub notes: Option<String>,
}

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue_cents: u64,
    pub order_count: u32,
    pub active_vendors: u32,
    pub pending_vendors: u32,
    pub product_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_format() {
        let json = r#"{"id":3,"name":"Phones","slug":"phones","parentId":1,"status":"inactive","sortOrder":2}"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.parent_id, Some(1));
        assert_eq!(cat.status, CategoryStatus::Inactive);
        assert_eq!(cat.sort_order, 2);
        assert!(cat.subcategories.is_empty());

        let out = serde_json::to_value(&cat).unwrap();
        assert_eq!(out["parentId"], 1);
        assert_eq!(out["sortOrder"], 2);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Home & Kitchen"), "home-kitchen");
        assert_eq!(slugify("  Men's Wear "), "men-s-wear");
    }

    #[test]
    fn test_user_admin_role_case_insensitive() {
        let mut user = User {
            id: "u1".into(),
            email: "a@b.com".into(),
            name: "A".into(),
            role: "ADMIN".into(),
        };
        assert!(user.is_admin());
        user.role = "vendor".into();
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_id_accepts_number_or_string() {
        let numeric: User = serde_json::from_str(r#"{"id":1,"email":"a@b.com","name":"Ann","role":"admin"}"#).unwrap();
        assert_eq!(numeric.id, "1");
        let text: User = serde_json::from_str(r#"{"id":"u-7","email":"a@b.com","name":"Ann","role":"admin"}"#).unwrap();
        assert_eq!(text.id, "u-7");
        assert!(serde_json::from_str::<User>(r#"{"id":true,"email":"a@b.com","name":"Ann","role":"admin"}"#).is_err());

        // Written back as a string, so the stored copy reads the same way
        let stored = serde_json::to_string(&numeric).unwrap();
        assert_eq!(serde_json::from_str::<User>(&stored).unwrap(), numeric);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(129900), "₹1299.00");
        assert_eq!(format_price(5), "₹0.05");
    }
}
