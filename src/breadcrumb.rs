//! Breadcrumb Utilities
//!
//! Derives a labeled navigation trail from the current URL path.

/// Single entry in a breadcrumb trail. `href` is `None` for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// Dashboards whose first two segments collapse into one root crumb
const ROLE_PREFIXES: &[(&str, &str)] = &[("admin", "dashboard"), ("vendor", "dashboard")];

/// Segment -> display label
const SEGMENT_LABELS: &[(&str, &str)] = &[
    ("products", "Products"),
    ("product", "Product"),
    ("categories", "Categories"),
    ("orders", "Orders"),
    ("vendors", "Vendors"),
    ("customers", "Customers"),
    ("inventory", "Inventory"),
    ("analytics", "Analytics"),
    ("settings", "Settings"),
    ("profile", "Profile"),
    ("inspections", "Inspections"),
    ("payouts", "Payouts"),
    ("reviews", "Reviews"),
    ("edit", "Edit"),
    ("add", "Add New"),
    ("new", "Add New"),
    ("add-product", "Add Product"),
    ("add-category", "Add Category"),
    ("onboarding", "Onboarding"),
];

/// Build the breadcrumb trail for `path`.
///
/// `/admin/dashboard/products/edit/42` yields
/// `Dashboard > Products > Edit > #42` with every crumb except the last linked.
pub fn build_breadcrumbs(path: &str) -> Vec<BreadcrumbItem> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let (mut items, mut href, rest) = match role_prefix(&segments) {
        Some((role, dashboard)) => {
            let root = format!("/{}/{}", role, dashboard);
            (vec![BreadcrumbItem::link("Dashboard", root.clone())], root, &segments[2..])
        }
        None => (vec![BreadcrumbItem::link("Home", "/")], String::new(), &segments[..]),
    };

    for segment in rest {
        href.push('/');
        href.push_str(segment);
        items.push(BreadcrumbItem::link(segment_label(segment), href.clone()));
    }

    if let Some(last) = items.last_mut() {
        last.href = None;
    }
    items
}

/// A trail is only worth rendering with at least two crumbs
pub fn should_render(items: &[BreadcrumbItem]) -> bool {
    items.len() > 1
}

fn role_prefix<'a>(segments: &[&'a str]) -> Option<(&'a str, &'a str)> {
    match segments {
        [role, dashboard, ..] => ROLE_PREFIXES
            .iter()
            .any(|(r, d)| r == role && d == dashboard)
            .then_some((*role, *dashboard)),
        _ => None,
    }
}

/// Label for one path segment (ids are guessed from shape, not looked up)
pub fn segment_label(segment: &str) -> String {
    if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
        return format!("#{}", segment);
    }
    if segment.starts_with('[') && segment.ends_with(']') {
        return "Details".to_string();
    }
    SEGMENT_LABELS
        .iter()
        .find(|(key, _)| *key == segment)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(segment))
}

/// `add-new_item` -> `Add New Item`
fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(label: &str, href: Option<&str>) -> BreadcrumbItem {
        BreadcrumbItem {
            label: label.to_string(),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn test_admin_product_edit_trail() {
        let items = build_breadcrumbs("/admin/dashboard/products/edit/42");
        assert_eq!(
            items,
            vec![
                crumb("Dashboard", Some("/admin/dashboard")),
                crumb("Products", Some("/admin/dashboard/products")),
                crumb("Edit", Some("/admin/dashboard/products/edit")),
                crumb("#42", None),
            ]
        );
    }

    #[test]
    fn test_vendor_prefix_and_fallback_title_case() {
        let items = build_breadcrumbs("/vendor/dashboard/bulk-upload_history/");
        assert_eq!(
            items,
            vec![
                crumb("Dashboard", Some("/vendor/dashboard")),
                crumb("Bulk Upload History", None),
            ]
        );
    }

    #[test]
    fn test_bracket_segment_is_details() {
        let items = build_breadcrumbs("/admin/dashboard/orders/[orderId]");
        assert_eq!(items[2], crumb("Details", None));
    }

    #[test]
    fn test_dashboard_root_alone_is_not_rendered() {
        let items = build_breadcrumbs("/admin/dashboard");
        assert_eq!(items, vec![crumb("Dashboard", None)]);
        assert!(!should_render(&items));
        assert!(!should_render(&build_breadcrumbs("/")));
    }

    #[test]
    fn test_storefront_paths_start_at_home() {
        let items = build_breadcrumbs("/products/7?ref=home");
        assert_eq!(
            items,
            vec![
                crumb("Home", Some("/")),
                crumb("Products", Some("/products")),
                crumb("#7", None),
            ]
        );
    }

    #[test]
    fn test_admin_without_dashboard_is_not_a_role_prefix() {
        let items = build_breadcrumbs("/admin/login");
        assert_eq!(items[0], crumb("Home", Some("/")));
        assert_eq!(items[2], crumb("Login", None));
    }
}
