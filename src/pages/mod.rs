//! Pages
//!
//! One component per route, grouped by section.

mod admin_categories;
mod admin_dashboard;
mod admin_login;
mod admin_orders;
mod admin_product_edit;
mod admin_products;
mod admin_vendors;
mod checker_portal;
mod checker_register;
mod home;
mod not_found;
mod product_detail;
mod product_list;
mod vendor_dashboard;
mod vendor_onboarding;
mod vendor_products;

pub use admin_categories::AdminCategoriesPage;
pub use admin_dashboard::{consume_oauth_callback, AdminDashboardPage};
pub use admin_login::AdminLoginPage;
pub use admin_orders::AdminOrdersPage;
pub use admin_product_edit::AdminProductEditPage;
pub use admin_products::AdminProductsPage;
pub use admin_vendors::AdminVendorsPage;
pub use checker_portal::CheckerPortalPage;
pub use checker_register::CheckerRegisterPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use product_detail::ProductDetailPage;
pub use product_list::ProductListPage;
pub use vendor_dashboard::VendorDashboardPage;
pub use vendor_onboarding::VendorOnboardingPage;
pub use vendor_products::VendorProductsPage;
