//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumbs;
mod category_form;
mod category_tree_view;
mod dashboard_layout;
mod delete_confirm_button;
mod form_field;
mod product_card;
mod store_header;
mod toast_host;
mod wizard_progress;

pub use breadcrumbs::Breadcrumbs;
pub use category_form::CategoryForm;
pub use category_tree_view::CategoryTreeView;
pub use dashboard_layout::DashboardLayout;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_field::{CheckboxField, TextField};
pub use product_card::ProductCard;
pub use store_header::StoreHeader;
pub use toast_host::ToastHost;
pub use wizard_progress::WizardProgress;
