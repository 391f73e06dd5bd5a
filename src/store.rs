//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::app_config;
use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    /// Categories as last loaded by the admin pages
    pub categories: Vec<Category>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast and schedule its removal
pub fn push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let next_toast_id = store.next_toast_id();
        let mut next = next_toast_id.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });

    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(app_config().toast_duration_ms).await;
        dismiss_toast(&store, id);
    });
}

pub fn dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Replace a category in the store by ID, or append it
pub fn store_upsert_category(store: &AppStore, category: Category) {
    let categories_field = store.categories();
    let mut categories = categories_field.write();
    match categories.iter().position(|c| c.id == category.id) {
        Some(i) => categories[i] = category,
        None => categories.push(category),
    }
}

/// Remove a category from the store by ID
pub fn store_remove_category(store: &AppStore, category_id: u32) {
    store.categories().write().retain(|c| c.id != category_id);
}
