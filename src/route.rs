//! Client-Side Routing
//!
//! Maps URL paths to pages and keeps the browser history in sync.

use leptos::prelude::*;

/// Every page the client can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    ProductDetail(u32),
    AdminLogin,
    AdminDashboard,
    AdminCategories,
    AdminProducts,
    AdminProductEdit(u32),
    AdminOrders,
    AdminVendors,
    VendorOnboarding,
    VendorDashboard,
    VendorProducts,
    CheckerPortal,
    CheckerRegister,
    NotFound,
}

/// Which shell a route renders inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Storefront,
    Admin,
    Vendor,
    Checker,
}

impl Route {
    /// Query string and trailing slashes are ignored
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products,
            ["products", id] => id.parse().map_or(Route::NotFound, Route::ProductDetail),
            ["admin", "login"] => Route::AdminLogin,
            ["admin"] | ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "dashboard", "categories"] => Route::AdminCategories,
            ["admin", "dashboard", "products"] => Route::AdminProducts,
            ["admin", "dashboard", "products", "edit", id] => {
                id.parse().map_or(Route::NotFound, Route::AdminProductEdit)
            }
            ["admin", "dashboard", "orders"] => Route::AdminOrders,
            ["admin", "dashboard", "vendors"] => Route::AdminVendors,
            ["vendor", "onboarding"] => Route::VendorOnboarding,
            ["vendor"] | ["vendor", "dashboard"] => Route::VendorDashboard,
            ["vendor", "dashboard", "products"] => Route::VendorProducts,
            ["checker"] => Route::CheckerPortal,
            ["checker", "register"] => Route::CheckerRegister,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{}", id),
            Route::AdminLogin => "/admin/login".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::AdminCategories => "/admin/dashboard/categories".to_string(),
            Route::AdminProducts => "/admin/dashboard/products".to_string(),
            Route::AdminProductEdit(id) => format!("/admin/dashboard/products/edit/{}", id),
            Route::AdminOrders => "/admin/dashboard/orders".to_string(),
            Route::AdminVendors => "/admin/dashboard/vendors".to_string(),
            Route::VendorOnboarding => "/vendor/onboarding".to_string(),
            Route::VendorDashboard => "/vendor/dashboard".to_string(),
            Route::VendorProducts => "/vendor/dashboard/products".to_string(),
            Route::CheckerPortal => "/checker".to_string(),
            Route::CheckerRegister => "/checker/register".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Route::AdminDashboard
            | Route::AdminCategories
            | Route::AdminProducts
            | Route::AdminProductEdit(_)
            | Route::AdminOrders
            | Route::AdminVendors => Section::Admin,
            Route::VendorDashboard | Route::VendorProducts => Section::Vendor,
            Route::CheckerPortal | Route::CheckerRegister => Section::Checker,
            _ => Section::Storefront,
        }
    }

    /// Admin pages other than the login screen
    pub fn requires_admin(&self) -> bool {
        self.section() == Section::Admin
    }
}

// ========================
// Router Context
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
struct Location {
    path: String,
    query: String,
}

impl Location {
    fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: format!("?{}", query),
            },
            None => Self {
                path: url.to_string(),
                query: String::new(),
            },
        }
    }
}

fn browser_location() -> Location {
    web_sys::window()
        .map(|w| {
            let loc = w.location();
            Location {
                path: loc.pathname().unwrap_or_default(),
                query: loc.search().unwrap_or_default(),
            }
        })
        .unwrap_or_default()
}

/// History-API router, provided via context
#[derive(Clone, Copy)]
pub struct Router {
    location: RwSignal<Location>,
}

impl Router {
    pub fn new() -> Self {
        let location = RwSignal::new(browser_location());
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            location.set(browser_location());
        });
        Self { location }
    }

    pub fn path(&self) -> String {
        self.location.with(|l| l.path.clone())
    }

    /// Raw query string including the leading `?` (empty when absent)
    pub fn query(&self) -> String {
        self.location.with(|l| l.query.clone())
    }

    pub fn route(&self) -> Route {
        self.location.with(|l| Route::parse(&l.path))
    }

    /// Push a new history entry
    pub fn navigate(&self, to: &str) {
        log::debug!("navigate -> {}", to);
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to));
        }
        self.location.set(Location::from_url(to));
    }

    /// Replace the current history entry
    pub fn replace(&self, to: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to));
        }
        self.location.set(Location::from_url(to));
    }
}

/// Full page load, dropping all client state
pub fn hard_redirect(to: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(to);
    }
}

pub fn use_router() -> Router {
    expect_context::<Router>()
}

/// In-app anchor that routes through history instead of reloading
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = href.clone();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
                    return;
                }
                ev.prevent_default();
                router.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Route] = &[
        Route::Home,
        Route::Products,
        Route::ProductDetail(7),
        Route::AdminLogin,
        Route::AdminDashboard,
        Route::AdminCategories,
        Route::AdminProducts,
        Route::AdminProductEdit(42),
        Route::AdminOrders,
        Route::AdminVendors,
        Route::VendorOnboarding,
        Route::VendorDashboard,
        Route::VendorProducts,
        Route::CheckerPortal,
        Route::CheckerRegister,
        Route::NotFound,
    ];

    #[test]
    fn test_path_parses_back_to_route() {
        for route in ALL {
            assert_eq!(Route::parse(&route.path()), *route, "{}", route.path());
        }
    }

    #[test]
    fn test_parse_tolerates_query_and_trailing_slash() {
        assert_eq!(Route::parse("/admin/dashboard/?token=x"), Route::AdminDashboard);
        assert_eq!(Route::parse("/products/12/"), Route::ProductDetail(12));
        assert_eq!(Route::parse("/products/abc"), Route::NotFound);
        assert_eq!(Route::parse("/admin"), Route::AdminDashboard);
    }

    #[test]
    fn test_admin_guard() {
        assert!(Route::AdminOrders.requires_admin());
        assert!(Route::AdminProductEdit(1).requires_admin());
        assert!(!Route::AdminLogin.requires_admin());
        assert!(!Route::VendorDashboard.requires_admin());
    }

    #[test]
    fn test_location_from_url() {
        let loc = Location::from_url("/admin/dashboard?tab=orders");
        assert_eq!(loc.path, "/admin/dashboard");
        assert_eq!(loc.query, "?tab=orders");
        assert_eq!(Location::from_url("/").query, "");
    }
}
