//! Marketplace Frontend App
//!
//! Provides the shared contexts and picks the shell and page for the
//! current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::AuthSession;
use crate::components::{DashboardLayout, StoreHeader, ToastHost};
use crate::config::app_config;
use crate::context::{AppContext, CategoryEdit};
use crate::pages::*;
use crate::route::{Route, Router, Section};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (editing, set_editing) = signal::<Option<CategoryEdit>>(None);

    // Provide context to all children
    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), (editing, set_editing)));
    let session = AuthSession::new();
    provide_context(session);
    let router = Router::new();
    provide_context(router);

    // The OAuth redirect lands on the dashboard with the session in the query
    if router.route() == Route::AdminDashboard {
        consume_oauth_callback();
    }

    let route = Memo::new(move |_| router.route());
    let section = Memo::new(move |_| route.get().section());
    let locked = move || route.get().requires_admin() && !session.is_admin();

    // Admin guard
    Effect::new(move |_| {
        if locked() {
            log::info!("{} needs an admin session, redirecting to login", route.get_untracked().path());
            router.replace(&app_config().login_path);
        }
    });

    let page = move || {
        if locked() {
            return ().into_any();
        }
        match route.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Products => view! { <ProductListPage /> }.into_any(),
            Route::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
            Route::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
            Route::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
            Route::AdminCategories => view! { <AdminCategoriesPage /> }.into_any(),
            Route::AdminProducts => view! { <AdminProductsPage /> }.into_any(),
            Route::AdminProductEdit(id) => view! { <AdminProductEditPage id=id /> }.into_any(),
            Route::AdminOrders => view! { <AdminOrdersPage /> }.into_any(),
            Route::AdminVendors => view! { <AdminVendorsPage /> }.into_any(),
            Route::VendorOnboarding => view! { <VendorOnboardingPage /> }.into_any(),
            Route::VendorDashboard => view! { <VendorDashboardPage /> }.into_any(),
            Route::VendorProducts => view! { <VendorProductsPage /> }.into_any(),
            Route::CheckerPortal => view! { <CheckerPortalPage /> }.into_any(),
            Route::CheckerRegister => view! { <CheckerRegisterPage /> }.into_any(),
            Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            {move || match section.get() {
                Section::Admin => view! {
                    <DashboardLayout section=Section::Admin>{page}</DashboardLayout>
                }
                .into_any(),
                Section::Vendor => view! {
                    <DashboardLayout section=Section::Vendor>{page}</DashboardLayout>
                }
                .into_any(),
                Section::Storefront | Section::Checker => view! {
                    <StoreHeader />
                    <main class="storefront">{page}</main>
                }
                .into_any(),
            }}
            <ToastHost />
        </div>
    }
}
