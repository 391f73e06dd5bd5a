//! Storefront Header Component

use leptos::prelude::*;

use crate::auth::use_auth_session;
use crate::route::{Link, Route};

#[component]
pub fn StoreHeader() -> impl IntoView {
    let session = use_auth_session();

    view! {
        <header class="store-header">
            <Link href=Route::Home.path() class="brand">"Marketplace"</Link>
            <nav class="store-nav">
                <Link href=Route::Products.path()>"Shop"</Link>
                <Link href=Route::VendorOnboarding.path()>"Sell with us"</Link>
                <Link href=Route::CheckerPortal.path()>"Quality checkers"</Link>
                {move || {
                    if session.is_admin() {
                        view! { <Link href=Route::AdminDashboard.path()>"Admin"</Link> }.into_any()
                    } else {
                        view! { <Link href=Route::AdminLogin.path()>"Sign in"</Link> }.into_any()
                    }
                }}
            </nav>
        </header>
    }
}
