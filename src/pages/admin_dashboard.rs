//! Admin Dashboard
//!
//! Landing page after sign-in. Also the OAuth redirect target: a callback
//! query is consumed once and then stripped from the URL.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_session;
use crate::models::{format_price, DashboardStats, Order, OrderStatus};
use crate::oauth::{parse_callback, strip_callback_params, OAuthCallback};
use crate::route::{use_router, Link, Route};
use crate::services;
use crate::store::{push_toast, use_app_store, ToastKind};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_auth_session();

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (recent, set_recent) = signal(Vec::<Order>::new());

    spawn_local(async move {
        match services::dashboard_stats().await {
            Ok(loaded) => set_stats.set(Some(loaded)),
            Err(e) => log::error!("loading stats failed: {}", e),
        }
        if let Ok(mut orders) = services::list_orders().await {
            orders.truncate(3);
            set_recent.set(orders);
        }
    });

    view! {
        <section class="admin-overview">
            <h1>
                {move || match session.user() {
                    Some(user) => format!("Welcome, {}", user.name),
                    None => "Dashboard".to_string(),
                }}
            </h1>

            {move || stats.get().map(|s| view! {
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-label">"Revenue"</span>
                        <span class="stat-value">{format_price(s.total_revenue_cents)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Orders"</span>
                        <span class="stat-value">{s.order_count}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Active vendors"</span>
                        <span class="stat-value">{s.active_vendors}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Pending approval"</span>
                        <span class="stat-value">{s.pending_vendors}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Products"</span>
                        <span class="stat-value">{s.product_count}</span>
                    </div>
                </div>
            })}

            <h2>"Recent orders"</h2>
            <ul class="recent-orders">
                <For
                    each=move || recent.get()
                    key=|o| o.id
                    children=move |o| {
                        let status_class = if o.status == OrderStatus::Cancelled { "order-status cancelled" } else { "order-status" };
                        view! {
                            <li>
                                <span>{format!("#{} {}", o.id, o.customer)}</span>
                                <span>{format_price(o.total_cents)}</span>
                                <span class=status_class>{o.status.label()}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <Link href=Route::AdminOrders.path()>"All orders"</Link>
        </section>
    }
}

/// Handle `?token=..&user=..` or `?error=..` left by the OAuth redirect.
///
/// Runs before the admin guard so a fresh OAuth login isn't bounced to the
/// login page. Returns true when a session was established.
pub fn consume_oauth_callback() -> bool {
    let router = use_router();
    let session = use_auth_session();
    let store = use_app_store();

    let query = router.query();
    let outcome = parse_callback(&query);
    if outcome == OAuthCallback::None {
        return false;
    }
    router.replace(&strip_callback_params(&router.path(), &query));

    match outcome {
        OAuthCallback::Success(auth) => match session.login(&auth.token, auth.user, true) {
            Ok(()) => {
                log::info!("signed in via OAuth");
                push_toast(&store, ToastKind::Success, "Signed in with Google");
                true
            }
            Err(e) => {
                log::error!("storing OAuth session failed: {}", e);
                push_toast(&store, ToastKind::Error, "Could not save your session");
                false
            }
        },
        OAuthCallback::Error(message) => {
            log::warn!("OAuth error: {}", message);
            push_toast(&store, ToastKind::Error, format!("Google sign-in failed: {}", message));
            false
        }
        OAuthCallback::Malformed(reason) => {
            log::error!("malformed OAuth callback: {}", reason);
            push_toast(&store, ToastKind::Error, "Google sign-in returned an invalid response");
            false
        }
        OAuthCallback::None => false,
    }
}
