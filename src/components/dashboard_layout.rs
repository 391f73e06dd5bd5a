//! Dashboard Layout Component
//!
//! Sidebar + breadcrumb shell shared by the admin and vendor back-offices.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_session;
use crate::components::Breadcrumbs;
use crate::config::app_config;
use crate::route::{use_router, Link, Route, Section};
use crate::services;

fn nav_links(section: Section) -> &'static [(Route, &'static str)] {
    match section {
        Section::Admin => &[
            (Route::AdminDashboard, "Overview"),
            (Route::AdminCategories, "Categories"),
            (Route::AdminProducts, "Products"),
            (Route::AdminOrders, "Orders"),
            (Route::AdminVendors, "Vendors"),
        ],
        Section::Vendor => &[
            (Route::VendorDashboard, "Overview"),
            (Route::VendorProducts, "My Products"),
            (Route::VendorOnboarding, "Onboarding"),
        ],
        _ => &[],
    }
}

#[component]
pub fn DashboardLayout(section: Section, children: Children) -> impl IntoView {
    let router = use_router();
    let session = use_auth_session();

    let title = match section {
        Section::Admin => "Admin",
        _ => "Seller Central",
    };

    let on_logout = move |_| {
        spawn_local(async move {
            // The local session is dropped even if the backend call fails
            if let Err(e) = services::logout().await {
                log::warn!("logout request failed: {}", e);
            }
            session.logout();
            log::info!("signed out");
            router.navigate(&app_config().login_path);
        });
    };

    let links = nav_links(section)
        .iter()
        .map(|(route, label)| {
            let route = *route;
            let class = move || if router.route() == route { "nav-link active" } else { "nav-link" };
            view! {
                <li class=class><Link href=route.path()>{*label}</Link></li>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <h2 class="sidebar-title">{title}</h2>
                <ul class="sidebar-nav">{links}</ul>
                <div class="sidebar-footer">
                    {move || session.user().map(|user| view! {
                        <span class="signed-in-as" title=user.email.clone()>{user.name}</span>
                    })}
                    {(section == Section::Admin).then(|| view! {
                        <button class="logout-btn" on:click=on_logout>"Log out"</button>
                    })}
                </div>
            </aside>
            <main class="dashboard-main">
                <Breadcrumbs />
                {children()}
            </main>
        </div>
    }
}
