//! Storefront Home Page
//!
//! Featured products plus a sign-in banner that follows the auth state.
//! Storage is polled so a login/logout in another tab is picked up.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_session;
use crate::components::ProductCard;
use crate::config::app_config;
use crate::models::{Category, Product};
use crate::route::{Link, Route};
use crate::services;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_auth_session();
    let (featured, set_featured) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());

    let poll = Interval::new(app_config().auth_poll_interval_ms, move || session.refresh());
    let poll = StoredValue::new_local(Some(poll));
    on_cleanup(move || {
        if let Some(interval) = poll.try_update_value(|p| p.take()).flatten() {
            interval.cancel();
        }
    });

    spawn_local(async move {
        match services::list_products().await {
            Ok(products) => set_featured.set(products.into_iter().filter(|p| p.featured).collect()),
            Err(e) => log::error!("loading featured products failed: {}", e),
        }
        if let Ok(loaded) = services::list_catalog_categories().await {
            set_categories.set(loaded.into_iter().filter(|c| c.is_root()).collect());
        }
    });

    view! {
        <section class="hero">
            <h1>"Everything, from sellers you can trust"</h1>
            {move || match session.user() {
                Some(user) => view! {
                    <p class="welcome">{format!("Welcome back, {}", user.name)}</p>
                }.into_any(),
                None => view! {
                    <p class="welcome">
                        <Link href=Route::AdminLogin.path()>"Sign in"</Link>
                        " to manage your marketplace."
                    </p>
                }.into_any(),
            }}
        </section>

        <section class="category-strip">
            <For
                each=move || categories.get()
                key=|c| c.id
                children=move |c| {
                    let href = format!("{}?category={}", Route::Products.path(), c.id);
                    view! { <Link href=href class="category-chip">{c.name}</Link> }
                }
            />
        </section>

        <section class="featured">
            <h2>"Featured"</h2>
            <div class="product-grid">
                <For
                    each=move || featured.get()
                    key=|p| p.id
                    children=move |p| view! { <ProductCard product=p /> }
                />
            </div>
        </section>
    }
}
