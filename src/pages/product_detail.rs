//! Storefront Product Detail
//!
//! Markdown description plus the product's category ancestry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::category_tree::ancestry;
use crate::markdown::parse_markdown;
use crate::models::{Category, Product};
use crate::route::{Link, Route};
use crate::services;

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Missing,
    Loaded(Product),
}

#[component]
pub fn ProductDetailPage(id: u32) -> impl IntoView {
    let (state, set_state) = signal(LoadState::Loading);
    let (categories, set_categories) = signal(Vec::<Category>::new());

    spawn_local(async move {
        if let Ok(loaded) = services::list_catalog_categories().await {
            set_categories.set(loaded);
        }
        match services::get_product(id).await {
            Ok(Some(product)) => set_state.set(LoadState::Loaded(product)),
            Ok(None) => set_state.set(LoadState::Missing),
            Err(e) => {
                log::error!("loading product {} failed: {}", id, e);
                set_state.set(LoadState::Missing);
            }
        }
    });

    move || match state.get() {
        LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        LoadState::Missing => view! {
            <section class="not-found">
                <h1>"Product not found"</h1>
                <Link href=Route::Products.path()>"Browse all products"</Link>
            </section>
        }
        .into_any(),
        LoadState::Loaded(product) => {
            let trail = categories.with(|cats| ancestry(cats, product.category_id));
            let description = parse_markdown(&product.description);
            view! {
                <article class="product-detail">
                    <nav class="category-trail">
                        {trail.into_iter().map(|c| {
                            let href = format!("{}?category={}", Route::Products.path(), c.id);
                            view! { <Link href=href class="trail-link">{c.name}</Link> }
                        }).collect_view()}
                    </nav>
                    <h1>{product.name.clone()}</h1>
                    <div class="product-meta">
                        <span class="price">{product.price_label()}</span>
                        <span class="rating">{format!("★ {:.1}", product.rating)}</span>
                    </div>
                    <div class="product-description" inner_html=description></div>
                </article>
            }
            .into_any()
        }
    }
}
