//! Storefront Product List
//!
//! `?category=<id>` narrows the list to that category and its subcategories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::category_tree::{build_category_tree, flatten_with_depth, sort_category_tree};
use crate::components::ProductCard;
use crate::models::{Category, Product};
use crate::oauth::parse_query;
use crate::route::{use_router, Route};
use crate::services;

fn selected_category(query: &str) -> Option<u32> {
    parse_query(query)
        .into_iter()
        .find(|(key, _)| key == "category")
        .and_then(|(_, value)| value.parse().ok())
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let router = use_router();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match services::list_products().await {
            Ok(loaded) => set_products.set(loaded),
            Err(e) => log::error!("loading products failed: {}", e),
        }
        match services::list_catalog_categories().await {
            Ok(loaded) => set_categories.set(loaded),
            Err(e) => log::error!("loading categories failed: {}", e),
        }
        set_loading.set(false);
    });

    let selected = Memo::new(move |_| selected_category(&router.query()));

    let visible = Memo::new(move |_| {
        categories.with(|cats| products.with(|prods| services::filter_by_category(prods, cats, selected.get())))
    });

    // Indented options for the filter select
    let options = Memo::new(move |_| {
        let mut tree = build_category_tree(&categories.get());
        sort_category_tree(&mut tree);
        flatten_with_depth(&tree, &Default::default())
    });

    let on_filter = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let target = if value.is_empty() {
            Route::Products.path()
        } else {
            format!("{}?category={}", Route::Products.path(), value)
        };
        router.navigate(&target);
    };

    view! {
        <section class="product-list">
            <div class="list-toolbar">
                <h1>"Products"</h1>
                <select class="category-filter" on:change=on_filter>
                    <option value="" selected=move || selected.get().is_none()>"All categories"</option>
                    {move || options.get().into_iter().map(|(c, depth)| {
                        let id = c.id;
                        let label = format!("{}{}", "\u{a0}\u{a0}".repeat(depth), c.name);
                        view! {
                            <option value=id.to_string() selected=move || selected.get() == Some(id)>{label}</option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading products..."</p> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <p class="empty-state">"No products in this category yet."</p> }
                >
                    <div class="product-grid">
                        <For
                            each=move || visible.get()
                            key=|p| p.id
                            children=move |p| view! { <ProductCard product=p /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_category_from_query() {
        assert_eq!(selected_category("?category=6"), Some(6));
        assert_eq!(selected_category("?sort=price&category=2"), Some(2));
        assert_eq!(selected_category("?category=all"), None);
        assert_eq!(selected_category(""), None);
    }
}
