//! Admin Product Catalogue

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Category, Product};
use crate::route::{Link, Route};
use crate::services;

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (search, set_search) = signal(String::new());

    spawn_local(async move {
        if let Ok(loaded) = services::list_products().await {
            set_products.set(loaded);
        }
        if let Ok(loaded) = services::list_catalog_categories().await {
            set_categories.set(loaded);
        }
    });

    let category_names = Memo::new(move |_| {
        categories.with(|all| all.iter().map(|c| (c.id, c.name.clone())).collect::<HashMap<_, _>>())
    });

    let visible = Memo::new(move |_| {
        let needle = search.get().to_lowercase();
        products.with(|all| {
            all.iter()
                .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section class="admin-products">
            <div class="page-header">
                <h1>"Products"</h1>
                <input
                    type="search"
                    placeholder="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|p| (p.id, p.name.clone(), p.price_cents, p.stock)
                        children=move |p| {
                            let category = move || {
                                category_names.with(|names| names.get(&p.category_id).cloned().unwrap_or_else(|| "-".to_string()))
                            };
                            view! {
                                <tr>
                                    <td>{p.name.clone()}</td>
                                    <td>{category}</td>
                                    <td>{p.price_label()}</td>
                                    <td>{p.stock}</td>
                                    <td><Link href=Route::AdminProductEdit(p.id).path()>"Edit"</Link></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
