//! Product Card Component

use leptos::prelude::*;

use crate::markdown::summary;
use crate::models::Product;
use crate::route::{Link, Route};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = Route::ProductDetail(product.id).path();
    let blurb = summary(&product.description, 90);
    let stock_class = if product.stock == 0 { "stock out" } else { "stock" };
    let stock_label = if product.stock == 0 {
        "Out of stock".to_string()
    } else {
        format!("{} in stock", product.stock)
    };

    let name = product.name.clone();
    let price_label = product.price_label();

    view! {
        <article class="product-card">
            {product.featured.then(|| view! { <span class="badge featured">"Featured"</span> })}
            <h3 class="product-name"><Link href=href>{name}</Link></h3>
            <p class="product-blurb">{blurb}</p>
            <div class="product-meta">
                <span class="price">{price_label}</span>
                <span class="rating">{format!("★ {:.1}", product.rating)}</span>
                <span class=stock_class>{stock_label}</span>
            </div>
        </article>
    }
}
