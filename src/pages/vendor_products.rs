//! Seller Central Product List

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProductCard;
use crate::models::{Product, VendorStatus};
use crate::services;

#[component]
pub fn VendorProductsPage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());

    spawn_local(async move {
        let vendors = services::list_vendors().await.unwrap_or_default();
        let Some(vendor_id) = vendors.iter().find(|v| v.status == VendorStatus::Approved).map(|v| v.id) else {
            return;
        };
        match services::list_products().await {
            Ok(all) => set_products.set(all.into_iter().filter(|p| p.vendor_id == vendor_id).collect()),
            Err(e) => log::error!("loading vendor products failed: {}", e),
        }
    });

    view! {
        <section class="vendor-products">
            <h1>"My products"</h1>
            <Show
                when=move || !products.with(|p| p.is_empty())
                fallback=|| view! { <p class="empty-state">"No products listed yet."</p> }
            >
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|p| p.id
                        children=move |p| view! { <ProductCard product=p /> }
                    />
                </div>
            </Show>
        </section>
    }
}
