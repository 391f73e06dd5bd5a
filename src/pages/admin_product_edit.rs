//! Admin Product Editor
//!
//! Edits name, price, stock and the Markdown description with a live preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CheckboxField, TextField};
use crate::markdown::parse_markdown;
use crate::models::Product;
use crate::route::{use_router, Route};
use crate::services;
use crate::store::{push_toast, use_app_store, ToastKind};

/// `"1299.50"` -> `129950`
fn parse_price(input: &str) -> Option<u64> {
    let input = input.trim().trim_start_matches('₹');
    let (whole, frac) = input.split_once('.').unwrap_or((input, ""));
    if whole.is_empty() || frac.len() > 2 || !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let frac: u64 = if frac.is_empty() { 0 } else { format!("{:0<2}", frac).parse().ok()? };
    whole.checked_mul(100)?.checked_add(frac)
}

#[component]
pub fn AdminProductEditPage(id: u32) -> impl IntoView {
    let router = use_router();
    let store = use_app_store();

    let (original, set_original) = signal(None::<Product>);
    let (missing, set_missing) = signal(false);
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let featured = RwSignal::new(false);
    let description = RwSignal::new(String::new());
    let (price_error, set_price_error) = signal(None::<String>);
    let (stock_error, set_stock_error) = signal(None::<String>);

    spawn_local(async move {
        match services::get_product(id).await {
            Ok(Some(product)) => {
                name.set(product.name.clone());
                price.set(format!("{}.{:02}", product.price_cents / 100, product.price_cents % 100));
                stock.set(product.stock.to_string());
                featured.set(product.featured);
                description.set(product.description.clone());
                set_original.set(Some(product));
            }
            Ok(None) => set_missing.set(true),
            Err(e) => {
                log::error!("loading product {} failed: {}", id, e);
                set_missing.set(true);
            }
        }
    });

    let preview = move || parse_markdown(&description.get());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(product) = original.get_untracked() else { return };

        let price_cents = parse_price(&price.get_untracked());
        set_price_error.set(price_cents.is_none().then(|| "Enter a price like 1299.00".to_string()));
        let stock_count = stock.get_untracked().trim().parse::<u32>().ok();
        set_stock_error.set(stock_count.is_none().then(|| "Stock must be a whole number".to_string()));
        let (Some(price_cents), Some(stock_count)) = (price_cents, stock_count) else { return };

        let updated = Product {
            name: name.get_untracked().trim().to_string(),
            price_cents,
            stock: stock_count,
            featured: featured.get_untracked(),
            description: description.get_untracked(),
            ..product
        };
        spawn_local(async move {
            match services::update_product(updated).await {
                Ok(saved) => {
                    push_toast(&store, ToastKind::Success, format!("Saved \"{}\"", saved.name));
                    router.navigate(&Route::AdminProducts.path());
                }
                Err(e) => {
                    log::error!("saving product failed: {}", e);
                    push_toast(&store, ToastKind::Error, e.to_string());
                }
            }
        });
    };

    view! {
        <section class="admin-product-edit">
            <Show
                when=move || !missing.get()
                fallback=|| view! { <p class="empty-state">"Product not found."</p> }
            >
                <form class="product-form" on:submit=submit>
                    <h1>"Edit product"</h1>
                    <TextField label="Name" value=name />
                    <TextField label="Price (₹)" value=price error=Signal::derive(move || price_error.get()) />
                    <TextField label="Stock" value=stock input_type="number" error=Signal::derive(move || stock_error.get()) />
                    <CheckboxField label="Featured on the home page" checked=featured />

                    <div class="markdown-editor">
                        <label class="form-field">
                            <span class="form-label">"Description (Markdown)"</span>
                            <textarea
                                rows="10"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="markdown-preview" inner_html=preview></div>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="primary-btn">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| router.navigate(&Route::AdminProducts.path())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1299"), Some(129_900));
        assert_eq!(parse_price("1299.5"), Some(129_950));
        assert_eq!(parse_price(" ₹0.05 "), Some(5));
        assert_eq!(parse_price("12.345"), None);
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price(""), None);
    }
}
