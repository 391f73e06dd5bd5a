//! Seller Central Overview
//!
//! Fixture-backed summary for the signed-in vendor. Vendor auth is not
//! modeled, so the first approved vendor stands in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{format_price, Order, Product, Vendor, VendorStatus};
use crate::route::{Link, Route};
use crate::services;

/// Orders and revenue for one vendor's products
fn vendor_totals(vendor_id: u32, products: &[Product], orders: &[Order]) -> (usize, u64) {
    let ids: Vec<u32> = products.iter().filter(|p| p.vendor_id == vendor_id).map(|p| p.id).collect();
    orders
        .iter()
        .filter(|o| ids.contains(&o.product_id))
        .fold((0, 0), |(count, total), o| (count + 1, total + o.total_cents))
}

#[component]
pub fn VendorDashboardPage() -> impl IntoView {
    let (vendor, set_vendor) = signal(None::<Vendor>);
    let (totals, set_totals) = signal((0usize, 0u64));

    spawn_local(async move {
        let vendors = services::list_vendors().await.unwrap_or_default();
        let Some(current) = vendors.into_iter().find(|v| v.status == VendorStatus::Approved) else {
            log::warn!("no approved vendor in fixtures");
            return;
        };
        let products = services::list_products().await.unwrap_or_default();
        let orders = services::list_orders().await.unwrap_or_default();
        set_totals.set(vendor_totals(current.id, &products, &orders));
        set_vendor.set(Some(current));
    });

    view! {
        <section class="vendor-overview">
            {move || match vendor.get() {
                Some(v) => view! {
                    <h1>{v.business_name}</h1>
                    <div class="stat-grid">
                        <div class="stat-card">
                            <span class="stat-label">"Listed products"</span>
                            <span class="stat-value">{v.product_count}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">"Orders"</span>
                            <span class="stat-value">{move || totals.get().0}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">"Revenue"</span>
                            <span class="stat-value">{move || format_price(totals.get().1)}</span>
                        </div>
                    </div>
                    <Link href=Route::VendorProducts.path()>"Manage products"</Link>
                }
                .into_any(),
                None => view! {
                    <h1>"Seller Central"</h1>
                    <p>"Not registered yet? "<Link href=Route::VendorOnboarding.path()>"Start onboarding"</Link></p>
                }
                .into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_vendor_totals_only_count_own_products() {
        let products = mock::products();
        let orders = mock::orders();
        let (count, total) = vendor_totals(1, &products, &orders);
        let expected: Vec<&Order> = orders
            .iter()
            .filter(|o| products.iter().any(|p| p.id == o.product_id && p.vendor_id == 1))
            .collect();
        assert_eq!(count, expected.len());
        assert_eq!(total, expected.iter().map(|o| o.total_cents).sum::<u64>());
        assert_eq!(vendor_totals(999, &products, &orders), (0, 0));
    }
}
