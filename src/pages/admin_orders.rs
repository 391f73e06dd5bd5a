//! Admin Orders (fixtures)

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{format_price, Order, OrderStatus};
use crate::services;

const FILTERS: &[Option<OrderStatus>] = &[
    None,
    Some(OrderStatus::Pending),
    Some(OrderStatus::Shipped),
    Some(OrderStatus::Delivered),
    Some(OrderStatus::Cancelled),
];

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (filter, set_filter) = signal(None::<OrderStatus>);

    spawn_local(async move {
        match services::list_orders().await {
            Ok(loaded) => set_orders.set(loaded),
            Err(e) => log::error!("loading orders failed: {}", e),
        }
    });

    let visible = Memo::new(move |_| {
        let wanted = filter.get();
        orders.with(|all| {
            all.iter()
                .filter(|o| wanted.map_or(true, |s| o.status == s))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let tabs = FILTERS
        .iter()
        .map(|&status| {
            let label = move || {
                let count = orders.with(|all| match status {
                    Some(s) => services::count_by_status(all, s),
                    None => all.len(),
                });
                format!("{} ({})", status.map_or("All", |s| s.label()), count)
            };
            let class = move || if filter.get() == status { "tab active" } else { "tab" };
            view! { <button class=class on:click=move |_| set_filter.set(status)>{label}</button> }
        })
        .collect_view();

    view! {
        <section class="admin-orders">
            <h1>"Orders"</h1>
            <div class="tabs">{tabs}</div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Qty"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th>"Placed"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|o| o.id
                        children=move |o| view! {
                            <tr>
                                <td>{format!("#{}", o.id)}</td>
                                <td>{o.customer}</td>
                                <td>{o.quantity}</td>
                                <td>{format_price(o.total_cents)}</td>
                                <td>{o.status.label()}</td>
                                <td>{o.placed_on}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
