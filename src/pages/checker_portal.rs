//! Quality Checker Portal
//!
//! Inspection assignments for the checker ID saved at registration.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AuthStore;
use crate::markdown::parse_markdown_inline;
use crate::models::{Inspection, InspectionResult};
use crate::route::{use_router, Link, Route};
use crate::services;

#[component]
pub fn CheckerPortalPage() -> impl IntoView {
    let router = use_router();
    let checker_id = RwSignal::new(AuthStore::browser().and_then(|store| store.checker_id()));
    let (inspections, set_inspections) = signal(Vec::<Inspection>::new());

    Effect::new(move |_| {
        let Some(id) = checker_id.get() else { return };
        spawn_local(async move {
            match services::list_inspections(&id).await {
                Ok(loaded) => set_inspections.set(loaded),
                Err(e) => log::error!("loading inspections failed: {}", e),
            }
        });
    });

    let sign_out = move |_| {
        if let Some(store) = AuthStore::browser() {
            store.clear_checker_id();
        }
        checker_id.set(None);
        router.navigate(&Route::CheckerRegister.path());
    };

    view! {
        <section class="checker-portal">
            {move || match checker_id.get() {
                None => view! {
                    <h1>"Quality checker portal"</h1>
                    <p>"You're not registered as a checker on this device."</p>
                    <Link href=Route::CheckerRegister.path() class="primary-btn">"Register"</Link>
                }
                .into_any(),
                Some(id) => view! {
                    <div class="page-header">
                        <h1>"My inspections"</h1>
                        <span class="checker-id">{id}</span>
                        <button class="secondary-btn" on:click=sign_out>"Not you?"</button>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Inspection"</th>
                                <th>"Vendor"</th>
                                <th>"Product"</th>
                                <th>"Date"</th>
                                <th>"Result"</th>
                                <th>"Notes"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || inspections.get()
                                key=|i| i.id
                                children=move |i| {
                                    let result_class = match i.result {
                                        InspectionResult::Passed => "result passed",
                                        InspectionResult::Failed => "result failed",
                                        InspectionResult::Scheduled => "result scheduled",
                                    };
                                    view! {
                                        <tr>
                                            <td>{format!("#{}", i.id)}</td>
                                            <td>{i.vendor_id}</td>
                                            <td>
                                                <Link href=Route::ProductDetail(i.product_id).path()>
                                                    {format!("#{}", i.product_id)}
                                                </Link>
                                            </td>
                                            <td>{i.scheduled_for}</td>
                                            <td class=result_class>{i.result.label()}</td>
                                            <td class="notes" inner_html=parse_markdown_inline(&i.notes.unwrap_or_default())></td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </section>
    }
}
