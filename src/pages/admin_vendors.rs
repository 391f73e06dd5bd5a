//! Admin Vendor Approvals (fixtures)

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Vendor, VendorStatus};
use crate::services;
use crate::store::{push_toast, use_app_store, ToastKind};

/// Status transitions offered for a vendor in `status`
fn actions(status: VendorStatus) -> &'static [(VendorStatus, &'static str)] {
    match status {
        VendorStatus::Pending => &[(VendorStatus::Approved, "Approve"), (VendorStatus::Rejected, "Reject")],
        VendorStatus::Approved => &[(VendorStatus::Suspended, "Suspend")],
        VendorStatus::Suspended | VendorStatus::Rejected => &[(VendorStatus::Approved, "Reinstate")],
    }
}

#[component]
pub fn AdminVendorsPage() -> impl IntoView {
    let store = use_app_store();
    let (vendors, set_vendors) = signal(Vec::<Vendor>::new());

    spawn_local(async move {
        match services::list_vendors().await {
            Ok(loaded) => set_vendors.set(loaded),
            Err(e) => log::error!("loading vendors failed: {}", e),
        }
    });

    let change_status = move |vendor: Vendor, status: VendorStatus| {
        spawn_local(async move {
            match services::set_vendor_status(vendor, status).await {
                Ok(updated) => {
                    push_toast(&store, ToastKind::Success, format!("{} is now {}", updated.business_name, status.label()));
                    set_vendors.update(|all| {
                        if let Some(i) = all.iter().position(|v| v.id == updated.id) {
                            all[i] = updated;
                        }
                    });
                }
                Err(e) => push_toast(&store, ToastKind::Error, e.to_string()),
            }
        });
    };

    view! {
        <section class="admin-vendors">
            <h1>"Vendors"</h1>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Business"</th>
                        <th>"Contact"</th>
                        <th>"Products"</th>
                        <th>"Joined"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || vendors.get()
                        key=|v| (v.id, v.status)
                        children=move |v| {
                            let buttons = actions(v.status)
                                .iter()
                                .map(|&(target, label)| {
                                    let vendor = v.clone();
                                    view! {
                                        <button class="action-btn" on:click=move |_| change_status(vendor.clone(), target)>
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view();
                            view! {
                                <tr>
                                    <td>{v.business_name.clone()}</td>
                                    <td>{v.contact_email.clone()}</td>
                                    <td>{v.product_count}</td>
                                    <td>{v.joined_on.clone()}</td>
                                    <td class=format!("vendor-status {}", v.status.label().to_lowercase())>{v.status.label()}</td>
                                    <td>{buttons}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_vendors_can_be_approved_or_rejected() {
        let targets: Vec<VendorStatus> = actions(VendorStatus::Pending).iter().map(|(s, _)| *s).collect();
        assert_eq!(targets, vec![VendorStatus::Approved, VendorStatus::Rejected]);
        assert_eq!(actions(VendorStatus::Suspended)[0].0, VendorStatus::Approved);
    }
}
