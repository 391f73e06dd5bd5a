//! Vendor Onboarding Wizard
//!
//! Business Info -> Contact -> Bank Details -> Documents -> Review.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CheckboxField, TextField, WizardProgress};
use crate::onboarding::{error_for, VendorApplication, VendorStep, BUSINESS_TYPES};
use crate::route::{Link, Route};
use crate::services;
use crate::store::{push_toast, use_app_store, ToastKind};
use crate::wizard::{Advance, FieldError, Wizard, WizardStep};

/// Documents the seller attests to having; files are collected offline
const DOCUMENT_TYPES: &[&str] = &["PAN card", "GST certificate", "Cancelled cheque", "Address proof"];

fn field_error(errors: RwSignal<Vec<FieldError>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| error_for(e, field)))
}

#[component]
pub fn VendorOnboardingPage() -> impl IntoView {
    let store = use_app_store();
    let wizard = RwSignal::new(Wizard::<VendorStep>::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);
    let (reference, set_reference) = signal(None::<String>);

    let business_name = RwSignal::new(String::new());
    let business_type = RwSignal::new(String::new());
    let gst_number = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());
    let account_holder = RwSignal::new(String::new());
    let account_number = RwSignal::new(String::new());
    let ifsc = RwSignal::new(String::new());
    let documents = RwSignal::new(Vec::<String>::new());
    let agree_terms = RwSignal::new(false);

    let application = move || VendorApplication {
        business_name: business_name.get_untracked(),
        business_type: business_type.get_untracked(),
        gst_number: gst_number.get_untracked().trim().to_uppercase(),
        contact_name: contact_name.get_untracked(),
        email: email.get_untracked().trim().to_string(),
        phone: phone.get_untracked().trim().to_string(),
        city: city.get_untracked(),
        pincode: pincode.get_untracked().trim().to_string(),
        account_holder: account_holder.get_untracked(),
        account_number: account_number.get_untracked().trim().to_string(),
        ifsc: ifsc.get_untracked().trim().to_uppercase(),
        documents: documents.get_untracked(),
        agree_terms: agree_terms.get_untracked(),
    };

    let on_next = move |_| {
        let form = application();
        let mut advanced = None;
        wizard.update(|w| advanced = Some(w.next(&form)));
        match advanced {
            Some(Ok(Advance::Moved(step))) => {
                errors.set(Vec::new());
                log::debug!("onboarding step -> {}", step.title());
            }
            Some(Ok(Advance::Complete)) => {
                errors.set(Vec::new());
                set_submitting.set(true);
                spawn_local(async move {
                    match services::submit_vendor_application(&form).await {
                        Ok(id) => {
                            log::info!("vendor application submitted as {}", id);
                            push_toast(&store, ToastKind::Success, "Application submitted");
                            set_reference.set(Some(id));
                        }
                        Err(e) => {
                            log::error!("vendor application failed: {}", e);
                            push_toast(&store, ToastKind::Error, e.to_string());
                        }
                    }
                    set_submitting.set(false);
                });
            }
            Some(Err(found)) => errors.set(found),
            None => {}
        }
    };

    let on_back = move |_| {
        errors.set(Vec::new());
        wizard.update(|w| {
            w.back();
        });
    };

    let step_view = move || match wizard.with(|w| w.current()) {
        VendorStep::Business => view! {
            <TextField label="Business name" value=business_name error=field_error(errors, "businessName") />
            <label class="form-field">
                <span class="form-label">"Business type"</span>
                <select on:change=move |ev| business_type.set(event_target_value(&ev))>
                    <option value="" selected=move || business_type.get().is_empty()>"Select..."</option>
                    {BUSINESS_TYPES.iter().map(|&t| view! {
                        <option value=t selected=move || business_type.get() == t>{t}</option>
                    }).collect_view()}
                </select>
                {move || field_error(errors, "businessType").get().map(|msg| view! { <span class="field-error">{msg}</span> })}
            </label>
            <TextField label="GSTIN (optional)" value=gst_number error=field_error(errors, "gstNumber") />
        }
        .into_any(),
        VendorStep::Contact => view! {
            <TextField label="Contact person" value=contact_name error=field_error(errors, "contactName") />
            <TextField label="E-mail" value=email input_type="email" error=field_error(errors, "email") />
            <TextField label="Phone" value=phone input_type="tel" error=field_error(errors, "phone") />
            <TextField label="City" value=city error=field_error(errors, "city") />
            <TextField label="PIN code" value=pincode error=field_error(errors, "pincode") />
        }
        .into_any(),
        VendorStep::Bank => view! {
            <TextField label="Account holder" value=account_holder error=field_error(errors, "accountHolder") />
            <TextField label="Account number" value=account_number error=field_error(errors, "accountNumber") />
            <TextField label="IFSC" value=ifsc placeholder="ABCD0123456" error=field_error(errors, "ifsc") />
        }
        .into_any(),
        VendorStep::Documents => view! {
            <p class="hint">"Tick the documents you can provide during verification."</p>
            {DOCUMENT_TYPES.iter().map(|&doc| view! {
                <label class="form-field checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || documents.with(|d| d.iter().any(|x| x == doc))
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            documents.update(|d| {
                                d.retain(|x| x != doc);
                                if on {
                                    d.push(doc.to_string());
                                }
                            });
                        }
                    />
                    <span class="form-label">{doc}</span>
                </label>
            }).collect_view()}
            {move || field_error(errors, "documents").get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        }
        .into_any(),
        VendorStep::Review => {
            let form = application();
            view! {
                <dl class="review-list">
                    <dt>"Business"</dt><dd>{format!("{} ({})", form.business_name, form.business_type)}</dd>
                    <dt>"Contact"</dt><dd>{format!("{}, {}, {}", form.contact_name, form.email, form.phone)}</dd>
                    <dt>"Location"</dt><dd>{format!("{} {}", form.city, form.pincode)}</dd>
                    <dt>"Bank"</dt><dd>{format!("{} / {}", form.account_holder, form.ifsc)}</dd>
                    <dt>"Documents"</dt><dd>{form.documents.join(", ")}</dd>
                </dl>
                <CheckboxField
                    label="I accept the seller terms"
                    checked=agree_terms
                    error=field_error(errors, "agreeTerms")
                />
            }
            .into_any()
        }
    };

    view! {
        <section class="wizard-page">
            <h1>"Sell with us"</h1>
            {move || match reference.get() {
                Some(id) => view! {
                    <div class="wizard-done">
                        <h2>"Thanks! We've received your application."</h2>
                        <p>{format!("Reference: {}", id)}</p>
                        <Link href=Route::VendorDashboard.path()>"Go to Seller Central"</Link>
                    </div>
                }
                .into_any(),
                None => view! {
                    <WizardProgress wizard=wizard />
                    <div class="wizard-body">{step_view}</div>
                    <div class="wizard-actions">
                        <button
                            class="secondary-btn"
                            disabled=move || wizard.with(|w| w.is_first())
                            on:click=on_back
                        >
                            "Back"
                        </button>
                        <button class="primary-btn" disabled=move || submitting.get() on:click=on_next>
                            {move || if wizard.with(|w| w.is_last()) { "Submit" } else { "Next" }}
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
