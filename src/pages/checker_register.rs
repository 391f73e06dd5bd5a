//! Quality Checker Registration Wizard
//!
//! Personal Info -> Credentials -> Coverage -> Review. The issued checker ID
//! is kept in local storage for the portal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AuthStore;
use crate::components::{CheckboxField, TextField, WizardProgress};
use crate::models::Category;
use crate::onboarding::{error_for, CheckerApplication, CheckerStep, CHECKER_REGIONS};
use crate::route::{use_router, Route};
use crate::services;
use crate::store::{push_toast, use_app_store, ToastKind};
use crate::wizard::{Advance, FieldError, Wizard};

fn field_error(errors: RwSignal<Vec<FieldError>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| error_for(e, field)))
}

#[component]
pub fn CheckerRegisterPage() -> impl IntoView {
    let router = use_router();
    let store = use_app_store();
    let wizard = RwSignal::new(Wizard::<CheckerStep>::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);
    let (categories, set_categories) = signal(Vec::<Category>::new());

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let qualification = RwSignal::new(String::new());
    let experience_years = RwSignal::new(String::new());
    let coverage = RwSignal::new(CheckerApplication::default());
    let agree_terms = RwSignal::new(false);

    spawn_local(async move {
        if let Ok(loaded) = services::list_catalog_categories().await {
            set_categories.set(loaded.into_iter().filter(|c| c.is_root()).collect());
        }
    });

    let application = move || {
        let picked = coverage.get_untracked();
        CheckerApplication {
            full_name: full_name.get_untracked(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            qualification: qualification.get_untracked(),
            experience_years: experience_years.get_untracked(),
            regions: picked.regions,
            category_ids: picked.category_ids,
            agree_terms: agree_terms.get_untracked(),
        }
    };

    let on_next = move |_| {
        let form = application();
        let mut advanced = None;
        wizard.update(|w| advanced = Some(w.next(&form)));
        match advanced {
            Some(Ok(Advance::Moved(_))) => errors.set(Vec::new()),
            Some(Ok(Advance::Complete)) => {
                errors.set(Vec::new());
                set_submitting.set(true);
                spawn_local(async move {
                    match services::register_checker(&form).await {
                        Ok(id) => {
                            let saved = AuthStore::browser()
                                .ok_or_else(|| "storage unavailable".to_string())
                                .and_then(|s| s.store_checker_id(&id).map_err(|e| e.to_string()));
                            match saved {
                                Ok(()) => {
                                    log::info!("registered as checker {}", id);
                                    push_toast(&store, ToastKind::Success, format!("Registered as {}", id));
                                    router.navigate(&Route::CheckerPortal.path());
                                }
                                Err(e) => {
                                    log::error!("saving checker id failed: {}", e);
                                    push_toast(&store, ToastKind::Error, format!("Your checker ID is {}. Please note it down.", id));
                                }
                            }
                        }
                        Err(e) => {
                            log::error!("checker registration failed: {}", e);
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
        CheckerStep::Personal => view! {
            <TextField label="Full name" value=full_name error=field_error(errors, "fullName") />
            <TextField label="E-mail" value=email input_type="email" error=field_error(errors, "email") />
            <TextField label="Phone" value=phone input_type="tel" error=field_error(errors, "phone") />
        }
        .into_any(),
        CheckerStep::Credentials => view! {
            <TextField label="Highest qualification" value=qualification error=field_error(errors, "qualification") />
            <TextField
                label="Years of inspection experience"
                value=experience_years
                input_type="number"
                error=field_error(errors, "experienceYears")
            />
        }
        .into_any(),
        CheckerStep::Coverage => view! {
            <fieldset class="choice-group">
                <legend>"Regions"</legend>
                {CHECKER_REGIONS.iter().map(|&region| view! {
                    <label class="choice">
                        <input
                            type="checkbox"
                            prop:checked=move || coverage.with(|c| c.regions.iter().any(|r| r == region))
                            on:change=move |_| coverage.update(|c| c.toggle_region(region))
                        />
                        {region}
                    </label>
                }).collect_view()}
                {move || field_error(errors, "regions").get().map(|msg| view! { <span class="field-error">{msg}</span> })}
            </fieldset>
            <fieldset class="choice-group">
                <legend>"Categories"</legend>
                <For
                    each=move || categories.get()
                    key=|c| c.id
                    children=move |c| {
                        let id = c.id;
                        view! {
                            <label class="choice">
                                <input
                                    type="checkbox"
                                    prop:checked=move || coverage.with(|cov| cov.category_ids.contains(&id))
                                    on:change=move |_| coverage.update(|cov| cov.toggle_category(id))
                                />
                                {c.name}
                            </label>
                        }
                    }
                />
                {move || field_error(errors, "categoryIds").get().map(|msg| view! { <span class="field-error">{msg}</span> })}
            </fieldset>
        }
        .into_any(),
        CheckerStep::Review => {
            let form = application();
            let names = categories.with_untracked(|all| {
                all.iter()
                    .filter(|c| form.category_ids.contains(&c.id))
                    .map(|c| c.name.clone())
                    .collect::<Vec<_>>()
                    .join(", ")
            });
            view! {
                <dl class="review-list">
                    <dt>"Name"</dt><dd>{form.full_name.clone()}</dd>
                    <dt>"Contact"</dt><dd>{format!("{}, {}", form.email, form.phone)}</dd>
                    <dt>"Experience"</dt><dd>{format!("{}, {} years", form.qualification, form.experience_years)}</dd>
                    <dt>"Regions"</dt><dd>{form.regions.join(", ")}</dd>
                    <dt>"Categories"</dt><dd>{names}</dd>
                </dl>
                <CheckboxField
                    label="I agree to the inspection code of conduct"
                    checked=agree_terms
                    error=field_error(errors, "agreeTerms")
                />
            }
            .into_any()
        }
    };

    view! {
        <section class="wizard-page">
            <h1>"Become a quality checker"</h1>
            <WizardProgress wizard=wizard />
            <div class="wizard-body">{step_view}</div>
            <div class="wizard-actions">
                <button class="secondary-btn" disabled=move || wizard.with(|w| w.is_first()) on:click=on_back>
                    "Back"
                </button>
                <button class="primary-btn" disabled=move || submitting.get() on:click=on_next>
                    {move || if wizard.with(|w| w.is_last()) { "Register" } else { "Next" }}
                </button>
            </div>
        </section>
    }
}
