//! Wizard Progress Component
//!
//! Step indicator for multi-step flows. Reached steps are clickable.

use leptos::prelude::*;

use crate::wizard::{StepStatus, Wizard, WizardStep};

#[component]
pub fn WizardProgress<S: WizardStep>(wizard: RwSignal<Wizard<S>>) -> impl IntoView {
    view! {
        <div class="wizard-progress">
            <ol class="wizard-steps">
                {S::ALL.iter().enumerate().map(|(i, step)| {
                    let step = *step;
                    let class = move || match wizard.get().status(step) {
                        StepStatus::Done => "wizard-step done",
                        StepStatus::Current => "wizard-step current",
                        StepStatus::Upcoming => "wizard-step upcoming",
                    };
                    view! {
                        <li class=class on:click=move |_| {
                            wizard.update(|w| {
                                w.go_to(step);
                            });
                        }>
                            <span class="step-number">{i + 1}</span>
                            <span class="step-title">{step.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ol>
            <div class="wizard-bar">
                <div class="wizard-bar-fill" style=move || format!("width: {}%;", wizard.get().progress_percent())></div>
            </div>
        </div>
    }
}
