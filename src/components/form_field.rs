//! Form Field Components
//!
//! Labeled inputs with an inline validation message.

use leptos::prelude::*;

/// Text input bound to a signal
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    /// Validation message for this field, if any
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <label class=move || if error.get().is_some() { "form-field invalid" } else { "form-field" }>
            <span class="form-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    checked: RwSignal<bool>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="form-field checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="form-label">{label}</span>
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}
