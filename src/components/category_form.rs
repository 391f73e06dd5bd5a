//! Category Form Component
//!
//! Create/edit form for categories, opened through `AppContext::set_editing`.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::category_tree::descendant_ids;
use crate::context::{AppContext, CategoryEdit};
use crate::models::{Category, CategoryStatus};
use crate::services::{self, CategoryInput};
use crate::store::{push_toast, store_upsert_category, use_app_store, ToastKind};

#[component]
pub fn CategoryForm(#[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let name = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let parent = RwSignal::new(None::<u32>);
    let status = RwSignal::new(CategoryStatus::Active);
    let sort_order = RwSignal::new(String::from("0"));
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Load the target into the fields whenever a new one is opened
    Effect::new(move |_| {
        set_error.set(None);
        match ctx.editing.get() {
            Some(CategoryEdit::Existing(c)) => {
                name.set(c.name);
                slug.set(c.slug);
                parent.set(c.parent_id);
                status.set(c.status);
                sort_order.set(c.sort_order.to_string());
            }
            Some(CategoryEdit::New { parent_id }) => {
                name.set(String::new());
                slug.set(String::new());
                parent.set(parent_id);
                status.set(CategoryStatus::Active);
                sort_order.set("0".to_string());
            }
            None => {}
        }
    });

    // A category can't move under itself or its own subtree
    let parent_options = move || {
        let all = categories.get();
        let excluded = match ctx.editing.get() {
            Some(CategoryEdit::Existing(c)) => descendant_ids(&all, c.id),
            _ => HashSet::new(),
        };
        all.into_iter().filter(|c| !excluded.contains(&c.id)).collect::<Vec<_>>()
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(edit) = ctx.editing.get_untracked() else { return };
        let title = name.get_untracked();
        if title.trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }
        let Ok(order) = sort_order.get_untracked().trim().parse::<i32>() else {
            set_error.set(Some("Sort order must be a whole number".to_string()));
            return;
        };
        let input = CategoryInput::new(&title, &slug.get_untracked(), parent.get_untracked(), status.get_untracked(), order);

        set_saving.set(true);
        spawn_local(async move {
            let result = match &edit {
                CategoryEdit::Existing(c) => services::update_category(c.id, &input).await,
                CategoryEdit::New { .. } => services::create_category(&input).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    push_toast(&store, ToastKind::Success, format!("Saved \"{}\"", saved.name));
                    store_upsert_category(&store, saved);
                    ctx.set_editing(None);
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("saving category failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let heading = move || match ctx.editing.get() {
        Some(CategoryEdit::Existing(c)) => format!("Edit \"{}\"", c.name),
        _ => "New category".to_string(),
    };

    view! {
        <Show when=move || ctx.editing.get().is_some()>
            <form class="category-form" on:submit=submit>
                <h3>{heading}</h3>

                <label class="form-field">
                    <span class="form-label">"Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">"Slug"</span>
                    <input
                        type="text"
                        placeholder="derived from name"
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-field">
                    <span class="form-label">"Parent"</span>
                    <select on:change=move |ev| parent.set(event_target_value(&ev).parse::<u32>().ok())>
                        <option value="" selected=move || parent.get().is_none()>"(top level)"</option>
                        {move || parent_options().into_iter().map(|c| {
                            let id = c.id;
                            view! {
                                <option value=id.to_string() selected=move || parent.get() == Some(id)>
                                    {c.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-label">"Status"</span>
                    <select on:change=move |ev| status.set(CategoryStatus::from_str(&event_target_value(&ev)))>
                        <option value="active" selected=move || status.get() == CategoryStatus::Active>"Active"</option>
                        <option value="inactive" selected=move || status.get() == CategoryStatus::Inactive>"Inactive"</option>
                    </select>
                </label>

                <label class="form-field">
                    <span class="form-label">"Sort order"</span>
                    <input
                        type="number"
                        prop:value=move || sort_order.get()
                        on:input=move |ev| sort_order.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <div class="form-actions">
                    <button type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.set_editing(None)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
