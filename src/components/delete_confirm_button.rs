//! Delete Confirm Button Component
//!
//! Two-step delete for a category row.

use leptos::prelude::*;

/// "Delete" that turns into an inline confirmation naming the target.
///
/// When the target still has subcategories the prompt says so, since the
/// backend leaves them orphaned and they drop out of the tree.
#[component]
pub fn DeleteConfirmButton(
    /// Name shown in the prompt
    #[prop(into)]
    target: String,
    #[prop(optional)] has_children: bool,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = if has_children {
        format!("Delete \"{}\"? Its subcategories will be hidden.", target)
    } else {
        format!("Delete \"{}\"?", target)
    };

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button class="delete-btn" title="Delete" on:click=move |_| set_confirming.set(true)>
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes, delete"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "Keep"
                </button>
            </span>
        </Show>
    }
}
