//! Admin Category Management
//!
//! Tree view with create/edit/delete, backed by the categories endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::category_tree::category_issues;
use crate::components::{CategoryForm, CategoryTreeView};
use crate::context::{AppContext, CategoryEdit};
use crate::services;
use crate::store::{push_toast, store_remove_category, use_app_store, AppStateStoreFields, ToastKind};

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);

    // Reload whenever something triggers it
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading categories, trigger={}", trigger);
        spawn_local(async move {
            match services::list_categories().await {
                Ok(loaded) => {
                    log::info!("loaded {} categories", loaded.len());
                    *store.categories().write() = loaded;
                    set_load_error.set(None);
                }
                Err(e) => {
                    log::error!("loading categories failed: {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let categories = Signal::derive(move || store.categories().get());
    let issues = Memo::new(move |_| {
        store
            .categories()
            .with(|all| category_issues(all).iter().map(|e| e.to_string()).collect::<Vec<_>>())
    });

    let on_delete = Callback::new(move |id: u32| {
        spawn_local(async move {
            match services::delete_category(id).await {
                Ok(()) => {
                    store_remove_category(&store, id);
                    push_toast(&store, ToastKind::Success, "Category deleted");
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("deleting category {} failed: {}", id, e);
                    push_toast(&store, ToastKind::Error, format!("Delete failed: {}", e));
                }
            }
        });
    });

    view! {
        <section class="admin-categories">
            <div class="page-header">
                <h1>"Categories"</h1>
                <button
                    class="primary-btn"
                    on:click=move |_| ctx.set_editing(Some(CategoryEdit::New { parent_id: None }))
                >
                    "New category"
                </button>
            </div>

            {move || load_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <Show when=move || !issues.with(|i| i.is_empty())>
                <div class="validation-warnings">
                    <strong>"Some categories can't be placed in the tree:"</strong>
                    <ul>
                        {move || issues.get().into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>

            <CategoryForm categories=categories />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading categories..."</p> }
            >
                <CategoryTreeView categories=categories on_delete=on_delete />
            </Show>
        </section>
    }
}
