//! Category Tree View Component
//!
//! Indented, collapsible category tree for the admin back-office.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::category_tree::{build_category_tree, flatten_with_depth, sort_category_tree};
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, CategoryEdit};
use crate::models::{Category, CategoryStatus};

/// Category tree with add-child/edit/delete actions per row
#[component]
pub fn CategoryTreeView(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(HashSet::<u32>::new());

    let rows = Memo::new(move |_| {
        let mut tree = build_category_tree(&categories.get());
        sort_category_tree(&mut tree);
        let parents: HashSet<u32> = categories.with(|all| all.iter().filter_map(|c| c.parent_id).collect());
        collapsed.with(|folded| {
            flatten_with_depth(&tree, folded)
                .into_iter()
                .map(|(category, depth)| {
                    let has_children = parents.contains(&category.id);
                    (category, depth, has_children)
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="category-tree">
            <Show when=move || rows.with(|r| r.is_empty())>
                <p class="empty-state">"No categories yet."</p>
            </Show>
            <For
                each=move || rows.get()
                key=|(category, depth, has_children)| {
                    // Every rendered field, so edits re-render the row
                    (
                        category.id,
                        *depth,
                        category.name.clone(),
                        category.slug.clone(),
                        category.status,
                        category.sort_order,
                        *has_children,
                    )
                }
                children=move |(category, depth, has_children)| {
                    view! {
                        <CategoryRow
                            category=category
                            depth=depth
                            has_children=has_children
                            collapsed=collapsed
                            set_collapsed=set_collapsed
                            on_delete=on_delete
                        />
                    }
                }
            />
        </div>
    }
}

/// A single category row in the tree
#[component]
fn CategoryRow(
    category: Category,
    depth: usize,
    has_children: bool,
    collapsed: ReadSignal<HashSet<u32>>,
    set_collapsed: WriteSignal<HashSet<u32>>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = category.id;
    let indent = depth * 24;
    let row_class = if category.status == CategoryStatus::Inactive { "category-row inactive" } else { "category-row" };
    let is_collapsed = move || collapsed.with(|c| c.contains(&id));
    let name = category.name.clone();
    let slug = format!("/{}", category.slug);
    let status = category.status.as_str();
    let editable = category.clone();

    view! {
        <div class=row_class style=format!("margin-left: {}px;", indent)>
            // Collapse toggle
            {if has_children {
                view! {
                    <button class="collapse-btn" on:click=move |_| {
                        set_collapsed.update(|c| {
                            if !c.remove(&id) {
                                c.insert(id);
                            }
                        });
                    }>
                        {move || if is_collapsed() { "▶" } else { "▼" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <span class="category-name">{name}</span>
            <span class="category-slug">{slug}</span>
            <span class=format!("category-status {}", status)>{status}</span>

            <button
                class="add-child-btn"
                title="Add subcategory"
                on:click=move |_| ctx.set_editing(Some(CategoryEdit::New { parent_id: Some(id) }))
            >
                "+"
            </button>
            <button
                class="edit-btn"
                on:click=move |_| ctx.set_editing(Some(CategoryEdit::Existing(editable.clone())))
            >
                "Edit"
            </button>
            <DeleteConfirmButton
                target=category.name.clone()
                has_children=has_children
                on_confirm=move |_| on_delete.run(id)
            />
        </div>
    }
}
