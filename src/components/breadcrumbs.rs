//! Breadcrumbs Component
//!
//! Trail for the current URL; hidden when there is only one crumb.

use leptos::prelude::*;

use crate::breadcrumb::{build_breadcrumbs, should_render};
use crate::route::{use_router, Link};

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let router = use_router();
    let crumbs = Memo::new(move |_| build_breadcrumbs(&router.path()));

    move || {
        let items = crumbs.get();
        should_render(&items).then(|| {
            view! {
                <nav class="breadcrumbs" aria-label="Breadcrumb">
                    <ol>
                        {items.into_iter().map(|item| match item.href {
                            Some(href) => view! {
                                <li class="crumb"><Link href=href>{item.label}</Link></li>
                            }.into_any(),
                            None => view! {
                                <li class="crumb current" aria-current="page">{item.label}</li>
                            }.into_any(),
                        }).collect_view()}
                    </ol>
                </nav>
            }
        })
    }
}
