use leptos::prelude::*;

use crate::route::{Link, Route};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for doesn't exist."</p>
            <Link href=Route::Home.path()>"Back to the store"</Link>
        </section>
    }
}
