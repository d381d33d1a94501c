//! Not-found page, the terminal state of every unknown path.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::route::{AppRoute, INDEX_PATH};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::NotFound.title() />
        <main class="not-found-page" data-view="not-found">
            <h1>"404"</h1>
            <p>"This page could not be found."</p>
            <A href=INDEX_PATH>"Back to start"</A>
        </main>
    }
}
