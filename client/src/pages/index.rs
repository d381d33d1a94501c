//! Index page for the application root.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::label::Label;
use crate::route::AppRoute;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Index.title() />
        <main class="index-page" data-view="index">
            <h1>
                <Label input=AppRoute::Index.title() />
            </h1>
        </main>
    }
}
