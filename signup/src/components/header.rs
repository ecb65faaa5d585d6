//! Title bar component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="title-bar">
            <h1>"Sign Up Here"</h1>
        </header>
    }
}
