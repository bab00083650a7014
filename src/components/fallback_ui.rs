//! Fallback UI Component
//!
//! Shown in place of the content when the initial fetch fails.

use leptos::prelude::*;

#[component]
pub fn FallbackUi() -> impl IntoView {
    view! {
        <div class="fallback-ui">
            <h2>"Oops! Something went wrong."</h2>
            <p>"We couldn't fetch the items. Please try again later."</p>
        </div>
    }
}
