//! Toast Host Component
//!
//! Renders the live toast stack in the top-right corner.

use leptos::prelude::*;

use crate::toast::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let entries = toasts.entries();

    view! {
        <div class="toast-container">
            <For
                each=move || entries.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.kind.css_class()>{toast.message.clone()}</div>
                    }
                }
            />
        </div>
    }
}
