//! Item Form Component
//!
//! Form for creating new items. Field length is clamped on every keystroke;
//! emptiness is checked at submit and reported via toast.

use leptos::prelude::*;

use crate::models::{clamp_field, fresh_id, validate_fields, Item};
use crate::store::{store_prepend_item, use_app_store};
use crate::toast::use_toasts;

#[component]
pub fn ItemForm() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_fields(&title.get(), &body.get()) {
            Ok((title_value, body_value)) => {
                store_prepend_item(&store, Item::new(fresh_id(), title_value, body_value));
                toasts.success("Item added successfully");
                set_title.set(String::new());
                set_body.set(String::new());
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    view! {
        <div class="item-form">
            <h2>"Add a New Item"</h2>
            <form class="item-form-row" on:submit=create_item>
                <label for="title">"Title"</label>
                <input
                    type="text"
                    name="title"
                    id="title"
                    placeholder="Enter title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(clamp_field(&event_target_value(&ev)))
                />

                <label for="description">"Description"</label>
                <input
                    type="text"
                    name="body"
                    id="description"
                    placeholder="Enter description"
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(clamp_field(&event_target_value(&ev)))
                />

                <button type="submit">"Add Item"</button>
            </form>
        </div>
    }
}
