//! Item Card Component
//!
//! One card in the grid: title, body preview, immediate delete, and
//! View/Edit buttons that open the modal.

use leptos::prelude::*;

use crate::components::ModalState;
use crate::models::Item;
use crate::store::{store_remove_item, use_app_store};
use crate::toast::use_toasts;

#[component]
pub fn ItemCard(item: Item, set_modal: WriteSignal<Option<ModalState>>) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let id = item.id;
    let view_item = item.clone();
    let edit_item = item.clone();

    let on_delete = move |_| {
        if store_remove_item(&store, id) {
            toasts.success("Item deleted");
        }
    };

    view! {
        <div class="item-card">
            <div class="item-card-header">
                <button class="delete-btn" title="Delete" on:click=on_delete>
                    "×"
                </button>
            </div>
            <h3 class="item-card-title">{item.title.clone()}</h3>
            <p class="item-card-body">{item.body.clone()}</p>
            <div class="item-card-actions">
                <button
                    class="view-btn"
                    on:click=move |_| set_modal.set(Some(ModalState::view(view_item.clone())))
                >
                    "View"
                </button>
                <button
                    class="edit-btn"
                    on:click=move |_| set_modal.set(Some(ModalState::edit(edit_item.clone())))
                >
                    "Edit"
                </button>
            </div>
        </div>
    }
}
