//! Item Modal Component
//!
//! View/edit modal. The edit fields resync whenever a different item is
//! opened, guarded by a last-id signal so typing does not reset them.

use leptos::prelude::*;

use crate::models::{clamp_field, validate_fields, Item};
use crate::store::{store_apply_edit, use_app_store, EditOutcome};
use crate::toast::use_toasts;

/// Which item the modal shows and whether it is editable
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub item: Item,
    pub editing: bool,
}

impl ModalState {
    pub fn view(item: Item) -> Self {
        Self { item, editing: false }
    }

    pub fn edit(item: Item) -> Self {
        Self { item, editing: true }
    }
}

#[component]
pub fn ItemModal(
    modal: ReadSignal<Option<ModalState>>,
    set_modal: WriteSignal<Option<ModalState>>,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (edited_title, set_edited_title) = signal(String::new());
    let (edited_body, set_edited_body) = signal(String::new());
    let (last_item_id, set_last_item_id) = signal::<Option<u64>>(None);

    // Sync edit fields when the opened item changes
    Effect::new(move |_| {
        if let Some(state) = modal.get() {
            if last_item_id.get() != Some(state.item.id) {
                set_last_item_id.set(Some(state.item.id));
                set_edited_title.set(state.item.title.clone());
                set_edited_body.set(state.item.body.clone());
            }
        } else {
            set_last_item_id.set(None);
        }
    });

    let close = move |_| set_modal.set(None);

    let save_edit = move |_| {
        let Some(state) = modal.get() else { return };
        let (title_value, body_value) =
            match validate_fields(&edited_title.get(), &edited_body.get()) {
                Ok(fields) => fields,
                Err(err) => {
                    toasts.error(err.to_string());
                    return;
                }
            };
        match store_apply_edit(&store, state.item.id, &title_value, &body_value) {
            EditOutcome::Unchanged => toasts.error("No changes detected."),
            EditOutcome::Updated => {
                toasts.success("Item updated successfully");
                set_modal.set(None);
            }
            EditOutcome::NotFound => set_modal.set(None),
        }
    };

    view! {
        {move || modal.get().map(|state| {
            let editing = state.editing;
            view! {
                <div class="modal-backdrop">
                    <div class="modal">
                        <h2>{if editing { "Edit Item" } else { "View Item" }}</h2>
                        <input
                            type="text"
                            prop:value=move || edited_title.get()
                            disabled={!editing}
                            on:input=move |ev| {
                                set_edited_title.set(clamp_field(&event_target_value(&ev)))
                            }
                        />
                        <textarea
                            rows="3"
                            prop:value=move || edited_body.get()
                            disabled={!editing}
                            on:input=move |ev| {
                                set_edited_body.set(clamp_field(&event_target_value(&ev)))
                            }
                        ></textarea>
                        <div class="modal-actions">
                            <button class="close-btn" on:click=close>"Close"</button>
                            <Show when=move || editing>
                                <button class="save-btn" on:click=save_edit>"Save"</button>
                            </Show>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
