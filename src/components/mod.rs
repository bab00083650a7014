//! UI Components
//!
//! Reusable Leptos components.

mod fallback_ui;
mod item_card;
mod item_form;
mod item_list;
mod item_modal;
mod toast_host;

pub use fallback_ui::FallbackUi;
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_modal::{ItemModal, ModalState};
pub use toast_host::ToastHost;
