//! Item Manager App
//!
//! Composition root: provides the store and toast context, runs the single
//! mount-time fetch, and gates the content on the fetch outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FallbackUi, ItemForm, ItemList, ToastHost};
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);
    provide_context(Toasts::new());

    // Fetch exactly once per mount; no refetch, no polling
    Effect::new(move |_| {
        store.loading().set(true);
        spawn_local(async move {
            match api::fetch_items().await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} items", items.len()).into(),
                    );
                    store.items().set(items);
                }
                Err(err) => store.error().set(Some(err.to_string())),
            }
            store.loading().set(false);
        });
    });

    view! {
        <div class="app">
            <h1>"Item Management"</h1>

            {move || if store.error().get().is_some() {
                view! { <FallbackUi/> }.into_any()
            } else {
                view! {
                    <ItemList/>
                    <ItemForm/>
                }.into_any()
            }}

            <ToastHost/>
        </div>
    }
}
