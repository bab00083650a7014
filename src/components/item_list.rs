//! Item List Component
//!
//! Card grid over the store with debounced search and a three-way title
//! sort. Shows a skeleton grid while the initial fetch is in flight and an
//! empty-state prompt when the filtered set is empty.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemCard, ItemModal, ModalState};
use crate::query::{filter_items, sort_items, SortOrder};
use crate::store::{use_app_store, AppStateStoreFields};

/// Quiescence window before a search term is committed
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Number of placeholder cards in the loading skeleton
const SKELETON_CARDS: usize = 8;

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let (search_term, set_search_term) = signal(String::new());
    let (debounced_term, set_debounced_term) = signal(String::new());
    let (sort_order, set_sort_order) = signal(SortOrder::Default);
    let (modal, set_modal) = signal::<Option<ModalState>>(None);

    // Debounce: each keystroke bumps the generation; only the task that
    // still matches it after the window commits the term.
    let debounce_generation = StoredValue::new(0u64);
    Effect::new(move |_| {
        let term = search_term.get();
        let generation = debounce_generation.get_value() + 1;
        debounce_generation.set_value(generation);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_generation.get_value() == generation
                && debounced_term.get_untracked() != term
            {
                set_debounced_term.set(term);
            }
        });
    });

    let filtered = Memo::new(move |_| {
        filter_items(&store.items().get(), &debounced_term.get())
    });
    let sorted = Memo::new(move |_| sort_items(filtered.get(), sort_order.get()));

    view! {
        <div class="item-list">
            <div class="list-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search items..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
                <select
                    class="sort-select"
                    prop:value=move || sort_order.get().as_str()
                    on:change=move |ev| {
                        set_sort_order.set(SortOrder::parse(&event_target_value(&ev)))
                    }
                >
                    <option value="default">"Default (Newest First)"</option>
                    <option value="asc">"Title: A-Z"</option>
                    <option value="desc">"Title: Z-A"</option>
                </select>
            </div>

            <div class="item-grid">
                {move || if store.loading().get() {
                    (0..SKELETON_CARDS).map(|_| view! {
                        <div class="item-card skeleton">
                            <div class="skeleton-line title"></div>
                            <div class="skeleton-line body"></div>
                            <div class="skeleton-line actions"></div>
                        </div>
                    }).collect_view().into_any()
                } else if sorted.get().is_empty() {
                    view! {
                        <p class="empty-state">
                            "No items found! Try adjusting your search or adding a new item!"
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <For
                            each=move || sorted.get()
                            key=|item| item.id
                            children=move |item| {
                                view! { <ItemCard item=item set_modal=set_modal/> }
                            }
                        />
                    }.into_any()
                }}
            </div>

            <p class="item-count">{move || format!("{} items", sorted.get().len())}</p>

            <ItemModal modal=modal set_modal=set_modal/>
        </div>
    }
}
