//! Grocery List App
//!
//! Root component: hydrates the repository, owns the modal state, and
//! maps operation results onto status toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{summary_line, ItemList, ItemModal, ModalSave, StatusToast, StoreUnavailableBanner};
use crate::models::GroceryItem;
use crate::repository::{AppRepository, GroceryRepository};
use crate::status::StatusSignal;
use crate::store::IndexedDbStore;

#[component]
pub fn App() -> impl IntoView {
    let repo: AppRepository = GroceryRepository::new(IndexedDbStore::new());
    let status = StatusSignal::new();
    provide_context(status);

    let items = repo.items();
    let (modal_open, set_modal_open) = signal(false);
    let (edit_item, set_edit_item) = signal(None::<GroceryItem>);
    let (store_failed, set_store_failed) = signal(false);

    // One-shot hydration; the list stays empty until it resolves
    Effect::new(move |_| {
        spawn_local(async move {
            match repo.hydrate().await {
                Ok(()) => {
                    let count = repo.items().get_untracked().len();
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", count).into());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Store unavailable: {}", err).into());
                    set_store_failed.set(true);
                }
            }
        });
    });

    let on_toggle = move |id: String| {
        if store_failed.get_untracked() {
            return;
        }
        spawn_local(async move {
            if let Err(err) = repo.toggle_completed(&id).await {
                web_sys::console::error_1(&format!("[APP] Toggle failed: {}", err).into());
                status.flash_error("Could not update item");
            }
        });
    };

    let on_delete = move |id: String| {
        if store_failed.get_untracked() {
            return;
        }
        spawn_local(async move {
            match repo.remove(&id).await {
                Ok(()) => status.flash("Item removed from list"),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Delete failed: {}", err).into());
                    status.flash_error("Could not remove item");
                }
            }
        });
    };

    let on_edit = move |id: String| {
        let found = items.with_untracked(|items| items.iter().find(|item| item.id == id).cloned());
        if let Some(item) = found {
            set_edit_item.set(Some(item));
            set_modal_open.set(true);
        }
    };

    let on_save = move |saved: ModalSave| {
        if store_failed.get_untracked() {
            return;
        }
        spawn_local(async move {
            let outcome = match saved {
                ModalSave::New(draft) => repo.add(draft).await.map(|_| "Item added"),
                ModalSave::Edited(item) => repo.update(item).await.map(|()| "Item edited"),
            };
            match outcome {
                Ok(msg) => status.flash(msg),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Save failed: {}", err).into());
                    status.flash_error("Could not save item");
                }
            }
        });
    };

    let open_add_modal = move |_| {
        if store_failed.get_untracked() {
            return;
        }
        set_edit_item.set(None);
        set_modal_open.set(true);
    };

    let close_modal = move |_: ()| {
        set_modal_open.set(false);
        set_edit_item.set(None);
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Grocery List"</h1>
            </header>

            <Show when=move || store_failed.get()>
                <StoreUnavailableBanner />
            </Show>

            <ItemList
                items=items
                on_edit=on_edit
                on_delete=on_delete
                on_toggle=on_toggle
                empty_message="Your grocery list is empty"
            />

            <Show when=move || !items.get().is_empty()>
                <div class="summary-bar">
                    <p>{move || {
                        let items = items.get();
                        let completed = items.iter().filter(|item| item.completed).count();
                        summary_line(completed, items.len())
                    }}</p>
                </div>
            </Show>

            <div class="hint-footer">
                <p>"Swipe right to edit item"</p>
                <p>"Swipe left to delete item"</p>
                <p>"Tap on an item to mark as bought"</p>
            </div>

            <button
                class="add-button"
                disabled=move || store_failed.get()
                on:click=open_add_modal
            >
                "+"
            </button>

            <StatusToast />

            {move || modal_open.get().then(|| view! {
                <ItemModal
                    item=edit_item.get_untracked()
                    on_close=close_modal
                    on_save=on_save
                />
            })}
        </div>
    }
}
