//! Item Modal Component
//!
//! Add/edit form for a grocery item.

use leptos::prelude::*;

use crate::models::{Category, GroceryItem, ItemDraft};

/// Outcome of a modal save
#[derive(Debug, Clone, PartialEq)]
pub enum ModalSave {
    New(ItemDraft),
    Edited(GroceryItem),
}

#[component]
pub fn ItemModal(
    item: Option<GroceryItem>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<ModalSave>,
) -> impl IntoView {
    let edit_id = StoredValue::new(item.as_ref().map(|item| item.id.clone()));
    let seed = item.as_ref().map(ItemDraft::seeded_from).unwrap_or_default();

    let (name, set_name) = signal(seed.name.clone());
    let (quantity, set_quantity) = signal(seed.quantity);
    let (category, set_category) = signal(seed.category);
    let (notes, set_notes) = signal(seed.notes.clone());
    // whatever the form was seeded with wins on save, bought included
    let completed = seed.completed;

    let is_edit = edit_id.with_value(|id| id.is_some());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            name: name.get_untracked(),
            quantity: quantity.get_untracked().max(1),
            category: category.get_untracked(),
            notes: notes.get_untracked(),
            completed,
        };
        if draft.name.is_empty() {
            return;
        }
        let saved = match edit_id.get_value() {
            Some(id) => ModalSave::Edited(GroceryItem::from_draft(id, draft)),
            None => ModalSave::New(draft),
        };
        on_save.run(saved);
        on_close.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-box">
                <h2>{if is_edit { "Edit Item" } else { "Add New Item" }}</h2>
                <form on:submit=submit>
                    <label class="form-field">
                        "Name"
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "Quantity"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || quantity.get().to_string()
                            on:input=move |ev| {
                                let parsed = event_target_value(&ev).parse().unwrap_or(1);
                                set_quantity.set(parsed.max(1));
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Category"
                        <select on:change=move |ev| {
                            set_category.set(Category::from_str(&event_target_value(&ev)));
                        }>
                            {Category::ALL.iter().map(|cat| {
                                let cat = *cat;
                                view! {
                                    <option value=cat.as_str() selected=move || category.get() == cat>
                                        {cat.as_str()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Notes"
                        <textarea
                            rows="2"
                            prop:value=move || notes.get()
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="save-btn">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
