//! Item List Component
//!
//! Derives the rendered list from the repository's items: incomplete
//! entries first, a divider, then completed entries. Owns the shared
//! reveal state so only one row can show its actions at a time.

use leptos::prelude::*;
use leptos_swipe::{bind_global_reveal_reset, create_swipe_signals};

use super::SwipeableItem;
use crate::models::GroceryItem;

/// Split into (incomplete, completed), each keeping insertion order
pub fn partition_items(items: &[GroceryItem]) -> (Vec<GroceryItem>, Vec<GroceryItem>) {
    items.iter().cloned().partition(|item| !item.completed)
}

/// Footer summary, e.g. "1 of 3 items bought"
pub fn summary_line(completed: usize, total: usize) -> String {
    format!(
        "{} of {} item{} bought",
        completed,
        total,
        if total > 1 { "s" } else { "" }
    )
}

#[component]
pub fn ItemList(
    items: ReadSignal<Vec<GroceryItem>>,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into, default = "No items".to_string())] empty_message: String,
) -> impl IntoView {
    let swipe = create_swipe_signals();
    bind_global_reveal_reset(swipe);

    let incomplete = Memo::new(move |_| partition_items(&items.get()).0);
    let completed = Memo::new(move |_| partition_items(&items.get()).1);
    let empty_message = StoredValue::new(empty_message);

    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=move || view! { <div class="empty-state">{empty_message.get_value()}</div> }
        >
            <Show when=move || !incomplete.get().is_empty()>
                <div class="item-group">
                    <For
                        each=move || incomplete.get()
                        key=|item| item.id.clone()
                        children=move |item| view! {
                            <SwipeableItem
                                item=item
                                swipe=swipe
                                on_edit=on_edit
                                on_delete=on_delete
                                on_toggle=on_toggle
                            />
                        }
                    />
                </div>
            </Show>
            <Show when=move || !completed.get().is_empty()>
                <div class="item-group">
                    <div class="list-divider">
                        <div class="divider-line"></div>
                        <span class="divider-star">"★"</span>
                        <div class="divider-line"></div>
                    </div>
                    <For
                        each=move || completed.get()
                        key=|item| item.id.clone()
                        children=move |item| view! {
                            <SwipeableItem
                                item=item
                                swipe=swipe
                                on_edit=on_edit
                                on_delete=on_delete
                                on_toggle=on_toggle
                            />
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, GroceryItem};

    fn item(id: &str, completed: bool) -> GroceryItem {
        GroceryItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            quantity: 1,
            category: Category::Other,
            notes: String::new(),
            completed,
        }
    }

    #[test]
    fn test_partition_keeps_relative_order_per_subset() {
        let items = vec![
            item("a", false),
            item("b", true),
            item("c", false),
            item("d", true),
            item("e", false),
        ];
        let (incomplete, completed) = partition_items(&items);

        let incomplete_ids: Vec<&str> = incomplete.iter().map(|i| i.id.as_str()).collect();
        let completed_ids: Vec<&str> = completed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(incomplete_ids, ["a", "c", "e"]);
        assert_eq!(completed_ids, ["b", "d"]);
    }

    #[test]
    fn test_partition_never_interleaves() {
        let items = vec![item("a", true), item("b", false), item("c", true)];
        let (incomplete, completed) = partition_items(&items);
        assert!(incomplete.iter().all(|i| !i.completed));
        assert!(completed.iter().all(|i| i.completed));
        assert_eq!(incomplete.len() + completed.len(), items.len());
    }

    #[test]
    fn test_partition_of_empty_list() {
        let (incomplete, completed) = partition_items(&[]);
        assert!(incomplete.is_empty());
        assert!(completed.is_empty());
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(summary_line(0, 1), "0 of 1 item bought");
        assert_eq!(summary_line(1, 1), "1 of 1 item bought");
        assert_eq!(summary_line(2, 3), "2 of 3 items bought");
    }
}
