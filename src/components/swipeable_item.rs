//! Swipeable Item Row
//!
//! One grocery row. Swiping right reveals the edit action, swiping left
//! reveals delete, and a tap toggles the bought flag. Reveal state is
//! shared through `SwipeSignals` so rows reset each other.

use leptos::prelude::*;
use leptos_swipe::{touch_x, SwipeConfig, SwipeOutcome, SwipeSignals, SwipeTracker, SwipeZones};

use crate::models::GroceryItem;

#[component]
pub fn SwipeableItem(
    item: GroceryItem,
    swipe: SwipeSignals,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let config = SwipeConfig::default();
    let tracker = RwSignal::new(SwipeTracker::new(config));
    let (translation, set_translation) = signal(0.0f64);
    let (zones, set_zones) = signal(SwipeZones::default());
    let (dragging, set_dragging) = signal(false);
    let id = StoredValue::new(item.id.clone());

    let press = move |x: f64| {
        // pressing anywhere closes another row's revealed actions
        if !swipe.is_revealed(&id.get_value()) {
            swipe.reset_revealed();
        }
        tracker.update(|t| t.press(x));
        set_dragging.set(true);
    };

    let motion = move |x: f64| {
        if !tracker.with_untracked(|t| t.is_dragging()) {
            return;
        }
        tracker.update(|t| {
            t.motion(x);
        });
        set_translation.set(tracker.with_untracked(|t| t.translation()));
        set_zones.set(tracker.with_untracked(|t| t.zones()));
    };

    // mouseleave mid-drag goes through the same path as a release
    let release = move || {
        if !tracker.with_untracked(|t| t.is_dragging()) {
            return;
        }
        let mut outcome = SwipeOutcome::Reset;
        tracker.update(|t| outcome = t.release());
        set_dragging.set(false);
        set_translation.set(tracker.with_untracked(|t| t.translation()));
        set_zones.set(tracker.with_untracked(|t| t.zones()));
        match outcome {
            SwipeOutcome::RevealedLeft | SwipeOutcome::RevealedRight => {
                swipe.reveal(&id.get_value());
            }
            SwipeOutcome::Tap => on_toggle.run(id.get_value()),
            SwipeOutcome::Reset => swipe.reset_revealed(),
        }
    };

    // action buttons commit immediately and settle the row back to idle
    let settle = move || {
        tracker.update(|t| t.reset());
        set_translation.set(0.0);
        set_zones.set(SwipeZones::default());
        set_dragging.set(false);
        swipe.reset_revealed();
    };

    // losing the shared reveal slot snaps this row back
    Effect::new(move |_| {
        let revealed = swipe.revealed_id_read.get();
        let mine = id.with_value(|id| revealed.as_deref() == Some(id.as_str()));
        if !mine && !tracker.with_untracked(|t| t.is_dragging()) {
            tracker.update(|t| t.reset());
            set_translation.set(0.0);
            set_zones.set(SwipeZones::default());
        }
    });

    let completed = item.completed;
    let name = item.name.clone();
    let quantity = item.quantity;
    let category = item.category;
    let notes = item.notes.clone();
    let has_notes = !notes.is_empty();
    let action_width = format!("width: {}px;", config.max_reveal);

    view! {
        <div
            class=move || {
                let zones = zones.get();
                if zones.right {
                    "swipe-row armed-right"
                } else if zones.left {
                    "swipe-row armed-left"
                } else {
                    "swipe-row"
                }
            }
            data-swipe-id=item.id.clone()
        >
            <div class="swipe-action swipe-action-delete" style=action_width.clone()>
                <button on:click=move |ev| {
                    ev.stop_propagation();
                    settle();
                    on_delete.run(id.get_value());
                }>"Delete"</button>
            </div>
            <div class="swipe-action swipe-action-edit" style=action_width>
                <button on:click=move |ev| {
                    ev.stop_propagation();
                    settle();
                    on_edit.run(id.get_value());
                }>"Edit"</button>
            </div>

            <div
                class=move || if dragging.get() { "swipe-foreground dragging" } else { "swipe-foreground" }
                style=move || format!("transform: translateX({}px);", translation.get())
                on:mousedown=move |ev| {
                    if ev.button() == 0 {
                        press(ev.client_x() as f64);
                    }
                }
                on:mousemove=move |ev| motion(ev.client_x() as f64)
                on:mouseup=move |_| release()
                on:mouseleave=move |_| release()
                on:touchstart=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        press(x);
                    }
                }
                on:touchmove=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        motion(x);
                    }
                }
                on:touchend=move |_| release()
            >
                <div class=if completed { "item-check completed" } else { "item-check" }>
                    {completed.then(|| view! { <span class="item-check-mark">"✓"</span> })}
                </div>
                <div class="item-body">
                    <div class="item-title-row">
                        <h3 class=if completed { "item-name completed" } else { "item-name" }>
                            {name}
                        </h3>
                        <span class="item-category">{category.as_str()}</span>
                    </div>
                    <div class="item-meta-row">
                        <span class="item-quantity">{format!("Qty: {quantity}")}</span>
                        {has_notes.then(move || view! { <p class="item-notes">{notes.clone()}</p> })}
                    </div>
                </div>
            </div>
        </div>
    }
}
