//! Leptos Swipe Utilities
//!
//! Horizontal swipe-to-reveal for Leptos list rows using mouse and touch
//! events. A pure tracker decides what each gesture committed to; shared
//! signals enforce that at most one row is revealed at a time.

mod tracker;

pub use tracker::{SwipeConfig, SwipeOutcome, SwipePhase, SwipeTracker, SwipeZones};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Row attribute used to find the revealed row from a document-level press
pub const SWIPE_ID_ATTR: &str = "data-swipe-id";

/// Shared reveal state: at most one row id may be revealed globally
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub revealed_id_read: ReadSignal<Option<String>>,
    pub revealed_id_write: WriteSignal<Option<String>>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (revealed_id_read, revealed_id_write) = signal(None::<String>);
    SwipeSignals {
        revealed_id_read,
        revealed_id_write,
    }
}

impl SwipeSignals {
    /// Mark a row as the single revealed one
    pub fn reveal(&self, id: &str) {
        self.revealed_id_write.set(Some(id.to_string()));
    }

    /// Reset whichever row is currently revealed
    pub fn reset_revealed(&self) {
        if self.revealed_id_read.get_untracked().is_some() {
            self.revealed_id_write.set(None);
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed_id_read.get_untracked().as_deref() == Some(id)
    }
}

/// Client x of the first touch point, if any
pub fn touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.touches().item(0).map(|touch| touch.client_x() as f64)
}

/// Bind a document-level press listener that resets the revealed row when
/// a press lands outside its bounds. Call once per list.
pub fn bind_global_reveal_reset(signals: SwipeSignals) {
    use wasm_bindgen::closure::Closure;

    let on_press = move |target: Option<web_sys::EventTarget>| {
        let Some(revealed) = signals.revealed_id_read.get_untracked() else {
            return;
        };
        let inside = target
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&format!("[{SWIPE_ID_ATTR}]")).ok().flatten())
            .and_then(|row| row.get_attribute(SWIPE_ID_ATTR))
            .is_some_and(|id| id == revealed);
        if !inside {
            signals.revealed_id_write.set(None);
        }
    };

    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        on_press(ev.target());
    });
    let on_touchstart = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        on_press(ev.target());
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("touchstart", on_touchstart.as_ref().unchecked_ref());
        }
    }
    on_mousedown.forget();
    on_touchstart.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_row_is_revealed_at_a_time() {
        let signals = create_swipe_signals();
        signals.reveal("a");
        assert!(signals.is_revealed("a"));

        signals.reveal("b");
        assert!(signals.is_revealed("b"));
        assert!(!signals.is_revealed("a"));
    }

    #[test]
    fn reset_clears_the_revealed_row() {
        let signals = create_swipe_signals();
        signals.reveal("a");
        signals.reset_revealed();
        assert!(!signals.is_revealed("a"));
        assert!(signals.revealed_id_read.get_untracked().is_none());
    }
}
