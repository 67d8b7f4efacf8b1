//! UI Components
//!
//! Reusable Leptos components.

mod item_list;
mod item_modal;
mod status_toast;
mod swipeable_item;

pub use item_list::{summary_line, ItemList};
pub use item_modal::{ItemModal, ModalSave};
pub use status_toast::{StatusToast, StoreUnavailableBanner};
pub use swipeable_item::SwipeableItem;
