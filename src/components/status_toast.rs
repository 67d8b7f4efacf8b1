//! Status Toast Component
//!
//! Renders the transient status message and the persistent storage
//! failure banner.

use leptos::prelude::*;

use crate::status::{use_status, StatusKind};

#[component]
pub fn StatusToast() -> impl IntoView {
    let status = use_status();

    view! {
        {move || status.message().get().map(|msg| {
            let class = match msg.kind {
                StatusKind::Info => "status-toast",
                StatusKind::Error => "status-toast status-toast-error",
            };
            view! {
                <div class="status-toast-wrap">
                    <div class=class>{msg.text}</div>
                </div>
            }
        })}
    }
}

/// Non-dismissing notice shown when the storage engine cannot be opened.
/// All mutating actions stay blocked until the page is reloaded.
#[component]
pub fn StoreUnavailableBanner() -> impl IntoView {
    view! {
        <div class="store-banner">
            "Local storage is unavailable. Your list is read-only until you reload the page."
        </div>
    }
}
