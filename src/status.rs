//! Transient Status Messages
//!
//! Toast state with a cancellable expiry timer. Replacing the stored
//! handle drops the previous timer, so a superseded message can never
//! dismiss its successor.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a transient message stays on screen
const STATUS_DISMISS_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// App-wide status toast state, provided via context
#[derive(Clone, Copy)]
pub struct StatusSignal {
    message: RwSignal<Option<StatusMessage>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

/// Get the status signal from context
pub fn use_status() -> StatusSignal {
    expect_context::<StatusSignal>()
}

impl StatusSignal {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            timer: StoredValue::new_local(None),
        }
    }

    pub fn message(&self) -> ReadSignal<Option<StatusMessage>> {
        self.message.read_only()
    }

    /// Show a confirmation that auto-expires
    pub fn flash(&self, text: impl Into<String>) {
        self.show(text.into(), StatusKind::Info);
    }

    /// Show a failure notice that auto-expires
    pub fn flash_error(&self, text: impl Into<String>) {
        self.show(text.into(), StatusKind::Error);
    }

    fn show(&self, text: String, kind: StatusKind) {
        self.message.set(Some(StatusMessage { text, kind }));
        let message = self.message;
        let handle = Timeout::new(STATUS_DISMISS_MS, move || message.set(None));
        self.timer.set_value(Some(handle));
    }
}

impl Default for StatusSignal {
    fn default() -> Self {
        Self::new()
    }
}
