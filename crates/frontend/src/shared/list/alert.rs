use crate::shared::config::DEFAULT_ALERT_LIFETIME;
use gloo_timers::callback::Timeout;
use leptos::prelude::{RwSignal, Update};

/// Severity of a transient alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// A message shown above a list until its lifetime elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub text: String,
}

/// Holds at most one alert. Raising replaces the current one.
///
/// Every alert gets a fresh id so that the timer of an older alert cannot
/// dismiss a newer one.
#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
    last_id: u64,
}

impl AlertSlot {
    pub fn raise(&mut self, kind: AlertKind, text: impl Into<String>) -> u64 {
        self.last_id += 1;
        self.current = Some(Alert {
            id: self.last_id,
            kind,
            text: text.into(),
        });
        self.last_id
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.raise(AlertKind::Error, text)
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.raise(AlertKind::Success, text)
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Clears the alert only if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(alert) if alert.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Dismisses alert `id` of a page-owned slot once the default lifetime is
/// over. List pages go through their controller instead.
pub fn dismiss_later(slot: RwSignal<AlertSlot>, id: u64) {
    Timeout::new(DEFAULT_ALERT_LIFETIME.as_millis() as u32, move || {
        slot.try_update(|s| s.dismiss(id));
    })
    .forget();
}
