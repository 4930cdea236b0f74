//! Application Context
//!
//! The page session, shared with components via Leptos Context API.

use leptos::prelude::*;

use crate::config::Selectors;
use crate::controller::{Command, Controller};
use crate::models::ItemInput;
use crate::storage::LocalStorage;
use crate::view::ListRow;

/// Controller running against `window.localStorage`
pub type Tracker = Controller<LocalStorage>;

/// App-wide session handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    tracker: RwSignal<Tracker>,
}

impl AppContext {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: RwSignal::new(tracker),
        }
    }

    /// Run a command; failures are logged, never surfaced
    pub fn dispatch(&self, command: Command) {
        self.tracker.update(|tracker| {
            if let Err(e) = tracker.dispatch(command) {
                if e.is_validation() {
                    log::debug!("{:?} ignored: {}", command, e);
                } else {
                    log::warn!("{:?} failed: {}", command, e);
                }
            }
        });
    }

    pub fn set_name_input(&self, name: String) {
        self.tracker.update(|tracker| tracker.view_mut().set_name_input(name));
    }

    pub fn set_calories_input(&self, calories: String) {
        self.tracker.update(|tracker| tracker.view_mut().set_calories_input(calories));
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn rows(&self) -> Vec<ListRow> {
        self.tracker.with(|tracker| tracker.view().rows().to_vec())
    }

    pub fn form(&self) -> ItemInput {
        self.tracker.with(|tracker| tracker.view().form().clone())
    }

    pub fn edit_mode(&self) -> bool {
        self.tracker.with(|tracker| tracker.view().is_edit_mode())
    }

    pub fn list_visible(&self) -> bool {
        self.tracker.with(|tracker| tracker.view().is_list_visible())
    }

    pub fn total_calories(&self) -> i64 {
        self.tracker.with(|tracker| tracker.view().total_calories())
    }

    /// Selectors never change, so no tracking
    pub fn selectors(&self) -> Selectors {
        self.tracker.with_untracked(|tracker| tracker.view().get_selectors().clone())
    }
}

/// Get the session from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
