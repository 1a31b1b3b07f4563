//! The show operation: append one classed element, arm one removal timer.

use std::time::Duration;

use super::{Element, RemovalScheduler, Surface};

/// Base class token every message carries.
pub const BASE_CLASS: &str = "message";

/// How long a message stays on screen.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Shows transient messages on a surface and schedules their removal.
///
/// Calls are independent: no dedup, no shared ordering, one timer per
/// message. Removal targets the shown element by id and nothing else.
#[derive(Debug)]
pub struct MessageHandler {
    base_class: String,
    dismiss_after: Duration,
    scheduler: RemovalScheduler,
}

impl MessageHandler {
    pub fn new(scheduler: RemovalScheduler) -> Self {
        Self {
            base_class: BASE_CLASS.to_string(),
            dismiss_after: DISMISS_AFTER,
            scheduler,
        }
    }

    /// Overrides the base class token (default `"message"`).
    #[must_use]
    pub fn with_base_class(mut self, class: impl Into<String>) -> Self {
        self.base_class = class.into();
        self
    }

    /// Overrides the on-screen duration (default 3000 ms).
    #[must_use]
    pub fn with_dismiss_after(mut self, after: Duration) -> Self {
        self.dismiss_after = after;
        self
    }

    /// Appends `text` to the surface as the last element, classed with the
    /// base token plus `kind` verbatim, and arms its one-shot removal.
    ///
    /// `kind` is an open set: any string is accepted, unrecognized tags
    /// just get no special styling. `text` is carried as plain text and
    /// never interpreted as markup.
    pub fn show_message<S: Surface>(&self, surface: &mut S, kind: &str, text: &str) {
        let element = Element::new(text)
            .with_class(self.base_class.as_str())
            .with_class(kind);
        let id = surface.append(element);
        tracing::debug!(%id, kind, "message shown");

        match self.scheduler.schedule(id, self.dismiss_after) {
            // Detached on purpose: expiry must not depend on anyone
            // holding the handle.
            Ok(_removal) => {}
            Err(e) => tracing::warn!("{} will not auto-dismiss: {}", id, e),
        }
    }
}
