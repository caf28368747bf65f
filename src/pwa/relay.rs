//! Deferred install-prompt relay.
//!
//! The host fires its install-availability event at an unpredictable time,
//! possibly before the reactive layer exists. The relay bridges that gap in
//! three explicit steps:
//!
//! 1. **capture**: an early host hook parks the event's token in a
//!    process-wide slot, superseding any token already there.
//! 2. **transfer**: the root shell, once mounted, drains the slot into a
//!    reactive store UI code can subscribe to.
//! 3. **consume**: an install button handler takes the token out of the
//!    store and triggers the native flow; the token is gone afterwards
//!    whatever the user decided.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::pwa::prompt::{InstallPrompt, PromptOutcome};
use crate::reactive::{Store, Subscription};

/// Shared handle to a captured token.
pub type SharedPrompt = Arc<dyn InstallPrompt>;

/// Relay between the host's install-availability event and UI state.
///
/// The default shell wires everything through [`InstallPromptRelay::global`];
/// embedding shells and tests construct their own instances.
pub struct InstallPromptRelay {
    /// Single-slot buffer written by the capture hook. Not observable by UI
    /// code; the store below is.
    held: Mutex<Option<SharedPrompt>>,
    /// Reactive cell the UI observes once transfer has run.
    store: Store<Option<SharedPrompt>>,
}

impl InstallPromptRelay {
    pub fn new() -> Self {
        Self {
            held: Mutex::new(None),
            store: Store::new(None),
        }
    }

    /// The process-wide relay.
    ///
    /// Capture has to be installable before any other structure of the app
    /// exists, which is what forces this single global slot.
    pub fn global() -> &'static InstallPromptRelay {
        static GLOBAL: OnceLock<InstallPromptRelay> = OnceLock::new();
        GLOBAL.get_or_init(InstallPromptRelay::new)
    }

    /// Capture step, called by the host hook when the event fires.
    ///
    /// Suppresses the host's own prompt UI and parks the token. A token
    /// already held is discarded, not queued: only the latest occurrence is
    /// meaningful to the host.
    pub fn capture(&self, prompt: SharedPrompt) {
        prompt.prevent_default();
        let superseded = self.held.lock().replace(prompt).is_some();
        tracing::debug!(superseded, "install prompt captured");
    }

    /// Transfer step: drain the held token, if any, into the reactive store.
    ///
    /// Runs when the root shell mounts. Returns whether a token was handed
    /// off. An empty slot leaves the store untouched, so a repeat call can
    /// never clobber a token that was already delivered. Captures that
    /// happen after a transfer sit in the slot until this is called again;
    /// re-delivery is never automatic.
    pub fn transfer(&self) -> bool {
        match self.held.lock().take() {
            Some(prompt) => {
                self.store.set(Some(prompt));
                tracing::debug!("install prompt handed off to the store");
                true
            }
            None => false,
        }
    }

    /// Consume step, for the install button handler.
    ///
    /// Takes the token out of the store *before* triggering it: the store
    /// reads `None` for the whole native flow, so the token cannot be
    /// presented twice even if consumers race or the future is dropped
    /// mid-flow. Returns `None` when no token was available (the button
    /// should not have been shown); that path publishes nothing, so
    /// subscribers are not woken by an empty consume.
    pub async fn consume(&self) -> Option<PromptOutcome> {
        let prompt = self.store.take()?;
        let outcome = prompt.prompt().await;
        tracing::info!(outcome = ?outcome, "install prompt consumed");
        Some(outcome)
    }

    /// Whether a transferred token is currently available to consume.
    pub fn available(&self) -> bool {
        self.store.get().is_some()
    }

    /// Observe token availability, e.g. to show or hide an install button.
    pub fn subscribe(&self) -> Subscription<Option<SharedPrompt>> {
        self.store.subscribe()
    }
}

impl Default for InstallPromptRelay {
    fn default() -> Self {
        Self::new()
    }
}
