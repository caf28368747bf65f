//! Application shell state.
//!
//! One [`ClientShell`] lives for the whole client session. It owns the
//! cross-screen stores and wires the install prompt relay into the
//! reactive world when the root view mounts.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::pwa::InstallPromptRelay;
use crate::stores::{LoadingStore, NavigationStore};

pub struct ClientShell {
    loading: LoadingStore,
    navigation: NavigationStore,
    relay: &'static InstallPromptRelay,
    mounted: AtomicBool,
}

impl ClientShell {
    /// Shell wired to the process-wide install prompt relay.
    pub fn new() -> Self {
        Self::with_relay(InstallPromptRelay::global())
    }

    /// Shell wired to a caller-provided relay. Embedders and tests use
    /// this to avoid sharing the process-wide slot.
    pub fn with_relay(relay: &'static InstallPromptRelay) -> Self {
        Self {
            loading: LoadingStore::new(),
            navigation: NavigationStore::new(),
            relay,
            mounted: AtomicBool::new(false),
        }
    }

    /// Root view mount hook.
    ///
    /// The first call moves any install prompt parked before the reactive
    /// world existed into the relay's store and returns true. Later calls
    /// do nothing and return false; prompts captured after mount stay
    /// parked until explicitly transferred. Whether a token was actually
    /// handed off is observed through the relay, not this return value.
    pub fn mount(&self) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("shell already mounted, ignoring");
            return false;
        }

        let delivered = self.relay.transfer();
        tracing::debug!(delivered, "shell mounted");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn loading(&self) -> &LoadingStore {
        &self.loading
    }

    pub fn navigation(&self) -> &NavigationStore {
        &self.navigation
    }

    pub fn relay(&self) -> &'static InstallPromptRelay {
        self.relay
    }
}

impl Default for ClientShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pwa::{InstallPrompt, PromptOutcome};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct ScriptedPrompt {
        outcome: PromptOutcome,
    }

    #[async_trait]
    impl InstallPrompt for ScriptedPrompt {
        fn prevent_default(&self) {}

        async fn prompt(&self) -> PromptOutcome {
            self.outcome
        }
    }

    fn prompt(outcome: PromptOutcome) -> Arc<ScriptedPrompt> {
        Arc::new(ScriptedPrompt { outcome })
    }

    fn leaked_relay() -> &'static InstallPromptRelay {
        Box::leak(Box::new(InstallPromptRelay::new()))
    }

    #[test]
    fn mount_runs_once() {
        let shell = ClientShell::with_relay(leaked_relay());

        assert!(!shell.is_mounted());
        assert!(shell.mount());
        assert!(shell.is_mounted());
        assert!(!shell.mount());
    }

    #[test]
    fn mount_reports_the_mount_not_the_delivery() {
        let relay = leaked_relay();
        let shell = ClientShell::with_relay(relay);

        // Nothing parked: the call still counts as the mounting one.
        assert!(shell.mount());
        assert!(!relay.available());
    }

    #[tokio::test]
    async fn mount_surfaces_a_parked_prompt() {
        let relay = leaked_relay();
        relay.capture(prompt(PromptOutcome::Accepted));

        let shell = ClientShell::with_relay(relay);
        assert!(shell.mount());
        assert!(relay.available());
        assert_eq!(relay.consume().await, Some(PromptOutcome::Accepted));
    }

    #[tokio::test]
    async fn prompts_after_mount_wait_for_transfer() {
        let relay = leaked_relay();
        let shell = ClientShell::with_relay(relay);
        assert!(shell.mount());

        relay.capture(prompt(PromptOutcome::Dismissed));
        assert!(!relay.available());

        assert!(relay.transfer());
        assert_eq!(relay.consume().await, Some(PromptOutcome::Dismissed));
    }

    #[test]
    fn stores_start_at_their_defaults() {
        let shell = ClientShell::with_relay(leaked_relay());

        assert!(!shell.loading().is_loading());
        assert_eq!(
            shell.navigation().direction(),
            crate::stores::NavigationDirection::Forward
        );
    }
}
