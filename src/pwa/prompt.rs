//! The install-prompt capability token.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// User decision reported after the native install flow closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptOutcome {
    Accepted,
    Dismissed,
}

impl PromptOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, PromptOutcome::Accepted)
    }
}

/// Opaque capability delivered with the host's install-availability event.
///
/// The host bridge implements this over whatever object its runtime hands
/// out. Tokens are single-use: the relay never triggers one twice, and a new
/// event occurrence supersedes whatever token was held before it.
#[async_trait]
pub trait InstallPrompt: Send + Sync {
    /// Stop the host from showing its own unmanaged install UI for this
    /// occurrence.
    fn prevent_default(&self);

    /// Open the native install flow and wait for the user's decision.
    async fn prompt(&self) -> PromptOutcome;
}
