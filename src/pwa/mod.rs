//! Install-prompt plumbing ("add to home screen").
//!
//! The host environment announces install eligibility with a one-off event
//! that may fire before any UI structure exists. [`relay::InstallPromptRelay`]
//! keeps that event from getting lost and exposes it as ordinary reactive
//! state; [`prompt::InstallPrompt`] is the opaque capability the event
//! carries.

pub mod prompt;
pub mod relay;

pub use prompt::{InstallPrompt, PromptOutcome};
pub use relay::{InstallPromptRelay, SharedPrompt};
