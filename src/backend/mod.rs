//! Hosted backend client.
//!
//! Produces the process-wide handle for talking to the hosted backend. The
//! handle only carries connection material (URL, publishable key, HTTP
//! client); query and auth semantics belong to the service layer built on
//! top of it.

pub mod client;
pub mod config;

pub use client::{BackendClient, BackendHandle, ExecutionContext};
pub use config::BackendConfig;

use std::sync::OnceLock;

/// Process-wide backend handle.
///
/// Built from environment configuration on first use and reused for the
/// process lifetime. The first call fixes the execution context; later
/// calls return the same handle whatever context they pass.
pub fn init(context: ExecutionContext) -> &'static BackendHandle {
    static HANDLE: OnceLock<BackendHandle> = OnceLock::new();
    HANDLE.get_or_init(|| BackendHandle::init(context, BackendConfig::from_env()))
}
