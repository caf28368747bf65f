//! Shared test utilities and fake install prompts.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;
use velu_mobile::pwa::{InstallPrompt, InstallPromptRelay, PromptOutcome};

/// Relay with the same lifetime the process-wide one has, without
/// sharing its slot between tests.
pub fn leaked_relay() -> &'static InstallPromptRelay {
    Box::leak(Box::new(InstallPromptRelay::new()))
}

/// Install prompt that resolves immediately with a scripted outcome and
/// counts how it was used.
pub struct FakePrompt {
    outcome: PromptOutcome,
    prevented: AtomicUsize,
    triggered: AtomicUsize,
}

impl FakePrompt {
    pub fn new(outcome: PromptOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            prevented: AtomicUsize::new(0),
            triggered: AtomicUsize::new(0),
        })
    }

    pub fn prevented(&self) -> usize {
        self.prevented.load(Ordering::SeqCst)
    }

    pub fn triggered(&self) -> usize {
        self.triggered.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InstallPrompt for FakePrompt {
    fn prevent_default(&self) {
        self.prevented.fetch_add(1, Ordering::SeqCst);
    }

    async fn prompt(&self) -> PromptOutcome {
        self.triggered.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }
}

/// Install prompt whose native flow stays open until the test releases
/// it, for observing relay state mid-flow.
pub struct GatedPrompt {
    outcome: PromptOutcome,
    gate: Notify,
    triggered: AtomicUsize,
}

impl GatedPrompt {
    pub fn new(outcome: PromptOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            gate: Notify::new(),
            triggered: AtomicUsize::new(0),
        })
    }

    /// Let the pending `prompt()` call finish.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn triggered(&self) -> usize {
        self.triggered.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InstallPrompt for GatedPrompt {
    fn prevent_default(&self) {}

    async fn prompt(&self) -> PromptOutcome {
        self.triggered.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.outcome
    }
}
