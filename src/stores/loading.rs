//! Page-level loading state.

use serde::{Deserialize, Serialize};

use crate::reactive::{Store, Subscription};

/// Loading flag plus the message shown while it is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingState {
    pub is_loading: bool,
    pub message: String,
}

impl LoadingState {
    /// Message used when a caller starts loading without one of its own.
    pub const DEFAULT_MESSAGE: &'static str = "Cargando...";
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            is_loading: false,
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// Holder for [`LoadingState`] with a single setter.
#[derive(Debug, Default)]
pub struct LoadingStore {
    state: Store<LoadingState>,
}

impl LoadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loading flag.
    ///
    /// The message is only touched when the flag turns on: `None` falls back
    /// to [`LoadingState::DEFAULT_MESSAGE`]. Turning the flag off leaves the
    /// previous message in place, so a spinner fading out keeps its caption.
    pub fn set_loading(&self, loading: bool, message: Option<&str>) {
        self.state.update(|state| {
            state.is_loading = loading;
            if loading {
                state.message = message.unwrap_or(LoadingState::DEFAULT_MESSAGE).to_string();
            }
        });
    }

    pub fn get(&self) -> LoadingState {
        self.state.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.get().is_loading
    }

    pub fn message(&self) -> String {
        self.state.get().message
    }

    pub fn subscribe(&self) -> Subscription<LoadingState> {
        self.state.subscribe()
    }
}
