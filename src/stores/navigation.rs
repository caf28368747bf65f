//! Navigation direction flag.
//!
//! Records whether the most recent route change moved forward or backward,
//! which only exists to pick the matching slide transition. Last set value
//! wins; there is nothing else to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reactive::{Store, Subscription};

/// Direction of the most recent route change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    #[default]
    Forward,
    Backward,
}

/// A direction string the bridge sent that is neither `forward` nor
/// `backward`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown navigation direction '{value}'")]
pub struct InvalidDirection {
    pub value: String,
}

impl fmt::Display for NavigationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationDirection::Forward => f.write_str("forward"),
            NavigationDirection::Backward => f.write_str("backward"),
        }
    }
}

impl FromStr for NavigationDirection {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(NavigationDirection::Forward),
            "backward" => Ok(NavigationDirection::Backward),
            other => Err(InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// Holder for the direction flag with a single setter.
#[derive(Debug, Default)]
pub struct NavigationStore {
    direction: Store<NavigationDirection>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_direction(&self, direction: NavigationDirection) {
        self.direction.set(direction);
    }

    pub fn direction(&self) -> NavigationDirection {
        self.direction.get()
    }

    pub fn subscribe(&self) -> Subscription<NavigationDirection> {
        self.direction.subscribe()
    }
}
