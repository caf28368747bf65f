//! View transition math.
//!
//! Screens slide horizontally during navigation. The renderer owns the
//! clock; this module turns elapsed progress into the per-frame transform
//! and opacity to apply.

use std::fmt;
use std::time::Duration;

use crate::stores::NavigationDirection;

/// Which edge the incoming screen slides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Enter from the right, travelling left.
    #[default]
    Left,
    /// Enter from the left, travelling right.
    Right,
}

impl From<NavigationDirection> for SlideDirection {
    /// Forward navigation slides left, backward navigation slides right,
    /// matching the stack the user is walking.
    fn from(direction: NavigationDirection) -> Self {
        match direction {
            NavigationDirection::Forward => SlideDirection::Left,
            NavigationDirection::Backward => SlideDirection::Right,
        }
    }
}

/// Deceleration curve: fast start, soft landing.
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// A slide animation over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub direction: SlideDirection,
    pub duration: Duration,
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self {
            direction: SlideDirection::default(),
            duration: Duration::from_millis(300),
        }
    }
}

impl SlideTransition {
    pub fn new(direction: SlideDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Frame state at `progress`, where 0.0 is the start of the
    /// transition and 1.0 the end. Progress outside that range is
    /// clamped; easing is applied here, so callers feed linear time.
    pub fn frame(&self, progress: f32) -> SlideFrame {
        let t = ease_out(progress.clamp(0.0, 1.0));
        let translate_x = match self.direction {
            SlideDirection::Left => (1.0 - t) * 100.0,
            SlideDirection::Right => (t - 1.0) * 100.0,
        };

        SlideFrame {
            translate_x,
            opacity: t,
        }
    }
}

/// One frame of a slide: horizontal offset in percent plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub translate_x: f32,
    pub opacity: f32,
}

impl fmt::Display for SlideFrame {
    /// Renders the inline CSS fragment for this frame.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform: translateX({}%); opacity: {};",
            self.translate_x, self.opacity
        )
    }
}
