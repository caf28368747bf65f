//! Observable state cells.
//!
//! Every store in the crate is a thin domain wrapper around [`Store`], a
//! single-value cell with last-write-wins semantics and explicit change
//! notification. Observers take a [`Subscription`] and either poll the
//! current value or await the next published one.

use tokio::sync::watch;

/// Single-value observable cell.
///
/// Writes replace the value and wake subscribers. Slow subscribers may miss
/// intermediate values but always observe the final one.
#[derive(Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Replace the value and return the previous one. The swap is atomic
    /// with respect to other writers.
    pub fn replace(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        self.tx.send_modify(mutate);
    }

    /// New subscription positioned at the current value.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T> Store<Option<T>> {
    /// Take the value out, leaving `None`.
    ///
    /// The take-out is atomic with respect to other writers, which is what
    /// lets callers hand a value out exactly once. Subscribers are only
    /// notified when there was a value to take; an empty take publishes
    /// nothing.
    pub fn take(&self) -> Option<T> {
        let mut taken = None;
        self.tx.send_if_modified(|slot| {
            taken = slot.take();
            taken.is_some()
        });
        taken
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Read side of a [`Store`].
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Clone of the current value, without waiting.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for a value published after the last one this subscription saw.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
