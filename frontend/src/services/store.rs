//! Reactive [`Store`] backed by a Leptos signal.

use leptos::*;
use portfolio_core::Store;

/// Signal-backed state shared by components and workflows.
///
/// Workflow writes notify every view that reads the signal. Once the owning
/// signal is disposed, reads and writes return `None`.
pub struct SignalStore<S: 'static>(RwSignal<S>);

impl<S: 'static> SignalStore<S> {
    pub fn new(state: S) -> Self {
        Self(create_rw_signal(state))
    }

    /// Tracked read, for views and effects.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.0.with(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.0.update(f)
    }
}

impl<S: 'static> Clone for SignalStore<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SignalStore<S> {}

impl<S: 'static> Store<S> for SignalStore<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
