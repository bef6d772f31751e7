//! Access to application state from async workflows.
//!
//! Workflows never hold a borrow across an `.await`: they read or mutate the
//! state through short closures. In the browser the store is a Leptos signal,
//! in tests a `RefCell`.

use std::cell::RefCell;

/// Closure-based access to a piece of state.
///
/// Both methods return `None` once the state is gone (for example a
/// component that owned it was unmounted), letting in-flight workflows drop
/// their results quietly.
pub trait Store<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S> Store<S> for RefCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
