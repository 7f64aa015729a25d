//! Shared callback handles for component args.
//!
//! ## Usage
//!
//! Store value-change handlers in component args without forcing deep
//! closure comparisons.

use std::sync::Arc;

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// `CallbackWith` compares by identity (`Arc::ptr_eq`), so args holding one
/// can still derive `PartialEq`.
///
/// ```
/// use std::sync::{Arc, atomic::{AtomicU32, Ordering}};
/// use reveal_ui::CallbackWith;
///
/// let seen = Arc::new(AtomicU32::new(0));
/// let sink = seen.clone();
/// let on_change = CallbackWith::new(move |v: f32| sink.store(v as u32, Ordering::SeqCst));
///
/// on_change.call(42.0);
/// assert_eq!(seen.load(Ordering::SeqCst), 42);
/// ```
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T: 'static> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_compare_equal_and_fresh_handles_do_not() {
        let a: CallbackWith<f32> = CallbackWith::new(|_| {});
        let b = a.clone();
        let c: CallbackWith<f32> = CallbackWith::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
