use std::sync::Arc;

/// A trait for abort signals.
/// This trait is used by the [`Engine`](crate::core::Engine) to check between steps if the user
/// has requested to abort the calculation.
pub trait AbortSignal {
    /// Return `true` if the user has requested to abort the calculation.
    fn is_aborted(&self) -> bool;
    /// Abort the calculation. Make `is_aborted()` return `true`.
    fn abort(&self);
    /// Reset the abort signal. Make `is_aborted()` return `false`.
    fn reset(&self);
}

impl<T: AbortSignal + ?Sized> AbortSignal for Arc<T> {
    fn is_aborted(&self) -> bool {
        (**self).is_aborted()
    }

    fn abort(&self) {
        (**self).abort();
    }

    fn reset(&self) {
        (**self).reset();
    }
}
