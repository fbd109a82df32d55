use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Once;

use crate::traits::AbortSignal;

static INIT: Once = Once::new();
static CTRL_C_PRESSED: AtomicBool = AtomicBool::new(false);

/// A signal that is triggered when the user presses `Ctrl-C`.
/// <div class="warning">This signal takes over the `Ctrl-C` handler for the whole process and can
/// interfere with other libraries that use `Ctrl-C` (e.g. `tokio`).</div>
#[derive(Default)]
pub struct CtrlCAbortSignal;

impl CtrlCAbortSignal {
    /// Create a new `CtrlCAbortSignal` and register a ctrl-c handler. If another handler is
    /// already installed, a warning is logged and the signal can only be triggered through
    /// [`AbortSignal::abort`].
    pub fn new() -> Self {
        INIT.call_once(|| {
            if let Err(err) = ctrlc::set_handler(|| {
                tracing::warn!("Ctrl-C pressed, stopping after the current step");
                CTRL_C_PRESSED.store(true, Ordering::SeqCst);
            }) {
                tracing::warn!("could not install the Ctrl-C handler: {err}");
            }
        });
        Self
    }
}

impl AbortSignal for CtrlCAbortSignal {
    fn is_aborted(&self) -> bool {
        CTRL_C_PRESSED.load(Ordering::SeqCst)
    }

    fn abort(&self) {
        CTRL_C_PRESSED.store(true, Ordering::SeqCst);
    }

    fn reset(&self) {
        CTRL_C_PRESSED.store(false, Ordering::SeqCst);
    }
}

/// A signal that is triggered by setting an atomic boolean. Share it through an
/// [`Arc`](std::sync::Arc) to abort a run from an [`Observer`](crate::traits::Observer) or
/// another thread.
#[derive(Default)]
pub struct AtomicAbortSignal {
    abort: AtomicBool,
}

impl AtomicAbortSignal {
    /// Create a new `AtomicAbortSignal`.
    pub const fn new() -> Self {
        Self {
            abort: AtomicBool::new(false),
        }
    }
}

impl AbortSignal for AtomicAbortSignal {
    fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::SeqCst)
    }

    fn abort(&self) {
        self.abort.store(true, Ordering::SeqCst);
    }

    fn reset(&self) {
        self.abort.store(false, Ordering::SeqCst);
    }
}

/// A signal that never aborts. This is the default signal of an [`Engine`](crate::core::Engine).
#[derive(Default, Clone, Copy)]
pub struct NopAbortSignal;

impl AbortSignal for NopAbortSignal {
    fn is_aborted(&self) -> bool {
        false
    }

    fn abort(&self) {}

    fn reset(&self) {}
}
