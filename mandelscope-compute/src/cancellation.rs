//! Cooperative cancellation for in-flight renders.
//!
//! The core never cancels or debounces on its own; the UI collaborator
//! holds a [`CancelFlag`], hands the renderer a reference, and trips the
//! flag when a newer viewport supersedes the request. Renderers poll only
//! between block iterations, so abandonment latency is bounded by one
//! block's compute time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Checked by renderers between work units.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

/// Never cancels. The default for plain blocking renders.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Atomic cancellation flag shared between the requesting thread and the
/// render it wants to be able to abandon.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the flag. Every clone observes the cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Cancellation for CancelFlag {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
