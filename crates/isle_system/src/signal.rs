//! Loop shutdown flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared, externally observable "stop the loop" flag.
///
/// Clones share the same flag. Any system may set it; the loop checks it
/// once per frame boundary.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// A signal that is not yet set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown.
    pub fn set(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once shutdown has been requested.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let signal = ShutdownSignal::new();
        let observer = signal.clone();
        assert!(!observer.is_set());
        signal.set();
        assert!(observer.is_set());
    }
}
