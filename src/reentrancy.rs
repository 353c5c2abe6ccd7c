//! Debug-only reentrancy guard for list scans.
//!
//! `ChainedList` calls user code (`T: PartialEq`) while walking its chain.
//! If that code finds a way back into the same list, the chain may be
//! observed mid-update. In debug builds a second `enter` while a guard is
//! live panics; in release builds the tracker is zero-sized and `enter`
//! does nothing.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-list busy flag. Guard a section with `let _g = self.reentrancy.enter();`.
#[derive(Debug)]
pub struct DebugReentrancy {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // Lists are single-threaded; keep the tracker !Send + !Sync.
    _single_threaded: PhantomData<*mut ()>,
}

impl DebugReentrancy {
    pub const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _single_threaded: PhantomData,
        }
    }

    /// Mark the owner busy until the returned guard drops.
    ///
    /// Panics in debug builds if the owner is already busy.
    #[inline]
    pub fn enter(&self) -> ScanGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "reentrancy detected: list re-entered during a scan"
            );
            return ScanGuard { owner: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return ScanGuard { _owner: PhantomData };
        }
    }
}

impl Default for DebugReentrancy {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard returned by [`DebugReentrancy::enter`].
pub struct ScanGuard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a DebugReentrancy,
    #[cfg(not(debug_assertions))]
    _owner: PhantomData<&'a ()>,
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            let was_busy = self.owner.busy.replace(false);
            debug_assert!(was_busy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DebugReentrancy;

    #[test]
    fn sequential_sections_are_ok() {
        let r = DebugReentrancy::new();
        {
            let _g = r.enter();
        }
        let _g = r.enter();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn nested_enter_panics_in_debug() {
        let r = DebugReentrancy::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _outer = r.enter();
            let _inner = r.enter();
        }));
        assert!(res.is_err(), "expected nested enter to panic in debug builds");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn nested_enter_is_noop_in_release() {
        let r = DebugReentrancy::new();
        let _outer = r.enter();
        let _inner = r.enter();
    }
}
