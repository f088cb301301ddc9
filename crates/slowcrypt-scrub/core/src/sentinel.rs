// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering, compiler_fence};

use crate::traits::{Scrub, ScrubLayout};

/// Shared flag recording whether its owner has been scrubbed.
///
/// Starts pristine. [`Scrub::scrub`] clears the flag, and since all clones
/// share one `Arc<AtomicBool>`, a clone taken before the owner is dropped
/// observes the scrub afterwards.
///
/// ```rust
/// use slowcrypt_scrub_core::{Scrub, ScrubSentinel};
///
/// let mut sentinel = ScrubSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_scrubbed());
/// sentinel.scrub();
/// assert!(observer.is_scrubbed());
/// ```
#[derive(Clone, Debug)]
pub struct ScrubSentinel(Arc<AtomicBool>);

impl ScrubSentinel {
    /// Puts the sentinel (and every clone) back into the pristine state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`Scrub::scrub`] has been called on any clone.
    pub fn is_scrubbed(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

impl Default for ScrubSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl PartialEq for ScrubSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ScrubSentinel {}

impl ScrubLayout for ScrubSentinel {
    const BULK: bool = false;
}

impl Scrub for ScrubSentinel {
    fn scrub(&mut self) {
        // SAFETY: `as_ptr` points at the live `AtomicBool` owned by the Arc;
        // the volatile store keeps the write observable through every clone.
        unsafe {
            ptr::write_volatile(self.0.as_ptr(), false);
        }
        compiler_fence(Ordering::SeqCst);
    }
}
