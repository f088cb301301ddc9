// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for scrubbing secret state.

use crate::sentinel::ScrubSentinel;

/// Types whose secret contents can be overwritten with zeros in place.
///
/// Dyn-compatible, so heterogeneous fields can be scrubbed through
/// `&mut dyn Scrub` (this is what `#[derive(Scrub)]` generates).
pub trait Scrub {
    /// Overwrites every secret byte of `self` with zero.
    fn scrub(&mut self);
}

/// Runtime check that a value has been scrubbed.
///
/// ```rust
/// use slowcrypt_scrub_core::{Scrub, ScrubProbe};
///
/// let mut counter: u32 = 7;
/// assert!(!counter.is_scrubbed());
///
/// counter.scrub();
/// assert!(counter.is_scrubbed());
/// ```
pub trait ScrubProbe {
    /// Returns `true` if every byte of the value is zero.
    fn is_scrubbed(&self) -> bool;
}

/// Layout information used to pick between a bulk memset and a
/// per-element scrub for arrays and slices.
///
/// Not dyn-compatible (associated constant); use [`Scrub`] for trait objects.
pub trait ScrubLayout {
    /// `true` when the all-zero bit pattern is a valid value of the type,
    /// so a whole array of it can be cleared with a single `write_bytes`.
    const BULK: bool;
}

/// Types carrying a [`ScrubSentinel`] that can prove they scrub on drop.
///
/// Usually derived by `#[derive(Scrub)]` when the struct has a
/// `__sentinel` field.
pub trait AssertScrubOnDrop {
    /// Returns a clone of the internal sentinel sharing the same flag.
    fn clone_sentinel(&self) -> ScrubSentinel;

    /// Drops `self` and asserts that the sentinel was scrubbed on the way.
    ///
    /// # Panics
    ///
    /// Panics if dropping did not call [`Scrub::scrub`].
    fn assert_scrub_on_drop(self);
}
