// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test helper for verifying scrub-on-drop behaviour.

use crate::traits::AssertScrubOnDrop;

/// Drops `value` and asserts that it scrubbed itself.
///
/// Clones the value's sentinel, resets it to pristine, drops the value, then
/// checks the clone.
///
/// # Panics
///
/// Panics if the value's `Drop` did not call [`Scrub::scrub`](crate::Scrub::scrub).
pub fn assert_scrub_on_drop<T: AssertScrubOnDrop>(value: T) {
    let mut sentinel = value.clone_sentinel();

    sentinel.reset();

    assert!(!sentinel.is_scrubbed());
    drop(value);
    assert!(sentinel.is_scrubbed(), "value was not scrubbed on drop");
}
