// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # slowcrypt-scrub
//!
//! Re-exports [`slowcrypt-scrub-core`] and the `#[derive(Scrub)]` macro.
//!
//! ```rust
//! use slowcrypt_scrub::{AssertScrubOnDrop, Scrub, ScrubProbe, ScrubSentinel};
//!
//! #[derive(Scrub)]
//! #[scrub(drop)]
//! struct OneTimeKey {
//!     key: [u8; 32],
//!     __sentinel: ScrubSentinel,
//! }
//!
//! let mut otk = OneTimeKey {
//!     key: [0x85; 32],
//!     __sentinel: ScrubSentinel::default(),
//! };
//!
//! assert!(!otk.is_scrubbed());
//! otk.scrub();
//! assert!(otk.is_scrubbed());
//!
//! otk.assert_scrub_on_drop();
//! ```
//!
//! [`slowcrypt-scrub-core`]: slowcrypt_scrub_core

#![cfg_attr(not(test), no_std)]

pub use slowcrypt_scrub_core::*;
pub use slowcrypt_scrub_derive::*;
