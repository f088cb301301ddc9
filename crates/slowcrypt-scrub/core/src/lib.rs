// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # slowcrypt-scrub-core
//!
//! Scrubbing contract shared by every slowcrypt primitive that holds key
//! material, keystream or authenticator state.
//!
//! - [`Scrub`]: overwrite a value with zeros using writes the optimizer keeps.
//! - [`ScrubProbe`]: check at runtime that a value reads back as all zeros.
//! - [`ScrubSentinel`] and [`AssertScrubOnDrop`]: prove from a test that a
//!   value scrubbed itself while being dropped.
//!
//! ```rust
//! use slowcrypt_scrub_core::{Scrub, ScrubProbe};
//!
//! let mut key = [0x42u8; 32];
//! assert!(!key.is_scrubbed());
//!
//! key.scrub();
//! assert!(key.is_scrubbed());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod assert;
pub mod collections;

mod primitives;
mod sentinel;
mod traits;

pub use sentinel::ScrubSentinel;
pub use traits::{AssertScrubOnDrop, Scrub, ScrubLayout, ScrubProbe};
