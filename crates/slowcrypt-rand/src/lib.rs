// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # slowcrypt-rand
//!
//! Random bytes for seeding slowcrypt primitives.
//!
//! [`SystemEntropySource`] asks the operating system first and degrades
//! step by step when a source is missing:
//!
//! 1. the OS CSPRNG through `getrandom`
//! 2. the random device file (`/dev/random`, or `/dev/urandom` when
//!    [`RandConfig::non_blocking`] is set), unix only
//! 3. a time-seeded non-cryptographic generator, unless
//!    [`RandConfig::strict`] is set, in which case the request fails with
//!    [`EntropyError::Insecure`]
//!
//! Requests are served in chunks of at most [`CHUNK_SIZE`] bytes.
//!
//! ```rust
//! use slowcrypt_rand::{EntropySource, RandConfig, SystemEntropySource};
//!
//! let source = SystemEntropySource::new(RandConfig::default().strict());
//!
//! let mut key = [0u8; 32];
//! source.fill_bytes(&mut key).expect("Failed to generate entropy");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod fallback;
mod support;
mod system;
mod traits;

pub use config::RandConfig;
pub use error::EntropyError;
pub use system::{CHUNK_SIZE, SystemEntropySource};
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// Fills `buffer` from the system sources using `config`.
///
/// # Errors
///
/// See [`SystemEntropySource`].
pub fn fill(buffer: &mut [u8], config: RandConfig) -> Result<(), EntropyError> {
    SystemEntropySource::new(config).fill_bytes(buffer)
}
