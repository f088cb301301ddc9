// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use slowcrypt_rand::EntropyError;
use thiserror::Error;

/// Errors returned by the stream and CSPRNG compositions.
///
/// The block function itself cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChaCha20Error {
    /// The request needs more blocks than the 32-bit counter has left.
    #[error("CounterOverflow")]
    CounterOverflow,
    /// The CSPRNG byte limit would be exceeded.
    #[error("LimitReached")]
    LimitReached,
    /// The generator was scrubbed and holds no key any more.
    #[error("Scrubbed")]
    Scrubbed,
    /// Seeding from the entropy source failed.
    #[error("Entropy: {0}")]
    Entropy(#[from] EntropyError),
}
