// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Misuse of the accumulator interface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Poly1305Error {
    /// A block longer than 16 bytes was passed to `update_block`.
    #[error("BlockTooLong: {len} bytes")]
    BlockTooLong {
        /// Length of the rejected block.
        len: usize,
    },
    /// Input arrived after a short (final) block had been absorbed.
    #[error("BlockAfterFinal")]
    BlockAfterFinal,
    /// The accumulator was scrubbed and holds no key any more.
    #[error("Scrubbed")]
    Scrubbed,
}
