// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Supplier of random bytes used to seed keys and nonces.
pub trait EntropySource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if no acceptable source produced output.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
