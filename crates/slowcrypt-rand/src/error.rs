// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when generating random data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// A source failed in a way that is not "unsupported on this platform".
    #[error("Unexpected")]
    Unexpected,
    /// Only the non-cryptographic fallback was left and the configuration
    /// forbids using it.
    #[error("Insecure")]
    Insecure,
}
