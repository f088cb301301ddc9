// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors produced when constructing a [`WideInt`](crate::WideInt).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WideIntError {
    /// The input needs more bytes than the fixed capacity provides.
    #[error("CapacityExceeded: needed {needed} bytes, capacity is {capacity}")]
    CapacityExceeded {
        /// Bytes required by the input, including the top byte.
        needed: usize,
        /// Bytes available in a `WideInt`.
        capacity: usize,
    },
}
