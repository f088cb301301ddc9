// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from slowcrypt-rand and slowcrypt-util

#[cfg(feature = "test-utils")]
pub mod rand {
    pub use slowcrypt_rand::test_utils::*;
}

#[cfg(feature = "test-utils")]
pub mod hex {
    pub use slowcrypt_util::{hex_to_array, hex_to_bytes};
}
