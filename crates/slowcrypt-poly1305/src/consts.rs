// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// One-time key size: `r` followed by `s`.
pub const KEY_SIZE: usize = 32;

/// Bytes absorbed per accumulator step.
pub const BLOCK_SIZE: usize = 16;

/// Authenticator output size.
pub const TAG_SIZE: usize = 16;

/// A Poly1305 tag.
pub type Tag = [u8; TAG_SIZE];
