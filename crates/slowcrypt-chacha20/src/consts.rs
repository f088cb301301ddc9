// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// The words "expand 32-byte k", read little-endian.
pub const CHACHA20_CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 12;

/// Keystream block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Words in the cipher state.
pub const STATE_WORDS: usize = 16;

/// Quarter-round passes used by [`block`](crate::block) and the stream
/// compositions.
pub const DEFAULT_ROUNDS: usize = 20;
