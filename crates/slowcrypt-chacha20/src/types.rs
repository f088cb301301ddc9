// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{BLOCK_SIZE, KEY_SIZE, NONCE_SIZE};

/// 256-bit ChaCha20 key.
pub type Key = [u8; KEY_SIZE];

/// 96-bit ChaCha20 nonce.
pub type Nonce = [u8; NONCE_SIZE];

/// One 64-byte keystream block.
pub type Block = [u8; BLOCK_SIZE];
