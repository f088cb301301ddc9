// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # slowcrypt-chacha20
//!
//! The ChaCha20 block function (RFC 8439) and two compositions built on it:
//!
//! - [`apply_keystream`]: XOR a keystream into data of any length, which
//!   both encrypts and decrypts.
//! - [`ChaCha20Rng`]: a CSPRNG that serializes consecutive blocks.
//!
//! Keys, nonces and blocks are fixed-size arrays, so length mistakes are
//! rejected at compile time. All state holding key material or keystream
//! is scrubbed on drop.
//!
//! ```rust
//! use slowcrypt_chacha20::{apply_keystream, Key, Nonce};
//!
//! let key: Key = [0x42; 32];
//! let nonce: Nonce = [0x24; 12];
//!
//! let mut data = *b"attack at dawn";
//! apply_keystream(&key, &nonce, 1, &mut data).expect("Failed to encrypt");
//! assert_ne!(&data, b"attack at dawn");
//!
//! apply_keystream(&key, &nonce, 1, &mut data).expect("Failed to decrypt");
//! assert_eq!(&data, b"attack at dawn");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod rng;
mod state;
mod stream;
mod types;

pub use consts::{BLOCK_SIZE, CHACHA20_CONSTANTS, DEFAULT_ROUNDS, KEY_SIZE, NONCE_SIZE, STATE_WORDS};
pub use error::ChaCha20Error;
pub use rng::ChaCha20Rng;
pub use state::{ChaCha20, block, quarter_round};
pub use stream::apply_keystream;
pub use types::{Block, Key, Nonce};
