// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # slowcrypt-poly1305
//!
//! The Poly1305 one-time authenticator (RFC 8439 section 2.5).
//!
//! The accumulator arithmetic sits behind [`Poly1305Backend`]. Two backends
//! ship with the crate and produce identical tags:
//!
//! - [`NativeBackend`]: 26-bit limbs with 64-bit products (the default).
//! - [`WideIntBackend`]: the same steps written on
//!   [`slowcrypt_bigint::WideInt`], selected by the `wide-int` feature.
//!
//! A Poly1305 key must never be used for more than one message.
//!
//! ```rust
//! use slowcrypt_poly1305::{mac, verify};
//!
//! let key = [0x11u8; 32];
//! let tag = mac(&key, b"hello");
//!
//! assert!(verify(&key, b"hello", &tag));
//! assert!(!verify(&key, b"hellO", &tag));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod backends;
mod clamp;
mod consts;
mod error;
mod mac;

pub use backends::{DefaultBackend, NativeBackend, Poly1305Backend, WideIntBackend};
pub use clamp::clamp;
pub use consts::{BLOCK_SIZE, KEY_SIZE, TAG_SIZE, Tag};
pub use error::Poly1305Error;
pub use mac::Poly1305;

/// Computes the tag of `msg` under a one-time `key` with [`DefaultBackend`].
pub fn mac(key: &[u8; KEY_SIZE], msg: &[u8]) -> Tag {
    Poly1305::<DefaultBackend>::mac(key, msg)
}

/// Recomputes the tag of `msg` and compares it to `expected` in constant time.
pub fn verify(key: &[u8; KEY_SIZE], msg: &[u8], expected: &Tag) -> bool {
    Poly1305::<DefaultBackend>::verify(key, msg, expected)
}
