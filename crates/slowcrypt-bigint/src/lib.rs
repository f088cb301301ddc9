// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # slowcrypt-bigint
//!
//! Fixed-capacity unsigned integers for arithmetic wider than the native
//! word size, without heap allocation.
//!
//! A [`WideInt`] holds up to [`WIDE_DIGITS`] 32-bit digits (288 bits), enough
//! for the product of a 131-bit Poly1305 accumulator and a 124-bit clamped
//! `r`. Division only accepts a [`Modulus`], which cannot be zero.
//!
//! ```rust
//! use slowcrypt_bigint::{Modulus, WideInt};
//!
//! // 2^130 reduces to 5 modulo 2^130 - 5.
//! let mut bytes = [0u8; 16];
//! let two_pow_130 = WideInt::from_le_bytes(&bytes, 0x04).unwrap();
//! let r = two_pow_130.rem(&Modulus::POLY1305);
//!
//! r.write_le_bytes(&mut bytes);
//! assert_eq!(bytes[0], 5);
//! assert!(bytes[1..].iter().all(|b| *b == 0));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod modulus;
mod wide_int;

pub use error::WideIntError;
pub use modulus::Modulus;
pub use wide_int::{WIDE_BITS, WIDE_BYTES, WIDE_DIGITS, WideInt};
