// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Accumulator arithmetic behind [`crate::Poly1305`].

mod native;
mod wide;

use slowcrypt_scrub::{Scrub, ScrubProbe};

use crate::consts::{BLOCK_SIZE, Tag};

pub use native::NativeBackend;
pub use wide::WideIntBackend;

/// The backend used when none is named.
#[cfg(not(feature = "wide-int"))]
pub type DefaultBackend = NativeBackend;

/// The backend used when none is named.
#[cfg(feature = "wide-int")]
pub type DefaultBackend = WideIntBackend;

/// Arithmetic modulo `2^130 - 5` for one Poly1305 computation.
///
/// Callers pad short blocks themselves: the block carries `0x01` right after
/// the message bytes and zeros after that, and `hibit` is `false`. Full
/// blocks pass `hibit = true`, which adds the implicit `2^128` term.
pub trait Poly1305Backend: Scrub + ScrubProbe + Default {
    /// Loads the clamped `r` and the `s` half and resets the accumulator.
    fn load_key(&mut self, r: &[u8; 16], s: &[u8; 16]);

    /// `acc = ((acc + n) * r) mod (2^130 - 5)`.
    fn absorb(&mut self, block: &[u8; BLOCK_SIZE], hibit: bool);

    /// Writes `(acc + s) mod 2^128` to `tag` and scrubs the backend.
    fn finalize(&mut self, tag: &mut Tag);
}
