// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use slowcrypt_bigint::{Modulus, WideInt};
use slowcrypt_scrub::{Scrub, ScrubSentinel};

use super::Poly1305Backend;
use crate::consts::{BLOCK_SIZE, Tag};

/// Backend written on [`WideInt`].
///
/// The accumulator is fully reduced after every block, so `s` is added
/// without a further reduction.
#[derive(Default, Scrub)]
#[scrub(drop)]
pub struct WideIntBackend {
    r: WideInt,
    s: WideInt,
    acc: WideInt,
    __sentinel: ScrubSentinel,
}

impl core::fmt::Debug for WideIntBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "WideIntBackend {{ [protected] }}")
    }
}

impl Poly1305Backend for WideIntBackend {
    fn load_key(&mut self, r: &[u8; 16], s: &[u8; 16]) {
        self.r = WideInt::from_le_array(r, 0);
        self.s = WideInt::from_le_array(s, 0);
        self.acc = WideInt::zero();
    }

    fn absorb(&mut self, block: &[u8; BLOCK_SIZE], hibit: bool) {
        let n = WideInt::from_le_array(block, u8::from(hibit));
        self.acc.add_assign(&n);

        let product = self.acc.mul(&self.r);
        self.acc = product.rem(&Modulus::POLY1305);
    }

    fn finalize(&mut self, tag: &mut Tag) {
        self.acc.add_assign(&self.s);
        self.acc.write_le_bytes(tag);
        self.scrub();
    }
}
