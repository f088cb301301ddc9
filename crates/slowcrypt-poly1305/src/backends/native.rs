// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Radix-2^26 arithmetic on machine words.

use slowcrypt_scrub::{Scrub, ScrubSentinel};
use slowcrypt_util::{u32_from_le, u32_to_le};

use super::Poly1305Backend;
use crate::consts::{BLOCK_SIZE, Tag};

const LIMB_MASK: u64 = 0x03ff_ffff;

/// Scratch space for one block step. Lives in the backend so it is covered
/// by the scrub on drop, and is cleared after every step.
#[derive(Default, Scrub)]
struct BlockWork {
    words: [u32; 4],
    le_bytes_tmp: [u8; 4],
    d: [u64; 5],
}

/// Scratch space for the final reduction and the addition of `s`.
#[derive(Default, Scrub)]
struct FinalWork {
    h: [u64; 5],
    g: [u64; 5],
    mask: u64,
    words: [u64; 4],
    carry: u64,
}

/// Backend on five 26-bit limbs with 64-bit products.
///
/// Limb products stay below 2^58, so five of them sum without overflow.
/// The accumulator is only partially reduced between blocks and
/// canonicalized once in [`Poly1305Backend::finalize`].
#[derive(Default, Scrub)]
#[scrub(drop)]
pub struct NativeBackend {
    r: [u64; 5],
    r5: [u64; 4],
    s: [u32; 4],
    acc: [u64; 5],
    block: BlockWork,
    fin: FinalWork,
    __sentinel: ScrubSentinel,
}

impl core::fmt::Debug for NativeBackend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NativeBackend {{ [protected] }}")
    }
}

impl NativeBackend {
    /// Reads 16 bytes as four little-endian words into `block.words`.
    fn load_words(&mut self, bytes: &[u8; 16]) {
        for (i, chunk) in bytes.chunks_exact(4).enumerate() {
            self.block.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.block.words[i], &mut self.block.le_bytes_tmp);
        }
    }

    /// Splits four words into five 26-bit limbs, added into `out`.
    fn add_limbs(words: &[u32; 4], out: &mut [u64; 5]) {
        let t = |i: usize| u64::from(words[i]);

        out[0] += t(0) & LIMB_MASK;
        out[1] += ((t(0) >> 26) | (t(1) << 6)) & LIMB_MASK;
        out[2] += ((t(1) >> 20) | (t(2) << 12)) & LIMB_MASK;
        out[3] += ((t(2) >> 14) | (t(3) << 18)) & LIMB_MASK;
        out[4] += t(3) >> 8;
    }

    /// One carry pass over five limbs, folding the top carry back with `* 5`.
    fn carry(limbs: &mut [u64; 5]) {
        for i in 0..4 {
            limbs[i + 1] += limbs[i] >> 26;
            limbs[i] &= LIMB_MASK;
        }
        limbs[0] += (limbs[4] >> 26) * 5;
        limbs[4] &= LIMB_MASK;
        limbs[1] += limbs[0] >> 26;
        limbs[0] &= LIMB_MASK;
    }
}

impl Poly1305Backend for NativeBackend {
    fn load_key(&mut self, r: &[u8; 16], s: &[u8; 16]) {
        self.load_words(r);
        self.r = [0; 5];
        Self::add_limbs(&self.block.words, &mut self.r);

        for (r5, r) in self.r5.iter_mut().zip(self.r[1..].iter()) {
            *r5 = r * 5;
        }

        self.load_words(s);
        self.s = self.block.words;

        self.acc = [0; 5];
        self.block.scrub();
    }

    fn absorb(&mut self, block: &[u8; BLOCK_SIZE], hibit: bool) {
        self.load_words(block);
        Self::add_limbs(&self.block.words, &mut self.acc);
        self.acc[4] += u64::from(hibit) << 24;

        // Schoolbook product; terms that wrap past 2^130 use 5 * r.
        for i in 0..5 {
            let mut sum = 0u64;
            for j in 0..5 {
                let coeff = if j <= i {
                    self.r[i - j]
                } else {
                    self.r5[i + 4 - j]
                };
                sum += self.acc[j] * coeff;
            }
            self.block.d[i] = sum;
        }

        Self::carry(&mut self.block.d);
        self.acc = self.block.d;
        self.block.scrub();
    }

    fn finalize(&mut self, tag: &mut Tag) {
        let fin = &mut self.fin;

        fin.h = self.acc;
        Self::carry(&mut fin.h);

        // g = h + 5 - 2^130; keep it when it did not go negative, i.e. h >= p.
        fin.carry = 5;
        for i in 0..4 {
            fin.g[i] = fin.h[i] + fin.carry;
            fin.carry = fin.g[i] >> 26;
            fin.g[i] &= LIMB_MASK;
        }
        fin.g[4] = fin.h[4].wrapping_add(fin.carry).wrapping_sub(1 << 26);

        fin.mask = (fin.g[4] >> 63).wrapping_sub(1);
        for i in 0..5 {
            fin.h[i] = (fin.h[i] & !fin.mask) | (fin.g[i] & fin.mask);
        }

        // Canonical limbs, so the repacking below can OR them together.
        for i in 0..4 {
            fin.h[i + 1] += fin.h[i] >> 26;
            fin.h[i] &= LIMB_MASK;
        }

        // Repack into 32-bit words; bits above 2^128 are dropped.
        fin.words[0] = (fin.h[0] | (fin.h[1] << 26)) & 0xffff_ffff;
        fin.words[1] = ((fin.h[1] >> 6) | (fin.h[2] << 20)) & 0xffff_ffff;
        fin.words[2] = ((fin.h[2] >> 12) | (fin.h[3] << 14)) & 0xffff_ffff;
        fin.words[3] = ((fin.h[3] >> 18) | (fin.h[4] << 8)) & 0xffff_ffff;

        // tag = (h + s) mod 2^128
        fin.carry = 0;
        for (i, chunk) in tag.chunks_exact_mut(4).enumerate() {
            fin.carry += fin.words[i] + u64::from(self.s[i]);
            let mut word = fin.carry as u32;
            fin.carry >>= 32;

            u32_to_le(&mut word, &mut self.block.le_bytes_tmp);
            chunk.copy_from_slice(&self.block.le_bytes_tmp);
        }

        self.scrub();
    }
}
