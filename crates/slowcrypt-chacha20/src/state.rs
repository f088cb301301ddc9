// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The ChaCha20 block engine.

use slowcrypt_scrub::{Scrub, ScrubSentinel};
use slowcrypt_util::{u32_from_le, u32_to_le};

use crate::consts::{CHACHA20_CONSTANTS, DEFAULT_ROUNDS, STATE_WORDS};
use crate::types::{Block, Key, Nonce};

/// Applies one quarter round to slots `a`, `b`, `c`, `d` of `state`.
///
/// Four add-xor-rotate steps with rotations 16, 12, 8 and 7. Additions wrap.
#[inline(always)]
pub fn quarter_round(state: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// ChaCha20 state plus the swap state used for the feed-forward.
///
/// Layout of the 16 words: 4 constants, 8 key words, the block counter and
/// 3 nonce words. Both states are scrubbed on drop.
#[derive(Scrub)]
#[scrub(drop)]
pub struct ChaCha20 {
    state: [u32; STATE_WORDS],
    pub(crate) swap: [u32; STATE_WORDS],
    pub(crate) le_bytes_tmp: [u8; 4],
    __sentinel: ScrubSentinel,
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self {
            state: [0; STATE_WORDS],
            swap: [0; STATE_WORDS],
            le_bytes_tmp: [0; 4],
            __sentinel: ScrubSentinel::default(),
        }
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}

impl ChaCha20 {
    /// Builds the state for `key`, `block_counter` and `nonce`.
    pub fn new(key: &Key, block_counter: u32, nonce: &Nonce) -> Self {
        let mut chacha = Self::default();
        chacha.reinit(key, block_counter, nonce);
        chacha
    }

    /// Overwrites the state in place for a new key, counter and nonce.
    pub fn reinit(&mut self, key: &Key, block_counter: u32, nonce: &Nonce) {
        self.state[..4].copy_from_slice(&CHACHA20_CONSTANTS);

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            self.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.state[4 + i], &mut self.le_bytes_tmp);
        }

        self.state[12] = block_counter;

        for (i, chunk) in nonce.chunks_exact(4).enumerate() {
            self.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.state[13 + i], &mut self.le_bytes_tmp);
        }
    }

    /// Runs `rounds` quarter-round passes and adds the input state back in.
    ///
    /// Even-indexed passes are column rounds, odd-indexed passes diagonal
    /// rounds, so `run(20)` is the standard ten double rounds. The swap
    /// copy of the input is scrubbed afterwards.
    pub fn run(&mut self, rounds: usize) {
        self.swap.copy_from_slice(&self.state);

        for i in 0..rounds {
            if i % 2 == 0 {
                quarter_round(&mut self.state, 0, 4, 8, 12);
                quarter_round(&mut self.state, 1, 5, 9, 13);
                quarter_round(&mut self.state, 2, 6, 10, 14);
                quarter_round(&mut self.state, 3, 7, 11, 15);
            } else {
                quarter_round(&mut self.state, 0, 5, 10, 15);
                quarter_round(&mut self.state, 1, 6, 11, 12);
                quarter_round(&mut self.state, 2, 7, 8, 13);
                quarter_round(&mut self.state, 3, 4, 9, 14);
            }
        }

        for (word, input) in self.state.iter_mut().zip(self.swap.iter()) {
            *word = word.wrapping_add(*input);
        }

        self.swap.scrub();
    }

    /// Writes the 16 words to `out`, little-endian, in state order.
    pub fn serialize(&self, out: &mut Block) {
        let mut bytes = [0u8; 4];

        for (src, dst) in self.state.iter().zip(out.chunks_exact_mut(4)) {
            // u32_to_le scrubs the word copy.
            let mut word = *src;
            u32_to_le(&mut word, &mut bytes);
            dst.copy_from_slice(&bytes);
        }

        bytes.scrub();
    }

    /// XORs the serialized state into `buf`.
    pub fn serialize_xor(&self, buf: &mut Block) {
        let mut bytes = [0u8; 4];

        for (src, dst) in self.state.iter().zip(buf.chunks_exact_mut(4)) {
            // u32_to_le scrubs the word copy.
            let mut word = *src;
            u32_to_le(&mut word, &mut bytes);
            for (d, k) in dst.iter_mut().zip(bytes.iter()) {
                *d ^= k;
            }
        }

        bytes.scrub();
    }

    /// Produces one keystream block and XORs it into `data`.
    ///
    /// Equivalent to [`reinit`](Self::reinit), `run(20)` and
    /// [`serialize_xor`](Self::serialize_xor). The state keeps the
    /// keystream words until [`deinit`](Self::deinit) or drop.
    pub fn block(&mut self, key: &Key, block_counter: u32, nonce: &Nonce, data: &mut Block) {
        self.reinit(key, block_counter, nonce);
        self.run(DEFAULT_ROUNDS);
        self.serialize_xor(data);
    }

    /// Scrubs the state and the swap state.
    pub fn deinit(&mut self) {
        self.scrub();
    }

    /// The current state words.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }
}

/// One-shot [`ChaCha20::block`] on a fresh state that is scrubbed on return.
pub fn block(key: &Key, block_counter: u32, nonce: &Nonce, data: &mut Block) {
    let mut chacha = ChaCha20::default();
    chacha.block(key, block_counter, nonce, data);
}
