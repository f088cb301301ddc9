// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use slowcrypt_scrub::Scrub;

use crate::consts::{BLOCK_SIZE, DEFAULT_ROUNDS};
use crate::error::ChaCha20Error;
use crate::state::ChaCha20;
use crate::types::{Block, Key, Nonce};

/// XORs the keystream starting at block `initial_counter` into `data`.
///
/// Block `i` of `data` uses counter `initial_counter + i`; a short final
/// block uses a prefix of its keystream. Applying the same call twice
/// restores the input.
///
/// # Errors
///
/// [`ChaCha20Error::CounterOverflow`] if the last block would need a
/// counter beyond `u32::MAX`. `data` is left untouched in that case.
pub fn apply_keystream(
    key: &Key,
    nonce: &Nonce,
    initial_counter: u32,
    data: &mut [u8],
) -> Result<(), ChaCha20Error> {
    let blocks = data.len().div_ceil(BLOCK_SIZE) as u64;
    if blocks > 0 && initial_counter as u64 + (blocks - 1) > u32::MAX as u64 {
        return Err(ChaCha20Error::CounterOverflow);
    }

    let mut chacha = ChaCha20::default();
    let mut keystream: Block = [0; BLOCK_SIZE];
    let mut counter = initial_counter;

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        chacha.reinit(key, counter, nonce);
        chacha.run(DEFAULT_ROUNDS);
        chacha.serialize(&mut keystream);

        for (byte, ks) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= ks;
        }

        // Wraps only after the final block, which the check above allows.
        counter = counter.wrapping_add(1);
    }

    keystream.scrub();

    Ok(())
}
