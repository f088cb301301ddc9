// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CSPRNG built by serializing consecutive ChaCha20 blocks.

use slowcrypt_rand::EntropySource;
use slowcrypt_scrub::{Scrub, ScrubSentinel};

use crate::consts::{BLOCK_SIZE, DEFAULT_ROUNDS, KEY_SIZE, NONCE_SIZE};
use crate::error::ChaCha20Error;
use crate::state::ChaCha20;
use crate::types::{Block, Key, Nonce};

/// Deterministic random generator over the ChaCha20 keystream.
///
/// Each refill runs init, `run(20)` and serialize for the next counter and
/// serves the 64 bytes from an internal buffer. Served bytes are scrubbed
/// from the buffer immediately.
///
/// Scrubbing the generator retires it: every later request fails with
/// [`ChaCha20Error::Scrubbed`].
///
/// ```rust
/// use slowcrypt_chacha20::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::new(&[7; 32], &[0; 12], 0).with_limit(1024);
///
/// let mut nonce = [0u8; 12];
/// rng.fill_bytes(&mut nonce).expect("Failed to generate nonce");
/// assert_eq!(rng.bytes_emitted(), 12);
/// ```
#[derive(Scrub)]
#[scrub(drop)]
pub struct ChaCha20Rng {
    key: Key,
    nonce: Nonce,
    counter: u32,
    counter_exhausted: bool,
    engine: ChaCha20,
    pub(crate) buffer: Block,
    position: usize,
    emitted: u64,
    #[scrub(skip)]
    limit: Option<u64>,
    ready: bool,
    __sentinel: ScrubSentinel,
}

impl core::fmt::Debug for ChaCha20Rng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20Rng {{ [protected] }}")
    }
}

impl ChaCha20Rng {
    /// Creates a generator whose first block uses `initial_counter`.
    pub fn new(key: &Key, nonce: &Nonce, initial_counter: u32) -> Self {
        Self {
            key: *key,
            nonce: *nonce,
            counter: initial_counter,
            counter_exhausted: false,
            engine: ChaCha20::default(),
            buffer: [0; BLOCK_SIZE],
            position: BLOCK_SIZE,
            emitted: 0,
            limit: None,
            ready: true,
            __sentinel: ScrubSentinel::default(),
        }
    }

    /// Creates a generator keyed from `source`, counter starting at 0.
    ///
    /// # Errors
    ///
    /// [`ChaCha20Error::Entropy`] if the source fails.
    pub fn from_entropy(source: &impl EntropySource) -> Result<Self, ChaCha20Error> {
        let mut rng = Self::new(&[0; KEY_SIZE], &[0; NONCE_SIZE], 0);
        rng.reseed(source)?;
        Ok(rng)
    }

    /// Caps the total number of bytes this generator will emit.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Replaces key and nonce with fresh bytes from `source` and restarts
    /// the counter at 0. Buffered keystream is discarded. The emitted byte
    /// count and the limit carry over.
    ///
    /// # Errors
    ///
    /// - [`ChaCha20Error::Entropy`] if the source fails; the generator is
    ///   left unchanged.
    /// - [`ChaCha20Error::Scrubbed`] if the generator has been scrubbed.
    pub fn reseed(&mut self, source: &impl EntropySource) -> Result<(), ChaCha20Error> {
        if !self.ready {
            return Err(ChaCha20Error::Scrubbed);
        }

        let mut key: Key = [0; KEY_SIZE];
        let mut nonce: Nonce = [0; NONCE_SIZE];

        let seeded = source
            .fill_bytes(&mut key)
            .and_then(|()| source.fill_bytes(&mut nonce));
        if let Err(err) = seeded {
            key.scrub();
            nonce.scrub();
            return Err(err.into());
        }

        self.key.copy_from_slice(&key);
        self.nonce.copy_from_slice(&nonce);
        key.scrub();
        nonce.scrub();

        self.counter = 0;
        self.counter_exhausted = false;
        self.buffer.scrub();
        self.position = BLOCK_SIZE;

        tracing::trace!(emitted = self.emitted, "ChaCha20Rng reseeded");

        Ok(())
    }

    /// Total bytes handed out so far.
    pub fn bytes_emitted(&self) -> u64 {
        self.emitted
    }

    /// Bytes that can still be produced before the counter runs out.
    fn available(&self) -> u64 {
        let buffered = (BLOCK_SIZE - self.position) as u64;
        let blocks_left = if self.counter_exhausted {
            0
        } else {
            u32::MAX as u64 - self.counter as u64 + 1
        };

        buffered + blocks_left * BLOCK_SIZE as u64
    }

    fn refill(&mut self) {
        self.engine.reinit(&self.key, self.counter, &self.nonce);
        self.engine.run(DEFAULT_ROUNDS);
        self.engine.serialize(&mut self.buffer);
        self.engine.deinit();
        self.position = 0;

        match self.counter.checked_add(1) {
            Some(next) => self.counter = next,
            None => self.counter_exhausted = true,
        }
    }

    /// Fills `dest` with keystream bytes.
    ///
    /// # Errors
    ///
    /// - [`ChaCha20Error::Scrubbed`] if the generator has been scrubbed.
    /// - [`ChaCha20Error::LimitReached`] if `dest` would exceed the limit
    ///   set with [`with_limit`](Self::with_limit).
    /// - [`ChaCha20Error::CounterOverflow`] if the counter space cannot
    ///   cover `dest`.
    ///
    /// All are checked before any byte is written.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), ChaCha20Error> {
        if !self.ready {
            return Err(ChaCha20Error::Scrubbed);
        }

        let requested = dest.len() as u64;

        if let Some(limit) = self.limit {
            if self.emitted.saturating_add(requested) > limit {
                return Err(ChaCha20Error::LimitReached);
            }
        }

        if requested > self.available() {
            return Err(ChaCha20Error::CounterOverflow);
        }

        let mut filled = 0;
        while filled < dest.len() {
            if self.position == BLOCK_SIZE {
                self.refill();
            }

            let take = (BLOCK_SIZE - self.position).min(dest.len() - filled);
            let served = &mut self.buffer[self.position..self.position + take];
            dest[filled..filled + take].copy_from_slice(served);
            served.scrub();

            self.position += take;
            filled += take;
        }

        self.emitted += requested;

        Ok(())
    }

    /// Next 4 keystream bytes as a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// As [`fill_bytes`](Self::fill_bytes).
    pub fn next_u32(&mut self) -> Result<u32, ChaCha20Error> {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes)?;
        let value = u32::from_le_bytes(bytes);
        bytes.scrub();
        Ok(value)
    }

    /// Next 8 keystream bytes as a little-endian `u64`.
    ///
    /// # Errors
    ///
    /// As [`fill_bytes`](Self::fill_bytes).
    pub fn next_u64(&mut self) -> Result<u64, ChaCha20Error> {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes)?;
        let value = u64::from_le_bytes(bytes);
        bytes.scrub();
        Ok(value)
    }
}
