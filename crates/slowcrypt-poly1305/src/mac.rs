// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block and streaming front end over a [`Poly1305Backend`].

use slowcrypt_scrub::{Scrub, ScrubSentinel};
use slowcrypt_util::constant_time_eq;

use crate::backends::{DefaultBackend, Poly1305Backend};
use crate::clamp::clamp;
use crate::consts::{BLOCK_SIZE, KEY_SIZE, Tag};
use crate::error::Poly1305Error;

/// Poly1305 accumulator for a single message.
///
/// Blocks go in through [`Poly1305::update_block`] (caller-chosen block
/// boundaries) or [`Poly1305::update`] (buffered streaming). Only the last
/// block may be shorter than 16 bytes. [`Poly1305::finish`] consumes the
/// accumulator, so nothing can be absorbed after the tag is produced.
/// A scrubbed accumulator rejects every call with
/// [`Poly1305Error::Scrubbed`].
///
/// The default backend is named when the type is written out:
///
/// ```rust
/// use slowcrypt_poly1305::Poly1305;
///
/// let key = [0x42u8; 32];
/// let mut poly: Poly1305 = Poly1305::from_key(&key);
/// poly.update(b"first part, ").expect("Failed to update");
/// poly.update(b"second part").expect("Failed to update");
///
/// let tag = poly.finish().expect("Failed to finish");
/// assert_eq!(tag, <Poly1305>::mac(&key, b"first part, second part"));
/// ```
#[derive(Scrub)]
#[scrub(drop)]
pub struct Poly1305<B: Poly1305Backend = DefaultBackend> {
    backend: B,
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    short_block_seen: bool,
    ready: bool,
    pub(crate) r_tmp: [u8; 16],
    pub(crate) s_tmp: [u8; 16],
    __sentinel: ScrubSentinel,
}

impl<B: Poly1305Backend> core::fmt::Debug for Poly1305<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}

impl<B: Poly1305Backend> Poly1305<B> {
    /// Starts an accumulator, clamping the `r` half of `key` in place.
    ///
    /// The caller's buffer ends up holding the clamped key. Use
    /// [`Poly1305::from_key`] to leave it untouched.
    pub fn new(key: &mut [u8; KEY_SIZE]) -> Self {
        let mut poly = Self {
            backend: B::default(),
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
            short_block_seen: false,
            ready: true,
            r_tmp: [0; 16],
            s_tmp: [0; 16],
            __sentinel: ScrubSentinel::default(),
        };

        poly.r_tmp.copy_from_slice(&key[..16]);
        poly.s_tmp.copy_from_slice(&key[16..]);

        clamp(&mut poly.r_tmp);
        key[..16].copy_from_slice(&poly.r_tmp);

        poly.backend.load_key(&poly.r_tmp, &poly.s_tmp);

        poly.r_tmp.scrub();
        poly.s_tmp.scrub();

        poly
    }

    /// Starts an accumulator from a copy of `key`.
    pub fn from_key(key: &[u8; KEY_SIZE]) -> Self {
        let mut copy = *key;
        let poly = Self::new(&mut copy);
        copy.scrub();
        poly
    }

    /// Absorbs one block of at most 16 bytes.
    ///
    /// A block shorter than 16 bytes is padded and must be the last one.
    /// Empty input is a no-op.
    ///
    /// # Errors
    ///
    /// - [`Poly1305Error::Scrubbed`] if the accumulator has been scrubbed.
    /// - [`Poly1305Error::BlockTooLong`] if `data` exceeds 16 bytes.
    /// - [`Poly1305Error::BlockAfterFinal`] if a short block was already
    ///   absorbed, or [`Poly1305::update`] left bytes buffered.
    pub fn update_block(&mut self, data: &[u8]) -> Result<(), Poly1305Error> {
        if !self.ready {
            return Err(Poly1305Error::Scrubbed);
        }
        if data.len() > BLOCK_SIZE {
            return Err(Poly1305Error::BlockTooLong { len: data.len() });
        }
        if data.is_empty() {
            return Ok(());
        }
        if self.short_block_seen || self.buffer_len > 0 {
            return Err(Poly1305Error::BlockAfterFinal);
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();

        if data.len() < BLOCK_SIZE {
            self.short_block_seen = true;
            self.absorb_buffered_short();
        } else {
            self.backend.absorb(&self.buffer, true);
            self.buffer_len = 0;
            self.buffer.scrub();
        }

        Ok(())
    }

    /// Absorbs `data`, buffering a trailing partial block.
    ///
    /// The buffered remainder becomes the final short block at
    /// [`Poly1305::finish`].
    ///
    /// # Errors
    ///
    /// - [`Poly1305Error::Scrubbed`] if the accumulator has been scrubbed.
    /// - [`Poly1305Error::BlockAfterFinal`] if a short block was already
    ///   absorbed through [`Poly1305::update_block`].
    pub fn update(&mut self, data: &[u8]) -> Result<(), Poly1305Error> {
        if !self.ready {
            return Err(Poly1305Error::Scrubbed);
        }
        if data.is_empty() {
            return Ok(());
        }
        if self.short_block_seen {
            return Err(Poly1305Error::BlockAfterFinal);
        }

        self.absorb_stream(data);
        Ok(())
    }

    /// Produces the tag and scrubs all state.
    ///
    /// # Errors
    ///
    /// [`Poly1305Error::Scrubbed`] if the accumulator has been scrubbed.
    pub fn finish(mut self) -> Result<Tag, Poly1305Error> {
        if !self.ready {
            return Err(Poly1305Error::Scrubbed);
        }

        Ok(self.finalize())
    }

    /// One-shot tag of `msg` under `key`.
    pub fn mac(key: &[u8; KEY_SIZE], msg: &[u8]) -> Tag {
        let mut poly = Self::from_key(key);
        poly.absorb_stream(msg);
        poly.finalize()
    }

    /// Recomputes the tag of `msg` and compares it with `expected` in
    /// constant time.
    pub fn verify(key: &[u8; KEY_SIZE], msg: &[u8], expected: &Tag) -> bool {
        let mut tag = Self::mac(key, msg);
        let matches = constant_time_eq(&tag, expected);
        tag.scrub();
        matches
    }

    fn absorb_stream(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }

            self.backend.absorb(&self.buffer, true);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in blocks.by_ref() {
            self.buffer.copy_from_slice(block);
            self.backend.absorb(&self.buffer, true);
        }

        let rest = blocks.remainder();
        self.buffer.scrub();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    fn finalize(&mut self) -> Tag {
        if self.buffer_len > 0 {
            self.absorb_buffered_short();
        }

        let mut tag = [0u8; 16];
        self.backend.finalize(&mut tag);
        self.ready = false;
        tag
    }

    /// Pads `buffer[..buffer_len]` with `0x01` and zeros and absorbs it.
    fn absorb_buffered_short(&mut self) {
        self.buffer[self.buffer_len] = 0x01;
        self.buffer[self.buffer_len + 1..].fill(0);
        self.backend.absorb(&self.buffer, false);

        self.buffer_len = 0;
        self.buffer.scrub();
    }
}
