// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Portable ChaCha20 and Poly1305 with scrubbed secret state.</em></p>
//!
//! ---
//!
//! Slowcrypt implements the two RFC 8439 primitives from scratch, with no
//! platform intrinsics, and wipes every buffer that ever held key material
//! or keystream.
//!
//! # Features
//!
//! - **ChaCha20 block function** with stream XOR and a CSPRNG driver
//! - **Poly1305** with a fast native backend and a portable wide-integer
//!   backend (`wide-int` feature), bit-identical by test
//! - **Scrub on drop** for every type holding secrets, provable in tests via
//!   [`AssertScrubOnDrop`]
//! - **Layered entropy** from the OS, the random device, or (opt-out) a
//!   time-seeded fallback
//! - **`no_std`** primitives; only the entropy supplier needs `std`
//!
//! # Quick Start
//!
//! ```rust
//! use slowcrypt::chacha20::{ChaCha20Rng, apply_keystream};
//! use slowcrypt::poly1305;
//! use slowcrypt::rand::{RandConfig, SystemEntropySource};
//!
//! let source = SystemEntropySource::new(RandConfig::default());
//! let mut rng = ChaCha20Rng::from_entropy(&source)?;
//!
//! let mut key = [0u8; 32];
//! let mut nonce = [0u8; 12];
//! rng.fill_bytes(&mut key)?;
//! rng.fill_bytes(&mut nonce)?;
//!
//! let mut message = *b"meet me at the usual place";
//! apply_keystream(&key, &nonce, 1, &mut message)?;
//!
//! let mut one_time_key = [0u8; 32];
//! rng.fill_bytes(&mut one_time_key)?;
//! let tag = poly1305::mac(&one_time_key, &message);
//! assert!(poly1305::verify(&one_time_key, &message, &tag));
//! # Ok::<(), slowcrypt::chacha20::ChaCha20Error>(())
//! ```
//!
//! # Scrubbing your own types
//!
//! ```rust
//! use slowcrypt::{AssertScrubOnDrop, Scrub, ScrubSentinel};
//!
//! #[derive(Scrub)]
//! #[scrub(drop)]
//! struct Session {
//!     key: [u8; 32],
//!     __sentinel: ScrubSentinel,
//! }
//!
//! let session = Session { key: [1; 32], __sentinel: ScrubSentinel::default() };
//! session.assert_scrub_on_drop();
//! ```

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use slowcrypt_bigint as bigint;
pub use slowcrypt_chacha20 as chacha20;
pub use slowcrypt_poly1305 as poly1305;
pub use slowcrypt_rand as rand;
pub use slowcrypt_scrub as scrub;
pub use slowcrypt_util as util;

// `#[derive(Scrub)]` resolves its paths against this crate when it is the
// only slowcrypt dependency.
pub use slowcrypt_scrub::{
    AssertScrubOnDrop, Scrub, ScrubLayout, ScrubProbe, ScrubSentinel, assert, collections,
};
