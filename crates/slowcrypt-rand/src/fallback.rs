// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Last-resort generator. Not cryptographically secure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

static CALLS: AtomicU64 = AtomicU64::new(0);

/// Fills `dest` from a `SmallRng` seeded with the wall clock and a call
/// counter, so back-to-back calls within one clock tick still differ.
pub(crate) fn fill_insecure(dest: &mut [u8]) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let calls = CALLS.fetch_add(1, Ordering::Relaxed);

    let mut rng = SmallRng::seed_from_u64(nanos ^ calls.rotate_left(32));
    rng.fill_bytes(dest);
}
