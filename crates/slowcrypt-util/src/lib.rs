// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the slowcrypt primitives.
//!
//! Word conversions scrub their source after reading so that key bytes
//! and keystream words do not linger in temporaries.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

use core::sync::atomic::{Ordering, compiler_fence};

#[cfg(test)]
mod tests;

/// Generates `{type}_from_le` and `{type}_to_le` functions for integer types.
macro_rules! impl_le_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads ", stringify!($size), " little-endian bytes into a `", stringify!($type), "`, scrubbing the source bytes.")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter_mut().enumerate() {
                *dst |= (*byte as $type) << (8 * i);
                scrub_primitive(byte);
            }
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as little-endian bytes, scrubbing the source word.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            scrub_primitive(src);
        }
    };
}

impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);
impl_le_conversions!(u64, 8, u64_from_le, u64_to_le);

/// Overwrites a single primitive with zero using a volatile write.
///
/// Valid for every type where the all-zero bit pattern is a valid value
/// (integers, `bool`). The volatile write cannot be elided by the optimizer.
#[inline(always)]
pub fn scrub_primitive<T>(val: &mut T) {
    // SAFETY: `val` is a valid, aligned, exclusive reference and callers only
    // pass types whose all-zero representation is valid.
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Bulk-scrubs a slice of plain-old-data values.
///
/// Uses `write_bytes` (memset) followed by a volatile read so the optimizer
/// cannot prove the store dead and remove it.
///
/// ```
/// use slowcrypt_util::{scrub_slice, is_slice_zeroized};
///
/// let mut key = [0xA5u8; 32];
/// scrub_slice(&mut key);
/// assert!(is_slice_zeroized(&key));
/// ```
#[inline(always)]
pub fn scrub_slice<T: Copy>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the pointer covers exactly `byte_len` bytes owned by `slice`,
    // and `T: Copy` restricts this to types without drop glue.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of the slice is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if every word of the slice is zero.
#[inline(always)]
pub fn is_word_slice_zeroized(slice: &[u32]) -> bool {
    slice.iter().all(|&w| w == 0)
}

/// Constant-time equality comparison for byte slices.
///
/// Running time depends only on the lengths, never on where the inputs differ.
///
/// ```
/// use slowcrypt_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    // Keep the fold from being turned into an early-exit comparison.
    core::hint::black_box(diff) == 0
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics on odd length or on non-hex characters. Test-only helper.
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Parses a hexadecimal string into a fixed-size array.
///
/// # Panics
///
/// Panics if the decoded length differs from `N`. Test-only helper.
#[cfg(feature = "test-utils")]
pub fn hex_to_array<const N: usize>(hex: &str) -> [u8; N] {
    let bytes = hex_to_bytes(hex);
    let mut out = [0u8; N];
    assert_eq!(bytes.len(), N, "hex string decodes to the wrong length");
    out.copy_from_slice(&bytes);
    out
}
