// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Clamps the `r` half of a Poly1305 key in place.
///
/// Clears the top four bits of bytes 3, 7, 11 and 15 and the bottom two bits
/// of bytes 4, 8 and 12. Clamping twice changes nothing.
///
/// ```rust
/// use slowcrypt_poly1305::clamp;
///
/// let mut r = [0xffu8; 16];
/// clamp(&mut r);
/// assert_eq!(r[3], 0x0f);
/// assert_eq!(r[4], 0xfc);
/// ```
#[inline]
pub fn clamp(r: &mut [u8; 16]) {
    for i in [3, 7, 11, 15] {
        r[i] &= 0x0f;
    }
    for i in [4, 8, 12] {
        r[i] &= 0xfc;
    }
}
