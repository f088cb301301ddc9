// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity little-endian digit arithmetic.

use core::fmt;

use slowcrypt_scrub::Scrub;

use crate::error::WideIntError;
use crate::modulus::Modulus;

/// Number of 32-bit digits in a [`WideInt`].
pub const WIDE_DIGITS: usize = 9;
/// Capacity of a [`WideInt`] in bytes.
pub const WIDE_BYTES: usize = WIDE_DIGITS * 4;
/// Capacity of a [`WideInt`] in bits.
pub const WIDE_BITS: usize = WIDE_DIGITS * 32;

/// Unsigned integer of at most [`WIDE_BITS`] bits.
///
/// Digits are stored least significant first. `len` counts the digits up to
/// and including the most significant non-zero one, so zero has length 0.
/// The value is scrubbed when dropped.
///
/// Arithmetic and comparison walk every digit of the capacity, so their
/// running time does not depend on the value.
#[derive(Clone, Scrub)]
#[scrub(drop)]
pub struct WideInt {
    digits: [u32; WIDE_DIGITS],
    len: usize,
}

impl fmt::Debug for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideInt {{ [protected] }}")
    }
}

impl PartialEq for WideInt {
    fn eq(&self, other: &Self) -> bool {
        let mut diff = 0u32;
        for (a, b) in self.digits.iter().zip(other.digits.iter()) {
            diff |= a ^ b;
        }
        core::hint::black_box(diff) == 0
    }
}

impl Eq for WideInt {}

impl Default for WideInt {
    fn default() -> Self {
        Self::zero()
    }
}

/// 1 if `digit` is non-zero, else 0.
const fn non_zero(digit: u32) -> usize {
    ((digit | digit.wrapping_neg()) >> 31) as usize
}

/// Number of significant digits in `digits`.
///
/// Visits every digit and selects arithmetically.
const fn significant_len(digits: &[u32; WIDE_DIGITS]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < WIDE_DIGITS {
        let nz = non_zero(digits[i]);
        len = nz * (i + 1) + (1 - nz) * len;
        i += 1;
    }
    len
}

impl WideInt {
    /// The value zero.
    pub const fn zero() -> Self {
        Self {
            digits: [0; WIDE_DIGITS],
            len: 0,
        }
    }

    /// Builds a value from a single digit.
    pub const fn from_u32(value: u32) -> Self {
        let mut digits = [0; WIDE_DIGITS];
        digits[0] = value;
        Self {
            digits,
            len: non_zero(value),
        }
    }

    /// Builds a value from its digits, least significant first.
    pub const fn from_digits(digits: [u32; WIDE_DIGITS]) -> Self {
        let len = significant_len(&digits);
        Self { digits, len }
    }

    /// Reads `buf` as a little-endian number and places `top` at byte
    /// position `buf.len()`.
    ///
    /// This is how Poly1305 blocks are loaded: `top` is the `0x01` padding
    /// byte (or `0` for the key halves).
    ///
    /// # Errors
    ///
    /// [`WideIntError::CapacityExceeded`] if `buf.len() + 1` exceeds
    /// [`WIDE_BYTES`].
    pub fn from_le_bytes(buf: &[u8], top: u8) -> Result<Self, WideIntError> {
        let needed = buf.len() + 1;
        if needed > WIDE_BYTES {
            return Err(WideIntError::CapacityExceeded {
                needed,
                capacity: WIDE_BYTES,
            });
        }

        Ok(Self::load_le(buf, top))
    }

    /// Fixed-size form of [`WideInt::from_le_bytes`].
    ///
    /// The capacity check happens at compile time, so loading a 16-byte
    /// Poly1305 block or key half cannot fail.
    pub fn from_le_array<const N: usize>(buf: &[u8; N], top: u8) -> Self {
        const { assert!(N < WIDE_BYTES, "array does not fit in a WideInt") };
        Self::load_le(buf, top)
    }

    fn load_le(buf: &[u8], top: u8) -> Self {
        let mut value = Self::zero();
        for (i, byte) in buf.iter().chain(core::iter::once(&top)).enumerate() {
            value.digits[i / 4] |= (*byte as u32) << (8 * (i % 4));
        }
        value.len = significant_len(&value.digits);
        value
    }

    /// Digits, least significant first (including unused high digits).
    pub fn digits(&self) -> &[u32; WIDE_DIGITS] {
        &self.digits
    }

    /// Number of significant digits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    /// Position of the highest set bit plus one; zero for the value zero.
    pub fn bits(&self) -> usize {
        let mut bits = 0;
        for (i, digit) in self.digits.iter().enumerate() {
            let nz = non_zero(*digit);
            let here = i * 32 + (32 - digit.leading_zeros() as usize);
            bits = nz * here + (1 - nz) * bits;
        }
        bits
    }

    /// Adds `rhs` in place.
    ///
    /// The sum must fit in [`WIDE_BITS`]; this is checked in debug builds.
    pub fn add_assign(&mut self, rhs: &WideInt) {
        let mut carry = 0u64;
        for (digit, r) in self.digits.iter_mut().zip(rhs.digits.iter()) {
            let sum = *digit as u64 + *r as u64 + carry;
            *digit = sum as u32;
            carry = sum >> 32;
        }
        debug_assert_eq!(carry, 0, "WideInt addition overflowed its capacity");

        self.len = significant_len(&self.digits);
    }

    /// Returns `self * rhs`.
    ///
    /// The product must fit in [`WIDE_BITS`]; this is checked in debug builds.
    /// Schoolbook multiplication over all digits of both operands, zero
    /// digits included.
    pub fn mul(&self, rhs: &WideInt) -> WideInt {
        let mut wide = [0u32; 2 * WIDE_DIGITS];
        for (i, a) in self.digits.iter().enumerate() {
            let a = *a as u64;
            let mut carry = 0u64;

            for (j, b) in rhs.digits.iter().enumerate() {
                let t = wide[i + j] as u64 + a * *b as u64 + carry;
                wide[i + j] = t as u32;
                carry = t >> 32;
            }
            wide[i + WIDE_DIGITS] = carry as u32;
        }
        debug_assert!(
            wide[WIDE_DIGITS..].iter().all(|d| *d == 0),
            "WideInt multiplication overflowed its capacity"
        );

        let mut out = WideInt::zero();
        out.digits.copy_from_slice(&wide[..WIDE_DIGITS]);
        out.len = significant_len(&out.digits);
        slowcrypt_util::scrub_slice(&mut wide);

        out
    }

    /// Returns `(self / m, self % m)`.
    ///
    /// Restoring binary long division over every bit position of the
    /// capacity. Each step subtracts and keeps or discards the difference
    /// with a mask, so the instruction trace does not depend on the value.
    pub fn divmod(&self, m: &Modulus) -> (WideInt, WideInt) {
        let divisor = m.value();
        let mut quotient = WideInt::zero();
        // One spare digit: the shifted remainder can exceed the divisor by a bit.
        let mut rem = [0u32; WIDE_DIGITS + 1];
        let mut diff = [0u32; WIDE_DIGITS + 1];

        for bit in (0..WIDE_BITS).rev() {
            // rem = (rem << 1) | bit_of(self, bit)
            let mut carry = (self.digits[bit / 32] >> (bit % 32)) & 1;
            for digit in rem.iter_mut() {
                let next = *digit >> 31;
                *digit = (*digit << 1) | carry;
                carry = next;
            }

            // diff = rem - divisor
            let mut borrow = 0u64;
            for (k, d) in diff.iter_mut().enumerate() {
                let sub = if k < WIDE_DIGITS { divisor.digits[k] } else { 0 };
                let t = (rem[k] as u64)
                    .wrapping_sub(sub as u64)
                    .wrapping_sub(borrow);
                *d = t as u32;
                borrow = (t >> 63) & 1;
            }

            // keep = all ones when rem >= divisor
            let keep = (borrow as u32).wrapping_sub(1);
            for (r, d) in rem.iter_mut().zip(diff.iter()) {
                *r = (*d & keep) | (*r & !keep);
            }
            quotient.digits[bit / 32] |= (keep & 1) << (bit % 32);
        }

        let mut remainder = WideInt::zero();
        remainder.digits.copy_from_slice(&rem[..WIDE_DIGITS]);
        remainder.len = significant_len(&remainder.digits);
        quotient.len = significant_len(&quotient.digits);

        slowcrypt_util::scrub_slice(&mut rem);
        slowcrypt_util::scrub_slice(&mut diff);

        (quotient, remainder)
    }

    /// Returns `self % m`.
    pub fn rem(&self, m: &Modulus) -> WideInt {
        let (_quotient, remainder) = self.divmod(m);
        remainder
    }

    /// Writes the low `out.len()` bytes of the value, little-endian.
    ///
    /// Bytes beyond the capacity are written as zero.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = if i < WIDE_BYTES {
                (self.digits[i / 4] >> (8 * (i % 4))) as u8
            } else {
                0
            };
        }
    }
}

