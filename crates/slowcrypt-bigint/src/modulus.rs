// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::wide_int::WideInt;

/// A non-zero divisor for [`WideInt::divmod`].
///
/// Division by zero cannot be expressed: the only ways to obtain a
/// `Modulus` are [`Modulus::new`], which rejects zero, and the constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modulus(WideInt);

impl Modulus {
    /// The Poly1305 prime `2^130 - 5`.
    pub const POLY1305: Modulus = Modulus(WideInt::from_digits([
        0xffff_fffb,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0x0000_0003,
        0,
        0,
        0,
        0,
    ]));

    /// Wraps `value` as a divisor, or returns `None` if it is zero.
    pub fn new(value: WideInt) -> Option<Self> {
        if value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The divisor value.
    pub fn value(&self) -> &WideInt {
        &self.0
    }
}
