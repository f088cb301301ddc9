// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! [`Scrub`] and [`ScrubProbe`] for scalar types.

use crate::traits::{Scrub, ScrubLayout, ScrubProbe};

macro_rules! impl_scrub_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScrubLayout for $ty {
                const BULK: bool = true;
            }

            impl Scrub for $ty {
                #[inline(always)]
                fn scrub(&mut self) {
                    slowcrypt_util::scrub_primitive(self);
                }
            }

            impl ScrubProbe for $ty {
                #[inline(always)]
                fn is_scrubbed(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_scrub_for_integers!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl ScrubLayout for bool {
    const BULK: bool = true;
}

impl Scrub for bool {
    #[inline(always)]
    fn scrub(&mut self) {
        slowcrypt_util::scrub_primitive(self);
    }
}

impl ScrubProbe for bool {
    #[inline(always)]
    fn is_scrubbed(&self) -> bool {
        !*self
    }
}
