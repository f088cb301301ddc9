// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Array and slice impls, plus the dyn helpers used by `#[derive(Scrub)]`.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{Scrub, ScrubLayout, ScrubProbe};

/// Coerces a field to `&mut dyn Scrub`.
#[inline(always)]
pub fn to_scrub_dyn_mut<'a, T: Scrub>(x: &'a mut T) -> &'a mut (dyn Scrub + 'a) {
    x
}

/// Coerces a field to `&dyn ScrubProbe`.
#[inline(always)]
pub fn to_probe_dyn_ref<'a, T: ScrubProbe>(x: &'a T) -> &'a (dyn ScrubProbe + 'a) {
    x
}

/// Scrubs every item yielded by the iterator.
pub fn scrub_collection(items: &mut dyn Iterator<Item = &mut dyn Scrub>) {
    for item in items {
        item.scrub();
        compiler_fence(Ordering::SeqCst);
    }
}

/// Returns `true` if every item yielded by the iterator is scrubbed.
pub fn collection_scrubbed(items: &mut dyn Iterator<Item = &dyn ScrubProbe>) -> bool {
    for item in items {
        if !item.is_scrubbed() {
            return false;
        }
    }

    true
}

/// Scrubs a slice with a single memset when `bulk` is set, element by
/// element otherwise.
#[inline(always)]
pub(crate) fn scrub_slice_with<T: Scrub + ScrubLayout>(slice: &mut [T], bulk: bool) {
    if bulk {
        // SAFETY: callers only pass `bulk = true` for `T::BULK` types, for
        // which the all-zero bit pattern is valid and no drop glue exists.
        unsafe {
            core::ptr::write_bytes(slice.as_mut_ptr(), 0, slice.len());
            if !slice.is_empty() {
                core::ptr::read_volatile(slice.as_ptr() as *const u8);
            }
        }
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in slice.iter_mut() {
            elem.scrub();
            compiler_fence(Ordering::SeqCst);
        }
    }
}

impl<T: Scrub + ScrubLayout> ScrubLayout for [T] {
    const BULK: bool = T::BULK;
}

impl<T: Scrub + ScrubLayout> Scrub for [T] {
    fn scrub(&mut self) {
        scrub_slice_with(self, T::BULK);
    }
}

impl<T: ScrubProbe> ScrubProbe for [T] {
    fn is_scrubbed(&self) -> bool {
        collection_scrubbed(&mut self.iter().map(to_probe_dyn_ref))
    }
}

impl<T: ScrubLayout, const N: usize> ScrubLayout for [T; N] {
    const BULK: bool = T::BULK;
}

impl<T: Scrub + ScrubLayout, const N: usize> Scrub for [T; N] {
    #[inline(always)]
    fn scrub(&mut self) {
        scrub_slice_with(self, T::BULK);
    }
}

impl<T: ScrubProbe, const N: usize> ScrubProbe for [T; N] {
    fn is_scrubbed(&self) -> bool {
        collection_scrubbed(&mut self.iter().map(to_probe_dyn_ref))
    }
}
