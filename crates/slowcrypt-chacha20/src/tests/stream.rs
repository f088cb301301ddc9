// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ChaCha20Error;
use crate::stream::apply_keystream;

#[test]
fn test_counter_overflow_leaves_data_untouched() {
    let mut data = [0xabu8; 65];
    let result = apply_keystream(&[1; 32], &[2; 12], u32::MAX, &mut data);

    assert_eq!(result, Err(ChaCha20Error::CounterOverflow));
    assert_eq!(data, [0xab; 65]);
}

#[test]
fn test_last_counter_value_is_usable() {
    let mut data = [0u8; 64];
    assert!(apply_keystream(&[1; 32], &[2; 12], u32::MAX, &mut data).is_ok());
    assert_ne!(data, [0; 64]);
}

#[test]
fn test_empty_data_never_overflows() {
    let mut data: [u8; 0] = [];
    assert!(apply_keystream(&[1; 32], &[2; 12], u32::MAX, &mut data).is_ok());
}
