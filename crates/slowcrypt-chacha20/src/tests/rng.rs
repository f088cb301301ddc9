// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use slowcrypt_rand::EntropyError;
use slowcrypt_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use slowcrypt_scrub::{AssertScrubOnDrop, Scrub, ScrubProbe};

use crate::consts::BLOCK_SIZE;
use crate::error::ChaCha20Error;
use crate::rng::ChaCha20Rng;
use crate::state::block;

#[test]
fn test_output_matches_consecutive_blocks() {
    let key = [3u8; 32];
    let nonce = [4u8; 12];
    let mut rng = ChaCha20Rng::new(&key, &nonce, 5);

    let mut out = [0u8; 2 * BLOCK_SIZE];
    assert!(rng.fill_bytes(&mut out).is_ok());

    let mut first = [0u8; BLOCK_SIZE];
    let mut second = [0u8; BLOCK_SIZE];
    block(&key, 5, &nonce, &mut first);
    block(&key, 6, &nonce, &mut second);

    assert_eq!(out[..BLOCK_SIZE], first);
    assert_eq!(out[BLOCK_SIZE..], second);
}

#[test]
fn test_split_requests_match_single_request() {
    let mut whole = ChaCha20Rng::new(&[9; 32], &[1; 12], 0);
    let mut split = ChaCha20Rng::new(&[9; 32], &[1; 12], 0);

    let mut expected = [0u8; 150];
    assert!(whole.fill_bytes(&mut expected).is_ok());

    let mut got = [0u8; 150];
    let (a, rest) = got.split_at_mut(3);
    let (b, c) = rest.split_at_mut(70);
    assert!(split.fill_bytes(a).is_ok());
    assert!(split.fill_bytes(b).is_ok());
    assert!(split.fill_bytes(c).is_ok());

    assert_eq!(got, expected);
    assert_eq!(split.bytes_emitted(), 150);
}

#[test]
fn test_served_bytes_are_scrubbed_from_buffer() {
    let mut rng = ChaCha20Rng::new(&[9; 32], &[1; 12], 0);
    let mut out = [0u8; 10];
    assert!(rng.fill_bytes(&mut out).is_ok());

    assert!(rng.buffer[..10].is_scrubbed());
    assert!(!rng.buffer[10..].is_scrubbed());
}

#[test]
fn test_limit_is_enforced_before_writing() {
    let mut rng = ChaCha20Rng::new(&[9; 32], &[1; 12], 0).with_limit(10);

    let mut out = [0u8; 8];
    assert!(rng.fill_bytes(&mut out).is_ok());

    let mut more = [0u8; 3];
    assert_eq!(rng.fill_bytes(&mut more), Err(ChaCha20Error::LimitReached));
    assert_eq!(more, [0; 3]);

    let mut rest = [0u8; 2];
    assert!(rng.fill_bytes(&mut rest).is_ok());
    assert_eq!(rng.bytes_emitted(), 10);
}

#[test]
fn test_counter_exhaustion() {
    let mut rng = ChaCha20Rng::new(&[9; 32], &[1; 12], u32::MAX);

    let mut out = [0u8; BLOCK_SIZE];
    assert!(rng.fill_bytes(&mut out).is_ok());
    assert_eq!(rng.next_u32(), Err(ChaCha20Error::CounterOverflow));
}

#[test]
fn test_counter_exhaustion_checked_before_writing() {
    let mut rng = ChaCha20Rng::new(&[9; 32], &[1; 12], u32::MAX);

    let mut out = [0u8; BLOCK_SIZE + 1];
    assert_eq!(rng.fill_bytes(&mut out), Err(ChaCha20Error::CounterOverflow));
    assert_eq!(out, [0; BLOCK_SIZE + 1]);
    assert_eq!(rng.bytes_emitted(), 0);
}

#[test]
fn test_next_u32_and_u64_are_little_endian() {
    let mut rng = ChaCha20Rng::new(&[0; 32], &[0; 12], 0);

    // First keystream bytes of the all-zero key: 76 b8 e0 ad a0 f1 3d 90 40 5d 6a e5
    assert_eq!(rng.next_u32(), Ok(0xade0_b876));
    assert_eq!(rng.next_u64(), Ok(0xe56a_5d40_903d_f1a0));
}

#[test]
fn test_from_entropy_uses_source() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::Deterministic(0));
    let mut rng = ChaCha20Rng::from_entropy(&source).expect("Failed to seed rng");

    let mut key = [0u8; 32];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = i as u8;
    }
    let nonce: [u8; 12] = core::array::from_fn(|i| i as u8);
    let mut expected = [0u8; BLOCK_SIZE];
    block(&key, 0, &nonce, &mut expected);

    let mut out = [0u8; BLOCK_SIZE];
    assert!(rng.fill_bytes(&mut out).is_ok());
    assert_eq!(out, expected);
    assert_eq!(source.calls(), 2);
}

#[test]
fn test_from_entropy_propagates_failure() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways(
        EntropyError::Insecure,
    ));

    let result = ChaCha20Rng::from_entropy(&source);
    assert!(matches!(
        result,
        Err(ChaCha20Error::Entropy(EntropyError::Insecure))
    ));
}

#[test]
fn test_failed_reseed_keeps_generator() {
    let mut rng = ChaCha20Rng::new(&[5; 32], &[6; 12], 0);
    let mut reference = ChaCha20Rng::new(&[5; 32], &[6; 12], 0);

    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(2));
    assert!(rng.reseed(&source).is_err());

    assert_eq!(rng.next_u64(), reference.next_u64());
}

#[test]
fn test_reseed_restarts_stream() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::Deterministic(0x40));
    let mut rng = ChaCha20Rng::from_entropy(&source).expect("Failed to seed rng");
    let first = rng.next_u64();

    assert!(rng.reseed(&source).is_ok());
    assert_eq!(rng.next_u64(), first);
    assert_eq!(rng.bytes_emitted(), 16);
}

#[test]
fn test_scrub() {
    let mut rng = ChaCha20Rng::new(&[5; 32], &[6; 12], 3);
    let mut out = [0u8; 5];
    assert!(rng.fill_bytes(&mut out).is_ok());
    assert!(!rng.is_scrubbed());

    rng.scrub();
    assert!(rng.is_scrubbed());
}

#[test]
fn test_scrubbed_rng_refuses_output() {
    let mut rng = ChaCha20Rng::new(&[5; 32], &[6; 12], 3).with_limit(64);
    let mut out = [0u8; 5];
    assert!(rng.fill_bytes(&mut out).is_ok());

    rng.scrub();

    let mut after = [0xaau8; 16];
    assert_eq!(rng.fill_bytes(&mut after), Err(ChaCha20Error::Scrubbed));
    assert_eq!(after, [0xaa; 16]);
    assert_eq!(rng.next_u32(), Err(ChaCha20Error::Scrubbed));
    assert_eq!(rng.next_u64(), Err(ChaCha20Error::Scrubbed));
    assert_eq!(rng.bytes_emitted(), 0);
}

#[test]
fn test_scrubbed_rng_refuses_reseed() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::Deterministic(0x40));
    let mut rng = ChaCha20Rng::from_entropy(&source).expect("Failed to seed rng");

    rng.scrub();

    assert_eq!(rng.reseed(&source), Err(ChaCha20Error::Scrubbed));
    let mut out = [0u8; 4];
    assert_eq!(rng.fill_bytes(&mut out), Err(ChaCha20Error::Scrubbed));
}

#[test]
fn test_scrubs_on_drop() {
    let mut rng = ChaCha20Rng::new(&[5; 32], &[6; 12], 3);
    let mut out = [0u8; 5];
    assert!(rng.fill_bytes(&mut out).is_ok());

    rng.assert_scrub_on_drop();
}
