// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod backend_equivalence_tests {
    use proptest::prelude::*;
    use slowcrypt_poly1305::{BLOCK_SIZE, NativeBackend, Poly1305, WideIntBackend, clamp};

    fn extreme_byte() -> impl Strategy<Value = u8> {
        prop_oneof![Just(0x00u8), Just(0x01), Just(0xfe), Just(0xff), any::<u8>()]
    }

    proptest! {
        #[test]
        fn native_and_wide_int_tags_match(
            key in any::<[u8; 32]>(),
            message in proptest::collection::vec(any::<u8>(), 0..300),
        ) {
            prop_assert_eq!(
                Poly1305::<NativeBackend>::mac(&key, &message),
                Poly1305::<WideIntBackend>::mac(&key, &message)
            );
        }

        #[test]
        fn native_and_wide_int_match_near_modulus(
            key in proptest::collection::vec(extreme_byte(), 32),
            message in proptest::collection::vec(extreme_byte(), 0..96),
        ) {
            let mut key_array = [0u8; 32];
            key_array.copy_from_slice(&key);

            prop_assert_eq!(
                Poly1305::<NativeBackend>::mac(&key_array, &message),
                Poly1305::<WideIntBackend>::mac(&key_array, &message)
            );
        }

        #[test]
        fn block_boundaries_do_not_change_the_tag(
            key in any::<[u8; 32]>(),
            message in proptest::collection::vec(any::<u8>(), 0..200),
            split in 0usize..200,
        ) {
            let split = split.min(message.len());
            let expected = Poly1305::<NativeBackend>::mac(&key, &message);

            let mut streamed: Poly1305<WideIntBackend> = Poly1305::from_key(&key);
            streamed.update(&message[..split]).expect("Failed to update(..)");
            streamed.update(&message[split..]).expect("Failed to update(..)");
            prop_assert_eq!(streamed.finish(), Ok(expected));

            let mut blockwise: Poly1305<NativeBackend> = Poly1305::from_key(&key);
            for block in message.chunks(BLOCK_SIZE) {
                blockwise.update_block(block).expect("Failed to update_block(..)");
            }
            prop_assert_eq!(blockwise.finish(), Ok(expected));
        }

        #[test]
        fn short_final_block_differs_from_padded_full_block(
            key in any::<[u8; 32]>(),
            full_blocks in 0usize..3,
            tail in proptest::collection::vec(any::<u8>(), 1..BLOCK_SIZE),
        ) {
            let mut r = [0u8; 16];
            r.copy_from_slice(&key[..16]);
            clamp(&mut r);
            // Tiny r maps the 2^128 difference onto a multiple of 2^128.
            prop_assume!(u128::from_le_bytes(r) > 3);

            let mut short = vec![0xa5u8; full_blocks * BLOCK_SIZE];
            short.extend_from_slice(&tail);
            let mut padded = short.clone();
            padded.push(0x01);
            padded.resize((full_blocks + 1) * BLOCK_SIZE, 0);

            let native_short = Poly1305::<NativeBackend>::mac(&key, &short);
            let native_padded = Poly1305::<NativeBackend>::mac(&key, &padded);
            prop_assert_ne!(native_short, native_padded);
            prop_assert_eq!(native_short, Poly1305::<WideIntBackend>::mac(&key, &short));
            prop_assert_eq!(native_padded, Poly1305::<WideIntBackend>::mac(&key, &padded));
        }

        #[test]
        fn clamp_is_idempotent(r in any::<[u8; 16]>()) {
            let mut once = r;
            clamp(&mut once);
            let mut twice = once;
            clamp(&mut twice);

            prop_assert_eq!(once, twice);
            prop_assert_eq!(once[3] & 0xf0, 0);
            prop_assert_eq!(once[4] & 0x03, 0);
        }

        #[test]
        fn verify_rejects_flipped_bit(
            key in any::<[u8; 32]>(),
            message in proptest::collection::vec(any::<u8>(), 0..64),
            bit in 0usize..128,
        ) {
            let mut tag = Poly1305::<NativeBackend>::mac(&key, &message);
            prop_assert!(Poly1305::<NativeBackend>::verify(&key, &message, &tag));

            tag[bit / 8] ^= 1 << (bit % 8);
            prop_assert!(!Poly1305::<NativeBackend>::verify(&key, &message, &tag));
        }
    }
}
