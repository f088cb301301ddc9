// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod slowcrypt_tests {
    use slowcrypt::chacha20::{ChaCha20Error, ChaCha20Rng, apply_keystream};
    use slowcrypt::poly1305::{self, NativeBackend, Poly1305, WideIntBackend};
    use slowcrypt::rand::EntropyError;
    use slowcrypt::support::test_utils::hex::hex_to_array;
    use slowcrypt::support::test_utils::rand::{MockEntropySource, MockEntropySourceBehaviour};
    use slowcrypt::{AssertScrubOnDrop, Scrub, ScrubProbe, ScrubSentinel};

    #[derive(Scrub)]
    #[scrub(drop)]
    struct SealedMessage {
        key: [u8; 32],
        one_time_key: [u8; 32],
        tag: [u8; 16],
        __sentinel: ScrubSentinel,
    }

    #[test]
    fn test_encrypt_and_authenticate_with_seeded_rng() {
        let source = MockEntropySource::new(MockEntropySourceBehaviour::Deterministic(7));
        let mut rng = ChaCha20Rng::from_entropy(&source).expect("Failed to seed rng");

        let mut sealed = SealedMessage {
            key: [0; 32],
            one_time_key: [0; 32],
            tag: [0; 16],
            __sentinel: ScrubSentinel::default(),
        };
        rng.fill_bytes(&mut sealed.key).expect("Failed to fill key");
        rng.fill_bytes(&mut sealed.one_time_key)
            .expect("Failed to fill one-time key");

        let nonce = [0x24u8; 12];
        let mut message = *b"the quick brown fox jumps over the lazy dog";
        apply_keystream(&sealed.key, &nonce, 1, &mut message).expect("Failed to encrypt");

        sealed.tag = poly1305::mac(&sealed.one_time_key, &message);
        assert_eq!(
            sealed.tag,
            Poly1305::<NativeBackend>::mac(&sealed.one_time_key, &message)
        );
        assert_eq!(
            sealed.tag,
            Poly1305::<WideIntBackend>::mac(&sealed.one_time_key, &message)
        );
        assert!(poly1305::verify(&sealed.one_time_key, &message, &sealed.tag));

        apply_keystream(&sealed.key, &nonce, 1, &mut message).expect("Failed to decrypt");
        assert_eq!(&message, b"the quick brown fox jumps over the lazy dog");

        assert!(!sealed.is_scrubbed());
        sealed.assert_scrub_on_drop();
    }

    #[test]
    fn test_entropy_failure_surfaces_through_rng() {
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
    fn test_rfc8439_poly1305_vector_through_umbrella() {
        let key = hex_to_array::<32>(
            "85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b",
        );
        let tag = hex_to_array::<16>("a8061dc1305136c6c22b8baf0c0127a9");

        assert_eq!(
            poly1305::mac(&key, b"Cryptographic Forum Research Group"),
            tag
        );
    }
}
