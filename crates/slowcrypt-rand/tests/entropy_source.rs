// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod entropy_source_tests {
    use slowcrypt_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
    use slowcrypt_rand::{EntropyError, EntropySource, RandConfig, SystemEntropySource};

    fn seed_key(source: &impl EntropySource) -> Result<[u8; 32], EntropyError> {
        let mut key = [0u8; 32];
        source.fill_bytes(&mut key)?;
        Ok(key)
    }

    #[test]
    fn test_system_source_through_trait() {
        let source = SystemEntropySource::new(RandConfig::default().non_blocking());
        let a = seed_key(&source).expect("Failed to seed key");
        let b = seed_key(&source).expect("Failed to seed key");

        assert_ne!(a, b);
    }

    #[test]
    fn test_mock_source_through_trait() {
        let source = MockEntropySource::new(MockEntropySourceBehaviour::Deterministic(0));
        let key = seed_key(&source).expect("Failed to seed key");

        assert_eq!(key[0], 0);
        assert_eq!(key[31], 31);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(EntropyError::Unexpected.to_string(), "Unexpected");
        assert_eq!(EntropyError::Insecure.to_string(), "Insecure");
    }
}
