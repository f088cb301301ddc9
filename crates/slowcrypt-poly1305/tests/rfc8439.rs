// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod rfc8439_tests {
    use slowcrypt_poly1305::{NativeBackend, Poly1305, Poly1305Backend, WideIntBackend, mac, verify};
    use slowcrypt_util::{hex_to_array, hex_to_bytes};

    /// (key, message, tag) from RFC 8439 section 2.5.2 and appendix A.3.
    const VECTORS: &[(&str, &str, &str)] = &[
        // 2.5.2: "Cryptographic Forum Research Group"
        (
            "85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b",
            "43727970746f6772617068696320466f72756d2052657365617263682047726f7570",
            "a8061dc1305136c6c22b8baf0c0127a9",
        ),
        // A.3 #1: all-zero key and message
        (
            "0000000000000000000000000000000000000000000000000000000000000000",
            "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
            "00000000000000000000000000000000",
        ),
        // A.3 #5: partially reduced result that is not fully reduced
        (
            "0200000000000000000000000000000000000000000000000000000000000000",
            "ffffffffffffffffffffffffffffffff",
            "03000000000000000000000000000000",
        ),
        // A.3 #6: adding s overflows 2^128
        (
            "02000000000000000000000000000000ffffffffffffffffffffffffffffffff",
            "02000000000000000000000000000000",
            "03000000000000000000000000000000",
        ),
        // A.3 #7: carry into the top limb
        (
            "0100000000000000000000000000000000000000000000000000000000000000",
            "fffffffffffffffffffffffffffffffff0ffffffffffffffffffffffffffffff11000000000000000000000000000000",
            "05000000000000000000000000000000",
        ),
        // A.3 #8: accumulator lands exactly on p
        (
            "0100000000000000000000000000000000000000000000000000000000000000",
            "fffffffffffffffffffffffffffffffffbfefefefefefefefefefefefefefefe01010101010101010101010101010101",
            "00000000000000000000000000000000",
        ),
        // A.3 #9: result just below p
        (
            "0200000000000000000000000000000000000000000000000000000000000000",
            "fdffffffffffffffffffffffffffffff",
            "faffffffffffffffffffffffffffffff",
        ),
        // A.3 #10
        (
            "0100000000000000040000000000000000000000000000000000000000000000",
            "e33594d7505e43b900000000000000003394d7505e4379cd01000000000000000000000000000000000000000000000001000000000000000000000000000000",
            "14000000000000005500000000000000",
        ),
        // A.3 #11
        (
            "0100000000000000040000000000000000000000000000000000000000000000",
            "e33594d7505e43b900000000000000003394d7505e4379cd010000000000000000000000000000000000000000000000",
            "13000000000000000000000000000000",
        ),
    ];

    fn check_backend<B: Poly1305Backend>() {
        for (i, (key, message, tag)) in VECTORS.iter().enumerate() {
            let key = hex_to_array::<32>(key);
            let message = hex_to_bytes(message);
            let tag = hex_to_array::<16>(tag);

            assert_eq!(Poly1305::<B>::mac(&key, &message), tag, "vector {i}");
            assert!(Poly1305::<B>::verify(&key, &message, &tag), "vector {i}");
        }
    }

    #[test]
    fn test_vectors_native_backend() {
        check_backend::<NativeBackend>();
    }

    #[test]
    fn test_vectors_wide_int_backend() {
        check_backend::<WideIntBackend>();
    }

    #[test]
    fn test_vectors_default_backend() {
        for (key, message, tag) in VECTORS {
            let key = hex_to_array::<32>(key);
            let message = hex_to_bytes(message);
            let tag = hex_to_array::<16>(tag);

            assert_eq!(mac(&key, &message), tag);
            assert!(verify(&key, &message, &tag));
        }
    }

    #[test]
    fn test_zero_r_yields_s_for_any_message() {
        // A.3 #2 uses r = 0: the tag is s whatever the message.
        let key = hex_to_array::<32>(
            "0000000000000000000000000000000036e5f6b5c5e06070f0efca96227a863e",
        );
        let s = hex_to_array::<16>("36e5f6b5c5e06070f0efca96227a863e");

        let message = b"Any submission to the IETF intended by the Contributor for publication";
        assert_eq!(mac(&key, message), s);
        assert_eq!(mac(&key, b""), s);
    }
}
