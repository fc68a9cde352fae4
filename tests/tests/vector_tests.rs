//! Known-answer tests through every public entry point

use josekdf::prelude::*;
use josekdf_tests::vectors::CONCAT_KDF_VECTORS;

#[test]
fn test_vectors_raw() {
    for vector in CONCAT_KDF_VECTORS {
        let kdf = ConcatKdf::new(vector.hash).unwrap();
        let key = kdf
            .derive_key_raw(&vector.z_bytes(), vector.key_data_len_bits, &vector.other_info_bytes())
            .unwrap();
        assert_eq!(hex::encode(&*key), vector.expected, "{}", vector.name);
        assert_eq!(key.len(), vector.key_data_len_bits.div_ceil(8), "{}", vector.name);
    }
}

#[test]
fn test_vectors_trait_object() {
    for vector in CONCAT_KDF_VECTORS {
        let kdf: Box<dyn KeyAgreementKdf> = Box::new(ConcatKdf::new(vector.hash).unwrap());
        let key = kdf
            .derive(&vector.z_bytes(), vector.key_data_len_bits, &vector.other_info_bytes())
            .unwrap();
        assert_eq!(key.as_slice(), vector.expected_bytes().as_slice(), "{}", vector.name);
    }
}

/// The whole `OtherInfo` passed as `AlgorithmID` gives the same bytes to the hash
#[test]
fn test_vectors_facade() {
    for vector in CONCAT_KDF_VECTORS {
        let key = josekdf::derive(
            vector.hash,
            &vector.z_bytes(),
            vector.key_data_len_bits,
            &vector.other_info_bytes(),
            b"",
            b"",
            b"",
            b"",
        )
        .unwrap();
        assert_eq!(hex::encode(&*key), vector.expected, "{}", vector.name);
    }
}

#[test]
fn test_rfc7518_structured() {
    let vector = &CONCAT_KDF_VECTORS[0];
    let other_info = OtherInfo::jose(b"A128GCM", b"Alice", b"Bob", 128).unwrap();
    assert_eq!(hex::encode(&*other_info.to_bytes()), vector.other_info);

    let kdf = ConcatKdf::from_params(ConcatKdfParams::default()).unwrap();
    let key = kdf.derive_key(&vector.z_bytes(), 128, &other_info).unwrap();
    assert_eq!(hex::encode(&*key), vector.expected);

    let key = josekdf::derive(
        "SHA-256",
        &vector.z_bytes(),
        128,
        &length_prefixed(b"A128GCM").unwrap(),
        &length_prefixed(b"Alice").unwrap(),
        &length_prefixed(b"Bob").unwrap(),
        &key_data_len_info(128),
        b"",
    )
    .unwrap();
    assert_eq!(hex::encode(&*key), vector.expected);
}
