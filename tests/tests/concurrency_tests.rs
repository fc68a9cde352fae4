//! A single `ConcatKdf` shared between threads

use std::sync::Arc;
use std::thread;

use josekdf::prelude::*;

#[test]
fn test_shared_instance_across_threads() {
    let kdf = Arc::new(ConcatKdf::new("SHA-256").unwrap());

    // Reference keys, derived serially
    let expected: Vec<_> = (0u8..8)
        .map(|t| {
            let z = [t + 1; 32];
            let info = OtherInfo::jose(b"A256GCM", &[t], b"v", 256).unwrap();
            kdf.derive_key(&z, 256 + 8 * t as usize, &info).unwrap()
        })
        .collect();

    let handles: Vec<_> = (0u8..8)
        .map(|t| {
            let kdf = Arc::clone(&kdf);
            thread::spawn(move || {
                let z = [t + 1; 32];
                let info = OtherInfo::jose(b"A256GCM", &[t], b"v", 256).unwrap();
                (0..50)
                    .map(|_| kdf.derive_key(&z, 256 + 8 * t as usize, &info).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        for key in handle.join().unwrap() {
            assert_eq!(key, expected[t], "thread {} diverged", t);
        }
    }
}

#[test]
fn test_scoped_threads_share_reference() {
    let kdf = ConcatKdf::new("SHA-1").unwrap();
    let z = [9u8; 20];

    let keys: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| kdf.derive_key_raw(&z, 400, b"shared").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(keys.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(keys[0].len(), 50);
}
