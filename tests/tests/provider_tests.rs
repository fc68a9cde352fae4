//! Plugging a custom digest provider into the KDF

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use josekdf::prelude::*;
use josekdf_algorithms::hash::RustCryptoHash;
use zeroize::Zeroizing;

/// Counts finalized blocks across every hasher it hands out
struct CountingHash {
    inner: RustCryptoHash,
    blocks: Arc<AtomicUsize>,
}

impl HashPrimitive for CountingHash {
    fn algorithm(&self) -> &str {
        self.inner.algorithm()
    }

    fn output_len_bits(&self) -> usize {
        self.inner.output_len_bits()
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    fn digest(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        self.blocks.fetch_add(1, Ordering::SeqCst);
        self.inner.digest()
    }

    fn fresh(&self) -> Box<dyn HashPrimitive> {
        Box::new(CountingHash {
            inner: RustCryptoHash::new(self.inner.hash_algorithm()),
            blocks: Arc::clone(&self.blocks),
        })
    }
}

struct CountingProvider {
    blocks: Arc<AtomicUsize>,
}

impl DigestProvider for CountingProvider {
    fn resolve(&self, name: &str) -> Result<Box<dyn HashPrimitive>> {
        Ok(Box::new(CountingHash {
            inner: RustCryptoHash::new(HashAlgorithm::from_name(name)?),
            blocks: Arc::clone(&self.blocks),
        }))
    }
}

#[test]
fn test_block_count_matches_reps() {
    let blocks = Arc::new(AtomicUsize::new(0));
    let kdf = ConcatKdf::with_provider(
        "SHA-256",
        CountingProvider {
            blocks: Arc::clone(&blocks),
        },
    )
    .unwrap();

    for bits in [1usize, 255, 256, 257, 512, 1000] {
        blocks.store(0, Ordering::SeqCst);
        kdf.derive_key_raw(&[1, 2, 3], bits, b"").unwrap();
        assert_eq!(blocks.load(Ordering::SeqCst), kdf.reps(bits).unwrap() as usize);
    }
}

#[test]
fn test_custom_provider_output_matches_default() {
    let custom = ConcatKdf::with_provider(
        "SHA-384",
        CountingProvider {
            blocks: Arc::new(AtomicUsize::new(0)),
        },
    )
    .unwrap();
    let default = ConcatKdf::new("SHA-384").unwrap();

    let info = OtherInfo::jose(b"A192GCM", b"", b"", 192).unwrap();
    assert_eq!(
        custom.derive_key(&[4; 48], 192, &info).unwrap(),
        default.derive_key(&[4; 48], 192, &info).unwrap()
    );
}

#[test]
fn test_shared_provider_by_arc() {
    let provider = Arc::new(DefaultDigestProvider);
    let a = ConcatKdf::with_provider("SHA-1", Arc::clone(&provider)).unwrap();
    let b = ConcatKdf::from_params_with_provider(ConcatKdfParams::new("SHA-1"), provider).unwrap();
    assert_eq!(
        a.derive_key_raw(&[1], 160, b"").unwrap(),
        b.derive_key_raw(&[1], 160, b"").unwrap()
    );
}

#[test]
fn test_unknown_name_from_custom_provider() {
    let result = ConcatKdf::with_provider(
        "WHIRLPOOL",
        CountingProvider {
            blocks: Arc::new(AtomicUsize::new(0)),
        },
    );
    assert!(matches!(result, Err(Error::UnsupportedAlgorithm { .. })));
}
