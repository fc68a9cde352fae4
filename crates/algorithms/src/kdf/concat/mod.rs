//! Concatenation Key Derivation Function
//!
//! This module implements the single-step key derivation function of
//! NIST SP 800-56A, section 5.8.1, with the hash-based auxiliary function, as
//! profiled by RFC 7518 §4.6 for JWE ECDH-ES key agreement.
//!
//! For `i = 1..=reps` the function computes
//!
//! ```text
//! K(i) = H(counter_i || Z || OtherInfo)
//! ```
//!
//! where `counter_i` is `i` as a 32-bit big-endian integer and
//! `reps = ceil(keydatalen / hashlen)`. The derived key is the leading
//! `ceil(keydatalen / 8)` bytes of `K(1) || K(2) || ... || K(reps)`.
//!
//! ## Example
//!
//! ```
//! use josekdf_algorithms::kdf::{ConcatKdf, OtherInfo};
//!
//! let kdf = ConcatKdf::new("SHA-256").unwrap();
//! let other_info = OtherInfo::jose(b"A128GCM", b"Alice", b"Bob", 128).unwrap();
//!
//! let z = [0x42u8; 32];
//! let key = kdf.derive_key(&z, 128, &other_info).unwrap();
//! assert_eq!(key.len(), 16);
//!
//! // Operation pattern API
//! let key2: [u8; 16] = kdf
//!     .builder()
//!     .with_shared_secret(&z)
//!     .with_other_info(other_info)
//!     .derive_array()
//!     .unwrap();
//! assert_eq!(&key[..], &key2[..]);
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use josekdf_api::{DigestProvider, HashPrimitive, KeyAgreementKdf};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::hash::DefaultDigestProvider;
use crate::kdf::params::{ConcatKdfParams, ParamProvider};

pub mod other_info;

pub use other_info::{key_data_len_info, length_prefixed, OtherInfo};

/// Size of the big-endian block counter
pub const COUNTER_SIZE: usize = 4;

/// Largest repetition count the 32-bit counter can address
pub const MAX_REPS: u64 = u32::MAX as u64;

// Events only ever carry lengths, counts and names; never Z, OtherInfo,
// blocks or key bytes.
macro_rules! kdf_trace {
    ($enabled:expr, $level:ident, $($arg:tt)+) => {
        #[cfg(feature = "trace")]
        {
            if $enabled {
                tracing::$level!(target: "josekdf::concat", $($arg)+);
            }
        }
    };
}

/// Concatenation KDF bound to one hash algorithm.
///
/// The instance keeps an untouched prototype of its hash primitive and takes
/// a fresh copy for every derivation, so a single `ConcatKdf` can be shared
/// between threads without any locking.
pub struct ConcatKdf {
    provider: Arc<dyn DigestProvider>,
    prototype: Box<dyn HashPrimitive>,
    hash_len_bits: usize,
    name: String,
    params: ConcatKdfParams,
}

impl ConcatKdf {
    /// Create a KDF for `hash_algorithm` using the [`DefaultDigestProvider`].
    ///
    /// # Errors
    /// `UnsupportedAlgorithm` if the name is not known to the provider.
    pub fn new(hash_algorithm: &str) -> Result<Self> {
        Self::from_params(ConcatKdfParams::new(hash_algorithm))
    }

    /// Create a KDF resolving `hash_algorithm` through `provider`
    pub fn with_provider<P>(hash_algorithm: &str, provider: P) -> Result<Self>
    where
        P: DigestProvider + 'static,
    {
        Self::build(ConcatKdfParams::new(hash_algorithm), Arc::new(provider))
    }

    /// Create a KDF from configuration, using the [`DefaultDigestProvider`]
    pub fn from_params(params: ConcatKdfParams) -> Result<Self> {
        Self::build(params, Arc::new(DefaultDigestProvider))
    }

    /// Create a KDF from configuration, resolving the hash through `provider`
    pub fn from_params_with_provider<P>(params: ConcatKdfParams, provider: P) -> Result<Self>
    where
        P: DigestProvider + 'static,
    {
        Self::build(params, Arc::new(provider))
    }

    fn build(params: ConcatKdfParams, provider: Arc<dyn DigestProvider>) -> Result<Self> {
        let prototype = provider.resolve(&params.hash)?;
        let hash_len_bits = checked_hash_len(prototype.as_ref())?;
        let name = format!("ConcatKDF-{}", prototype.algorithm());

        kdf_trace!(
            params.trace,
            debug,
            hash = %prototype.algorithm(),
            hash_len_bits,
            "Concat KDF ready"
        );

        Ok(Self {
            provider,
            prototype,
            hash_len_bits,
            name,
            params,
        })
    }

    /// Output length of the hash in bits
    pub fn hash_len_bits(&self) -> usize {
        self.hash_len_bits
    }

    /// Name of the hash algorithm as reported by the provider
    pub fn hash_algorithm(&self) -> &str {
        self.prototype.algorithm()
    }

    /// Number of hash blocks needed for `key_data_len_bits` bits of output.
    ///
    /// # Errors
    /// `InvalidParameter` for a zero length, `DerivationRange` when the
    /// count does not fit the 32-bit counter.
    pub fn reps(&self, key_data_len_bits: usize) -> Result<u32> {
        validate::non_zero("key data length", key_data_len_bits)?;
        let reps = key_data_len_bits.div_ceil(self.hash_len_bits);
        let reps = u64::try_from(reps).unwrap_or(u64::MAX);
        validate::max_value("Concat KDF repetitions", reps, MAX_REPS)?;
        // checked above
        Ok(reps as u32)
    }

    /// Derive `ceil(key_data_len_bits / 8)` bytes bound to `other_info`
    pub fn derive_key(
        &self,
        shared_secret: &[u8],
        key_data_len_bits: usize,
        other_info: &OtherInfo,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.derive_key_raw(shared_secret, key_data_len_bits, &other_info.to_bytes())
    }

    /// Derive key material from the five `OtherInfo` components, given in
    /// `OtherInfo` order. Any component may be empty.
    #[allow(clippy::too_many_arguments)]
    pub fn derive_key_with_components(
        &self,
        shared_secret: &[u8],
        key_data_len_bits: usize,
        algorithm_id: &[u8],
        party_u_info: &[u8],
        party_v_info: &[u8],
        supp_pub_info: &[u8],
        supp_priv_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        let other_info = other_info::concat([
            algorithm_id,
            party_u_info,
            party_v_info,
            supp_pub_info,
            supp_priv_info,
        ]);
        self.derive_key_raw(shared_secret, key_data_len_bits, &other_info)
    }

    /// Derive key material from an already assembled `OtherInfo` string.
    ///
    /// # Errors
    /// - `InvalidParameter` for an empty shared secret or a zero length
    /// - `DerivationRange` when the length needs more than `2^32 - 1` blocks
    ///   or the output buffer cannot be allocated
    /// - `Provider` when the hash primitive fails or misreports its size
    pub fn derive_key_raw(
        &self,
        shared_secret: &[u8],
        key_data_len_bits: usize,
        other_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::non_empty("shared secret", shared_secret)?;
        let reps = self.reps(key_data_len_bits)?;

        let key_len = key_data_len_bits.div_ceil(8);
        let block_len = self.prototype.output_len_bytes();

        kdf_trace!(
            self.params.trace,
            debug,
            hash = %self.hash_algorithm(),
            key_data_len_bits,
            reps,
            other_info_len = other_info.len(),
            "deriving key"
        );

        let mut derived = Zeroizing::new(Vec::new());
        derived
            .try_reserve_exact(key_len)
            .map_err(|_| Error::DerivationRange {
                context: "Concat KDF output allocation",
                requested: key_len as u64,
                max: isize::MAX as u64,
            })?;

        let mut hash = self.prototype.fresh();
        let mut counter = [0u8; COUNTER_SIZE];

        for i in 1..=reps {
            BigEndian::write_u32(&mut counter, i);
            hash.update(&counter)?;
            hash.update(shared_secret)?;
            hash.update(other_info)?;

            // digest() leaves the primitive empty for the next counter
            let block = hash.digest()?;
            if block.len() != block_len {
                return Err(Error::provider(
                    "Concat KDF block",
                    format!("expected {} bytes, got {}", block_len, block.len()),
                ));
            }

            // only the last block is cut short
            let take = block_len.min(key_len - derived.len());
            derived.extend_from_slice(&block[..take]);

            kdf_trace!(self.params.trace, trace, counter = i, "hashed block");
        }

        kdf_trace!(self.params.trace, debug, key_len, "derived key");

        Ok(derived)
    }

    /// Start an operation-pattern derivation
    pub fn builder(&self) -> ConcatKdfOperation<'_> {
        ConcatKdfOperation {
            kdf: self,
            shared_secret: None,
            key_data_len_bits: None,
            other_info: OtherInfo::new(),
        }
    }
}

fn checked_hash_len(hash: &dyn HashPrimitive) -> Result<usize> {
    let bits = hash.output_len_bits();
    if bits == 0 || bits % 8 != 0 {
        return Err(Error::provider(
            "digest output length",
            format!(
                "{} reports {} bits, expected a positive multiple of 8",
                hash.algorithm(),
                bits
            ),
        ));
    }
    Ok(bits)
}

impl Clone for ConcatKdf {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            prototype: self.prototype.fresh(),
            hash_len_bits: self.hash_len_bits,
            name: self.name.clone(),
            params: self.params.clone(),
        }
    }
}

impl fmt::Debug for ConcatKdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcatKdf")
            .field("hash", &self.hash_algorithm())
            .field("hash_len_bits", &self.hash_len_bits)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl ParamProvider for ConcatKdf {
    type Params = ConcatKdfParams;

    fn with_params(params: Self::Params) -> Result<Self> {
        Self::from_params(params)
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn set_params(&mut self, params: Self::Params) -> Result<()> {
        // Resolve first so a rejected algorithm leaves the instance untouched
        let rebuilt = Self::build(params, Arc::clone(&self.provider))?;
        *self = rebuilt;
        Ok(())
    }
}

impl KeyAgreementKdf for ConcatKdf {
    fn algorithm_name(&self) -> &str {
        &self.name
    }

    fn derive(
        &self,
        shared_secret: &[u8],
        key_data_len_bits: usize,
        other_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.derive_key_raw(shared_secret, key_data_len_bits, other_info)
    }
}

/// Fluent derivation, started with [`ConcatKdf::builder`]
pub struct ConcatKdfOperation<'a> {
    kdf: &'a ConcatKdf,
    shared_secret: Option<&'a [u8]>,
    key_data_len_bits: Option<usize>,
    other_info: OtherInfo,
}

impl<'a> ConcatKdfOperation<'a> {
    /// Set the shared secret `Z`
    pub fn with_shared_secret(mut self, shared_secret: &'a [u8]) -> Self {
        self.shared_secret = Some(shared_secret);
        self
    }

    /// Set the requested key length in bits
    pub fn with_key_data_len(mut self, key_data_len_bits: usize) -> Self {
        self.key_data_len_bits = Some(key_data_len_bits);
        self
    }

    /// Replace all `OtherInfo` components at once
    pub fn with_other_info(mut self, other_info: OtherInfo) -> Self {
        self.other_info = other_info;
        self
    }

    /// Set `AlgorithmID`
    pub fn with_algorithm_id(mut self, data: &[u8]) -> Self {
        self.other_info = self.other_info.with_algorithm_id(data);
        self
    }

    /// Set `PartyUInfo`
    pub fn with_party_u_info(mut self, data: &[u8]) -> Self {
        self.other_info = self.other_info.with_party_u_info(data);
        self
    }

    /// Set `PartyVInfo`
    pub fn with_party_v_info(mut self, data: &[u8]) -> Self {
        self.other_info = self.other_info.with_party_v_info(data);
        self
    }

    /// Set `SuppPubInfo`
    pub fn with_supp_pub_info(mut self, data: &[u8]) -> Self {
        self.other_info = self.other_info.with_supp_pub_info(data);
        self
    }

    /// Set `SuppPrivInfo`
    pub fn with_supp_priv_info(mut self, data: &[u8]) -> Self {
        self.other_info = self.other_info.with_supp_priv_info(data);
        self
    }

    /// Execute the key derivation
    pub fn derive(self) -> Result<Zeroizing<Vec<u8>>> {
        let shared_secret = self
            .shared_secret
            .ok_or_else(|| Error::param("shared secret", "Shared secret is required"))?;
        let key_data_len_bits = self
            .key_data_len_bits
            .ok_or_else(|| Error::param("key data length", "Key data length is required"))?;

        self.kdf
            .derive_key(shared_secret, key_data_len_bits, &self.other_info)
    }

    /// Execute the key derivation into a fixed-size array.
    ///
    /// Without an explicit key length `N * 8` bits are derived. An explicit
    /// length must round up to exactly `N` bytes.
    pub fn derive_array<const N: usize>(mut self) -> Result<[u8; N]> {
        let key_data_len_bits = *self.key_data_len_bits.get_or_insert(N * 8);
        if key_data_len_bits.div_ceil(8) != N {
            return Err(Error::param(
                "key data length",
                format!("{} bits does not fit a {}-byte array", key_data_len_bits, N),
            ));
        }

        let vec = self.derive()?;

        let mut array = [0u8; N];
        array.copy_from_slice(&vec);
        Ok(array)
    }
}
