//! The `OtherInfo` context string of the Concatenation KDF
//!
//! `OtherInfo` binds the derived key to its use. It is the concatenation, in
//! this exact order, of `AlgorithmID`, `PartyUInfo`, `PartyVInfo`,
//! `SuppPubInfo` and `SuppPrivInfo`. Each field is used verbatim; any
//! length-prefixing is the caller's job, which [`length_prefixed`] and
//! [`OtherInfo::jose`] do for the RFC 7518 profile.

use alloc::vec::Vec;
use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Size of the big-endian length prefix and of the `keydatalen` field
pub const DATALEN_SIZE: usize = 4;

/// The five ordered components of `OtherInfo`
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct OtherInfo {
    algorithm_id: Vec<u8>,
    party_u_info: Vec<u8>,
    party_v_info: Vec<u8>,
    supp_pub_info: Vec<u8>,
    supp_priv_info: Vec<u8>,
}

impl OtherInfo {
    /// An `OtherInfo` with every component empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the five components, in `OtherInfo` order
    pub fn from_components(
        algorithm_id: &[u8],
        party_u_info: &[u8],
        party_v_info: &[u8],
        supp_pub_info: &[u8],
        supp_priv_info: &[u8],
    ) -> Self {
        Self {
            algorithm_id: algorithm_id.to_vec(),
            party_u_info: party_u_info.to_vec(),
            party_v_info: party_v_info.to_vec(),
            supp_pub_info: supp_pub_info.to_vec(),
            supp_priv_info: supp_priv_info.to_vec(),
        }
    }

    /// `OtherInfo` laid out as RFC 7518 §4.6.2 requires for ECDH-ES.
    ///
    /// `algorithm` is the JWE `"enc"` value for Direct Key Agreement or the
    /// `"alg"` value for Key Agreement with Key Wrapping. `party_u_info` and
    /// `party_v_info` are the decoded `"apu"` and `"apv"` values (empty when
    /// absent). `AlgorithmID`, `PartyUInfo` and `PartyVInfo` are length
    /// prefixed, `SuppPubInfo` is `keydatalen` as a 32-bit big-endian integer
    /// and `SuppPrivInfo` is empty.
    pub fn jose(
        algorithm: &[u8],
        party_u_info: &[u8],
        party_v_info: &[u8],
        key_data_len_bits: u32,
    ) -> Result<Self> {
        Ok(Self {
            algorithm_id: length_prefixed(algorithm)?,
            party_u_info: length_prefixed(party_u_info)?,
            party_v_info: length_prefixed(party_v_info)?,
            supp_pub_info: key_data_len_info(key_data_len_bits).to_vec(),
            supp_priv_info: Vec::new(),
        })
    }

    /// Set `AlgorithmID`
    pub fn with_algorithm_id(mut self, data: &[u8]) -> Self {
        replace(&mut self.algorithm_id, data);
        self
    }

    /// Set `PartyUInfo`
    pub fn with_party_u_info(mut self, data: &[u8]) -> Self {
        replace(&mut self.party_u_info, data);
        self
    }

    /// Set `PartyVInfo`
    pub fn with_party_v_info(mut self, data: &[u8]) -> Self {
        replace(&mut self.party_v_info, data);
        self
    }

    /// Set `SuppPubInfo`
    pub fn with_supp_pub_info(mut self, data: &[u8]) -> Self {
        replace(&mut self.supp_pub_info, data);
        self
    }

    /// Set `SuppPrivInfo`
    pub fn with_supp_priv_info(mut self, data: &[u8]) -> Self {
        replace(&mut self.supp_priv_info, data);
        self
    }

    /// `AlgorithmID`
    pub fn algorithm_id(&self) -> &[u8] {
        &self.algorithm_id
    }

    /// `PartyUInfo`
    pub fn party_u_info(&self) -> &[u8] {
        &self.party_u_info
    }

    /// `PartyVInfo`
    pub fn party_v_info(&self) -> &[u8] {
        &self.party_v_info
    }

    /// `SuppPubInfo`
    pub fn supp_pub_info(&self) -> &[u8] {
        &self.supp_pub_info
    }

    /// `SuppPrivInfo`
    pub fn supp_priv_info(&self) -> &[u8] {
        &self.supp_priv_info
    }

    /// The components in `OtherInfo` order
    pub fn components(&self) -> [&[u8]; 5] {
        [
            &self.algorithm_id,
            &self.party_u_info,
            &self.party_v_info,
            &self.supp_pub_info,
            &self.supp_priv_info,
        ]
    }

    /// Length of the assembled byte string
    pub fn len(&self) -> usize {
        self.components().iter().map(|c| c.len()).sum()
    }

    /// True when every component is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assemble the byte string fed to the hash
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        concat(self.components())
    }
}

// SuppPrivInfo may be secret, so only lengths are shown
impl fmt::Debug for OtherInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtherInfo")
            .field("algorithm_id_len", &self.algorithm_id.len())
            .field("party_u_info_len", &self.party_u_info.len())
            .field("party_v_info_len", &self.party_v_info.len())
            .field("supp_pub_info_len", &self.supp_pub_info.len())
            .field("supp_priv_info_len", &self.supp_priv_info.len())
            .finish()
    }
}

/// `Datalen || Data`: a 32-bit big-endian byte count followed by the data.
///
/// # Errors
/// Returns `InvalidParameter` when `data` is longer than `u32::MAX` bytes.
pub fn length_prefixed(data: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(data.len())
        .map_err(|_| Error::param("OtherInfo component", "longer than 2^32 - 1 bytes"))?;
    let mut out = Vec::with_capacity(DATALEN_SIZE + data.len());
    out.extend_from_slice(&[0u8; DATALEN_SIZE]);
    BigEndian::write_u32(&mut out[..DATALEN_SIZE], len);
    out.extend_from_slice(data);
    Ok(out)
}

/// `keydatalen` as a 32-bit big-endian integer, the RFC 7518 `SuppPubInfo`
pub fn key_data_len_info(key_data_len_bits: u32) -> [u8; DATALEN_SIZE] {
    let mut out = [0u8; DATALEN_SIZE];
    BigEndian::write_u32(&mut out, key_data_len_bits);
    out
}

/// Concatenate the components in the given order
pub(crate) fn concat(components: [&[u8]; 5]) -> Zeroizing<Vec<u8>> {
    let total = components.iter().map(|c| c.len()).sum();
    let mut out = Zeroizing::new(Vec::with_capacity(total));
    for component in components {
        out.extend_from_slice(component);
    }
    out
}

fn replace(field: &mut Vec<u8>, data: &[u8]) {
    field.zeroize();
    field.extend_from_slice(data);
}
