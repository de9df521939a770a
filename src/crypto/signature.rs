use std::fmt;

use alloy_primitives::{keccak256, Address, B256};
use k256::ecdsa::{RecoveryId, SigningKey, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const SIGNATURE_LENGTH: usize = 65;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("private key is not a valid curve scalar")]
    InvalidPrivateKey,

    #[error("signature must be {SIGNATURE_LENGTH} bytes of r || s || v")]
    InvalidSignature,

    #[error("signing failed")]
    Signing,

    #[error("no public key is recoverable from the signature")]
    Recovery,
}

/// Recoverable secp256k1 signature in the r || s || v layout the settlement
/// contract verifies. The v byte holds the raw recovery id.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; SIGNATURE_LENGTH]);

impl Signature {
    pub fn zero() -> Self {
        Signature([0u8; SIGNATURE_LENGTH])
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidSignature);
        }
        let mut buf = [0u8; SIGNATURE_LENGTH];
        buf.copy_from_slice(bytes);
        Ok(Signature(buf))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature::zero()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let stripped = text.strip_prefix("0x").unwrap_or(&text);
        let bytes = hex::decode(stripped).map_err(serde::de::Error::custom)?;
        Signature::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}

/// Sign a 32-byte digest, producing the r || s || v layout.
pub fn sign_digest(digest: &B256, key: &SigningKey) -> Result<Signature, SignatureError> {
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(digest.as_slice())
        .map_err(|_| SignatureError::Signing)?;

    let mut buf = [0u8; SIGNATURE_LENGTH];
    buf[..64].copy_from_slice(sig.to_bytes().as_slice());
    buf[64] = recovery_id.to_byte();
    Ok(Signature(buf))
}

/// Recover the signing address from a digest/signature pair. Accepts both the
/// raw recovery id and the 27/28 convention in the v byte.
pub fn recover_address(digest: &B256, signature: &Signature) -> Result<Address, SignatureError> {
    let v = signature.0[64];
    let recovery_id = RecoveryId::from_byte(if v >= 27 { v - 27 } else { v })
        .ok_or(SignatureError::InvalidSignature)?;
    let sig = k256::ecdsa::Signature::from_slice(&signature.0[..64])
        .map_err(|_| SignatureError::InvalidSignature)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
        .map_err(|_| SignatureError::Recovery)?;
    Ok(address_of(&key))
}

/// Account address of a public key: the low 20 bytes of the keccak digest of
/// the uncompressed point, tag byte excluded.
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&digest[12..])
}
