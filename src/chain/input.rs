use alloy_primitives::{keccak256, Address, B256, U256};
use k256::ecdsa::SigningKey;
use serde::{Deserialize, Serialize};

use crate::crypto::signature::{sign_digest, Signature, SignatureError};
use crate::encoding::{be8, minimal_bytes, tx_index_bytes};

/// Reference to one unspent output, as consumed by a transaction. A deposit
/// nonce of zero means the output was created by a prior transaction; nonzero
/// means it was created by an on-chain deposit and `(blk_num, tx_idx,
/// out_idx)` are all zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub blk_num: u64,
    pub tx_idx: u32,
    pub out_idx: u8,
    pub owner: Address,
    pub deposit_nonce: U256,
}

impl Input {
    pub fn new(blk_num: u64, tx_idx: u32, out_idx: u8, owner: Address, deposit_nonce: U256) -> Self {
        Input {
            blk_num,
            tx_idx,
            out_idx,
            owner,
            deposit_nonce,
        }
    }

    /// Sentinel filling the unused input slot of a single-input transaction.
    pub fn zero() -> Self {
        Input::new(0, 0, 0, Address::ZERO, U256::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.blk_num == 0 && self.tx_idx == 0 && self.out_idx == 0 && self.deposit_nonce.is_zero()
    }

    /// Identity hash: names the output slot this input points to, independent
    /// of owner and deposit nonce. The slot layout is fixed by the settlement
    /// contract: 8-byte block number, 4-byte transaction index, minimal
    /// output index.
    pub fn hash(&self) -> B256 {
        let mut buf = Vec::with_capacity(13);
        buf.extend_from_slice(&be8(self.blk_num));
        buf.extend_from_slice(&tx_index_bytes(self.tx_idx));
        buf.extend_from_slice(&minimal_bytes(U256::from(self.out_idx)));
        keccak256(&buf)
    }

    /// Ordered byte-string list that is RLP-encoded for the signature hash.
    pub fn to_array(&self) -> Vec<Vec<u8>> {
        vec![
            minimal_bytes(U256::from(self.blk_num)),
            minimal_bytes(U256::from(self.tx_idx)),
            minimal_bytes(U256::from(self.out_idx)),
            minimal_bytes(self.deposit_nonce),
            self.owner.to_vec(),
        ]
    }

    /// Same list without the owner. Confirmation signatures, produced by the
    /// previous owner, must not bind the current owner.
    pub fn to_confirm_sig_array(&self) -> Vec<Vec<u8>> {
        vec![
            minimal_bytes(U256::from(self.blk_num)),
            minimal_bytes(U256::from(self.tx_idx)),
            minimal_bytes(U256::from(self.out_idx)),
            minimal_bytes(self.deposit_nonce),
        ]
    }

    pub fn to_rlp(&self) -> Vec<u8> {
        let items = self.to_array();
        let mut out = Vec::new();
        alloy_rlp::encode_list::<_, [u8]>(&items, &mut out);
        out
    }

    /// Signature hash: the digest the owner signs to authorize the spend.
    pub fn sig_hash(&self) -> B256 {
        keccak256(self.to_rlp())
    }

    pub fn sign(&self, key: &SigningKey) -> Result<Signature, SignatureError> {
        sign_digest(&self.sig_hash(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::signature::{address_of, recover_address};
    use rand::rngs::OsRng;
    use std::str::FromStr;

    fn owner() -> Address {
        Address::from_str("0x627306090abab3a6e1400e9345bc60c78a8bef57").unwrap()
    }

    #[test]
    fn test_zero_input_hashes_are_pinned() {
        let zero = Input::zero();
        assert_eq!(
            hex::encode(zero.hash()),
            "30e2bfdaad2f3c218a1a8cc54fa1c4e6182b6b7f3bca273390cf587b50b47311"
        );
        assert_eq!(
            hex::encode(zero.to_rlp()),
            "d980808080940000000000000000000000000000000000000000"
        );
        assert_eq!(
            hex::encode(zero.sig_hash()),
            "9998c1579188d32f569ab0b2be425fa34d24dd29caa6afd496067e9ea24489f6"
        );
    }

    #[test]
    fn test_example_input_encodings() {
        let input = Input::new(5, 2, 1, owner(), U256::ZERO);
        assert_eq!(
            input.to_array(),
            vec![
                vec![5u8],
                vec![2u8],
                vec![1u8],
                vec![],
                owner().to_vec(),
            ]
        );
        assert_eq!(
            hex::encode(input.to_rlp()),
            "d90502018094627306090abab3a6e1400e9345bc60c78a8bef57"
        );
        assert_eq!(
            hex::encode(input.sig_hash()),
            "28c42a93d10131d182b930eab0b384bf11b4367f6a9a8036b74a14534112a2fa"
        );
        assert_eq!(
            hex::encode(input.hash()),
            "b3a49257acbc1f39b6dab523e24bb4d86e7e835d942d5749454b04269a021e04"
        );
    }

    #[test]
    fn test_multi_byte_fields_use_minimal_encoding() {
        let nonce = U256::from_str_radix("deadbeef00112233445566778899", 16).unwrap();
        let input = Input::new(0x1122334455, 0x00ab_cdef, 1, owner(), nonce);
        assert_eq!(
            hex::encode(input.to_rlp()),
            "ef85112233445583abcdef018edeadbeef0011223344556677889994627306090abab3a6e1400e9345bc60c78a8bef57"
        );
        assert_eq!(
            hex::encode(input.sig_hash()),
            "acc6fd57cd8397b3bb3763cd623efc27312b4734adcab21308d52e312c659435"
        );
        assert_eq!(
            hex::encode(input.hash()),
            "f45d315237fd157305bb9337a5312a3d4453b3c1784cad97707217f24a253e7f"
        );
    }

    #[test]
    fn test_hashes_are_deterministic() {
        let input = Input::new(7, 3, 1, owner(), U256::from(9));
        assert_eq!(input.hash(), input.hash());
        assert_eq!(input.sig_hash(), input.sig_hash());
    }

    #[test]
    fn test_identity_hash_ignores_owner_and_nonce() {
        let a = Input::new(5, 2, 1, owner(), U256::ZERO);
        let b = Input::new(5, 2, 1, Address::ZERO, U256::from(42));
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.sig_hash(), b.sig_hash());
    }

    #[test]
    fn test_confirm_sig_array_is_prefix_without_owner() {
        let input = Input::new(5, 2, 1, owner(), U256::from(3));
        let full = input.to_array();
        let confirm = input.to_confirm_sig_array();
        assert_eq!(confirm.len() + 1, full.len());
        assert_eq!(confirm.as_slice(), &full[..4]);
    }

    #[test]
    fn test_sign_recovers_to_owner() {
        let key = SigningKey::random(&mut OsRng);
        let input = Input::new(11, 0, 1, address_of(key.verifying_key()), U256::ZERO);

        let sig = input.sign(&key).unwrap();
        let recovered = recover_address(&input.sig_hash(), &sig).unwrap();
        assert_eq!(recovered, input.owner);
    }

    #[test]
    fn test_zero_input_is_zero_regardless_of_owner() {
        assert!(Input::zero().is_zero());
        let mut filled = Input::zero();
        filled.owner = owner();
        assert!(filled.is_zero());
        assert!(!Input::new(0, 0, 0, Address::ZERO, U256::from(1)).is_zero());
    }
}
