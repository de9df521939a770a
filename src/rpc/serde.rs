use alloy_primitives::{Address, B256, U256};
use thiserror::Error;

use crate::chain::{Block, BlockHeader, ConfirmedTransaction, Input, Output, Transaction};
use crate::crypto::signature::{Signature, SIGNATURE_LENGTH};
use crate::proto::plasma as pb;

const ADDRESS_LENGTH: usize = 20;
const HASH_LENGTH: usize = 32;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("{0:?} is not a hex quantity")]
    MalformedHex(String),

    #[error("address buffer must be {ADDRESS_LENGTH} bytes, got {0}")]
    MalformedAddress(usize),

    #[error("signature buffer must be {SIGNATURE_LENGTH} bytes, got {0}")]
    MalformedSignature(usize),

    #[error("hash buffer must be {HASH_LENGTH} bytes, got {0}")]
    MalformedHash(usize),

    #[error("{0:?} is not a decimal block number")]
    MalformedBlockNumber(String),

    #[error("negative values have no wire representation")]
    NegativeValue,

    #[error("a transaction carries at most 2 confirmation signatures, got {0}")]
    TooManySignatures(usize),
}

pub fn serialize_big(value: &U256) -> pb::BigInt {
    pb::BigInt {
        hex: format!("{:x}", value),
    }
}

/// Machine-integer entry point to the wire codec. The wire form is unsigned;
/// negative values are rejected rather than encoded misleadingly.
pub fn serialize_int(value: i64) -> Result<pb::BigInt, WireError> {
    if value < 0 {
        return Err(WireError::NegativeValue);
    }
    Ok(serialize_big(&U256::from(value as u64)))
}

/// Inverse of [serialize_big]. A `0x` prefix is tolerated (older peers emit
/// one) and the empty string reads as zero; anything non-hex is an error.
pub fn deserialize_big(wire: &pb::BigInt) -> Result<U256, WireError> {
    let digits = wire
        .hex
        .strip_prefix("0x")
        .or_else(|| wire.hex.strip_prefix("0X"))
        .unwrap_or(&wire.hex);
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).map_err(|_| WireError::MalformedHex(wire.hex.clone()))
}

fn deserialize_opt_big(wire: Option<&pb::BigInt>) -> Result<U256, WireError> {
    match wire {
        Some(wire) => deserialize_big(wire),
        None => Ok(U256::ZERO),
    }
}

// Wire reads truncate oversized numeric fields to their machine width, the
// low-bits convention peers already rely on.
fn big_to_u64(value: &U256) -> u64 {
    value.as_limbs()[0]
}

fn big_to_u32(value: &U256) -> u32 {
    big_to_u64(value) as u32
}

fn big_to_u8(value: &U256) -> u8 {
    big_to_u64(value) as u8
}

// Fixed-width buffers: the empty buffer is protobuf's absent field and maps
// to the zero sentinel; any other width mismatch is rejected.
fn address_from_bytes(bytes: &[u8]) -> Result<Address, WireError> {
    if bytes.is_empty() {
        return Ok(Address::ZERO);
    }
    if bytes.len() != ADDRESS_LENGTH {
        return Err(WireError::MalformedAddress(bytes.len()));
    }
    Ok(Address::from_slice(bytes))
}

fn signature_from_bytes(bytes: &[u8]) -> Result<Signature, WireError> {
    if bytes.is_empty() {
        return Ok(Signature::zero());
    }
    Signature::from_slice(bytes).map_err(|_| WireError::MalformedSignature(bytes.len()))
}

fn hash_from_bytes(bytes: &[u8]) -> Result<B256, WireError> {
    if bytes.is_empty() {
        return Ok(B256::ZERO);
    }
    if bytes.len() != HASH_LENGTH {
        return Err(WireError::MalformedHash(bytes.len()));
    }
    Ok(B256::from_slice(bytes))
}

fn parse_block_num(text: &str) -> Result<u64, WireError> {
    if text.is_empty() {
        return Ok(0);
    }
    text.parse()
        .map_err(|_| WireError::MalformedBlockNumber(text.to_string()))
}

pub fn serialize_input(input: &Input) -> pb::Input {
    pb::Input {
        block_num: Some(serialize_big(&U256::from(input.blk_num))),
        tx_idx: Some(serialize_big(&U256::from(input.tx_idx))),
        out_idx: Some(serialize_big(&U256::from(input.out_idx))),
        owner: input.owner.to_vec(),
        deposit_nonce: Some(serialize_big(&input.deposit_nonce)),
    }
}

pub fn deserialize_input(wire: Option<&pb::Input>) -> Result<Input, WireError> {
    let Some(wire) = wire else {
        return Ok(Input::zero());
    };
    Ok(Input {
        blk_num: big_to_u64(&deserialize_opt_big(wire.block_num.as_ref())?),
        tx_idx: big_to_u32(&deserialize_opt_big(wire.tx_idx.as_ref())?),
        out_idx: big_to_u8(&deserialize_opt_big(wire.out_idx.as_ref())?),
        owner: address_from_bytes(&wire.owner)?,
        deposit_nonce: deserialize_opt_big(wire.deposit_nonce.as_ref())?,
    })
}

pub fn serialize_output(output: &Output) -> pb::Output {
    pb::Output {
        new_owner: output.owner.to_vec(),
        amount: Some(serialize_big(&output.amount)),
        deposit_nonce: Some(serialize_big(&output.deposit_nonce)),
    }
}

pub fn deserialize_output(wire: Option<&pb::Output>) -> Result<Output, WireError> {
    let Some(wire) = wire else {
        return Ok(Output::zero());
    };
    Ok(Output {
        owner: address_from_bytes(&wire.new_owner)?,
        amount: deserialize_opt_big(wire.amount.as_ref())?,
        deposit_nonce: deserialize_opt_big(wire.deposit_nonce.as_ref())?,
    })
}

pub fn serialize_tx(tx: &Transaction) -> pb::Transaction {
    pb::Transaction {
        input0: Some(serialize_input(&tx.input0)),
        sig0: tx.sig0.as_bytes().to_vec(),
        input1: Some(serialize_input(&tx.input1)),
        sig1: tx.sig1.as_bytes().to_vec(),
        output0: Some(serialize_output(&tx.output0)),
        output1: Some(serialize_output(&tx.output1)),
        fee: Some(serialize_big(&tx.fee)),
        block_num: tx.blk_num.to_string(),
        tx_idx: tx.tx_idx,
    }
}

pub fn deserialize_tx(wire: Option<&pb::Transaction>) -> Result<Transaction, WireError> {
    let Some(wire) = wire else {
        return Ok(Transaction::zero());
    };
    Ok(Transaction {
        input0: deserialize_input(wire.input0.as_ref())?,
        sig0: signature_from_bytes(&wire.sig0)?,
        input1: deserialize_input(wire.input1.as_ref())?,
        sig1: signature_from_bytes(&wire.sig1)?,
        output0: deserialize_output(wire.output0.as_ref())?,
        output1: deserialize_output(wire.output1.as_ref())?,
        fee: deserialize_opt_big(wire.fee.as_ref())?,
        blk_num: parse_block_num(&wire.block_num)?,
        tx_idx: wire.tx_idx,
    })
}

pub fn serialize_confirmed_tx(confirmed: &ConfirmedTransaction) -> pb::ConfirmedTransaction {
    pb::ConfirmedTransaction {
        transaction: Some(serialize_tx(&confirmed.transaction)),
        signatures: confirmed
            .signatures
            .iter()
            .map(|sig| sig.as_bytes().to_vec())
            .collect(),
    }
}

/// The second confirmation signature may be absent on the wire (single-input
/// transactions); it zero-fills. More than two is malformed.
pub fn deserialize_confirmed_tx(
    wire: Option<&pb::ConfirmedTransaction>,
) -> Result<ConfirmedTransaction, WireError> {
    let Some(wire) = wire else {
        return Ok(ConfirmedTransaction::new(
            Transaction::zero(),
            [Signature::zero(); 2],
        ));
    };
    if wire.signatures.len() > 2 {
        return Err(WireError::TooManySignatures(wire.signatures.len()));
    }
    let mut signatures = [Signature::zero(); 2];
    for (slot, sig) in signatures.iter_mut().zip(wire.signatures.iter()) {
        *slot = signature_from_bytes(sig)?;
    }
    Ok(ConfirmedTransaction::new(
        deserialize_tx(wire.transaction.as_ref())?,
        signatures,
    ))
}

pub fn serialize_confirmed_txs(confirmed: &[ConfirmedTransaction]) -> Vec<pb::ConfirmedTransaction> {
    confirmed.iter().map(serialize_confirmed_tx).collect()
}

pub fn deserialize_confirmed_txs(
    wire: &[pb::ConfirmedTransaction],
) -> Result<Vec<ConfirmedTransaction>, WireError> {
    wire.iter()
        .map(|confirmed| deserialize_confirmed_tx(Some(confirmed)))
        .collect()
}

pub fn serialize_block(block: &Block) -> pb::Block {
    pb::Block {
        header: Some(pb::BlockHeader {
            merkle_root: block.header.merkle_root.to_vec(),
            rlp_merkle_root: block.header.rlp_merkle_root.to_vec(),
            prev_hash: block.header.prev_hash.to_vec(),
            number: block.header.number.to_string(),
        }),
        hash: block.block_hash.to_vec(),
    }
}

pub fn deserialize_block(wire: Option<&pb::Block>) -> Result<Block, WireError> {
    let Some(wire) = wire else {
        return Ok(Block::zero());
    };
    let header = match wire.header.as_ref() {
        Some(header) => BlockHeader {
            merkle_root: hash_from_bytes(&header.merkle_root)?,
            rlp_merkle_root: hash_from_bytes(&header.rlp_merkle_root)?,
            prev_hash: hash_from_bytes(&header.prev_hash)?,
            number: parse_block_num(&header.number)?,
        },
        None => BlockHeader::zero(),
    };
    Ok(Block {
        header,
        block_hash: hash_from_bytes(&wire.hash)?,
    })
}
