use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Header of a child-chain block as committed to the settlement contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub merkle_root: B256,
    pub rlp_merkle_root: B256,
    pub prev_hash: B256,
    pub number: u64,
}

impl BlockHeader {
    pub fn zero() -> Self {
        BlockHeader {
            merkle_root: B256::ZERO,
            rlp_merkle_root: B256::ZERO,
            prev_hash: B256::ZERO,
            number: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub block_hash: B256,
}

impl Block {
    pub fn zero() -> Self {
        Block {
            header: BlockHeader::zero(),
            block_hash: B256::ZERO,
        }
    }
}
