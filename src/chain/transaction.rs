use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::chain::input::Input;
use crate::chain::output::Output;
use crate::crypto::signature::Signature;

/// A settlement transaction: two input slots with their authorizing
/// signatures, two output slots, and a fee. Block number and index are filled
/// in once the transaction is included in a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub input0: Input,
    pub sig0: Signature,
    pub input1: Input,
    pub sig1: Signature,
    pub output0: Output,
    pub output1: Output,
    pub fee: U256,
    pub blk_num: u64,
    pub tx_idx: u32,
}

impl Transaction {
    pub fn zero() -> Self {
        Transaction {
            input0: Input::zero(),
            sig0: Signature::zero(),
            input1: Input::zero(),
            sig1: Signature::zero(),
            output0: Output::zero(),
            output1: Output::zero(),
            fee: U256::ZERO,
            blk_num: 0,
            tx_idx: 0,
        }
    }

    /// A deposit transaction spends no prior output; its first input carries
    /// the deposit nonce instead.
    pub fn is_deposit(&self) -> bool {
        !self.input0.deposit_nonce.is_zero()
    }

    /// Slot accessor, index 0 or 1.
    pub fn input_at(&self, idx: u8) -> &Input {
        if idx == 0 {
            &self.input0
        } else {
            &self.input1
        }
    }

    /// Slot accessor, index 0 or 1.
    pub fn output_at(&self, idx: u8) -> &Output {
        if idx == 0 {
            &self.output0
        } else {
            &self.output1
        }
    }
}

/// A transaction together with the confirmation signatures acknowledging its
/// inclusion, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedTransaction {
    pub transaction: Transaction,
    pub signatures: [Signature; 2],
}

impl ConfirmedTransaction {
    pub fn new(transaction: Transaction, signatures: [Signature; 2]) -> Self {
        ConfirmedTransaction {
            transaction,
            signatures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use std::str::FromStr;

    #[test]
    fn test_zero_transaction() {
        let tx = Transaction::zero();
        assert!(tx.input0.is_zero());
        assert!(tx.input1.is_zero());
        assert!(tx.output0.is_zero());
        assert!(tx.output1.is_zero());
        assert!(!tx.is_deposit());
    }

    #[test]
    fn test_deposit_detection() {
        let mut tx = Transaction::zero();
        tx.input0.deposit_nonce = U256::from(12);
        assert!(tx.is_deposit());
    }

    #[test]
    fn test_slot_accessors() {
        let owner = Address::from_str("0x627306090abab3a6e1400e9345bc60c78a8bef57").unwrap();
        let mut tx = Transaction::zero();
        tx.input1.blk_num = 4;
        tx.output1.owner = owner;

        assert_eq!(tx.input_at(0).blk_num, 0);
        assert_eq!(tx.input_at(1).blk_num, 4);
        assert_eq!(tx.output_at(1).owner, owner);
    }
}
