use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// One of the two output slots of a transaction: value assigned to an owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub owner: Address,
    pub amount: U256,
    pub deposit_nonce: U256,
}

impl Output {
    pub fn new(owner: Address, amount: U256, deposit_nonce: U256) -> Self {
        Output {
            owner,
            amount,
            deposit_nonce,
        }
    }

    /// Sentinel filling an unused output slot.
    pub fn zero() -> Self {
        Output::new(Address::ZERO, U256::ZERO, U256::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.owner == Address::ZERO && self.amount.is_zero() && self.deposit_nonce.is_zero()
    }

    pub fn is_deposit(&self) -> bool {
        !self.deposit_nonce.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_zero_output() {
        let zero = Output::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_deposit());
    }

    #[test]
    fn test_funded_output_is_not_zero() {
        let owner = Address::from_str("0x627306090abab3a6e1400e9345bc60c78a8bef57").unwrap();
        let output = Output::new(owner, U256::from(100), U256::ZERO);
        assert!(!output.is_zero());
        assert!(!output.is_deposit());
    }

    #[test]
    fn test_deposit_output() {
        let output = Output::new(Address::ZERO, U256::from(100), U256::from(7));
        assert!(output.is_deposit());
        assert!(!output.is_zero());
    }
}
