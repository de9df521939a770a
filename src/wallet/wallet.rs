use alloy_primitives::Address;
use thiserror::Error;

use crate::chain::Input;
use crate::config::models::WalletConfig;
use crate::crypto::account::{Account, AccountError};
use crate::crypto::signature::{Signature, SignatureError};

#[derive(Error, Debug)]
pub enum WalletError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}

/// Signing facade over the configured account.
pub struct Wallet {
    pub config: WalletConfig,
    pub account: Account,
}

impl Wallet {
    pub fn new(config: WalletConfig) -> Result<Self, WalletError> {
        let account = Account::load_or_create(&config.account)?;
        Ok(Wallet { config, account })
    }

    pub fn address(&self) -> Address {
        self.account.address()
    }

    /// Authorize spending an input: sign its signature hash.
    pub fn sign_input(&self, input: &Input) -> Result<Signature, WalletError> {
        Ok(input.sign(self.account.key())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::AccountConfig;
    use crate::crypto::signature::recover_address;
    use alloy_primitives::U256;
    use std::fs;

    fn temp_wallet() -> (Wallet, String) {
        let dir = std::env::temp_dir().join("plasma-chain-wallet-test");
        fs::create_dir_all(&dir).unwrap();
        let keys_path = dir
            .join(format!("wallet-{}.key", std::process::id()))
            .to_string_lossy()
            .into_owned();
        let _ = fs::remove_file(&keys_path);
        let config = WalletConfig {
            account: AccountConfig {
                keys_path: keys_path.clone(),
            },
        };
        (Wallet::new(config).unwrap(), keys_path)
    }

    #[test]
    fn test_sign_input_recovers_to_wallet_address() {
        let (wallet, keys_path) = temp_wallet();
        let input = Input::new(8, 1, 0, wallet.address(), U256::ZERO);

        let sig = wallet.sign_input(&input).unwrap();
        assert_eq!(
            recover_address(&input.sig_hash(), &sig).unwrap(),
            wallet.address()
        );

        let _ = fs::remove_file(&keys_path);
    }
}
