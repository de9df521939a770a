use std::fs;
use std::path::Path;

use alloy_primitives::{Address, B256};
use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::config::models::AccountConfig;
use crate::crypto::signature::{address_of, sign_digest, Signature, SignatureError};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("failed to access key file {path}: {source}")]
    KeyFile {
        path: String,
        source: std::io::Error,
    },

    #[error("key file does not contain a hex-encoded private key")]
    MalformedKeyFile(#[from] hex::FromHexError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}

/// A spending account: a secp256k1 private key and the address derived from it.
pub struct Account {
    key: SigningKey,
    address: Address,
}

impl Account {
    pub fn from_key(key: SigningKey) -> Self {
        let address = address_of(key.verifying_key());
        Account { key, address }
    }

    pub fn from_hex(encoded: &str) -> Result<Self, AccountError> {
        let stripped = encoded.trim().strip_prefix("0x").unwrap_or(encoded.trim());
        let bytes = hex::decode(stripped)?;
        let key = SigningKey::from_slice(&bytes).map_err(|_| SignatureError::InvalidPrivateKey)?;
        Ok(Account::from_key(key))
    }

    pub fn random() -> Self {
        let account = Account::from_key(SigningKey::random(&mut OsRng));
        log::info!("Generated a new account. Address: {}", account.address);
        account
    }

    /// Load the account from the configured key file, creating the file with
    /// a fresh key when it does not exist yet.
    pub fn load_or_create(config: &AccountConfig) -> Result<Self, AccountError> {
        let path = Path::new(&config.keys_path);
        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| AccountError::KeyFile {
                path: config.keys_path.clone(),
                source,
            })?;
            return Account::from_hex(&contents);
        }

        let account = Account::random();
        let encoded = hex::encode(account.key.to_bytes());
        fs::write(path, encoded).map_err(|source| AccountError::KeyFile {
            path: config.keys_path.clone(),
            source,
        })?;
        log::info!("Stored new key file: {}.", config.keys_path);
        Ok(account)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn key(&self) -> &SigningKey {
        &self.key
    }

    pub fn sign_digest(&self, digest: &B256) -> Result<Signature, AccountError> {
        Ok(sign_digest(digest, &self.key)?)
    }
}
