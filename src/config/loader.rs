use std::fs;

use thiserror::Error;

use super::models::WalletConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("configuration file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_toml_wallet(path: &str) -> Result<WalletConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    log::info!("Loaded wallet configuration file: {}.", path);
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_toml_wallet() {
        let path = env::temp_dir().join("plasma-chain-wallet-config.toml");
        fs::write(&path, "[account]\nkeys_path = \"./keys/wallet.key\"\n").unwrap();

        let config = load_toml_wallet(path.to_str().unwrap()).unwrap();
        assert_eq!(config.account.keys_path, "./keys/wallet.key");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_toml_wallet_missing_file() {
        assert!(matches!(
            load_toml_wallet("./does-not-exist.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}
