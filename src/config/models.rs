use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct AccountConfig {
    pub keys_path: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WalletConfig {
    pub account: AccountConfig,
}
