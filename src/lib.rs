pub mod chain;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod proto;
pub mod rpc;
pub mod wallet;
