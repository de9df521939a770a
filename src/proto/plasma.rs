/// Arbitrary-precision non-negative integer: lowercase hex digits, no prefix.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BigInt {
    #[prost(string, tag = "1")]
    pub hex: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Input {
    #[prost(message, optional, tag = "1")]
    pub block_num: ::core::option::Option<BigInt>,
    #[prost(message, optional, tag = "2")]
    pub tx_idx: ::core::option::Option<BigInt>,
    #[prost(message, optional, tag = "3")]
    pub out_idx: ::core::option::Option<BigInt>,
    #[prost(bytes = "vec", tag = "4")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "5")]
    pub deposit_nonce: ::core::option::Option<BigInt>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Output {
    #[prost(bytes = "vec", tag = "1")]
    pub new_owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub amount: ::core::option::Option<BigInt>,
    #[prost(message, optional, tag = "3")]
    pub deposit_nonce: ::core::option::Option<BigInt>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(message, optional, tag = "1")]
    pub input0: ::core::option::Option<Input>,
    #[prost(bytes = "vec", tag = "2")]
    pub sig0: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub input1: ::core::option::Option<Input>,
    #[prost(bytes = "vec", tag = "4")]
    pub sig1: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "5")]
    pub output0: ::core::option::Option<Output>,
    #[prost(message, optional, tag = "6")]
    pub output1: ::core::option::Option<Output>,
    #[prost(message, optional, tag = "7")]
    pub fee: ::core::option::Option<BigInt>,
    #[prost(string, tag = "8")]
    pub block_num: ::prost::alloc::string::String,
    #[prost(uint32, tag = "9")]
    pub tx_idx: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmedTransaction {
    #[prost(message, optional, tag = "1")]
    pub transaction: ::core::option::Option<Transaction>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockHeader {
    #[prost(bytes = "vec", tag = "1")]
    pub merkle_root: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub rlp_merkle_root: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub prev_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag = "4")]
    pub number: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<BlockHeader>,
    #[prost(bytes = "vec", tag = "2")]
    pub hash: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockMeta {
    #[prost(int64, tag = "1")]
    pub created_at: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmptyRequest {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBalanceRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBalanceResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: ::core::option::Option<BigInt>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOutputsRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
    #[prost(bool, tag = "2")]
    pub spendable: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOutputsResponse {
    #[prost(message, repeated, tag = "1")]
    pub confirmed_transactions: ::prost::alloc::vec::Vec<ConfirmedTransaction>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBlockRequest {
    #[prost(uint64, tag = "1")]
    pub number: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBlockResponse {
    #[prost(message, optional, tag = "1")]
    pub block: ::core::option::Option<Block>,
    #[prost(message, repeated, tag = "2")]
    pub confirmed_transactions: ::prost::alloc::vec::Vec<ConfirmedTransaction>,
    #[prost(message, optional, tag = "3")]
    pub metadata: ::core::option::Option<BlockMeta>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendRequest {
    #[prost(message, optional, tag = "1")]
    pub confirmed: ::core::option::Option<ConfirmedTransaction>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionInclusion {
    #[prost(bytes = "vec", tag = "1")]
    pub merkle_root: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub block_number: u64,
    #[prost(uint32, tag = "3")]
    pub transaction_index: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendResponse {
    #[prost(message, optional, tag = "1")]
    pub confirmed: ::core::option::Option<ConfirmedTransaction>,
    #[prost(message, optional, tag = "2")]
    pub inclusion: ::core::option::Option<TransactionInclusion>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfirmRequest {
    #[prost(uint64, tag = "1")]
    pub block_number: u64,
    #[prost(uint32, tag = "2")]
    pub transaction_index: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub auth_sig0: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub auth_sig1: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetConfirmationsRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub sig: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub nonce: u64,
    #[prost(uint64, tag = "3")]
    pub block_number: u64,
    #[prost(uint32, tag = "4")]
    pub transaction_index: u32,
    #[prost(uint32, tag = "5")]
    pub output_index: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetConfirmationsResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub auth_sig0: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_sig1: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockHeightResponse {
    #[prost(uint64, tag = "1")]
    pub height: u64,
}
