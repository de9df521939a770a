use alloy_primitives::B256;

pub use alloy_primitives::keccak256;

const SIGNED_MESSAGE_PREAMBLE: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Digest that externally-owned accounts actually sign: the 32-byte payload
/// digest wrapped in the signed-message preamble. Confirmation signatures are
/// verified over this envelope.
pub fn signed_message_hash(digest: &B256) -> B256 {
    let mut buf = Vec::with_capacity(SIGNED_MESSAGE_PREAMBLE.len() + 32);
    buf.extend_from_slice(SIGNED_MESSAGE_PREAMBLE);
    buf.extend_from_slice(digest.as_slice());
    keccak256(&buf)
}
