use alloy_primitives::U256;

/// Minimal big-endian encoding: no leading zero bytes, zero encodes as the
/// empty buffer. This is the same convention the RLP codec applies to
/// integer items, so byte arrays built here hash identically on-chain.
pub fn minimal_bytes(value: U256) -> Vec<u8> {
    value.to_be_bytes_trimmed_vec()
}

/// Fixed 8-byte big-endian encoding used for the block number slot of the
/// identity hash.
pub fn be8(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Transaction-index slot of the identity hash. The settlement contract packs
/// the index as its hex-digit string left-padded with ASCII zeros to eight
/// characters and hex-decoded, which for a 32-bit index is exactly the 4-byte
/// big-endian encoding.
pub fn tx_index_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_bytes_strips_leading_zeros() {
        assert_eq!(minimal_bytes(U256::from(0x01u64)), vec![0x01]);
        assert_eq!(minimal_bytes(U256::from(0x1122u64)), vec![0x11, 0x22]);
        assert_eq!(
            minimal_bytes(U256::from(0x1122334455u64)),
            vec![0x11, 0x22, 0x33, 0x44, 0x55]
        );
    }

    #[test]
    fn test_minimal_bytes_zero_is_empty() {
        assert!(minimal_bytes(U256::ZERO).is_empty());
    }

    #[test]
    fn test_be8_pads_to_eight_bytes() {
        assert_eq!(be8(5), [0, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(be8(0x1122334455), [0, 0, 0, 0x11, 0x22, 0x33, 0x44, 0x55]);
    }

    #[test]
    fn test_tx_index_bytes_matches_padded_hex_digits() {
        // the contract-side layout: hex digits padded to eight chars, decoded
        for idx in [0u32, 2, 0xab, 0xabcdef, u32::MAX] {
            let padded = hex::decode(format!("{:08x}", idx)).unwrap();
            assert_eq!(tx_index_bytes(idx).to_vec(), padded);
        }
    }
}
