//! # ecverify-primitives
//!
//! Value types shared by the `ecverify` crates. Most of them are re-exported
//! from [`alloy_primitives`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;

pub use alloy_primitives::{
    self, address, b256, hex, keccak256, Address, FixedBytes, Keccak256, B256,
};
pub use constants::*;

/// Keccak-256 digest of a prefixed message. This is what gets signed.
pub type Digest = B256;

/// Identity of a signer: the last 20 bytes of the Keccak-256 hash of its
/// uncompressed public key.
pub type Identity = Address;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_order_is_floor_of_order_halved() {
        let n = alloy_primitives::U256::from_be_bytes(SECP256K1_ORDER.0);
        let half = alloy_primitives::U256::from_be_bytes(SECP256K1_HALF_ORDER.0);
        assert_eq!(n >> 1usize, half);
        assert!(n.bit(0));
    }

    #[test]
    fn byte_order_matches_numeric_order() {
        // The codec relies on big-endian lexicographic comparison.
        let mut above = SECP256K1_HALF_ORDER;
        above.0[31] += 1;
        assert!(above > SECP256K1_HALF_ORDER);
        assert!(SECP256K1_ORDER > SECP256K1_HALF_ORDER);
    }
}
