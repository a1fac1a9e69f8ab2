//! secp256k1 and message-format constants.
use alloy_primitives::{b256, B256};

/// Prefix prepended to a message before hashing, as defined by
/// [EIP-191](https://eips.ethereum.org/EIPS/eip-191) version `0x45` ("personal message").
///
/// The decimal length of the message follows the prefix.
pub const EIP191_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Length of a serialized signature: `r (32) || s (32) || v (1)`.
pub const SIGNATURE_LENGTH: usize = 65;

/// Length of a single signature scalar.
pub const SCALAR_LENGTH: usize = 32;

/// Length of a message digest.
pub const DIGEST_LENGTH: usize = 32;

/// Length of an identity (address).
pub const IDENTITY_LENGTH: usize = 20;

/// Length of a SEC1 uncompressed public key, `0x04 || x || y`.
pub const PUBKEY_UNCOMPRESSED_LENGTH: usize = 65;

/// Offset added to the recovery id by the legacy `v` encoding (27, 28).
pub const LEGACY_RECOVERY_OFFSET: u8 = 27;

/// Order `n` of the secp256k1 group.
pub const SECP256K1_ORDER: B256 =
    b256!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// `floor(n / 2)`. Canonical signatures have `s <= SECP256K1_HALF_ORDER`.
///
/// See [EIP-2](https://eips.ethereum.org/EIPS/eip-2).
pub const SECP256K1_HALF_ORDER: B256 =
    b256!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");
