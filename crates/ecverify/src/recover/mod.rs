//! Public key recovery.
//!
//! Given a digest and a canonical signature, reconstructs the signer's public
//! key with the standard ECDSA recovery procedure over secp256k1 and derives
//! its [`Identity`].
//!
//! Depending on enabled features a different backend does the curve math:
//! * [`secp256k1`](https://crates.io/crates/secp256k1) - bindings to the C library used in bitcoin core.
//!   It is the faster one and is enabled by default.
//! * [`k256`](https://crates.io/crates/k256) - maintained pure rust implementation, used for `no_std`
//!   and whenever `secp256k1` is disabled.
use crate::{error::RecoveryError, signature::Signature};
use core::fmt::Debug;
use primitives::{keccak256, Digest, Identity, PUBKEY_UNCOMPRESSED_LENGTH};

pub mod k256;

cfg_if::cfg_if! {
    if #[cfg(feature = "secp256k1")] {
        pub mod bitcoin_secp256k1;
        pub use bitcoin_secp256k1::recover_public_key;
    } else {
        pub use self::k256::recover_public_key;
    }
}

/// Recovers the identity that produced `signature` over `digest`.
pub fn recover(digest: &Digest, signature: &Signature) -> Result<Identity, RecoveryError> {
    recover_public_key(digest, signature).map(|public| identity_from_public_key(&public))
}

/// Derives an identity from a SEC1 uncompressed public key: the last 20 bytes
/// of `keccak256(x || y)`.
pub fn identity_from_public_key(public: &[u8; PUBKEY_UNCOMPRESSED_LENGTH]) -> Identity {
    let hash = keccak256(&public[1..]);
    Identity::from_slice(&hash[12..])
}

/// Recovery backend.
///
/// [`DefaultRecover`] uses whichever backend the enabled features select. Other
/// implementations can be passed to [`verify_with`](crate::verify_with), e.g.
/// to offload the curve arithmetic somewhere else.
pub trait Recover: Send + Sync + Debug {
    /// Recovers the SEC1 uncompressed public key.
    fn recover_public_key(
        &self,
        digest: &Digest,
        signature: &Signature,
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], RecoveryError>;

    /// Recovers the identity.
    fn recover(&self, digest: &Digest, signature: &Signature) -> Result<Identity, RecoveryError> {
        self.recover_public_key(digest, signature)
            .map(|public| identity_from_public_key(&public))
    }
}

/// Recovery with the backend selected by crate features.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRecover;

impl Recover for DefaultRecover {
    fn recover_public_key(
        &self,
        digest: &Digest,
        signature: &Signature,
    ) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], RecoveryError> {
        recover_public_key(digest, signature)
    }
}
