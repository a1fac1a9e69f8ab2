//! bitcoin_secp256k1 implementation of recovery. More about it in [`crate::recover`].
use crate::{error::RecoveryError, signature::Signature};
use primitives::{Digest, PUBKEY_UNCOMPRESSED_LENGTH};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

/// Recover the public key from a signature and a digest.
///
/// This function is using the `secp256k1` crate, it is enabled by the `secp256k1` feature and it is in default.
pub fn recover_public_key(
    digest: &Digest,
    signature: &Signature,
) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], RecoveryError> {
    let recid = RecoveryId::from_i32(i32::from(signature.parity().recovery_id()))
        .map_err(|_| RecoveryError)?;
    let sig =
        RecoverableSignature::from_compact(&signature.rs(), recid).map_err(|_| RecoveryError)?;

    let msg = Message::from_digest(digest.0);
    let public = SECP256K1.recover_ecdsa(&msg, &sig).map_err(|_| RecoveryError)?;

    Ok(public.serialize_uncompressed())
}
