//! k256 implementation of recovery. More about it in [`crate::recover`].
use crate::{error::RecoveryError, signature::Signature};
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};
use primitives::{Digest, PUBKEY_UNCOMPRESSED_LENGTH};

/// Recover the public key from a signature and a digest.
///
/// This function is using the `k256` crate.
pub fn recover_public_key(
    digest: &Digest,
    signature: &Signature,
) -> Result<[u8; PUBKEY_UNCOMPRESSED_LENGTH], RecoveryError> {
    // r and s are already range checked by the codec, this only fails on
    // values the curve arithmetic refuses.
    let sig = EcdsaSignature::from_slice(&signature.rs()).map_err(|_| RecoveryError)?;
    let recid = RecoveryId::from_byte(signature.parity().recovery_id()).ok_or(RecoveryError)?;

    let recovered_key =
        VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recid).map_err(|_| RecoveryError)?;

    recovered_key
        .to_encoded_point(/* compress = */ false)
        .as_bytes()
        .try_into()
        .map_err(|_| RecoveryError)
}
