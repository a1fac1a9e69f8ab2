//! Verification pipeline: digest, decode, recover, compare.
//!
//! Any failing step ends the pipeline, there is no partial success.
use crate::{
    digest::DigestInput,
    error::VerifyError,
    recover::{DefaultRecover, Recover},
    signature::Signature,
};
use primitives::{Digest, Identity};
use subtle::ConstantTimeEq;

/// Outcome of a verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "a signature is only verified if the result is checked"]
pub enum VerificationResult {
    /// Signature decodes, recovers, and belongs to the expected identity.
    Valid,
    /// Signature bytes were rejected by the codec.
    InvalidSignatureEncoding(crate::SignatureError),
    /// No public key could be recovered.
    RecoveryFailed,
    /// A key was recovered but it is not the expected identity.
    IdentityMismatch,
}

impl VerificationResult {
    /// Returns `true` for [`VerificationResult::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Converts into a `Result`, so callers can use `?`.
    pub fn into_result(self) -> Result<(), VerifyError> {
        match self {
            Self::Valid => Ok(()),
            Self::InvalidSignatureEncoding(e) => Err(VerifyError::InvalidSignatureEncoding(e)),
            Self::RecoveryFailed => Err(VerifyError::RecoveryFailed),
            Self::IdentityMismatch => Err(VerifyError::IdentityMismatch),
        }
    }
}

impl From<Result<(), VerifyError>> for VerificationResult {
    fn from(value: Result<(), VerifyError>) -> Self {
        match value {
            Ok(()) => Self::Valid,
            Err(VerifyError::InvalidSignatureEncoding(e)) => Self::InvalidSignatureEncoding(e),
            Err(VerifyError::RecoveryFailed) => Self::RecoveryFailed,
            Err(VerifyError::IdentityMismatch) => Self::IdentityMismatch,
        }
    }
}

/// Verifies that `signature` over `input` was produced by `expected`.
///
/// Uses the recovery backend selected by crate features.
pub fn verify(input: DigestInput<'_>, signature: &[u8], expected: &Identity) -> VerificationResult {
    verify_with(&DefaultRecover, input, signature, expected)
}

/// [`verify`] over a raw message.
pub fn verify_message(message: &[u8], signature: &[u8], expected: &Identity) -> VerificationResult {
    verify(DigestInput::Message(message), signature, expected)
}

/// [`verify`] over a precomputed digest.
pub fn verify_digest(digest: Digest, signature: &[u8], expected: &Identity) -> VerificationResult {
    verify(DigestInput::Digest(digest), signature, expected)
}

/// [`verify`] with an explicit recovery backend.
pub fn verify_with<R: Recover + ?Sized>(
    recoverer: &R,
    input: DigestInput<'_>,
    signature: &[u8],
    expected: &Identity,
) -> VerificationResult {
    run(recoverer, input, signature, expected).into()
}

fn run<R: Recover + ?Sized>(
    recoverer: &R,
    input: DigestInput<'_>,
    signature: &[u8],
    expected: &Identity,
) -> Result<(), VerifyError> {
    let digest = input.into_digest();

    let signature = Signature::decode(signature).inspect_err(|e| {
        tracing::debug!(target: "ecverify", %digest, error = %e, "rejected signature encoding");
    })?;

    let recovered = recoverer.recover(&digest, &signature).inspect_err(|_| {
        tracing::debug!(target: "ecverify", %digest, %signature, "signer recovery failed");
    })?;

    if bool::from(recovered.as_slice().ct_eq(expected.as_slice())) {
        tracing::trace!(target: "ecverify", %digest, signer = %recovered, "signature verified");
        Ok(())
    } else {
        tracing::debug!(
            target: "ecverify",
            %digest,
            %recovered,
            %expected,
            "recovered identity does not match"
        );
        Err(VerifyError::IdentityMismatch)
    }
}
