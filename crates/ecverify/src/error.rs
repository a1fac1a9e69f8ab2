//! Error types for decoding, recovery and verification.
use core::fmt;

/// Reasons a serialized signature is rejected by the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureError {
    /// Input is not exactly [`SIGNATURE_LENGTH`](primitives::SIGNATURE_LENGTH) bytes.
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// Recovery byte is none of `0`, `1`, `27`, `28`.
    InvalidRecoveryId(u8),
    /// `s` lies in the upper half of the curve order.
    NonCanonicalS,
    /// `r` or `s` is zero, or `r` is not below the curve order.
    InvalidScalar,
}

impl core::error::Error for SignatureError {}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(
                f,
                "invalid signature length: expected {} bytes, got {len}",
                primitives::SIGNATURE_LENGTH
            ),
            Self::InvalidRecoveryId(v) => write!(f, "invalid recovery id {v}"),
            Self::NonCanonicalS => {
                f.write_str("non-canonical signature: s is in the upper half of the curve order")
            }
            Self::InvalidScalar => f.write_str("signature scalar out of range"),
        }
    }
}

/// Public key recovery failed: no point on the curve is consistent with the
/// digest, signature and parity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct RecoveryError;

impl core::error::Error for RecoveryError {}

impl fmt::Display for RecoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("public key recovery failed")
    }
}

/// Terminal rejection of a verification.
///
/// None of these are retryable. Use [`VerifyError::is_malformed`] to tell a
/// malformed request apart from an unauthorized one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerifyError {
    /// Signature bytes could not be decoded.
    InvalidSignatureEncoding(SignatureError),
    /// No public key could be recovered.
    RecoveryFailed,
    /// The recovered identity is not the expected one.
    IdentityMismatch,
}

impl VerifyError {
    /// Returns `true` if the input itself was malformed, as opposed to well
    /// formed but not signed by the expected identity.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidSignatureEncoding(_))
    }
}

impl From<SignatureError> for VerifyError {
    fn from(value: SignatureError) -> Self {
        Self::InvalidSignatureEncoding(value)
    }
}

impl From<RecoveryError> for VerifyError {
    fn from(_: RecoveryError) -> Self {
        Self::RecoveryFailed
    }
}

impl core::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidSignatureEncoding(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignatureEncoding(e) => write!(f, "invalid signature encoding: {e}"),
            Self::RecoveryFailed => f.write_str("signer recovery failed"),
            Self::IdentityMismatch => f.write_str("recovered identity does not match"),
        }
    }
}
