//! Middleware configuration.
use serde::{Deserialize, Serialize};

/// Default header carrying the hex encoded signature.
pub const DEFAULT_SIGNATURE_HEADER: &str = "x-signature";

/// Default header carrying the hex encoded identity the client claims.
pub const DEFAULT_SIGNER_HEADER: &str = "x-signer";

/// Default header carrying a hex encoded precomputed digest.
pub const DEFAULT_DIGEST_HEADER: &str = "x-message-digest";

/// Default upper bound on a signed body, 1 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Configuration of [`signature_auth`](crate::signature_auth).
///
/// Injected with `axum::Extension`. Requests that reach the middleware without
/// one are checked against [`SignatureAuthConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct SignatureAuthConfig {
    /// Header with the 65 byte `r || s || v` signature.
    pub signature_header: String,
    /// Header with the claimed 20 byte identity.
    pub signer_header: String,
    /// Header with a precomputed 32 byte digest.
    pub digest_header: String,
    /// Whether [`Self::digest_header`] is honored. Off by default.
    ///
    /// A signature over a client supplied digest says nothing about the body:
    /// a captured signature, signer and digest authenticate any request body.
    /// Only enable this when the digest is bound to the request some other way.
    /// If `false`, the body is always the signed message and the header is
    /// ignored.
    pub accept_digest_header: bool,
    /// Bodies longer than this are rejected without being verified.
    pub max_body_bytes: usize,
}

impl Default for SignatureAuthConfig {
    fn default() -> Self {
        Self {
            signature_header: DEFAULT_SIGNATURE_HEADER.to_string(),
            signer_header: DEFAULT_SIGNER_HEADER.to_string(),
            digest_header: DEFAULT_DIGEST_HEADER.to_string(),
            accept_digest_header: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl SignatureAuthConfig {
    /// Sets the header names.
    pub fn with_headers(
        mut self,
        signature: impl Into<String>,
        signer: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        self.signature_header = signature.into();
        self.signer_header = signer.into();
        self.digest_header = digest.into();
        self
    }

    /// Sets whether the digest header is honored.
    pub fn with_digest_header(mut self, accept: bool) -> Self {
        self.accept_digest_header = accept;
        self
    }

    /// Sets the body size limit.
    pub fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }
}
