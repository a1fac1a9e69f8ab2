//! Header parsing and the [`VerifiedSigner`] extractor.
use crate::error::AuthError;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use ecverify::{
    primitives::{hex, Digest},
    Identity,
};

/// Identity proven by the request signature.
///
/// Inserted into the request extensions by
/// [`signature_auth`](crate::signature_auth). Extracting it on a route
/// without the middleware is rejected with `401`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VerifiedSigner(pub Identity);

impl<S> FromRequestParts<S> for VerifiedSigner
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VerifiedSigner>()
            .copied()
            .ok_or(AuthError::NotAuthenticated)
    }
}

/// Returns the value of `name`, or `None` if the header is absent.
///
/// A value that is not visible ASCII is malformed.
pub(crate) fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, AuthError> {
    headers
        .get(name)
        .map(|value| {
            value
                .to_str()
                .map(str::trim)
                .map_err(|_| AuthError::MalformedHeader(name.to_string()))
        })
        .transpose()
}

/// Like [`header`], but absence is an error.
pub(crate) fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AuthError> {
    header(headers, name)?.ok_or_else(|| AuthError::MissingHeader(name.to_string()))
}

/// Decodes hex of any length. Length is left to the signature codec so that a
/// truncated signature is reported as such.
pub(crate) fn parse_signature(name: &str, value: &str) -> Result<Vec<u8>, AuthError> {
    hex::decode(value).map_err(|_| AuthError::MalformedHeader(name.to_string()))
}

/// Decodes a 20 byte identity.
pub(crate) fn parse_identity(name: &str, value: &str) -> Result<Identity, AuthError> {
    value
        .parse()
        .map_err(|_| AuthError::MalformedHeader(name.to_string()))
}

/// Decodes a 32 byte digest.
pub(crate) fn parse_digest(name: &str, value: &str) -> Result<Digest, AuthError> {
    value
        .parse()
        .map_err(|_| AuthError::MalformedHeader(name.to_string()))
}
