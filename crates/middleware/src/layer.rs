use crate::{
    config::SignatureAuthConfig,
    error::AuthError,
    extract::{header, parse_digest, parse_identity, parse_signature, required_header},
    VerifiedSigner,
};
use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use ecverify::{verify, DigestInput};

/// Verifies the request signature and passes the request on only if it is
/// `Valid`. Every other outcome is answered with an [`AuthError`].
///
/// Use with `axum::middleware::from_fn`. Reads [`SignatureAuthConfig`] from the
/// request extensions.
pub async fn signature_auth(request: Request, next: Next) -> Response {
    match authenticate(request).await {
        Ok(request) => next.run(request).await,
        Err(error) => {
            tracing::warn!(
                code = error.code(),
                reason = %error,
                "request signature rejected"
            );
            error.into_response()
        }
    }
}

async fn authenticate(request: Request) -> Result<Request, AuthError> {
    let config = request
        .extensions()
        .get::<SignatureAuthConfig>()
        .cloned()
        .unwrap_or_default();

    let headers = request.headers();
    let signature = parse_signature(
        &config.signature_header,
        required_header(headers, &config.signature_header)?,
    )?;
    let expected = parse_identity(
        &config.signer_header,
        required_header(headers, &config.signer_header)?,
    )?;
    let digest = if config.accept_digest_header {
        header(headers, &config.digest_header)?
            .map(|value| parse_digest(&config.digest_header, value))
            .transpose()?
    } else {
        None
    };

    let mut request = match digest {
        Some(digest) => {
            verify(DigestInput::Digest(digest), &signature, &expected).into_result()?;
            request
        }
        None => {
            let (parts, body) = request.into_parts();
            let body = to_bytes(body, config.max_body_bytes)
                .await
                .map_err(AuthError::Body)?;
            verify(DigestInput::Message(&body), &signature, &expected).into_result()?;
            Request::from_parts(parts, Body::from(body))
        }
    };

    tracing::debug!(signer = %expected, "request signature verified");
    request.extensions_mut().insert(VerifiedSigner(expected));
    Ok(request)
}
