//! # ecverify-middleware
//!
//! axum middleware that authenticates requests with a secp256k1
//! personal-message signature.
//!
//! The client sends the signature and the identity it claims to be. The
//! signed message is the request body, or a digest passed in a header:
//!
//! ```text
//! x-signature:      0x<65 bytes r || s || v>
//! x-signer:         0x<20 byte address>
//! x-message-digest: 0x<32 bytes>            (opt-in, replaces the body)
//! ```
//!
//! Requests that do not verify are rejected before they reach the handler.
//! Handlers read the verified identity with the [`VerifiedSigner`] extractor.
//!
//! ```no_run
//! use axum::{middleware::from_fn, routing::post, Extension, Router};
//! use ecverify_middleware::{signature_auth, SignatureAuthConfig, VerifiedSigner};
//!
//! async fn handler(VerifiedSigner(signer): VerifiedSigner) -> String {
//!     signer.to_string()
//! }
//!
//! let app: Router = Router::new()
//!     .route("/orders", post(handler))
//!     .layer(from_fn(signature_auth))
//!     .layer(Extension(SignatureAuthConfig::default()));
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod config;
pub mod error;
pub mod extract;
mod layer;

pub use config::SignatureAuthConfig;
pub use error::AuthError;
pub use extract::VerifiedSigner;
pub use layer::signature_auth;
