//! # ecverify
//!
//! Verification of secp256k1 personal-message signatures.
//!
//! A message (or its precomputed digest) and a 65 byte `r || s || v`
//! signature go in, the signer identity is recovered and compared against the
//! identity the caller expects:
//!
//! ```text
//! message --digest--> Digest --+
//!                              +--recover--> Identity --compare--> VerificationResult
//! bytes ----decode--> Signature+
//! ```
//!
//! Every step is a pure function over immutable values, so verification can be
//! called from any number of threads without synchronization.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod digest;
pub mod error;
pub mod recover;
pub mod signature;
pub mod verify;

pub use digest::{digest, DigestInput};
pub use error::{RecoveryError, SignatureError, VerifyError};
pub use primitives;
pub use primitives::{Digest, Identity};
pub use recover::{identity_from_public_key, recover, recover_public_key, DefaultRecover, Recover};
pub use signature::{decode, encode, Parity, RecoveryEncoding, Signature};
pub use verify::{verify, verify_digest, verify_message, verify_with, VerificationResult};
