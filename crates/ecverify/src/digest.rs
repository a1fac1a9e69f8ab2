//! Personal-message digest.
//!
//! `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`,
//! where the length is written as ASCII decimal.
use primitives::{Digest, Keccak256, EIP191_PREFIX};

/// Maximum number of decimal digits of a `usize`.
const MAX_LEN_DIGITS: usize = 20;

/// Computes the digest a signer commits to when signing `message`.
pub fn digest(message: &[u8]) -> Digest {
    let mut buf = [0u8; MAX_LEN_DIGITS];
    let len = decimal(message.len(), &mut buf);

    let mut hasher = Keccak256::new();
    hasher.update(EIP191_PREFIX);
    hasher.update(len);
    hasher.update(message);
    hasher.finalize()
}

/// Writes `n` as ASCII decimal into the tail of `buf` and returns that tail.
fn decimal(mut n: usize, buf: &mut [u8; MAX_LEN_DIGITS]) -> &[u8] {
    let mut pos = MAX_LEN_DIGITS;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[pos..]
}

/// What a verification is computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigestInput<'a> {
    /// Raw message. It is hashed with [`digest`].
    Message(&'a [u8]),
    /// Digest the caller computed already. Used as is.
    Digest(Digest),
}

impl DigestInput<'_> {
    /// Returns the digest to recover against.
    pub fn into_digest(self) -> Digest {
        match self {
            Self::Message(message) => digest(message),
            Self::Digest(digest) => digest,
        }
    }
}

impl<'a> From<&'a [u8]> for DigestInput<'a> {
    fn from(message: &'a [u8]) -> Self {
        Self::Message(message)
    }
}

impl From<Digest> for DigestInput<'_> {
    fn from(digest: Digest) -> Self {
        Self::Digest(digest)
    }
}
