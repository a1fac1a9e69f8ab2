//! Signature codec.
//!
//! Wire format, 65 bytes:
//!
//! | r  | s  | v |
//! | :-: | :-: | :-: |
//! | 32 | 32 | 1 |
//!
//! `v` is the recovery id, either raw (`0`, `1`) or with the legacy offset of
//! 27 (`27`, `28`). Both are accepted and normalized to [`Parity`]; the form
//! that was read is kept so [`Signature::encode`] reproduces the input.
//!
//! Only canonical signatures are accepted: `0 < r < n` and `0 < s <= n/2`.
use crate::error::SignatureError;
use core::{fmt, str::FromStr};
use primitives::{
    hex, B256, LEGACY_RECOVERY_OFFSET, SCALAR_LENGTH, SECP256K1_HALF_ORDER, SECP256K1_ORDER,
    SIGNATURE_LENGTH,
};

/// Which of the two candidate points the nonce commitment `R` is: the one
/// with even or with odd `y` coordinate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Recovery id `0`.
    Even,
    /// Recovery id `1`.
    Odd,
}

impl Parity {
    /// Returns the recovery id, `0` or `1`.
    #[inline]
    pub const fn recovery_id(self) -> u8 {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }

    /// Parses a raw recovery id.
    #[inline]
    pub const fn from_recovery_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Even),
            1 => Some(Self::Odd),
            _ => None,
        }
    }
}

/// How the recovery id was written on the wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecoveryEncoding {
    /// `v` is `0` or `1`.
    Raw,
    /// `v` is `27` or `28`. This is what `personal_sign` implementations emit.
    #[default]
    Legacy,
}

/// A decoded, canonical secp256k1 signature.
///
/// With the `serde` feature it (de)serializes as the `0x` prefixed hex of its
/// wire form, and deserialization goes through [`Signature::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: B256,
    s: B256,
    parity: Parity,
    encoding: RecoveryEncoding,
}

impl Signature {
    /// Creates a signature from its components, checking the same invariants
    /// as [`Signature::decode`]. Encodes with the legacy `v`.
    pub fn from_parts(r: B256, s: B256, parity: Parity) -> Result<Self, SignatureError> {
        check_scalars(&r, &s)?;
        Ok(Self {
            r,
            s,
            parity,
            encoding: RecoveryEncoding::Legacy,
        })
    }

    /// Decodes `r || s || v`.
    pub fn decode(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: &[u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidLength { len: bytes.len() })?;

        let v = bytes[SIGNATURE_LENGTH - 1];
        let (parity, encoding) = match v {
            0 | 1 => (v, RecoveryEncoding::Raw),
            27 | 28 => (v - LEGACY_RECOVERY_OFFSET, RecoveryEncoding::Legacy),
            _ => return Err(SignatureError::InvalidRecoveryId(v)),
        };
        let parity = Parity::from_recovery_id(parity).ok_or(SignatureError::InvalidRecoveryId(v))?;

        let r = B256::from_slice(&bytes[..SCALAR_LENGTH]);
        let s = B256::from_slice(&bytes[SCALAR_LENGTH..2 * SCALAR_LENGTH]);
        check_scalars(&r, &s)?;

        Ok(Self {
            r,
            s,
            parity,
            encoding,
        })
    }

    /// Encodes back to `r || s || v`.
    pub fn encode(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..SCALAR_LENGTH].copy_from_slice(self.r.as_slice());
        out[SCALAR_LENGTH..2 * SCALAR_LENGTH].copy_from_slice(self.s.as_slice());
        out[SIGNATURE_LENGTH - 1] = self.v();
        out
    }

    /// Returns the signature with its recovery id written in `encoding`.
    pub const fn with_encoding(mut self, encoding: RecoveryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// `r` scalar, big-endian.
    #[inline]
    pub const fn r(&self) -> &B256 {
        &self.r
    }

    /// `s` scalar, big-endian. Always in the lower half of the curve order.
    #[inline]
    pub const fn s(&self) -> &B256 {
        &self.s
    }

    /// `r || s`.
    #[inline]
    pub fn rs(&self) -> [u8; 2 * SCALAR_LENGTH] {
        let mut out = [0u8; 2 * SCALAR_LENGTH];
        out[..SCALAR_LENGTH].copy_from_slice(self.r.as_slice());
        out[SCALAR_LENGTH..].copy_from_slice(self.s.as_slice());
        out
    }

    /// Normalized recovery id.
    #[inline]
    pub const fn parity(&self) -> Parity {
        self.parity
    }

    /// Wire form of the recovery id.
    #[inline]
    pub const fn encoding(&self) -> RecoveryEncoding {
        self.encoding
    }

    /// Recovery byte as written on the wire.
    #[inline]
    pub const fn v(&self) -> u8 {
        match self.encoding {
            RecoveryEncoding::Raw => self.parity.recovery_id(),
            RecoveryEncoding::Legacy => self.parity.recovery_id() + LEGACY_RECOVERY_OFFSET,
        }
    }
}

/// `0 < r < n` and `0 < s <= n/2`.
fn check_scalars(r: &B256, s: &B256) -> Result<(), SignatureError> {
    if r.is_zero() || *r >= SECP256K1_ORDER || s.is_zero() {
        return Err(SignatureError::InvalidScalar);
    }
    if *s > SECP256K1_HALF_ORDER {
        return Err(SignatureError::NonCanonicalS);
    }
    Ok(())
}

/// Decodes `r || s || v`. See [`Signature::decode`].
#[inline]
pub fn decode(bytes: &[u8]) -> Result<Signature, SignatureError> {
    Signature::decode(bytes)
}

/// Encodes `r || s || v`. See [`Signature::encode`].
#[inline]
pub fn encode(signature: &Signature) -> [u8; SIGNATURE_LENGTH] {
    signature.encode()
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> Self {
        signature.encode()
    }
}

/// Parses hex, with or without `0x` prefix.
///
/// Text that decodes to the wrong number of bytes is reported as
/// [`SignatureError::InvalidLength`] with the decoded length. Text that is not
/// hex at all, including an odd number of digits, reports a length of `0`.
impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() % 2 != 0 || hex::check(digits).is_err() {
            return Err(SignatureError::InvalidLength { len: 0 });
        }
        if digits.len() != 2 * SIGNATURE_LENGTH {
            return Err(SignatureError::InvalidLength {
                len: digits.len() / 2,
            });
        }

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| SignatureError::InvalidLength { len: 0 })?;
        Self::decode(&bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(hex::const_encode::<SIGNATURE_LENGTH, true>(&self.encode()).as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = hex::const_encode::<SIGNATURE_LENGTH, true>(&self.encode());
        serializer.serialize_str(encoded.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SignatureVisitor;

        impl serde::de::Visitor<'_> for SignatureVisitor {
            type Value = Signature;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex encoded 65 byte signature")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SignatureVisitor)
    }
}
