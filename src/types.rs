//! Additional SRP types.

use num_bigint::BigUint;

/// Group used for SRP computations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SrpGroup {
    /// A large safe prime (N = 2q+1, where q is prime)
    pub n: BigUint,
    /// A generator modulo N
    pub g: BigUint,
}

impl SrpGroup {
    /// Width in bytes of a field element, `ceil(bits(N) / 8)`.
    #[must_use]
    pub fn byte_length(&self) -> usize {
        ((self.n.bits() + 7) / 8) as usize
    }
}

/// Wire/encoding convention used for the hash compositions.
///
/// The two conventions produce incompatible transcripts for the same
/// credentials; client and verifying party must agree on one out of band.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SrpVariant {
    /// RFC 2945/5054 style: values are hashed as raw big-endian bytes,
    /// left-zero-padded to the modulus width where `k` and `u` are derived.
    Standard,
    /// Convention of a widely deployed JavaScript/Java verifier family:
    /// `A`, `B` and the shared secret are hashed as UTF-8 hex text, and the
    /// password-hash chain strips leading zero hex digits at each stage.
    HexString,
}
