//! Salted-verifier provisioning.
//!
//! Run once per account, at registration or password change. The relying
//! party persists the resulting `(salt, verifier)` pair; nothing here is on
//! the per-session hot path, and this crate never stores the record.

use digest::Digest;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use crate::codec;
use crate::types::{SrpGroup, SrpVariant};
use crate::utils::{compute_v, compute_x};

/// Byte length of a generated salt.
pub const SALT_LENGTH: usize = 16;

/// The `(salt, verifier)` pair stored by the verifying party in place of
/// the password.
#[derive(Debug, Clone)]
pub struct VerifierRecord {
    /// Salt fed into the password-hash chain.
    pub salt: Vec<u8>,
    /// `v = g^x mod N`
    pub verifier: BigUint,
}

impl VerifierRecord {
    /// The verifier as lowercase hex text that decodes to a whole number of
    /// bytes, for deployments that store hex strings.
    #[must_use]
    pub fn verifier_hex(&self) -> String {
        codec::even_hex(self.verifier.to_str_radix(16))
    }
}

/// Draw a fresh random salt.
pub fn generate_salt<R>(rng: &mut R) -> Vec<u8>
where
    R: RngCore + CryptoRng,
{
    let mut salt = vec![0u8; SALT_LENGTH];
    rng.fill_bytes(&mut salt);
    salt
}

/// Generate a verifier record with a fresh random salt.
pub fn generate_verifier<D, R>(
    variant: SrpVariant,
    username: &str,
    password: &str,
    group: &SrpGroup,
    rng: &mut R,
) -> VerifierRecord
where
    D: Digest,
    R: RngCore + CryptoRng,
{
    let salt = generate_salt(rng);
    generate_verifier_with_salt::<D>(variant, username, password, group, &salt)
}

/// Generate a verifier record for a caller-supplied salt.
#[must_use]
pub fn generate_verifier_with_salt<D: Digest>(
    variant: SrpVariant,
    username: &str,
    password: &str,
    group: &SrpGroup,
    salt: &[u8],
) -> VerifierRecord {
    let x = compute_x::<D>(variant, username, password, salt, group);
    generate_verifier_from_x(group, salt, &x)
}

/// Generate a verifier record from a precomputed `x`, for deployments that
/// run the password-hash chain on a different tier.
#[must_use]
pub fn generate_verifier_from_x(group: &SrpGroup, salt: &[u8], x: &BigUint) -> VerifierRecord {
    VerifierRecord {
        salt: salt.to_vec(),
        verifier: compute_v(group, x),
    }
}
