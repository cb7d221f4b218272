//! Shared support for the integration tests: a reference verifying party
//! built from the crate's public derivation functions, and a fixed-output
//! RNG for pinning ephemeral keys in recorded-vector tests.
#![allow(dead_code)]

use digest::Digest;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use srp6a::types::{SrpGroup, SrpVariant};
use srp6a::utils::{compute_k, compute_m1, compute_m2, compute_session_key, compute_u};

/// Minimal server side of the exchange, holding one account's record and
/// one fixed ephemeral `b`.
pub struct ReferenceServer<'a> {
    group: &'a SrpGroup,
    variant: SrpVariant,
    username: String,
    salt: Vec<u8>,
    verifier: BigUint,
    b: BigUint,
    b_pub: BigUint,
}

impl<'a> ReferenceServer<'a> {
    pub fn new<D: Digest>(
        group: &'a SrpGroup,
        variant: SrpVariant,
        username: &str,
        salt: &[u8],
        verifier: BigUint,
        b: BigUint,
    ) -> Self {
        let k = compute_k::<D>(group).unwrap();
        // B = (k*v + g^b) % N
        let b_pub = (k * &verifier + group.g.modpow(&b, &group.n)) % &group.n;
        Self {
            group,
            variant,
            username: username.to_owned(),
            salt: salt.to_vec(),
            verifier,
            b,
            b_pub,
        }
    }

    /// The challenge `B` this server sends alongside the account salt.
    pub fn challenge(&self) -> Vec<u8> {
        self.b_pub.to_bytes_be()
    }

    /// Check the client evidence; on success return the server proof and
    /// the server's session key.
    pub fn exchange_proofs<D: Digest>(
        &self,
        a_pub: &[u8],
        client_evidence: &[u8],
    ) -> Option<(Vec<u8>, Vec<u8>)> {
        let a_pub = BigUint::from_bytes_be(a_pub);
        if &a_pub % &self.group.n == BigUint::default() {
            return None;
        }
        let u = compute_u::<D>(self.variant, self.group, &a_pub, &self.b_pub).unwrap();
        // S = (A * v^u) ^ b % N
        let premaster = (&a_pub * self.verifier.modpow(&u, &self.group.n))
            .modpow(&self.b, &self.group.n);
        let key = compute_session_key::<D>(&premaster);
        let expected = compute_m1::<D>(
            self.variant,
            self.group,
            &self.username,
            &self.salt,
            &a_pub,
            &self.b_pub,
            &premaster,
            key.as_slice(),
        );
        if expected.as_slice() != client_evidence {
            return None;
        }
        let proof = compute_m2::<D>(&a_pub, client_evidence, key.as_slice());
        Some((proof.as_slice().to_vec(), key.as_slice().to_vec()))
    }
}

/// RNG that replays one fixed byte string, so a session's ephemeral key is
/// exactly the recorded value.
pub struct FixedRng(pub Vec<u8>);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.copy_from_slice(&self.0[..dest.len()]);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}
