//! SRP client session.
//!
//! # Usage
//! A session drives one authentication attempt through three steps. Build it
//! with the group, digest, and wire convention your deployment fixed out of
//! band, send the identity and public ephemeral to the verifying party, feed
//! the reply into [`SrpClientSession::process_challenge`], and finish with
//! [`SrpClientSession::verify_session`]:
//!
//! ```rust
//! use sha2::Sha256;
//! use srp6a::client::{ClientSecret, SrpClientSession};
//! use srp6a::groups::G_2048;
//! use srp6a::types::SrpVariant;
//!
//! let mut rng = rand::rngs::OsRng;
//! let session = SrpClientSession::<Sha256>::new(
//!     "alice",
//!     ClientSecret::Password("password123".into()),
//!     &G_2048,
//!     SrpVariant::Standard,
//!     &mut rng,
//! )
//! .unwrap();
//!
//! let (username, a_pub) = session.start_authentication();
//! // transmit (username, a_pub), then call process_challenge with the
//! // (salt, B) reply and verify_session with the server proof
//! ```
//!
//! The session key becomes readable only after the server proof has been
//! verified; an abandoned or failed session never exposes it.

use core::marker::PhantomData;

use digest::Digest;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::errors::SrpAuthError;
use crate::types::{SrpGroup, SrpVariant};
use crate::utils::{
    compute_k, compute_m1, compute_m2, compute_premaster_secret, compute_session_key, compute_u,
    compute_x,
};

/// Retry bound for drawing an ephemeral key whose public value has an
/// even-length hex encoding. One or two rounds suffice in practice.
const MAX_EPHEMERAL_RETRIES: usize = 32;

/// The long-term secret a session proves knowledge of.
///
/// Exactly one form is present: either the password itself, or an `x` that
/// was derived on another tier. A precomputed `x` bypasses the password-hash
/// chain entirely.
#[derive(Debug, Clone)]
pub enum ClientSecret {
    /// The user's password; `x` is derived per the session's convention.
    Password(String),
    /// A previously derived private key `x`, used as-is.
    PrecomputedX(BigUint),
}

enum SessionState {
    PublicKeyReady,
    ChallengeProcessed {
        key: Vec<u8>,
        server_evidence: Vec<u8>,
    },
    Authenticated {
        key: Vec<u8>,
    },
    Failed,
}

/// One client-side authentication attempt.
///
/// Calls must occur in the order [`start_authentication`] (idempotent,
/// optional) → [`process_challenge`] → [`verify_session`]; out-of-order
/// calls fail with the state error for that transition instead of
/// corrupting the session. The ephemeral private key is drawn fresh at
/// construction and is never reused across sessions.
///
/// [`start_authentication`]: SrpClientSession::start_authentication
/// [`process_challenge`]: SrpClientSession::process_challenge
/// [`verify_session`]: SrpClientSession::verify_session
pub struct SrpClientSession<D: Digest> {
    username: String,
    secret: ClientSecret,
    group: &'static SrpGroup,
    variant: SrpVariant,
    a: Vec<u8>,
    a_pub: BigUint,
    state: SessionState,
    d: PhantomData<D>,
}

impl<D: Digest> SrpClientSession<D> {
    /// Create a session and generate its ephemeral keypair.
    ///
    /// Regenerates the keypair until the public value's hex encoding has
    /// even length, so it can be hashed as text downstream without
    /// re-encoding ambiguity; the retry bound makes a broken RNG surface as
    /// [`SrpAuthError::EphemeralGenerationFailed`] instead of a hang.
    pub fn new<R>(
        username: &str,
        secret: ClientSecret,
        group: &'static SrpGroup,
        variant: SrpVariant,
        rng: &mut R,
    ) -> Result<Self, SrpAuthError>
    where
        R: RngCore + CryptoRng,
    {
        let (a, a_pub) = generate_ephemeral(group, rng)?;
        Ok(Self {
            username: username.to_owned(),
            secret,
            group,
            variant,
            a,
            a_pub,
            state: SessionState::PublicKeyReady,
            d: PhantomData,
        })
    }

    /// The handshake pair `(username, A)` for sending to the verifying
    /// party. Idempotent and side-effect free.
    #[must_use]
    pub fn start_authentication(&self) -> (&str, Vec<u8>) {
        (&self.username, self.a_pub.to_bytes_be())
    }

    /// The public ephemeral as lowercase hex text, guaranteed even-length,
    /// for deployments that exchange hex strings on the wire.
    #[must_use]
    pub fn public_ephemeral_hex(&self) -> String {
        self.a_pub.to_str_radix(16)
    }

    /// Process the verifying party's `(salt, B)` challenge and produce the
    /// client evidence `M1` for sending back.
    ///
    /// Derives the shared secret and the expected server proof as a side
    /// effect. Fails with [`SrpAuthError::InvalidPublicKey`] if
    /// `B mod N == 0`; the session is then terminal and must be discarded,
    /// since retrying requires a fresh ephemeral key.
    pub fn process_challenge(
        &mut self,
        salt: &[u8],
        b_pub: &[u8],
    ) -> Result<Vec<u8>, SrpAuthError> {
        match self.state {
            SessionState::PublicKeyReady => {}
            SessionState::ChallengeProcessed { .. } | SessionState::Authenticated { .. } => {
                return Err(SrpAuthError::ChallengeAlreadyProcessed)
            }
            SessionState::Failed => return Err(SrpAuthError::SessionFailed),
        }

        let b_pub = BigUint::from_bytes_be(b_pub);
        if &b_pub % &self.group.n == BigUint::default() {
            self.state = SessionState::Failed;
            return Err(SrpAuthError::InvalidPublicKey);
        }

        let k = compute_k::<D>(self.group)?;
        let u = compute_u::<D>(self.variant, self.group, &self.a_pub, &b_pub)?;
        let x = match &self.secret {
            ClientSecret::Password(password) => {
                compute_x::<D>(self.variant, &self.username, password, salt, self.group)
            }
            ClientSecret::PrecomputedX(x) => x.clone(),
        };

        let a = BigUint::from_bytes_be(&self.a);
        let premaster = compute_premaster_secret(self.group, &b_pub, &k, &x, &a, &u);
        let key = compute_session_key::<D>(&premaster);
        let m1 = compute_m1::<D>(
            self.variant,
            self.group,
            &self.username,
            salt,
            &self.a_pub,
            &b_pub,
            &premaster,
            key.as_slice(),
        );
        let m2 = compute_m2::<D>(&self.a_pub, m1.as_slice(), key.as_slice());

        self.state = SessionState::ChallengeProcessed {
            key: key.as_slice().to_vec(),
            server_evidence: m2.as_slice().to_vec(),
        };
        Ok(m1.as_slice().to_vec())
    }

    /// Check the server proof against the evidence expected by this session.
    ///
    /// The comparison is constant-time; a timing difference here would be a
    /// side channel onto the session key. A mismatch makes the session
    /// terminal: a retry needs a brand-new session and a fresh challenge.
    pub fn verify_session(&mut self, server_proof: &[u8]) -> Result<(), SrpAuthError> {
        let state = core::mem::replace(&mut self.state, SessionState::Failed);
        match state {
            SessionState::ChallengeProcessed {
                mut key,
                server_evidence,
            } => {
                if server_evidence.ct_eq(server_proof).unwrap_u8() == 1 {
                    self.state = SessionState::Authenticated { key };
                    Ok(())
                } else {
                    key.zeroize();
                    Err(SrpAuthError::KeyProofMismatch)
                }
            }
            SessionState::PublicKeyReady => {
                self.state = SessionState::PublicKeyReady;
                Err(SrpAuthError::MissingChallenge)
            }
            SessionState::Authenticated { key } => {
                self.state = SessionState::Authenticated { key };
                Err(SrpAuthError::MissingChallenge)
            }
            SessionState::Failed => Err(SrpAuthError::SessionFailed),
        }
    }

    /// The shared session key, readable only after the server has proven
    /// possession of it.
    #[must_use]
    pub fn session_key(&self) -> Option<&[u8]> {
        match &self.state {
            SessionState::Authenticated { key } => Some(key),
            _ => None,
        }
    }

    /// Whether [`verify_session`](SrpClientSession::verify_session) has
    /// succeeded. Set at most once per session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }
}

impl<D: Digest> Drop for SrpClientSession<D> {
    fn drop(&mut self) {
        self.a.zeroize();
        if let ClientSecret::Password(password) = &mut self.secret {
            password.zeroize();
        }
        if let SessionState::ChallengeProcessed { key, .. }
        | SessionState::Authenticated { key } = &mut self.state
        {
            key.zeroize();
        }
    }
}

fn generate_ephemeral<R>(
    group: &SrpGroup,
    rng: &mut R,
) -> Result<(Vec<u8>, BigUint), SrpAuthError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = vec![0u8; group.byte_length()];
    for _ in 0..MAX_EPHEMERAL_RETRIES {
        rng.fill_bytes(&mut buf);
        let a = BigUint::from_bytes_be(&buf) % &group.n;
        if a < BigUint::from(2u32) {
            continue;
        }
        let a_pub = group.g.modpow(&a, &group.n);
        if a_pub.to_str_radix(16).len() % 2 == 0 {
            buf.zeroize();
            return Ok((a.to_bytes_be(), a_pub));
        }
    }
    buf.zeroize();
    Err(SrpAuthError::EphemeralGenerationFailed)
}
