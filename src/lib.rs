//! Client-side implementation of the Secure Remote Password protocol
//! (SRP-6a): the client proves knowledge of a password without ever sending
//! it, and both sides derive a shared session key.
//!
//! ```text
//! I      user identity
//! N, g   group: large safe prime and generator, from the fixed catalog
//! s      salt
//! k      multiplier, H(N | PAD(g))
//! a, A   client ephemeral: private a, public A = g^a
//! b, B   server ephemeral: B = k*v + g^b
//! x      private key derived from the password and salt
//! v      verifier g^x stored by the server in place of the password
//! u      scrambling parameter derived from A and B
//! S      shared secret ((B - k*g^x) ^ (a + u*x)), K = H(S)
//! M1, M2 client and server evidence of possessing K
//! ```
//!
//! Two mutually incompatible wire conventions are supported, selected by
//! [`types::SrpVariant`]: the RFC 2945/5054 raw-byte convention, and the
//! hex-text convention of a widely deployed JavaScript/Java verifier
//! family. The conventions differ in which byte strings are fed to the
//! hash at each step; both are reproduced bit-for-bit, because a single
//! padding or case mistake breaks authentication against deployed
//! verifiers. Pick exactly one per deployment; they are not negotiated on
//! the wire.
//!
//! Transport, credential storage, and retry policy are the caller's
//! concern; this crate exchanges plain byte strings and hex text.
//!
//! # Example
//!
//! The verifying party below is emulated inline with the same public
//! derivation functions the tests use:
//!
//! ```rust
//! use num_bigint::BigUint;
//! use sha2::Sha256;
//! use srp6a::client::{ClientSecret, SrpClientSession};
//! use srp6a::groups::G_2048;
//! use srp6a::types::SrpVariant;
//! use srp6a::utils::{compute_k, compute_m2, compute_session_key, compute_u};
//! use srp6a::verifier;
//!
//! let mut rng = rand::rngs::OsRng;
//!
//! // Registration: the verifying party stores (salt, v).
//! let record = verifier::generate_verifier::<Sha256, _>(
//!     SrpVariant::Standard,
//!     "alice",
//!     "password123",
//!     &G_2048,
//!     &mut rng,
//! );
//!
//! // Login: the client opens a session and sends (username, A).
//! let mut session = SrpClientSession::<Sha256>::new(
//!     "alice",
//!     ClientSecret::Password("password123".into()),
//!     &G_2048,
//!     SrpVariant::Standard,
//!     &mut rng,
//! )
//! .unwrap();
//! let (_username, a_pub) = session.start_authentication();
//!
//! // The verifying party answers with (salt, B = k*v + g^b).
//! let b = BigUint::from(0x5eed_cafe_f00d_1234u64);
//! let k = compute_k::<Sha256>(&G_2048).unwrap();
//! let b_pub = (&k * &record.verifier + G_2048.g.modpow(&b, &G_2048.n)) % &G_2048.n;
//!
//! // The client answers the challenge with its evidence M1 ...
//! let m1 = session
//!     .process_challenge(&record.salt, &b_pub.to_bytes_be())
//!     .unwrap();
//!
//! // ... the verifying party derives S = (A * v^u)^b, checks M1 (elided),
//! // and answers with its own evidence M2.
//! let a_pub = BigUint::from_bytes_be(&a_pub);
//! let u = compute_u::<Sha256>(SrpVariant::Standard, &G_2048, &a_pub, &b_pub).unwrap();
//! let premaster = (&a_pub * record.verifier.modpow(&u, &G_2048.n)).modpow(&b, &G_2048.n);
//! let key = compute_session_key::<Sha256>(&premaster);
//! let m2 = compute_m2::<Sha256>(&a_pub, &m1, key.as_slice());
//!
//! // Only a verified server proof unlocks the session key.
//! session.verify_session(m2.as_slice()).unwrap();
//! assert!(session.is_authenticated());
//! assert_eq!(session.session_key().unwrap(), key.as_slice());
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]
#![allow(clippy::many_single_char_names)]

pub mod client;
pub mod codec;
pub mod errors;
pub mod groups;
pub mod types;
pub mod utils;
pub mod verifier;

pub use client::{ClientSecret, SrpClientSession};
pub use errors::SrpAuthError;
pub use types::{SrpGroup, SrpVariant};
pub use verifier::VerifierRecord;
