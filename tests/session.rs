mod common;

use num_bigint::BigUint;
use rand::RngCore;
use sha2::Sha256;

use common::ReferenceServer;
use srp6a::client::{ClientSecret, SrpClientSession};
use srp6a::errors::SrpAuthError;
use srp6a::groups::{G_1024, G_2048};
use srp6a::types::SrpVariant;
use srp6a::verifier;

fn fresh_session(variant: SrpVariant) -> SrpClientSession<Sha256> {
    SrpClientSession::<Sha256>::new(
        "alice",
        ClientSecret::Password("password".to_owned()),
        &G_2048,
        variant,
        &mut rand::rngs::OsRng,
    )
    .unwrap()
}

#[test]
fn start_authentication_is_idempotent() {
    let session = fresh_session(SrpVariant::Standard);
    let (username_a, a_pub_a) = session.start_authentication();
    let (username_b, a_pub_b) = session.start_authentication();
    assert_eq!(username_a, "alice");
    assert_eq!(username_a, username_b);
    assert_eq!(a_pub_a, a_pub_b);
}

#[test]
fn public_ephemeral_hex_is_always_even_length() {
    // The hex-text convention hashes the textual encoding of A; the
    // constructor redraws the ephemeral until that encoding has even length.
    for _ in 0..8 {
        for variant in [SrpVariant::Standard, SrpVariant::HexString] {
            let session = fresh_session(variant);
            let hex = session.public_ephemeral_hex();
            assert_eq!(hex.len() % 2, 0);
            assert!(hex::decode(&hex).is_ok());
        }
    }
}

#[test]
fn verify_before_challenge_is_rejected() {
    let mut session = fresh_session(SrpVariant::Standard);
    assert_eq!(
        session.verify_session(&[0u8; 32]).unwrap_err(),
        SrpAuthError::MissingChallenge
    );
    // the session is still usable after the misuse surfaced
    assert!(session
        .process_challenge(&[1u8; 16], &G_2048.g.to_bytes_be())
        .is_ok());
}

#[test]
fn second_challenge_is_rejected() {
    let mut session = fresh_session(SrpVariant::Standard);
    let salt = [1u8; 16];
    let b_pub = G_2048.g.to_bytes_be();
    session.process_challenge(&salt, &b_pub).unwrap();
    assert_eq!(
        session.process_challenge(&salt, &b_pub).unwrap_err(),
        SrpAuthError::ChallengeAlreadyProcessed
    );
}

#[test]
fn session_key_is_locked_until_verification() {
    let mut rng = rand::rngs::OsRng;
    let username = "alice";
    let record = verifier::generate_verifier::<Sha256, _>(
        SrpVariant::Standard,
        username,
        "password",
        &G_1024,
        &mut rng,
    );
    let mut b = [0u8; 64];
    rng.fill_bytes(&mut b);
    let server = ReferenceServer::new::<Sha256>(
        &G_1024,
        SrpVariant::Standard,
        username,
        &record.salt,
        record.verifier.clone(),
        BigUint::from_bytes_be(&b),
    );

    let mut session = SrpClientSession::<Sha256>::new(
        username,
        ClientSecret::Password("password".to_owned()),
        &G_1024,
        SrpVariant::Standard,
        &mut rng,
    )
    .unwrap();
    assert!(session.session_key().is_none());
    assert!(!session.is_authenticated());

    let (_, a_pub) = session.start_authentication();
    let m1 = session.process_challenge(&record.salt, &server.challenge()).unwrap();
    // challenge processed, server not yet proven: key stays locked
    assert!(session.session_key().is_none());
    assert!(!session.is_authenticated());

    let (m2, _) = server.exchange_proofs::<Sha256>(&a_pub, &m1).unwrap();
    session.verify_session(&m2).unwrap();
    assert!(session.is_authenticated());
    assert!(session.session_key().is_some());

    // the transitions fire exactly once
    assert_eq!(
        session.verify_session(&m2).unwrap_err(),
        SrpAuthError::MissingChallenge
    );
    assert_eq!(
        session
            .process_challenge(&record.salt, &server.challenge())
            .unwrap_err(),
        SrpAuthError::ChallengeAlreadyProcessed
    );
    // neither misuse revokes the established key
    assert!(session.is_authenticated());
    assert!(session.session_key().is_some());
}
