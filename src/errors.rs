//! Error types.

use std::{error, fmt};

/// SRP authentication error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SrpAuthError {
    /// The requested group name is not part of the fixed catalog.
    UnknownGroup {
        /// Requested name
        name: String,
    },
    /// A value was wider than the field it must be padded into.
    InvalidPadding {
        /// Actual byte length of the value
        len: usize,
        /// Target field width in bytes
        width: usize,
    },
    /// The received public ephemeral is divisible by the group modulus.
    InvalidPublicKey,
    /// No server challenge has been processed by this session yet.
    MissingChallenge,
    /// This session has already consumed a server challenge.
    ChallengeAlreadyProcessed,
    /// This session failed earlier and must be discarded.
    SessionFailed,
    /// The server proof does not match the evidence expected by this session.
    KeyProofMismatch,
    /// No usable ephemeral key could be drawn within the retry bound.
    EphemeralGenerationFailed,
}

impl fmt::Display for SrpAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGroup { name } => {
                write!(f, "unknown_group: no '{name}' group in the catalog")
            }
            Self::InvalidPadding { len, width } => {
                write!(f, "invalid_padding: {len} bytes do not fit a {width} byte field")
            }
            Self::InvalidPublicKey => {
                write!(f, "illegal_parameter: 'b_pub' is divisible by the group modulus")
            }
            Self::MissingChallenge => {
                write!(f, "missing_challenge: no server challenge has been processed")
            }
            Self::ChallengeAlreadyProcessed => {
                write!(f, "challenge_already_processed: this session already consumed a challenge")
            }
            Self::SessionFailed => {
                write!(f, "session_failed: this session is terminal and must be discarded")
            }
            Self::KeyProofMismatch => {
                write!(f, "bad_record_mac: incorrect 'server' proof")
            }
            Self::EphemeralGenerationFailed => {
                write!(f, "ephemeral_generation_failed: no usable ephemeral key within the retry bound")
            }
        }
    }
}

impl error::Error for SrpAuthError {}
