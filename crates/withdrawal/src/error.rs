use crate::{codec::CodecError, nonce::EncodingError, types::LegacyWithdrawal};
use alloy_primitives::{Address, B256, U256};
use config::ConfigError;
use std::fmt;
use thiserror::Error;

/// Identifying fields of a legacy withdrawal, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalId {
    pub sender: Address,
    pub target: Address,
    pub nonce: U256,
}

impl From<&LegacyWithdrawal> for WithdrawalId {
    fn from(withdrawal: &LegacyWithdrawal) -> Self {
        Self {
            sender: withdrawal.sender,
            target: withdrawal.target,
            nonce: withdrawal.nonce,
        }
    }
}

impl fmt::Display for WithdrawalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sender={} target={} nonce={}",
            self.sender, self.target, self.nonce
        )
    }
}

#[derive(Error, Debug)]
pub enum MigrationError {
    /// The legacy slot does not hold the relayed sentinel
    #[error("unverified withdrawal ({id}): legacy slot {slot} holds {found}")]
    UnverifiedWithdrawal {
        id: WithdrawalId,
        slot: B256,
        found: B256,
    },

    /// A field of the withdrawal cannot be encoded canonically
    #[error("encoding error ({id}): {source}")]
    Encoding {
        id: WithdrawalId,
        #[source]
        source: EncodingError,
    },

    /// The payload could not be decoded or the relay call could not be encoded
    #[error("codec error ({id}): {source}")]
    Codec {
        id: WithdrawalId,
        #[source]
        source: CodecError,
    },

    /// The migration parameters are incomplete
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl MigrationError {
    /// Identifying fields of the offending withdrawal, if the error concerns one.
    pub const fn withdrawal(&self) -> Option<&WithdrawalId> {
        match self {
            Self::UnverifiedWithdrawal { id, .. }
            | Self::Encoding { id, .. }
            | Self::Codec { id, .. } => Some(id),
            Self::Configuration(_) => None,
        }
    }

    /// Short name of the error kind, for structured logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnverifiedWithdrawal { .. } => "unverified_withdrawal",
            Self::Encoding { .. } => "encoding",
            Self::Codec { .. } => "codec",
            Self::Configuration(_) => "configuration",
        }
    }
}
