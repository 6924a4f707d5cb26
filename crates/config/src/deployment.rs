//! Resolved migration parameters.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A counterpart address was never configured
    #[error("missing address: {0}")]
    MissingAddress(&'static str),

    /// An address is configured as the zero address
    #[error("address {0} must not be the zero address")]
    ZeroAddress(&'static str),

    /// A mapping base slot was never configured
    #[error("missing storage slot: {0}")]
    MissingSlot(&'static str),

    /// Legacy and new mappings would share one contract's storage
    #[error("legacy and new message passer must be different contracts")]
    SharedMessagePasser,
}

/// Every address and storage constant the migration reads or writes.
///
/// Built through [`crate::NetworkConfig::deployment`], which validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Contract holding the legacy `sentMessages` mapping
    pub legacy_message_passer: Address,
    /// Base slot of the legacy mapping
    pub legacy_sent_messages_slot: U256,
    /// Contract holding the new `sentMessages` mapping
    pub message_passer: Address,
    /// Base slot of the new mapping
    pub sent_messages_slot: U256,
    /// Canonical sender of migrated withdrawals
    pub l2_cross_domain_messenger: Address,
    /// Legacy bridge whose withdrawals carry implicit value
    pub l2_standard_bridge: Address,
    /// Target of migrated withdrawals
    pub l1_cross_domain_messenger: Address,
    /// Counterpart of the legacy bridge
    pub l1_standard_bridge: Address,
}

impl Deployment {
    /// Reject zero addresses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let addresses = [
            ("legacy_message_passer", self.legacy_message_passer),
            ("message_passer", self.message_passer),
            ("l2_cross_domain_messenger", self.l2_cross_domain_messenger),
            ("l2_standard_bridge", self.l2_standard_bridge),
            ("l1_cross_domain_messenger", self.l1_cross_domain_messenger),
            ("l1_standard_bridge", self.l1_standard_bridge),
        ];

        for (name, address) in addresses {
            if address == Address::ZERO {
                return Err(ConfigError::ZeroAddress(name));
            }
        }

        if self.legacy_message_passer == self.message_passer {
            return Err(ConfigError::SharedMessagePasser);
        }

        Ok(())
    }
}
