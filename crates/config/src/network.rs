//! Network configuration for the withdrawal migration.
//!
//! Provides the L1 counterpart contracts and the L2 storage layout for each
//! network the upgrade runs on (mainnet, goerli), plus a custom network that
//! must be filled in explicitly.

use crate::deployment::{ConfigError, Deployment};
use alloy_primitives::{address, Address, U256};
use binding::predeploys;
use serde::{Deserialize, Serialize};

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Goerli,
    /// No presets for the L1 counterparts; every address must be supplied.
    Custom,
}

/// L1 counterpart contracts that migrated withdrawals are addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L1Config {
    /// Chain ID
    pub chain_id: u64,
    /// L1CrossDomainMessenger proxy, target of every migrated withdrawal
    pub cross_domain_messenger: Option<Address>,
    /// L1StandardBridge proxy, target of legacy bridge withdrawals
    pub standard_bridge: Option<Address>,
}

impl L1Config {
    /// Ethereum mainnet configuration.
    pub const fn mainnet() -> Self {
        Self {
            chain_id: 1,
            // https://etherscan.io/address/0x25ace71c97b33cc4729cf772ae268934f7ab5fa1
            cross_domain_messenger: Some(address!("25ace71c97b33cc4729cf772ae268934f7ab5fa1")),
            // https://etherscan.io/address/0x99c9fc46f92e8a1c0dec1b1747d010903e884be1
            standard_bridge: Some(address!("99c9fc46f92e8a1c0dec1b1747d010903e884be1")),
        }
    }

    /// Ethereum Goerli testnet configuration.
    pub const fn goerli() -> Self {
        Self {
            chain_id: 5,
            cross_domain_messenger: Some(address!("5086d1eef304eb5284a0f6720f79403b4e9be294")),
            standard_bridge: Some(address!("636af16bf2f682dd3109e60102b8e1a089fedaa8")),
        }
    }

    /// Custom L1 with no known counterparts.
    pub const fn custom(chain_id: u64) -> Self {
        Self {
            chain_id,
            cross_domain_messenger: None,
            standard_bridge: None,
        }
    }
}

/// L2 contracts and the storage layout of both `sentMessages` mappings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct L2Config {
    /// Chain ID
    pub chain_id: u64,
    /// Pre-upgrade message passer
    pub legacy_message_passer: Address,
    /// Base slot of the legacy `sentMessages` mapping
    pub legacy_sent_messages_slot: Option<U256>,
    /// L2ToL1MessagePasser
    pub message_passer: Address,
    /// Base slot of the new `sentMessages` mapping
    pub sent_messages_slot: Option<U256>,
    /// L2CrossDomainMessenger, sender of migrated withdrawals
    pub cross_domain_messenger: Address,
    /// L2StandardBridge, sender of legacy bridge withdrawals
    pub standard_bridge: Address,
}

impl L2Config {
    /// Predeploy layout shared by every OP Stack chain.
    pub const fn predeploys(chain_id: u64) -> Self {
        Self {
            chain_id,
            legacy_message_passer: predeploys::LEGACY_MESSAGE_PASSER,
            legacy_sent_messages_slot: Some(U256::ZERO),
            message_passer: predeploys::L2_TO_L1_MESSAGE_PASSER,
            sent_messages_slot: Some(U256::ZERO),
            cross_domain_messenger: predeploys::L2_CROSS_DOMAIN_MESSENGER,
            standard_bridge: predeploys::L2_STANDARD_BRIDGE,
        }
    }

    /// OP Mainnet configuration.
    pub const fn mainnet() -> Self {
        Self::predeploys(10)
    }

    /// OP Goerli configuration.
    pub const fn goerli() -> Self {
        Self::predeploys(420)
    }
}

/// Complete network configuration for the migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// L1 counterparts
    pub l1: L1Config,
    /// L2 contracts and storage layout
    pub l2: L2Config,
}

impl NetworkConfig {
    /// Create mainnet configuration.
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            l1: L1Config::mainnet(),
            l2: L2Config::mainnet(),
        }
    }

    /// Create testnet (Goerli) configuration.
    pub const fn goerli() -> Self {
        Self {
            network_type: NetworkType::Goerli,
            l1: L1Config::goerli(),
            l2: L2Config::goerli(),
        }
    }

    /// Create a custom configuration. L1 counterparts start unset.
    pub const fn custom() -> Self {
        Self {
            network_type: NetworkType::Custom,
            l1: L1Config::custom(0),
            l2: L2Config::predeploys(0),
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Goerli => Self::goerli(),
            NetworkType::Custom => Self::custom(),
        }
    }

    /// Resolve every address and slot the migration needs.
    ///
    /// Fails if an L1 counterpart or a base slot is unset, or if a counterpart
    /// is the zero address.
    pub fn deployment(&self) -> Result<Deployment, ConfigError> {
        let deployment = Deployment {
            legacy_message_passer: self.l2.legacy_message_passer,
            legacy_sent_messages_slot: self
                .l2
                .legacy_sent_messages_slot
                .ok_or(ConfigError::MissingSlot("legacy_sent_messages_slot"))?,
            message_passer: self.l2.message_passer,
            sent_messages_slot: self
                .l2
                .sent_messages_slot
                .ok_or(ConfigError::MissingSlot("sent_messages_slot"))?,
            l2_cross_domain_messenger: self.l2.cross_domain_messenger,
            l2_standard_bridge: self.l2.standard_bridge,
            l1_cross_domain_messenger: self
                .l1
                .cross_domain_messenger
                .ok_or(ConfigError::MissingAddress("l1_cross_domain_messenger"))?,
            l1_standard_bridge: self
                .l1
                .standard_bridge
                .ok_or(ConfigError::MissingAddress("l1_standard_bridge"))?,
        };
        deployment.validate()?;

        Ok(deployment)
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    network_type: NetworkType,
    l1: L1Config,
    l2: L2Config,
}

impl NetworkConfigBuilder {
    /// Start with mainnet defaults.
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            l1: L1Config::mainnet(),
            l2: L2Config::mainnet(),
        }
    }

    /// Start with testnet defaults.
    pub const fn goerli() -> Self {
        Self {
            network_type: NetworkType::Goerli,
            l1: L1Config::goerli(),
            l2: L2Config::goerli(),
        }
    }

    /// Start from an existing configuration.
    pub const fn from_config(config: NetworkConfig) -> Self {
        Self {
            network_type: config.network_type,
            l1: config.l1,
            l2: config.l2,
        }
    }

    /// Override the L1CrossDomainMessenger address.
    pub const fn l1_cross_domain_messenger(mut self, address: Address) -> Self {
        self.l1.cross_domain_messenger = Some(address);
        self
    }

    /// Override the L1StandardBridge address.
    pub const fn l1_standard_bridge(mut self, address: Address) -> Self {
        self.l1.standard_bridge = Some(address);
        self
    }

    /// Override the base slot of the legacy `sentMessages` mapping.
    pub const fn legacy_sent_messages_slot(mut self, slot: U256) -> Self {
        self.l2.legacy_sent_messages_slot = Some(slot);
        self
    }

    /// Override the base slot of the new `sentMessages` mapping.
    pub const fn sent_messages_slot(mut self, slot: U256) -> Self {
        self.l2.sent_messages_slot = Some(slot);
        self
    }

    /// Build the network configuration.
    pub const fn build(self) -> NetworkConfig {
        NetworkConfig {
            network_type: self.network_type,
            l1: self.l1,
            l2: self.l2,
        }
    }
}
