use ::config::{NetworkConfig, NetworkConfigBuilder, NetworkType};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level migrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Network presets to start from
    pub network: NetworkType,

    /// L2 RPC endpoint url (for `precheck`)
    pub l2_rpc_url: Option<String>,

    /// L1CrossDomainMessenger override, required on a custom network
    pub l1_cross_domain_messenger: Option<Address>,

    /// L1StandardBridge override, required on a custom network
    pub l1_standard_bridge: Option<Address>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Network presets with the configured overrides applied.
    pub fn network_config(&self) -> NetworkConfig {
        let mut builder =
            NetworkConfigBuilder::from_config(NetworkConfig::from_network_type(self.network));

        if let Some(messenger) = self.l1_cross_domain_messenger {
            builder = builder.l1_cross_domain_messenger(messenger);
        }
        if let Some(bridge) = self.l1_standard_bridge {
            builder = builder.l1_standard_bridge(bridge);
        }

        builder.build()
    }
}
