//! Configuration types for the withdrawal migration.
//!
//! This crate provides:
//! - Network configurations (mainnet, goerli, custom)
//! - Counterpart contract addresses on L1 and storage layout constants on L2
//! - Validation into a fully resolved [`Deployment`]

pub mod deployment;
pub mod network;

pub use deployment::{ConfigError, Deployment};
pub use network::{L1Config, L2Config, NetworkConfig, NetworkConfigBuilder, NetworkType};
