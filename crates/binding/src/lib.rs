//! Contract bindings for the withdrawal migration.
//!
//! This crate consolidates the Solidity interfaces whose storage layout or
//! calldata the migration has to reproduce:
//! - Pre-upgrade contracts (legacy message passer and cross-domain messenger)
//! - OP Stack contracts (L2ToL1MessagePasser, L1CrossDomainMessenger, L1StandardBridge)
//! - Predeploy addresses shared by both sides of the upgrade
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod legacy;
pub mod opstack;
pub mod predeploys;
