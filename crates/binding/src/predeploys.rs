//! L2 predeploy addresses.
//!
//! These live at the same address on every OP Stack chain and are part of the
//! protocol, so they are constants rather than configuration.

use alloy_primitives::{address, Address};

/// Pre-upgrade message passer holding `sentMessages` for legacy withdrawals.
pub const LEGACY_MESSAGE_PASSER: Address = address!("4200000000000000000000000000000000000000");

/// L2CrossDomainMessenger. Sender of every legacy message and of migrated withdrawals.
pub const L2_CROSS_DOMAIN_MESSENGER: Address =
    address!("4200000000000000000000000000000000000007");

/// L2StandardBridge.
pub const L2_STANDARD_BRIDGE: Address = address!("4200000000000000000000000000000000000010");

/// L2ToL1MessagePasser holding `sentMessages` for current withdrawals.
pub const L2_TO_L1_MESSAGE_PASSER: Address =
    address!("4200000000000000000000000000000000000016");
