//! Migration of pre-upgrade withdrawals into the L2ToL1MessagePasser layout.
//!
//! Every legacy withdrawal that was sent before the upgrade is recorded as a
//! `true` flag in the legacy message passer's `sentMessages` mapping. The
//! migration checks that flag, rewrites the withdrawal as a versioned message
//! relayed through the L1CrossDomainMessenger, and flags the rewritten
//! withdrawal in the new message passer so it can be proven after the upgrade.
//!
//! The pieces, leaves first:
//! - [`slot`]: mapping slot derivation for both layouts
//! - [`nonce`]: versioned nonce encoding
//! - [`codec`]: typed decoding of bridge calls and encoding of relay calls
//! - [`migrate`]: verification and transformation of a single withdrawal
//! - [`batch`]: ordered, fail-fast migration of a withdrawal list
//! - [`precheck`]: collect-all verification against local or remote state

pub mod batch;
pub mod codec;
pub mod error;
pub mod hash;
pub mod migrate;
pub mod nonce;
pub mod precheck;
pub mod slot;
pub mod store;
pub mod types;

pub use batch::{migrate_snapshot, migrate_withdrawals, sort_by_nonce, MigrationSummary};
pub use error::{MigrationError, WithdrawalId};
pub use migrate::{MigratedWithdrawal, WithdrawalMigrator, RELAYED};
pub use store::{MemoryStateStore, StagedStore, StateStore};
pub use types::{LegacyWithdrawal, PendingWithdrawal, WithdrawalHash};
