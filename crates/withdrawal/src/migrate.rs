//! Migration of a single legacy withdrawal.

use crate::{
    codec::{MessageCodec, RelayMessage, SolMessageCodec},
    error::{MigrationError, WithdrawalId},
    hash::compute_withdrawal_hash,
    nonce::{encode_versioned_nonce, MessageVersion},
    slot::{mapping_slot, slot_for},
    store::StateStore,
    types::{LegacyWithdrawal, WithdrawalHash},
};
use alloy_primitives::{B256, U256};
use binding::opstack::WithdrawalTransaction;
use config::{ConfigError, Deployment, NetworkConfig};
use tracing::debug;

/// Value of a `sentMessages` entry that was set: ABI-encoded `true`.
pub const RELAYED: B256 = B256::with_last_byte(1);

/// Outcome of migrating one withdrawal.
#[derive(Debug, Clone)]
pub struct MigratedWithdrawal {
    /// Slot in the legacy message passer, cleared by the migration
    pub legacy_slot: B256,
    /// Slot in the new message passer, set to [`RELAYED`]
    pub slot: B256,
    /// Hash of the migrated withdrawal
    pub hash: WithdrawalHash,
    pub withdrawal: WithdrawalTransaction,
}

/// Verifies, transforms and records legacy withdrawals.
///
/// A successful [`WithdrawalMigrator::apply`] clears the legacy slot, so the
/// same legacy withdrawal can never be migrated twice.
#[derive(Debug, Clone)]
pub struct WithdrawalMigrator<C = SolMessageCodec> {
    deployment: Deployment,
    codec: C,
}

impl WithdrawalMigrator {
    pub fn new(deployment: Deployment) -> Result<Self, ConfigError> {
        Self::with_codec(deployment, SolMessageCodec)
    }

    /// Resolve the deployment from a network configuration.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, MigrationError> {
        Ok(Self::new(config.deployment()?)?)
    }
}

impl<C: MessageCodec> WithdrawalMigrator<C> {
    pub fn with_codec(deployment: Deployment, codec: C) -> Result<Self, ConfigError> {
        deployment.validate()?;
        Ok(Self { deployment, codec })
    }

    pub const fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Slot flagging `legacy` in the legacy message passer.
    pub fn legacy_slot(&self, legacy: &LegacyWithdrawal) -> B256 {
        slot_for(legacy, self.deployment.legacy_sent_messages_slot)
    }

    /// Check that the legacy message passer flagged `legacy` as sent.
    ///
    /// Returns the legacy slot on success.
    pub fn verify<S: StateStore + ?Sized>(
        &self,
        legacy: &LegacyWithdrawal,
        store: &S,
    ) -> Result<B256, MigrationError> {
        let slot = self.legacy_slot(legacy);
        let found = store.get_state(self.deployment.legacy_message_passer, slot);

        if found != RELAYED {
            return Err(MigrationError::UnverifiedWithdrawal {
                id: legacy.into(),
                slot,
                found,
            });
        }

        Ok(slot)
    }

    /// Rewrite `legacy` as a withdrawal relayed by the L1CrossDomainMessenger.
    pub fn transform(
        &self,
        legacy: &LegacyWithdrawal,
    ) -> Result<WithdrawalTransaction, MigrationError> {
        let value = self.bridged_value(legacy)?;

        let nonce = encode_versioned_nonce(legacy.nonce, MessageVersion::V1).map_err(|source| {
            MigrationError::Encoding {
                id: legacy.into(),
                source,
            }
        })?;

        let data = self
            .codec
            .encode_relay_message(&RelayMessage {
                nonce,
                sender: legacy.sender,
                target: legacy.target,
                value,
                min_gas_limit: U256::ZERO,
                message: legacy.data.clone(),
            })
            .map_err(|source| MigrationError::Codec {
                id: legacy.into(),
                source,
            })?;

        Ok(WithdrawalTransaction {
            nonce,
            sender: self.deployment.l2_cross_domain_messenger,
            target: self.deployment.l1_cross_domain_messenger,
            value,
            gasLimit: U256::ZERO,
            data,
        })
    }

    /// Verify and transform `legacy`, flag the result in the new message
    /// passer and clear the legacy flag.
    pub fn apply<S: StateStore + ?Sized>(
        &self,
        legacy: &LegacyWithdrawal,
        store: &mut S,
    ) -> Result<MigratedWithdrawal, MigrationError> {
        let legacy_slot = self.verify(legacy, store)?;
        let withdrawal = self.transform(legacy)?;

        let hash = compute_withdrawal_hash(&withdrawal);
        let slot = mapping_slot(hash, self.deployment.sent_messages_slot);

        store.set_state(self.deployment.message_passer, slot, RELAYED);
        store.set_state(self.deployment.legacy_message_passer, legacy_slot, B256::ZERO);

        debug!(
            withdrawal = %WithdrawalId::from(legacy),
            legacy_slot = %legacy_slot,
            slot = %slot,
            withdrawal_hash = %hash,
            value = %withdrawal.value,
            "Migrated withdrawal"
        );

        Ok(MigratedWithdrawal {
            legacy_slot,
            slot,
            hash,
            withdrawal,
        })
    }

    /// Value carried by a legacy bridge withdrawal, zero for anything else.
    fn bridged_value(&self, legacy: &LegacyWithdrawal) -> Result<U256, MigrationError> {
        let is_from_bridge = legacy.sender == self.deployment.l2_standard_bridge;
        let is_to_bridge = legacy.target == self.deployment.l1_standard_bridge;

        if !(is_from_bridge && is_to_bridge) {
            return Ok(U256::ZERO);
        }

        let finalization = self
            .codec
            .decode_bridge_finalization(&legacy.data)
            .map_err(|source| MigrationError::Codec {
                id: legacy.into(),
                source,
            })?;

        Ok(finalization.value())
    }
}
