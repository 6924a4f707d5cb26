//! Ordered migration of a withdrawal list.
//!
//! Withdrawals are migrated in the order given, stopping at the first error.
//! [`migrate_withdrawals`] leaves earlier writes in place when it fails;
//! [`migrate_snapshot`] stages every write and only returns an updated
//! snapshot if the whole batch succeeded.

use crate::{
    codec::MessageCodec,
    error::{MigrationError, WithdrawalId},
    migrate::WithdrawalMigrator,
    store::{MemoryStateStore, StagedStore, StateStore},
    types::PendingWithdrawal,
};
use alloy_primitives::U256;
use tracing::{error, info};

/// Totals of a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Number of withdrawals migrated
    pub migrated: usize,
    /// Sum of native value carried by migrated withdrawals
    pub bridged_value: U256,
}

/// Sort withdrawals by ascending legacy nonce, keeping the input order of equal nonces.
pub fn sort_by_nonce(withdrawals: &mut [PendingWithdrawal]) {
    withdrawals.sort_by_key(|pending| pending.withdrawal.nonce);
}

/// Migrate `withdrawals` in order, aborting on the first failure.
///
/// Writes of withdrawals migrated before the failure are not rolled back.
pub fn migrate_withdrawals<C, S>(
    migrator: &WithdrawalMigrator<C>,
    withdrawals: &[PendingWithdrawal],
    store: &mut S,
) -> Result<MigrationSummary, MigrationError>
where
    C: MessageCodec,
    S: StateStore + ?Sized,
{
    let mut summary = MigrationSummary::default();

    for (index, pending) in withdrawals.iter().enumerate() {
        let migrated = migrator
            .apply(&pending.withdrawal, &mut *store)
            .inspect_err(|e| {
                error!(
                    index,
                    withdrawal = %WithdrawalId::from(&pending.withdrawal),
                    transaction_hash = ?pending.transaction_hash,
                    kind = e.kind(),
                    error = %e,
                    "Withdrawal migration failed, aborting batch"
                );
            })?;

        summary.migrated += 1;
        summary.bridged_value += migrated.withdrawal.value;
    }

    info!(
        migrated = summary.migrated,
        bridged_value = %summary.bridged_value,
        "Migrated withdrawals"
    );

    Ok(summary)
}

/// Migrate `withdrawals` against a snapshot, all or nothing.
///
/// Returns the updated snapshot, or the first error. Nothing is written to
/// the snapshot unless every withdrawal migrated.
pub fn migrate_snapshot<C: MessageCodec>(
    migrator: &WithdrawalMigrator<C>,
    withdrawals: &[PendingWithdrawal],
    mut snapshot: MemoryStateStore,
) -> Result<(MemoryStateStore, MigrationSummary), MigrationError> {
    let mut staged = StagedStore::new(&mut snapshot);
    let summary = migrate_withdrawals(migrator, withdrawals, &mut staged)?;
    let writes = staged.commit();

    info!(writes, "Committed migrated snapshot");

    Ok((snapshot, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{migrate::RELAYED, types::LegacyWithdrawal};
    use alloy_primitives::{Address, Bytes, B256};
    use alloy_sol_types::SolCall;
    use binding::{opstack::IL1StandardBridge, predeploys};
    use config::NetworkConfig;

    fn migrator() -> WithdrawalMigrator {
        WithdrawalMigrator::from_config(&NetworkConfig::mainnet()).unwrap()
    }

    fn pending(nonce: u64) -> PendingWithdrawal {
        LegacyWithdrawal {
            sender: Address::repeat_byte(0x01),
            target: Address::repeat_byte(0x02),
            data: Bytes::from(vec![0xab; 3]),
            nonce: U256::from(nonce),
        }
        .into()
    }

    fn relay_all(
        migrator: &WithdrawalMigrator,
        withdrawals: &[PendingWithdrawal],
    ) -> MemoryStateStore {
        let mut store = MemoryStateStore::new();
        for pending in withdrawals {
            store.set_state(
                migrator.deployment().legacy_message_passer,
                migrator.legacy_slot(&pending.withdrawal),
                RELAYED,
            );
        }
        store
    }

    #[test]
    fn test_sort_by_nonce_is_stable() {
        let mut first = pending(5);
        first.transaction_hash = Some(B256::repeat_byte(1));
        let mut second = pending(5);
        second.transaction_hash = Some(B256::repeat_byte(2));

        let mut withdrawals = vec![pending(9), first.clone(), pending(1), second.clone()];
        sort_by_nonce(&mut withdrawals);

        let nonces: Vec<U256> = withdrawals.iter().map(|p| p.withdrawal.nonce).collect();
        assert_eq!(nonces, [1u64, 5, 5, 9].map(U256::from));
        assert_eq!(withdrawals[1], first);
        assert_eq!(withdrawals[2], second);
    }

    #[test]
    fn test_migrate_all() {
        let migrator = migrator();
        let amount = U256::from(1_000);
        let bridge = PendingWithdrawal::from(LegacyWithdrawal {
            sender: predeploys::L2_STANDARD_BRIDGE,
            target: migrator.deployment().l1_standard_bridge,
            data: IL1StandardBridge::finalizeETHWithdrawalCall {
                _from: Address::repeat_byte(0x0a),
                _to: Address::repeat_byte(0x0b),
                _amount: amount,
                _extraData: Bytes::new(),
            }
            .abi_encode()
            .into(),
            nonce: U256::from(4),
        });
        let withdrawals = vec![pending(1), pending(2), bridge];
        let mut store = relay_all(&migrator, &withdrawals);

        let summary = migrate_withdrawals(&migrator, &withdrawals, &mut store).unwrap();

        assert_eq!(
            summary,
            MigrationSummary {
                migrated: 3,
                bridged_value: amount,
            }
        );
        assert!(store
            .storage(migrator.deployment().legacy_message_passer)
            .is_none());
        assert_eq!(
            store.storage(migrator.deployment().message_passer).map(|s| s.len()),
            Some(3)
        );
    }

    #[test]
    fn test_fail_fast_keeps_earlier_writes() {
        let migrator = migrator();
        let withdrawals = vec![pending(1), pending(2), pending(3)];
        // Withdrawal 2 was never sent
        let mut store = relay_all(
            &migrator,
            &[withdrawals[0].clone(), withdrawals[2].clone()],
        );

        let err = migrate_withdrawals(&migrator, &withdrawals, &mut store).unwrap_err();
        assert!(matches!(
            err,
            MigrationError::UnverifiedWithdrawal { id, .. } if id.nonce == U256::from(2)
        ));

        // First migrated, third never attempted
        let legacy = migrator.deployment().legacy_message_passer;
        assert_eq!(
            store.get_state(legacy, migrator.legacy_slot(&withdrawals[0].withdrawal)),
            B256::ZERO
        );
        assert_eq!(
            store.get_state(legacy, migrator.legacy_slot(&withdrawals[2].withdrawal)),
            RELAYED
        );
        assert_eq!(
            store.storage(migrator.deployment().message_passer).map(|s| s.len()),
            Some(1)
        );
    }

    #[test]
    fn test_duplicate_withdrawal_rejected() {
        let migrator = migrator();
        let withdrawals = vec![pending(1), pending(1)];
        let mut store = relay_all(&migrator, &withdrawals[..1]);

        let err = migrate_withdrawals(&migrator, &withdrawals, &mut store).unwrap_err();
        assert!(matches!(err, MigrationError::UnverifiedWithdrawal { .. }));
    }

    #[test]
    fn test_migrate_snapshot_is_all_or_nothing() {
        let migrator = migrator();
        let withdrawals = vec![pending(1), pending(2)];
        let snapshot = relay_all(&migrator, &withdrawals[..1]);

        let err = migrate_snapshot(&migrator, &withdrawals, snapshot.clone()).unwrap_err();
        assert!(matches!(err, MigrationError::UnverifiedWithdrawal { .. }));

        let full = relay_all(&migrator, &withdrawals);
        let (migrated, summary) = migrate_snapshot(&migrator, &withdrawals, full).unwrap();
        assert_eq!(summary.migrated, 2);
        assert_eq!(migrated.len(), 2);
        assert!(migrated
            .storage(migrator.deployment().legacy_message_passer)
            .is_none());
    }

    #[test]
    fn test_empty_batch() {
        let migrator = migrator();
        let mut store = MemoryStateStore::new();

        let summary = migrate_withdrawals(&migrator, &[], &mut store).unwrap();
        assert_eq!(summary, MigrationSummary::default());
        assert!(store.is_empty());
    }
}
