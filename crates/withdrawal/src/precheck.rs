//! Pre-migration check of pending withdrawals.
//!
//! Unlike the batch driver, the check does not stop at the first failure: it
//! reports every pending withdrawal whose legacy slot is not flagged, so an
//! operator can fix the withdrawal list before the upgrade.
//!
//! The legacy slots can be read from a node at a pinned block with
//! [`fetch_legacy_slots`] and checked offline with [`find_unrelayed`].

use crate::{
    codec::MessageCodec,
    error::{MigrationError, WithdrawalId},
    migrate::WithdrawalMigrator,
    slot::slot_for,
    store::{MemoryStateStore, StateStore},
    types::PendingWithdrawal,
};
use alloy_primitives::{Address, B256, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::BlockNumberOrTag;
use config::Deployment;
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{debug, info, warn};

/// A pending withdrawal that the legacy message passer never flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrelayedWithdrawal {
    /// Position in the checked list
    pub index: usize,
    pub id: WithdrawalId,
    pub transaction_hash: Option<B256>,
    /// Legacy slot that was read
    pub slot: B256,
    /// Value found instead of the sentinel
    pub found: B256,
}

/// Return every withdrawal whose legacy slot does not hold the sentinel.
pub fn find_unrelayed<C, S>(
    migrator: &WithdrawalMigrator<C>,
    withdrawals: &[PendingWithdrawal],
    store: &S,
) -> Vec<UnrelayedWithdrawal>
where
    C: MessageCodec,
    S: StateStore + ?Sized,
{
    let mut unrelayed = Vec::new();

    for (index, pending) in withdrawals.iter().enumerate() {
        let Err(MigrationError::UnverifiedWithdrawal { id, slot, found }) =
            migrator.verify(&pending.withdrawal, store)
        else {
            continue;
        };

        warn!(
            index,
            withdrawal = %id,
            transaction_hash = ?pending.transaction_hash,
            slot = %slot,
            found = %found,
            "Legacy withdrawal not flagged as sent"
        );

        unrelayed.push(UnrelayedWithdrawal {
            index,
            id,
            transaction_hash: pending.transaction_hash,
            slot,
            found,
        });
    }

    info!(
        checked = withdrawals.len(),
        unrelayed = unrelayed.len(),
        "Checked legacy withdrawals"
    );

    unrelayed
}

/// Read the legacy slot of every withdrawal from a node.
///
/// `Latest` is resolved to a concrete block number first so that every read
/// sees the same state.
pub async fn fetch_legacy_slots<P>(
    provider: &P,
    deployment: &Deployment,
    withdrawals: &[PendingWithdrawal],
    block: BlockNumberOrTag,
) -> eyre::Result<MemoryStateStore>
where
    P: Provider,
{
    let block_number = match block {
        BlockNumberOrTag::Number(n) => n,
        BlockNumberOrTag::Latest => provider.get_block_number().await?,
        _ => eyre::bail!("Unsupported block tag: {:?}", block),
    };

    debug!(
        block = block_number,
        withdrawals = withdrawals.len(),
        "Reading legacy slots (snapshot taken)"
    );

    let mut store = MemoryStateStore::new();
    for pending in withdrawals {
        let slot = slot_for(&pending.withdrawal, deployment.legacy_sent_messages_slot);
        let value = read_slot_with_retry(
            provider,
            deployment.legacy_message_passer,
            slot,
            block_number,
        )
        .await?;

        store.set_state(deployment.legacy_message_passer, slot, value);
    }

    info!(
        block = block_number,
        read = withdrawals.len(),
        flagged = store.len(),
        "Fetched legacy slots"
    );

    Ok(store)
}

/// Read a single storage slot with retry and exponential backoff.
async fn read_slot_with_retry<P>(
    provider: &P,
    address: Address,
    slot: B256,
    block_number: u64,
) -> eyre::Result<B256>
where
    P: Provider,
{
    // Exponential backoff: 100ms, 200ms, 400ms, 800ms, 1.6s (max 5 attempts)
    let retry_strategy = ExponentialBackoff::from_millis(100).take(5);

    Retry::spawn(retry_strategy, || async move {
        provider
            .get_storage_at(address, U256::from_be_bytes(slot.0))
            .block_id(BlockNumberOrTag::Number(block_number).into())
            .await
            .map(|value| B256::from(value.to_be_bytes::<32>()))
            .map_err(|e| {
                warn!(
                    address = %address,
                    slot = %slot,
                    block = block_number,
                    error = %e,
                    "Storage read failed, will retry"
                );
                eyre::Report::from(e)
            })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{migrate::RELAYED, types::LegacyWithdrawal};
    use alloy_primitives::Bytes;
    use config::NetworkConfig;

    fn pending(nonce: u64) -> PendingWithdrawal {
        PendingWithdrawal {
            withdrawal: LegacyWithdrawal {
                sender: Address::repeat_byte(0x01),
                target: Address::repeat_byte(0x02),
                data: Bytes::new(),
                nonce: U256::from(nonce),
            },
            transaction_hash: Some(B256::repeat_byte(nonce as u8)),
        }
    }

    #[test]
    fn test_find_unrelayed_collects_all() {
        let migrator = WithdrawalMigrator::from_config(&NetworkConfig::mainnet()).unwrap();
        let withdrawals: Vec<_> = (0..5).map(pending).collect();
        let legacy = migrator.deployment().legacy_message_passer;

        let mut store = MemoryStateStore::new();
        store.set_state(legacy, migrator.legacy_slot(&withdrawals[0].withdrawal), RELAYED);
        store.set_state(legacy, migrator.legacy_slot(&withdrawals[2].withdrawal), RELAYED);
        store.set_state(
            legacy,
            migrator.legacy_slot(&withdrawals[4].withdrawal),
            B256::with_last_byte(7),
        );

        let unrelayed = find_unrelayed(&migrator, &withdrawals, &store);

        let indices: Vec<usize> = unrelayed.iter().map(|u| u.index).collect();
        assert_eq!(indices, [1, 3, 4]);
        assert_eq!(unrelayed[0].id.nonce, U256::from(1));
        assert_eq!(unrelayed[0].found, B256::ZERO);
        assert_eq!(unrelayed[0].transaction_hash, Some(B256::repeat_byte(1)));
        assert_eq!(unrelayed[2].found, B256::with_last_byte(7));
    }

    #[test]
    fn test_find_unrelayed_does_not_write() {
        let migrator = WithdrawalMigrator::from_config(&NetworkConfig::mainnet()).unwrap();
        let withdrawals = vec![pending(1)];

        let mut store = MemoryStateStore::new();
        store.set_state(
            migrator.deployment().legacy_message_passer,
            migrator.legacy_slot(&withdrawals[0].withdrawal),
            RELAYED,
        );
        let snapshot = store.clone();

        assert!(find_unrelayed(&migrator, &withdrawals, &store).is_empty());
        assert_eq!(store, snapshot);
    }
}
