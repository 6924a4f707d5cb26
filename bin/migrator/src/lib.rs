pub mod config;
pub mod snapshot;

use crate::config::Config;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types_eth::BlockNumberOrTag;
use withdrawal::{
    migrate_snapshot,
    precheck::{fetch_legacy_slots, find_unrelayed, UnrelayedWithdrawal},
    sort_by_nonce, MemoryStateStore, MigrationSummary, PendingWithdrawal, WithdrawalMigrator,
};

/// Create an HTTP provider for the L2 node.
pub fn create_provider(rpc_url: &str) -> eyre::Result<impl Provider + Clone> {
    let url = rpc_url
        .parse()
        .map_err(|e| eyre::eyre!("Invalid RPC URL {}: {}", rpc_url, e))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Migrate a storage snapshot.
///
/// Withdrawals are ordered by nonce before migration. The returned snapshot
/// only exists if every withdrawal migrated.
pub fn run_migration(
    config: &Config,
    mut withdrawals: Vec<PendingWithdrawal>,
    state: MemoryStateStore,
) -> eyre::Result<(MemoryStateStore, MigrationSummary)> {
    let migrator = WithdrawalMigrator::from_config(&config.network_config())?;

    sort_by_nonce(&mut withdrawals);
    let (state, summary) = migrate_snapshot(&migrator, &withdrawals, state)?;

    Ok((state, summary))
}

/// Check every withdrawal against the legacy message passer of a live node.
pub async fn run_precheck<P>(
    config: &Config,
    provider: &P,
    withdrawals: &[PendingWithdrawal],
    block: BlockNumberOrTag,
) -> eyre::Result<Vec<UnrelayedWithdrawal>>
where
    P: Provider,
{
    let migrator = WithdrawalMigrator::from_config(&config.network_config())?;
    let store = fetch_legacy_slots(provider, migrator.deployment(), withdrawals, block).await?;

    Ok(find_unrelayed(&migrator, withdrawals, &store))
}
