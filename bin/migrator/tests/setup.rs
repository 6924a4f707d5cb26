//! Common test setup utilities shared across integration tests.
#![allow(dead_code)]

use alloy_primitives::{Address, Bytes, U256};
use migrator::config::Config;
use withdrawal::{LegacyWithdrawal, MemoryStateStore, PendingWithdrawal, StateStore, RELAYED};

/// Load test configuration. Panics if not found or invalid.
pub fn load_test_config() -> Config {
    Config::from_file("tests/test-config.toml").expect("Failed to load tests/test-config.toml.")
}

/// L2 RPC URL, from the `L2_RPC_URL` environment variable or the test config.
pub fn l2_rpc_url() -> String {
    std::env::var("L2_RPC_URL")
        .ok()
        .or_else(|| load_test_config().l2_rpc_url)
        .expect("Set L2_RPC_URL or l2_rpc_url in tests/test-config.toml")
}

pub fn pending(nonce: u64, data: Bytes) -> PendingWithdrawal {
    LegacyWithdrawal {
        sender: Address::repeat_byte(0x11),
        target: Address::repeat_byte(0x22),
        data,
        nonce: U256::from(nonce),
    }
    .into()
}

/// Snapshot in which every given withdrawal is flagged in the legacy message passer.
pub fn flagged_snapshot(config: &Config, withdrawals: &[PendingWithdrawal]) -> MemoryStateStore {
    let migrator = withdrawal::WithdrawalMigrator::from_config(&config.network_config())
        .expect("test config must resolve to a deployment");

    let mut state = MemoryStateStore::new();
    for pending in withdrawals {
        state.set_state(
            migrator.deployment().legacy_message_passer,
            migrator.legacy_slot(&pending.withdrawal),
            RELAYED,
        );
    }
    state
}

/// Unique path under the system temp dir.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("migrator-{}-{}", std::process::id(), name))
}
