//! JSON files exchanged with the host: the pending withdrawal list and
//! contract storage snapshots.

use eyre::WrapErr;
use std::path::Path;
use withdrawal::{MemoryStateStore, PendingWithdrawal};

/// Load the pending withdrawal list.
pub fn load_withdrawals(path: impl AsRef<Path>) -> eyre::Result<Vec<PendingWithdrawal>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read withdrawals from {}", path.display()))?;

    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Invalid withdrawal list in {}", path.display()))
}

/// Load a storage snapshot.
pub fn load_state(path: impl AsRef<Path>) -> eyre::Result<MemoryStateStore> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read state from {}", path.display()))?;

    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Invalid state snapshot in {}", path.display()))
}

/// Write a storage snapshot.
pub fn write_state(path: impl AsRef<Path>, state: &MemoryStateStore) -> eyre::Result<()> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(state)?;

    std::fs::write(path, contents)
        .wrap_err_with(|| format!("Failed to write state to {}", path.display()))
}
