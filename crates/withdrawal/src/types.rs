use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

pub type WithdrawalHash = B256;

/// A withdrawal as recorded by the pre-upgrade message passer.
///
/// Identified by all four fields; the nonce is the plain, unversioned
/// counter of the legacy messenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyWithdrawal {
    pub sender: Address,
    pub target: Address,
    pub data: Bytes,
    pub nonce: U256,
}

/// A legacy withdrawal expected to be flagged as sent in the legacy message passer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingWithdrawal {
    #[serde(flatten)]
    pub withdrawal: LegacyWithdrawal,
    /// L2 transaction that initiated the withdrawal, kept for audit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
}

impl From<LegacyWithdrawal> for PendingWithdrawal {
    fn from(withdrawal: LegacyWithdrawal) -> Self {
        Self {
            withdrawal,
            transaction_hash: None,
        }
    }
}
