//! Storage slot derivation for the `sentMessages` mappings.
//!
//! Both message passers declare `mapping(bytes32 => bool) sentMessages`.
//! Solidity places the value for `key` at `keccak256(key ‖ uint256(base_slot))`.

use crate::{
    hash::{compute_legacy_withdrawal_hash, compute_withdrawal_hash},
    types::{LegacyWithdrawal, WithdrawalHash},
};
use alloy_primitives::{keccak256, B256, U256};
use binding::opstack::WithdrawalTransaction;

/// A message whose hash keys a `sentMessages` mapping.
pub trait MessageHash {
    fn message_hash(&self) -> WithdrawalHash;
}

impl MessageHash for LegacyWithdrawal {
    fn message_hash(&self) -> WithdrawalHash {
        compute_legacy_withdrawal_hash(self)
    }
}

impl MessageHash for WithdrawalTransaction {
    fn message_hash(&self) -> WithdrawalHash {
        compute_withdrawal_hash(self)
    }
}

/// Compute the storage slot of a `bytes32`-keyed mapping entry.
pub fn mapping_slot(key: B256, base_slot: U256) -> B256 {
    let mut data = [0u8; 64];
    data[0..32].copy_from_slice(key.as_slice());
    data[32..64].copy_from_slice(&base_slot.to_be_bytes::<32>());
    keccak256(data)
}

/// Compute the storage slot flagging `message` in a mapping at `base_slot`.
pub fn slot_for<M: MessageHash + ?Sized>(message: &M, base_slot: U256) -> B256 {
    mapping_slot(message.message_hash(), base_slot)
}
