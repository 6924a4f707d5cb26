use crate::types::{LegacyWithdrawal, WithdrawalHash};
use alloy_primitives::keccak256;
use alloy_sol_types::{SolCall, SolValue};
use binding::{
    legacy::ILegacyCrossDomainMessenger, opstack::WithdrawalTransaction,
    predeploys::L2_CROSS_DOMAIN_MESSENGER,
};

pub fn compute_withdrawal_hash(tx: &WithdrawalTransaction) -> WithdrawalHash {
    // Solidity's Hashing.hashWithdrawal uses:
    // keccak256(abi.encode(_tx.nonce, _tx.sender, _tx.target, _tx.value, _tx.gasLimit, _tx.data))
    // We need to use abi_encode_sequence to encode the fields directly without a wrapper offset
    let encoded = (
        &tx.nonce,
        &tx.sender,
        &tx.target,
        &tx.value,
        &tx.gasLimit,
        &tx.data,
    )
        .abi_encode_sequence();

    keccak256(encoded)
}

/// Hash under which the legacy message passer recorded a withdrawal.
///
/// The legacy messenger passed `relayMessage(target, sender, data, nonce)`
/// calldata to the message passer, which stored
/// `keccak256(abi.encodePacked(_message, msg.sender))`. The caller was always
/// the L2CrossDomainMessenger predeploy.
pub fn compute_legacy_withdrawal_hash(withdrawal: &LegacyWithdrawal) -> WithdrawalHash {
    let mut encoded = ILegacyCrossDomainMessenger::relayMessageCall {
        _target: withdrawal.target,
        _sender: withdrawal.sender,
        _message: withdrawal.data.clone(),
        _messageNonce: withdrawal.nonce,
    }
    .abi_encode();
    encoded.extend_from_slice(L2_CROSS_DOMAIN_MESSENGER.as_slice());

    keccak256(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, Address, Bytes, B256, U256};

    fn legacy(nonce: u64) -> LegacyWithdrawal {
        LegacyWithdrawal {
            sender: Address::from([0x01; 20]),
            target: Address::from([0x02; 20]),
            data: Bytes::from(vec![0xaa, 0xbb, 0xcc]),
            nonce: U256::from(nonce),
        }
    }

    #[test]
    fn test_compute_withdrawal_hash_deterministic() {
        let tx = WithdrawalTransaction {
            nonce: U256::from(1),
            sender: Address::from([0x01; 20]),
            target: Address::from([0x02; 20]),
            value: U256::from(1_000_000),
            gasLimit: U256::from(100_000),
            data: Bytes::from(vec![0xaa, 0xbb, 0xcc]),
        };

        let hash1 = compute_withdrawal_hash(&tx);
        let hash2 = compute_withdrawal_hash(&tx);

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, B256::ZERO);
    }

    #[test]
    fn test_compute_withdrawal_hash_known_value() {
        // Real withdrawal from Unichain Mainnet
        // TX: 0x91b374b5403401198a892f62db8843b60125cfb3e28ec1664089d9158424dc4a
        let tx = WithdrawalTransaction {
            nonce: U256::from_be_bytes(hex!(
                "0001000000000000000000000000000000000000000000000000000000000818"
            )),
            sender: Address::from_slice(&hex!("000040D6c85A13a1AA74565FDe87e499dC023C6f")),
            target: Address::from_slice(&hex!("B03eEF386A61b5b462051636001485FFfdD3d843")),
            value: U256::ZERO,
            gasLimit: U256::from(200_000),
            data: Bytes::from(hex!(
                "095ea7b3000000000000000000000000000040d6c85a13a1aa74565fde87e499dc023c6fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            )),
        };

        // Expected hash from the MessagePassed event on chain
        let expected = B256::from_slice(&hex!(
            "49c43b60ec99e99046b54aec4c90419ff194300e567de63423c3b974ae46bd28"
        ));

        assert_eq!(compute_withdrawal_hash(&tx), expected);
    }

    #[test]
    fn test_legacy_hash_preimage() {
        let withdrawal = legacy(3);

        // selector ++ 4 head words ++ length word ++ one padded data word ++ messenger
        let mut preimage = ILegacyCrossDomainMessenger::relayMessageCall::SELECTOR.to_vec();
        preimage.extend_from_slice(&withdrawal.target.into_word().0);
        preimage.extend_from_slice(&withdrawal.sender.into_word().0);
        preimage.extend_from_slice(&U256::from(0x80).to_be_bytes::<32>());
        preimage.extend_from_slice(&U256::from(3).to_be_bytes::<32>());
        preimage.extend_from_slice(&U256::from(3).to_be_bytes::<32>());
        let mut data_word = [0u8; 32];
        data_word[..3].copy_from_slice(&[0xaa, 0xbb, 0xcc]);
        preimage.extend_from_slice(&data_word);
        preimage.extend_from_slice(L2_CROSS_DOMAIN_MESSENGER.as_slice());

        assert_eq!(compute_legacy_withdrawal_hash(&withdrawal), keccak256(preimage));
    }

    #[test]
    fn test_legacy_hash_collision_resistance() {
        let mut hashes = std::collections::HashSet::new();

        for nonce in 100..110 {
            assert!(hashes.insert(compute_legacy_withdrawal_hash(&legacy(nonce))));
        }

        // Swapping sender and target must not produce the same hash
        let mut swapped = legacy(100);
        std::mem::swap(&mut swapped.sender, &mut swapped.target);
        assert!(hashes.insert(compute_legacy_withdrawal_hash(&swapped)));

        assert_eq!(hashes.len(), 11);
    }
}
