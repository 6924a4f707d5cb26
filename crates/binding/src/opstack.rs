//! OP Stack contract bindings.
//!
//! Includes the contracts a migrated withdrawal is expressed against:
//! - L2ToL1MessagePasser (L2 predeploy, new `sentMessages` mapping)
//! - L1CrossDomainMessenger (target of every migrated withdrawal)
//! - L1StandardBridge (whose finalization calls carry implicit value)

use alloy_sol_types::sol;

sol! {
    /// L2ToL1MessagePasser - L2 predeploy contract for initiating withdrawals
    /// Address: 0x4200000000000000000000000000000000000016 (on all OP Stack chains)
    interface IL2ToL1MessagePasser {
        /// Emitted when a withdrawal is initiated on L2
        event MessagePassed(
            uint256 indexed nonce,
            address indexed sender,
            address indexed target,
            uint256 value,
            uint256 gasLimit,
            bytes data,
            bytes32 withdrawalHash
        );

        /// Check if a withdrawal message has been sent
        function sentMessages(bytes32) external view returns (bool);

        /// Get the current message nonce (with version encoded in top 2 bytes)
        function messageNonce() external view returns (uint256);
    }

    /// L1CrossDomainMessenger - re-delivers cross-domain messages on L1
    interface IL1CrossDomainMessenger {
        /// Relay a versioned message
        function relayMessage(
            uint256 _nonce,
            address _sender,
            address _target,
            uint256 _value,
            uint256 _minGasLimit,
            bytes calldata _message
        ) external payable;
    }

    /// L1StandardBridge - asset bridge finalization entrypoints
    interface IL1StandardBridge {
        /// Finalize an ETH withdrawal; `_amount` is the value carried by the message
        function finalizeETHWithdrawal(
            address _from,
            address _to,
            uint256 _amount,
            bytes calldata _extraData
        ) external payable;

        /// Finalize an ERC20 withdrawal; no native value is attached
        function finalizeERC20Withdrawal(
            address _l1Token,
            address _l2Token,
            address _from,
            address _to,
            uint256 _amount,
            bytes calldata _extraData
        ) external;
    }

    /// Withdrawal transaction structure (shared across contracts)
    #[derive(Debug, PartialEq, Eq)]
    struct WithdrawalTransaction {
        uint256 nonce;
        address sender;
        address target;
        uint256 value;
        uint256 gasLimit;
        bytes data;
    }
}
