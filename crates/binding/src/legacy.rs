//! Pre-upgrade contract bindings.
//!
//! Only the pieces needed to recompute legacy message hashes are included.

use alloy_sol_types::sol;

sol! {
    /// Legacy L2CrossDomainMessenger.
    ///
    /// A legacy withdrawal is identified by the calldata of this call, followed
    /// by the address of the messenger that passed it to the message passer.
    interface ILegacyCrossDomainMessenger {
        /// Relay a message on L1 (pre-upgrade argument order)
        function relayMessage(
            address _target,
            address _sender,
            bytes memory _message,
            uint256 _messageNonce
        ) external;
    }

    /// Legacy message passer predeploy (`0x4200000000000000000000000000000000000000`)
    interface ILegacyMessagePasser {
        /// `mapping(bytes32 => bool)` at storage slot 0
        function sentMessages(bytes32) external view returns (bool);

        /// Store a message hash, keyed together with `msg.sender`
        function passMessageToL1(bytes memory _message) external;
    }
}
