//! Typed decoding and encoding of the cross-domain calls the migration touches.
//!
//! Legacy bridge withdrawals carry their value implicitly, inside the
//! `finalizeETHWithdrawal` call they deliver to the L1StandardBridge. Migrated
//! withdrawals are re-expressed as `relayMessage` calls to the
//! L1CrossDomainMessenger.

use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use alloy_sol_types::SolCall;
use binding::opstack::{IL1CrossDomainMessenger, IL1StandardBridge};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The payload cannot even hold a function selector
    #[error("payload of {0} bytes is too short for a call")]
    Truncated(usize),

    /// The payload is not a known bridge finalization call
    #[error("unknown bridge call selector {0}")]
    UnknownSelector(FixedBytes<4>),

    /// The arguments do not match the call's shape
    #[error("malformed {call} arguments: {source}")]
    Malformed {
        call: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },
}

/// A decoded L1StandardBridge finalization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeFinalization {
    Eth {
        from: Address,
        to: Address,
        amount: U256,
        extra_data: Bytes,
    },
    Erc20 {
        l1_token: Address,
        l2_token: Address,
        from: Address,
        to: Address,
        amount: U256,
        extra_data: Bytes,
    },
}

impl BridgeFinalization {
    /// Native value the L1 messenger must attach to deliver this call.
    pub const fn value(&self) -> U256 {
        match self {
            Self::Eth { amount, .. } => *amount,
            Self::Erc20 { .. } => U256::ZERO,
        }
    }
}

/// Arguments of `L1CrossDomainMessenger.relayMessage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayMessage {
    pub nonce: U256,
    pub sender: Address,
    pub target: Address,
    pub value: U256,
    pub min_gas_limit: U256,
    pub message: Bytes,
}

/// Codec for the call shapes the migration needs.
pub trait MessageCodec {
    /// Decode a legacy bridge payload.
    fn decode_bridge_finalization(&self, data: &[u8]) -> Result<BridgeFinalization, CodecError>;

    /// Encode a relay call, selector included.
    fn encode_relay_message(&self, message: &RelayMessage) -> Result<Bytes, CodecError>;
}

/// [`MessageCodec`] backed by the `sol!` bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolMessageCodec;

impl MessageCodec for SolMessageCodec {
    fn decode_bridge_finalization(&self, data: &[u8]) -> Result<BridgeFinalization, CodecError> {
        let Some(selector) = data.get(..4) else {
            return Err(CodecError::Truncated(data.len()));
        };

        if selector == IL1StandardBridge::finalizeETHWithdrawalCall::SELECTOR {
            let call = IL1StandardBridge::finalizeETHWithdrawalCall::abi_decode(data).map_err(
                |source| CodecError::Malformed {
                    call: IL1StandardBridge::finalizeETHWithdrawalCall::SIGNATURE,
                    source,
                },
            )?;

            return Ok(BridgeFinalization::Eth {
                from: call._from,
                to: call._to,
                amount: call._amount,
                extra_data: call._extraData,
            });
        }

        if selector == IL1StandardBridge::finalizeERC20WithdrawalCall::SELECTOR {
            let call = IL1StandardBridge::finalizeERC20WithdrawalCall::abi_decode(data).map_err(
                |source| CodecError::Malformed {
                    call: IL1StandardBridge::finalizeERC20WithdrawalCall::SIGNATURE,
                    source,
                },
            )?;

            return Ok(BridgeFinalization::Erc20 {
                l1_token: call._l1Token,
                l2_token: call._l2Token,
                from: call._from,
                to: call._to,
                amount: call._amount,
                extra_data: call._extraData,
            });
        }

        Err(CodecError::UnknownSelector(FixedBytes::from_slice(selector)))
    }

    fn encode_relay_message(&self, message: &RelayMessage) -> Result<Bytes, CodecError> {
        let call = IL1CrossDomainMessenger::relayMessageCall {
            _nonce: message.nonce,
            _sender: message.sender,
            _target: message.target,
            _value: message.value,
            _minGasLimit: message.min_gas_limit,
            _message: message.message.clone(),
        };

        Ok(call.abi_encode().into())
    }
}
