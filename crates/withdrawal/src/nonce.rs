//! Versioned message nonces.
//!
//! The version lives in the top two bytes of the nonce and the counter in
//! the remaining 240 bits:
//!
//! ```text
//! | version (16 bits) | counter (240 bits) |
//! ```

use alloy_primitives::U256;
use thiserror::Error;

/// Bit offset of the version tag.
pub const NONCE_VERSION_SHIFT: usize = 240;

/// Largest counter that fits below the version tag.
pub const MAX_NONCE_COUNTER: U256 =
    U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 16]);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The counter overlaps the version bits
    #[error("nonce counter {0} does not fit in 240 bits")]
    CounterOverflow(U256),

    /// The version tag is not one of the defined message versions
    #[error("unsupported message version {0}")]
    UnsupportedVersion(u16),
}

/// Cross-domain message versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MessageVersion {
    /// Pre-upgrade messages
    Legacy = 0,
    /// Messages relayed through the current messenger
    V1 = 1,
}

impl TryFrom<u16> for MessageVersion {
    type Error = EncodingError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Legacy),
            1 => Ok(Self::V1),
            other => Err(EncodingError::UnsupportedVersion(other)),
        }
    }
}

/// Pack a counter and a version into one nonce.
pub fn encode_versioned_nonce(counter: U256, version: MessageVersion) -> Result<U256, EncodingError> {
    if counter > MAX_NONCE_COUNTER {
        return Err(EncodingError::CounterOverflow(counter));
    }

    Ok((U256::from(version as u16) << NONCE_VERSION_SHIFT) | counter)
}

/// Split a nonce into its counter and version.
pub fn decode_versioned_nonce(nonce: U256) -> Result<(U256, MessageVersion), EncodingError> {
    let bytes = nonce.to_be_bytes::<32>();
    let version = MessageVersion::try_from(u16::from_be_bytes([bytes[0], bytes[1]]))?;

    Ok((nonce & MAX_NONCE_COUNTER, version))
}
