//! Serialized identity envelope.
//!
//! `mspid` is only a routing hint naming the domain to validate against. It
//! is never evidence of membership.

use serde::{Deserialize, Serialize};

use crate::error::{MspError, Result};

/// Claimed MSP id plus raw credential bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedIdentity {
    pub mspid: String,
    pub id_bytes: Vec<u8>,
}

impl SerializedIdentity {
    pub fn new(mspid: impl Into<String>, id_bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            mspid: mspid.into(),
            id_bytes: id_bytes.into(),
        }
    }

    /// Encode to the JSON wire form
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| MspError::InvalidArgument(format!("failed to encode identity: {e}")))
    }

    /// Decode from the JSON wire form
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| MspError::InvalidArgument(format!("failed to decode serialized identity: {e}")))
    }
}
