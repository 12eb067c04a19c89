//! MSP configuration types.
//!
//! This module defines the configuration data structures consumed by the
//! registry. Decoding them from their wire envelope is the caller's job.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MspError;

/// Default upper bound on certificates walked between a credential and a root.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 8;

/// Configuration kinds the registry knows how to build a trust domain from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKind {
    /// X.509 root-of-trust MSP
    Fabric,
}

impl ConfigKind {
    /// Discriminator value carried on the wire
    pub const fn wire_value(self) -> i32 {
        match self {
            ConfigKind::Fabric => 0,
        }
    }
}

impl TryFrom<i32> for ConfigKind {
    type Error = MspError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ConfigKind::Fabric),
            other => Err(MspError::UnsupportedConfigKind(other)),
        }
    }
}

/// Outer MSP configuration envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspConfig {
    /// Raw configuration kind discriminator
    pub kind: i32,

    /// Inner payload, present for every well-formed configuration
    pub config: Option<FabricMspConfig>,
}

/// Root-of-trust material for one MSP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricMspConfig {
    /// MSP identifier
    pub name: String,

    /// PEM or DER encoded root CA certificates
    #[serde(default)]
    pub root_certs: Vec<Vec<u8>>,

    /// PEM or DER encoded intermediate CA certificates
    #[serde(default)]
    pub intermediate_certs: Vec<Vec<u8>>,

    /// PEM or DER encoded certificates of the MSP administrators
    #[serde(default)]
    pub admins: Vec<Vec<u8>>,
}

/// Validation settings shared by every trust domain of a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Maximum number of issuers walked when building a chain
    pub max_chain_depth: usize,

    /// Tolerance applied to both ends of a credential's validity window
    pub clock_skew: Duration,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
            clock_skew: Duration::ZERO,
        }
    }
}

impl ValidationPolicy {
    /// Create a new policy builder
    pub fn builder() -> ValidationPolicyBuilder {
        ValidationPolicyBuilder::default()
    }
}

/// Builder for ValidationPolicy
#[derive(Default)]
pub struct ValidationPolicyBuilder {
    pub(crate) policy: ValidationPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabric_kind_round_trips_wire_value() {
        let kind = ConfigKind::try_from(0).unwrap();
        assert_eq!(kind, ConfigKind::Fabric);
        assert_eq!(kind.wire_value(), 0);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert_eq!(ConfigKind::try_from(1), Err(MspError::UnsupportedConfigKind(1)));
        assert_eq!(ConfigKind::try_from(-3), Err(MspError::UnsupportedConfigKind(-3)));
    }

    #[test]
    fn test_payload_lists_default_to_empty() {
        let config: FabricMspConfig = serde_json::from_str(r#"{"name":"OrgA"}"#).unwrap();
        assert_eq!(config.name, "OrgA");
        assert!(config.root_certs.is_empty());
        assert!(config.intermediate_certs.is_empty());
        assert!(config.admins.is_empty());
    }
}
