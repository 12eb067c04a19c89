//! MSP configuration methods.
//!
//! Convenience constructors and builder methods for the configuration types.

use std::time::Duration;

use super::types::{ConfigKind, FabricMspConfig, MspConfig, ValidationPolicy, ValidationPolicyBuilder};

impl MspConfig {
    /// Wrap a payload in an envelope of the Fabric kind
    pub fn fabric(config: FabricMspConfig) -> Self {
        Self {
            kind: ConfigKind::Fabric.wire_value(),
            config: Some(config),
        }
    }
}

impl FabricMspConfig {
    /// Create an empty payload for the named MSP
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a root certificate
    pub fn with_root_cert(mut self, cert: impl Into<Vec<u8>>) -> Self {
        self.root_certs.push(cert.into());
        self
    }

    /// Add an intermediate certificate
    pub fn with_intermediate_cert(mut self, cert: impl Into<Vec<u8>>) -> Self {
        self.intermediate_certs.push(cert.into());
        self
    }

    /// Add an admin certificate
    pub fn with_admin(mut self, cert: impl Into<Vec<u8>>) -> Self {
        self.admins.push(cert.into());
        self
    }
}

impl ValidationPolicy {
    /// Set the maximum chain depth
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    /// Set the clock skew tolerance
    pub fn with_clock_skew(mut self, skew: Duration) -> Self {
        self.clock_skew = skew;
        self
    }
}

impl ValidationPolicyBuilder {
    /// Build the policy
    pub fn build(self) -> ValidationPolicy {
        self.policy
    }

    /// Set the maximum chain depth
    pub fn max_chain_depth(mut self, depth: usize) -> Self {
        self.policy.max_chain_depth = depth;
        self
    }

    /// Set the clock skew tolerance
    pub fn clock_skew(mut self, skew: Duration) -> Self {
        self.policy.clock_skew = skew;
        self
    }
}
