//! MSP configuration for the trust registry.
//!
//! This module defines the decoded configuration envelopes a registry loads
//! and the registry-wide validation policy.

mod methods;
mod types;

pub use types::{
    ConfigKind, FabricMspConfig, MspConfig, ValidationPolicy, ValidationPolicyBuilder,
    DEFAULT_MAX_CHAIN_DEPTH,
};
