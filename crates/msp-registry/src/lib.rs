//! MSP registry - trust domains for a permissioned network
//!
//! This library decides, for a presented serialized identity, which
//! membership service provider (MSP) it claims, and whether it validates
//! against that MSP's root-of-trust material.

pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod manager;
pub mod msp;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types
pub use config::{ConfigKind, FabricMspConfig, MspConfig, ValidationPolicy};
pub use crypto::{Credential, CryptoSuite, PublicKey, X509Suite};
pub use error::{MspError, Result};
pub use identity::{Identity, SerializedIdentity};
pub use manager::{DomainMap, MspManager};
pub use msp::{TrustAnchorSet, TrustDomain};
