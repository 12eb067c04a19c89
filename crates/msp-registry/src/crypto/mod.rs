//! Cryptographic capability consumed by trust domains.
//!
//! - X.509 credential parsing (PEM or DER)
//! - Ed25519 and ECDSA P-256 signature verification
//! - Issuer chain walking from a credential to a domain's roots

pub mod credential;
pub mod suite;
pub mod verification;

pub use credential::{Credential, PublicKey, SignatureAlgorithm};
pub use suite::{CryptoSuite, X509Suite};
pub use verification::{verify_ecdsa_p256, verify_ed25519};
