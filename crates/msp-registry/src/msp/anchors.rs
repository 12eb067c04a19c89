//! Per-domain root-of-trust material.

use std::collections::HashSet;

use crate::config::FabricMspConfig;
use crate::crypto::{Credential, CryptoSuite};
use crate::error::{MspError, Result};

/// Roots, intermediates and admins of one trust domain.
///
/// Built once from a configuration and never mutated; reloading a domain
/// builds a new set.
#[derive(Debug, Clone)]
pub struct TrustAnchorSet {
    domain_id: String,
    root_certificates: Vec<Credential>,
    intermediate_certificates: Vec<Credential>,
    admin_identities: Vec<Credential>,
    admin_fingerprints: HashSet<String>,
}

impl TrustAnchorSet {
    /// Parse the certificates of a configuration payload.
    ///
    /// Fails with `MissingName` or `MissingRootCerts` before any certificate is
    /// decoded, and with `InvalidAnchor` naming the role of the first
    /// certificate that does not parse.
    pub fn from_config(config: &FabricMspConfig, suite: &dyn CryptoSuite) -> Result<Self> {
        if config.name.is_empty() {
            return Err(MspError::MissingName);
        }
        if config.root_certs.is_empty() {
            return Err(MspError::MissingRootCerts {
                domain: config.name.clone(),
            });
        }

        let parse_all = |certs: &[Vec<u8>], role: &'static str| -> Result<Vec<Credential>> {
            certs
                .iter()
                .map(|bytes| {
                    suite
                        .parse_credential(bytes)
                        .map_err(|e| MspError::InvalidAnchor {
                            domain: config.name.clone(),
                            role,
                            reason: e.to_string(),
                        })
                })
                .collect()
        };

        let root_certificates = parse_all(&config.root_certs, "root")?;
        let intermediate_certificates = parse_all(&config.intermediate_certs, "intermediate")?;
        let admin_identities = parse_all(&config.admins, "admin")?;
        let admin_fingerprints = admin_identities
            .iter()
            .map(|admin| admin.fingerprint().to_string())
            .collect();

        Ok(Self {
            domain_id: config.name.clone(),
            root_certificates,
            intermediate_certificates,
            admin_identities,
            admin_fingerprints,
        })
    }

    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    pub fn root_certificates(&self) -> &[Credential] {
        &self.root_certificates
    }

    pub fn intermediate_certificates(&self) -> &[Credential] {
        &self.intermediate_certificates
    }

    pub fn admin_identities(&self) -> &[Credential] {
        &self.admin_identities
    }

    /// Whether `credential` is one of the domain's admins, compared by
    /// fingerprint of the canonical encoding.
    pub fn is_admin(&self, credential: &Credential) -> bool {
        self.admin_fingerprints.contains(credential.fingerprint())
    }
}
