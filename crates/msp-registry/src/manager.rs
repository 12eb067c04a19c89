//! MSP manager: the registry of trust domains for one membership context.
//!
//! Loads are all-or-nothing per batch and merge into the existing set
//! (last load wins per domain id). Readers work on an immutable snapshot of
//! the map, so validation never blocks on, or observes half of, a load.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::{MspConfig, ValidationPolicy};
use crate::crypto::{CryptoSuite, X509Suite};
use crate::error::{MspError, Result};
use crate::identity::{Identity, SerializedIdentity};
use crate::msp::TrustDomain;

/// Read-only view of the loaded domains keyed by id
pub type DomainMap = HashMap<String, Arc<TrustDomain>>;

/// Registry of trust domains
pub struct MspManager {
    msps: RwLock<Arc<DomainMap>>,
    crypto: Arc<dyn CryptoSuite>,
    policy: ValidationPolicy,
}

impl Default for MspManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MspManager {
    /// Create an empty registry using the X.509 suite and default policy
    pub fn new() -> Self {
        Self::with_crypto(Arc::new(X509Suite), ValidationPolicy::default())
    }

    /// Create an empty registry with a custom crypto suite and policy
    pub fn with_crypto(crypto: Arc<dyn CryptoSuite>, policy: ValidationPolicy) -> Self {
        Self {
            msps: RwLock::new(Arc::new(HashMap::new())),
            crypto,
            policy,
        }
    }

    /// Create an empty registry with the X.509 suite and `policy`
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self::with_crypto(Arc::new(X509Suite), policy)
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Build a trust domain per config and merge them into the registry.
    ///
    /// Every config is built before the registry is touched. The first
    /// failure aborts the batch and leaves the registry as it was. Domains
    /// not named in the batch are kept.
    pub fn load_domains(&self, configs: &[MspConfig]) -> Result<()> {
        let built = configs
            .iter()
            .map(|config| TrustDomain::build(config, Arc::clone(&self.crypto), self.policy))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| {
                warn!(
                    target: "msp::audit",
                    event = "config_rejected",
                    batch_size = configs.len(),
                    "Refused MSP configuration batch: {}",
                    e
                );
            })?;

        if built.is_empty() {
            return Ok(());
        }

        let ids: Vec<String> = built.iter().map(|domain| domain.id().to_string()).collect();

        {
            let mut guard = self.msps.write();
            let mut next: DomainMap = (**guard).clone();
            for domain in built {
                next.insert(domain.id().to_string(), Arc::new(domain));
            }
            *guard = Arc::new(next);
        }

        info!(count = ids.len(), domains = ?ids, "Loaded MSP configurations");
        Ok(())
    }

    /// Snapshot of the loaded domains
    pub fn list_domains(&self) -> Arc<DomainMap> {
        Arc::clone(&self.msps.read())
    }

    /// Look up one domain by id
    pub fn get_domain(&self, id: &str) -> Option<Arc<TrustDomain>> {
        self.list_domains().get(id).cloned()
    }

    /// Decode an identity envelope and validate it against the domain it names.
    pub fn resolve_identity(&self, serialized: &[u8]) -> Result<Identity> {
        self.resolve_identity_at(serialized, Utc::now())
    }

    /// `resolve_identity` as of `at`
    pub fn resolve_identity_at(&self, serialized: &[u8], at: DateTime<Utc>) -> Result<Identity> {
        let sid = SerializedIdentity::decode(serialized)?;
        self.resolve_serialized_at(&sid, at)
    }

    /// Validate an already decoded envelope at the current time
    pub fn resolve_serialized(&self, sid: &SerializedIdentity) -> Result<Identity> {
        self.resolve_serialized_at(sid, Utc::now())
    }

    /// Validate an already decoded envelope as of `at`.
    ///
    /// `mspid` only selects the domain; membership is decided by that
    /// domain's anchors.
    pub fn resolve_serialized_at(&self, sid: &SerializedIdentity, at: DateTime<Utc>) -> Result<Identity> {
        let domain = self.get_domain(&sid.mspid).ok_or_else(|| {
            warn!(
                target: "msp::audit",
                event = "unknown_domain",
                domain = %sid.mspid,
                "Rejected identity for unregistered MSP"
            );
            MspError::UnknownDomain(sid.mspid.clone())
        })?;

        domain.validate_at(&sid.id_bytes, at)
    }
}
