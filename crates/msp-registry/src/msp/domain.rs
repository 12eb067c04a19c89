//! Trust domain construction and identity validation.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::anchors::TrustAnchorSet;
use crate::config::{ConfigKind, MspConfig, ValidationPolicy};
use crate::crypto::{Credential, CryptoSuite};
use crate::error::{MspError, Result};
use crate::identity::Identity;

/// One MSP: an id, its anchors, and the crypto suite used to check against them.
#[derive(Clone)]
pub struct TrustDomain {
    id: String,
    anchors: TrustAnchorSet,
    crypto: Arc<dyn CryptoSuite>,
    policy: ValidationPolicy,
    clock_skew: chrono::Duration,
}

impl TrustDomain {
    /// Build a trust domain from a decoded configuration.
    ///
    /// Checks run in order: kind, payload, name, root certificates, then the
    /// certificates themselves are decoded.
    pub fn build(
        config: &MspConfig,
        crypto: Arc<dyn CryptoSuite>,
        policy: ValidationPolicy,
    ) -> Result<Self> {
        match ConfigKind::try_from(config.kind)? {
            ConfigKind::Fabric => {}
        }

        let payload = config.config.as_ref().ok_or(MspError::MissingPayload)?;
        let anchors = TrustAnchorSet::from_config(payload, crypto.as_ref())?;

        // Beyond chrono's range the tolerance saturates, leaving the window open.
        let clock_skew = chrono::Duration::from_std(policy.clock_skew).unwrap_or_else(|_| {
            warn!(
                domain = %anchors.domain_id(),
                requested_secs = policy.clock_skew.as_secs(),
                "Clock skew exceeds the representable range, clamping to maximum"
            );
            chrono::Duration::MAX
        });

        debug!(
            domain = %anchors.domain_id(),
            roots = anchors.root_certificates().len(),
            intermediates = anchors.intermediate_certificates().len(),
            admins = anchors.admin_identities().len(),
            "Built trust domain"
        );

        Ok(Self {
            id: anchors.domain_id().to_string(),
            anchors,
            crypto,
            policy,
            clock_skew,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn anchors(&self) -> &TrustAnchorSet {
        &self.anchors
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate a credential against this domain at the current time.
    pub fn validate(&self, credential_bytes: &[u8]) -> Result<Identity> {
        self.validate_at(credential_bytes, Utc::now())
    }

    /// Validate a credential against this domain as of `at`.
    ///
    /// Pipeline: decode, chain to a root, validity window, admin role. The
    /// first failing stage is returned; nothing about the domain changes.
    pub fn validate_at(&self, credential_bytes: &[u8], at: DateTime<Utc>) -> Result<Identity> {
        let credential = self
            .crypto
            .parse_credential(credential_bytes)
            .inspect_err(|e| {
                warn!(
                    target: "msp::audit",
                    event = "identity_rejected",
                    domain = %self.id,
                    "Rejected identity: {}",
                    e
                );
            })?;

        let subject = credential.subject().to_string();
        self.check(credential_bytes, credential, at).inspect_err(|e| {
            warn!(
                target: "msp::audit",
                event = "identity_rejected",
                domain = %self.id,
                subject = %subject,
                "Rejected identity: {}",
                e
            );
        })
    }

    fn check(
        &self,
        credential_bytes: &[u8],
        credential: Credential,
        at: DateTime<Utc>,
    ) -> Result<Identity> {

        if !self
            .crypto
            .verify_chain(&credential, &self.anchors, self.policy.max_chain_depth)
        {
            return Err(MspError::UntrustedIssuer {
                domain: self.id.clone(),
                subject: credential.subject().to_string(),
            });
        }

        credential.check_validity(at, self.clock_skew)?;

        let is_admin = self.anchors.is_admin(&credential);

        Ok(Identity::new(
            self.id.clone(),
            credential_bytes.to_vec(),
            credential,
            is_admin,
        ))
    }
}

impl fmt::Debug for TrustDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustDomain")
            .field("id", &self.id)
            .field("anchors", &self.anchors)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
