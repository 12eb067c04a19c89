//! Validated identities and their serialized envelope.

mod serialized;

pub use serialized::SerializedIdentity;

use chrono::{DateTime, Utc};

use crate::crypto::{Credential, PublicKey};

/// A party whose credential validated against its domain's anchors.
///
/// Only a trust domain constructs one, and only after every validation stage
/// passed. Callers own it and may keep it for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    domain_id: String,
    credential_bytes: Vec<u8>,
    credential: Credential,
    is_admin: bool,
}

impl Identity {
    pub(crate) fn new(
        domain_id: String,
        credential_bytes: Vec<u8>,
        credential: Credential,
        is_admin: bool,
    ) -> Self {
        Self {
            domain_id,
            credential_bytes,
            credential,
            is_admin,
        }
    }

    /// Id of the domain that validated this identity
    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    /// Credential bytes as presented
    pub fn credential_bytes(&self) -> &[u8] {
        &self.credential_bytes
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn public_key(&self) -> &PublicKey {
        self.credential.public_key()
    }

    pub fn subject(&self) -> &str {
        self.credential.subject()
    }

    /// Canonical id of the credential (hex SHA-256 of its DER encoding)
    pub fn fingerprint(&self) -> &str {
        self.credential.fingerprint()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.credential.not_after()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Verify a signature made by this identity, e.g. over an endorsement.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Re-wrap the credential in its envelope
    pub fn serialize(&self) -> SerializedIdentity {
        SerializedIdentity::new(self.domain_id.clone(), self.credential_bytes.clone())
    }
}
