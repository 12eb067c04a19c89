//! Parsed X.509 credentials.
//!
//! A `Credential` keeps the fields the trust decision needs: names in their
//! canonical DER form, the subject key, the validity window, and the signed
//! TBS bytes with the signature over them.

use chrono::{DateTime, Utc};
use der::asn1::ObjectIdentifier;
use der::{Decode, DecodePem, Encode};
use sha2::{Digest, Sha256};
use x509_cert::ext::pkix::BasicConstraints;
use x509_cert::time::Time;
use x509_cert::Certificate;

use super::verification::{verify_ecdsa_p256, verify_ed25519};
use crate::error::{MspError, Result};

const ID_ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");
const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const ECDSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");
const ID_CE_BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.19");

const PEM_PREFIX: &[u8] = b"-----BEGIN";

/// Signature algorithms accepted on credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    Ed25519,
    EcdsaP256Sha256,
}

impl SignatureAlgorithm {
    fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        if *oid == ID_ED25519 {
            Ok(SignatureAlgorithm::Ed25519)
        } else if *oid == ECDSA_WITH_SHA256 {
            Ok(SignatureAlgorithm::EcdsaP256Sha256)
        } else {
            Err(MspError::MalformedCredential(format!(
                "unsupported signature algorithm {oid}"
            )))
        }
    }
}

/// Verification key carried by a credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Ed25519(ed25519_dalek::VerifyingKey),
    P256(p256::ecdsa::VerifyingKey),
}

impl PublicKey {
    /// The only signature algorithm this key can produce
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            PublicKey::Ed25519(_) => SignatureAlgorithm::Ed25519,
            PublicKey::P256(_) => SignatureAlgorithm::EcdsaP256Sha256,
        }
    }

    /// Raw key bytes: 32 bytes for Ed25519, an uncompressed SEC1 point for P-256.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            PublicKey::Ed25519(key) => key.to_bytes().to_vec(),
            PublicKey::P256(key) => key.to_sec1_bytes().into_vec(),
        }
    }

    /// Hex encoded `to_bytes`
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Verify `signature` over `message`.
    ///
    /// P-256 signatures are expected DER encoded, as X.509 and Fabric carry them.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            PublicKey::Ed25519(key) => verify_ed25519(message, signature, key),
            PublicKey::P256(key) => verify_ecdsa_p256(message, signature, key),
        }
    }

    fn from_spki(spki: &x509_cert::spki::SubjectPublicKeyInfoOwned) -> Result<Self> {
        let key_bytes = spki.subject_public_key.raw_bytes();

        if spki.algorithm.oid == ID_ED25519 {
            let key_arr: [u8; 32] = key_bytes.try_into().map_err(|_| {
                MspError::MalformedCredential("invalid Ed25519 public key length".to_string())
            })?;
            let key = ed25519_dalek::VerifyingKey::from_bytes(&key_arr)
                .map_err(|e| MspError::MalformedCredential(format!("invalid public key: {e}")))?;
            Ok(PublicKey::Ed25519(key))
        } else if spki.algorithm.oid == ID_EC_PUBLIC_KEY {
            let key = p256::ecdsa::VerifyingKey::from_sec1_bytes(key_bytes)
                .map_err(|e| MspError::MalformedCredential(format!("invalid P-256 public key: {e}")))?;
            Ok(PublicKey::P256(key))
        } else {
            Err(MspError::MalformedCredential(format!(
                "unsupported public key algorithm {}",
                spki.algorithm.oid
            )))
        }
    }
}

/// A decoded X.509 certificate
#[derive(Debug, Clone)]
pub struct Credential {
    subject: String,
    issuer: String,
    subject_der: Vec<u8>,
    issuer_der: Vec<u8>,
    serial: String,
    public_key: PublicKey,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    signature_algorithm: SignatureAlgorithm,
    signature: Vec<u8>,
    tbs: Vec<u8>,
    is_ca: bool,
    der: Vec<u8>,
    fingerprint: String,
}

impl Credential {
    /// Decode a PEM or DER encoded certificate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let trimmed = bytes.trim_ascii_start();
        let decoded = if trimmed.starts_with(PEM_PREFIX) {
            Certificate::from_pem(trimmed)
        } else {
            Certificate::from_der(bytes)
        };
        let certificate = decoded
            .map_err(|e| MspError::MalformedCredential(format!("failed to decode certificate: {e}")))?;

        Self::from_certificate(&certificate)
    }

    /// Extract the fields used for validation from a decoded certificate.
    pub fn from_certificate(certificate: &Certificate) -> Result<Self> {
        let tbs = &certificate.tbs_certificate;

        let der = certificate.to_der().map_err(encoding_error)?;
        let fingerprint = hex::encode(Sha256::digest(&der));

        let is_ca = match tbs
            .extensions
            .iter()
            .flatten()
            .find(|ext| ext.extn_id == ID_CE_BASIC_CONSTRAINTS)
        {
            Some(ext) => {
                BasicConstraints::from_der(ext.extn_value.as_bytes())
                    .map_err(|e| {
                        MspError::MalformedCredential(format!("invalid basic constraints: {e}"))
                    })?
                    .ca
            }
            None => false,
        };

        Ok(Self {
            subject: tbs.subject.to_string(),
            issuer: tbs.issuer.to_string(),
            subject_der: tbs.subject.to_der().map_err(encoding_error)?,
            issuer_der: tbs.issuer.to_der().map_err(encoding_error)?,
            serial: hex::encode(tbs.serial_number.as_bytes()),
            public_key: PublicKey::from_spki(&tbs.subject_public_key_info)?,
            not_before: to_utc(&tbs.validity.not_before)?,
            not_after: to_utc(&tbs.validity.not_after)?,
            signature_algorithm: SignatureAlgorithm::from_oid(&certificate.signature_algorithm.oid)?,
            signature: certificate.signature.raw_bytes().to_vec(),
            tbs: tbs.to_der().map_err(encoding_error)?,
            is_ca,
            der,
            fingerprint,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Hex encoded serial number
    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.signature_algorithm
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// DER encoded `TBSCertificate`, the bytes the issuer signed
    pub fn tbs(&self) -> &[u8] {
        &self.tbs
    }

    /// Whether basic constraints mark this certificate as a CA
    pub fn is_ca(&self) -> bool {
        self.is_ca
    }

    /// Canonical DER encoding of the whole certificate
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Hex SHA-256 of the canonical DER encoding.
    ///
    /// Two encodings (PEM, DER) of one certificate share a fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether `issuer`'s subject is the issuer name on this credential
    pub fn names_issuer(&self, issuer: &Credential) -> bool {
        self.issuer_der == issuer.subject_der
    }

    pub fn is_self_issued(&self) -> bool {
        self.issuer_der == self.subject_der
    }

    /// Check the validity window at `at`, widened by `skew` on both ends.
    ///
    /// A side whose widened bound falls outside the representable date range
    /// is treated as open.
    pub fn check_validity(&self, at: DateTime<Utc>, skew: chrono::Duration) -> Result<()> {
        if at
            .checked_add_signed(skew)
            .is_some_and(|latest| latest < self.not_before)
        {
            return Err(MspError::NotYetValid {
                subject: self.subject.clone(),
                not_before: self.not_before,
            });
        }
        if at
            .checked_sub_signed(skew)
            .is_some_and(|earliest| earliest > self.not_after)
        {
            return Err(MspError::Expired {
                subject: self.subject.clone(),
                not_after: self.not_after,
            });
        }
        Ok(())
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for Credential {}

fn to_utc(time: &Time) -> Result<DateTime<Utc>> {
    let secs = i64::try_from(time.to_unix_duration().as_secs())
        .map_err(|_| MspError::MalformedCredential("validity time out of range".to_string()))?;

    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| MspError::MalformedCredential("validity time out of range".to_string()))
}

fn encoding_error(e: der::Error) -> MspError {
    MspError::MalformedCredential(format!("failed to re-encode certificate: {e}"))
}
