//! Error types for MSP loading and identity validation.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MspError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("MSP Configuration object type not supported: {0}")]
    UnsupportedConfigKind(i32),

    #[error("MSP Configuration object missing the payload in the \"Config\" property")]
    MissingPayload,

    #[error("MSP Configuration does not have a name")]
    MissingName,

    #[error(
        "MSP Configuration for \"{domain}\" does not have any root certificates required for validating signing certificates"
    )]
    MissingRootCerts { domain: String },

    #[error("MSP \"{domain}\" has an unusable {role} certificate: {reason}")]
    InvalidAnchor {
        domain: String,
        role: &'static str,
        reason: String,
    },

    #[error("Failed to locate an MSP instance matching the requested id \"{0}\" in the deserialized identity")]
    UnknownDomain(String),

    #[error("Malformed credential: {0}")]
    MalformedCredential(String),

    #[error("Credential \"{subject}\" is not issued by any trust anchor of MSP \"{domain}\"")]
    UntrustedIssuer { domain: String, subject: String },

    #[error("Credential \"{subject}\" expired at {not_after}")]
    Expired {
        subject: String,
        not_after: DateTime<Utc>,
    },

    #[error("Credential \"{subject}\" is not valid before {not_before}")]
    NotYetValid {
        subject: String,
        not_before: DateTime<Utc>,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MspError>;
