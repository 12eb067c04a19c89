//! The crypto capability trust domains are built against.

use super::credential::Credential;
use crate::error::Result;
use crate::msp::TrustAnchorSet;

/// Credential parsing and issuance checks.
///
/// Shared between every trust domain of a registry, so implementations must
/// be stateless or internally synchronized.
pub trait CryptoSuite: Send + Sync {
    /// Decode raw credential bytes into a structured credential.
    fn parse_credential(&self, bytes: &[u8]) -> Result<Credential>;

    /// Whether `issuer` issued and signed `credential`.
    fn verify_issued_by(&self, credential: &Credential, issuer: &Credential) -> bool;

    /// Whether `credential` chains to one of the anchor set's roots, passing
    /// through at most `max_depth` issuers (intermediates plus the root).
    ///
    /// Validity windows of intermediates and roots are not checked.
    fn verify_chain(&self, credential: &Credential, anchors: &TrustAnchorSet, max_depth: usize) -> bool {
        chains_to_root(self, credential, anchors, max_depth)
    }
}

fn chains_to_root<S: CryptoSuite + ?Sized>(
    suite: &S,
    credential: &Credential,
    anchors: &TrustAnchorSet,
    depth: usize,
) -> bool {
    if depth == 0 {
        return false;
    }

    if anchors
        .root_certificates()
        .iter()
        .any(|root| suite.verify_issued_by(credential, root))
    {
        return true;
    }

    anchors
        .intermediate_certificates()
        .iter()
        .filter(|intermediate| intermediate.fingerprint() != credential.fingerprint())
        .any(|intermediate| {
            suite.verify_issued_by(credential, intermediate)
                && chains_to_root(suite, intermediate, anchors, depth - 1)
        })
}

/// X.509 suite backed by `x509-cert`, `ed25519-dalek` and `p256`
#[derive(Debug, Clone, Copy, Default)]
pub struct X509Suite;

impl CryptoSuite for X509Suite {
    fn parse_credential(&self, bytes: &[u8]) -> Result<Credential> {
        Credential::from_bytes(bytes)
    }

    fn verify_issued_by(&self, credential: &Credential, issuer: &Credential) -> bool {
        // Issuers must be CAs whose key type matches the signature algorithm.
        issuer.is_ca()
            && credential.names_issuer(issuer)
            && issuer.public_key().algorithm() == credential.signature_algorithm()
            && issuer
                .public_key()
                .verify(credential.tbs(), credential.signature())
    }
}
