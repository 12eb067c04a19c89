//! Raw signature verification.
//!
//! Byte-level checks only. Deciding which key is allowed to sign what lives
//! in the trust domain.

use ed25519_dalek::Verifier as _;
use p256::ecdsa::signature::Verifier as _;

/// Verify an Ed25519 signature over raw bytes.
///
/// Returns `false` for a wrong-length signature as well as for a mismatch.
pub fn verify_ed25519(
    data: &[u8],
    signature_bytes: &[u8],
    public_key: &ed25519_dalek::VerifyingKey,
) -> bool {
    let Ok(sig_arr) = <[u8; 64]>::try_from(signature_bytes) else {
        return false;
    };
    let signature = ed25519_dalek::Signature::from_bytes(&sig_arr);

    public_key.verify(data, &signature).is_ok()
}

/// Verify a DER encoded ECDSA P-256 / SHA-256 signature over raw bytes.
pub fn verify_ecdsa_p256(
    data: &[u8],
    signature_der: &[u8],
    public_key: &p256::ecdsa::VerifyingKey,
) -> bool {
    let Ok(signature) = p256::ecdsa::Signature::from_der(signature_der) else {
        return false;
    };

    public_key.verify(data, &signature).is_ok()
}
