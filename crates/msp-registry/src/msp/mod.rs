//! Trust domains (MSPs).
//!
//! A trust domain owns an immutable anchor set and validates credentials
//! presented as members of the domain against it.

mod anchors;
mod domain;

pub use anchors::TrustAnchorSet;
pub use domain::TrustDomain;
