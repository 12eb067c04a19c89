//! Shared certificate fixtures for integration tests.
#![allow(dead_code)]

use ed25519_dalek::pkcs8::DecodePrivateKey;
use msp_registry::{FabricMspConfig, MspConfig, SerializedIdentity};
use rcgen::{
    date_time_ymd, BasicConstraints, Certificate, CertificateParams, DistinguishedName, DnType,
    IsCa, KeyPair, SignatureAlgorithm, PKCS_ECDSA_P256_SHA256, PKCS_ED25519,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A certificate together with the key it certifies
pub struct Issued {
    cert: Certificate,
    key: KeyPair,
}

impl Issued {
    pub fn der(&self) -> Vec<u8> {
        self.cert.der().to_vec()
    }

    pub fn pem(&self) -> Vec<u8> {
        self.cert.pem().into_bytes()
    }

    /// Envelope claiming membership of `mspid`, carrying the PEM form
    pub fn envelope(&self, mspid: &str) -> Vec<u8> {
        SerializedIdentity::new(mspid, self.pem()).encode().unwrap()
    }

    /// Ed25519 signing key for certificates issued with `Algo::Ed25519`
    pub fn ed25519_signing_key(&self) -> ed25519_dalek::SigningKey {
        ed25519_dalek::SigningKey::from_pkcs8_der(&self.key.serialize_der()).unwrap()
    }

    /// Use this certificate's key to sign further certificates
    pub fn as_authority(self) -> Ca {
        Ca { cert: self.cert, key: self.key }
    }
}

#[derive(Clone, Copy)]
pub enum Algo {
    Ed25519,
    P256,
}

impl Algo {
    fn rcgen(self) -> &'static SignatureAlgorithm {
        match self {
            Algo::Ed25519 => &PKCS_ED25519,
            Algo::P256 => &PKCS_ECDSA_P256_SHA256,
        }
    }
}

fn params_for(common_name: &str, organization: &str) -> CertificateParams {
    let mut params = CertificateParams::default();
    let mut name = DistinguishedName::new();
    name.push(DnType::CommonName, common_name);
    name.push(DnType::OrganizationName, organization);
    params.distinguished_name = name;
    params
}

/// A certificate authority
pub struct Ca {
    cert: Certificate,
    key: KeyPair,
}

impl Ca {
    pub fn root(common_name: &str) -> Self {
        Self::root_with(common_name, Algo::Ed25519)
    }

    pub fn root_with(common_name: &str, algo: Algo) -> Self {
        let key = KeyPair::generate_for(algo.rcgen()).unwrap();
        let mut params = params_for(common_name, "Test Network");
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        let cert = params.self_signed(&key).unwrap();
        Self { cert, key }
    }

    pub fn intermediate(&self, common_name: &str) -> Self {
        let key = KeyPair::generate_for(&PKCS_ED25519).unwrap();
        let mut params = params_for(common_name, "Test Network");
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        let cert = params.signed_by(&key, &self.cert, &self.key).unwrap();
        Self { cert, key }
    }

    pub fn der(&self) -> Vec<u8> {
        self.cert.der().to_vec()
    }

    pub fn pem(&self) -> Vec<u8> {
        self.cert.pem().into_bytes()
    }

    pub fn issue(&self, common_name: &str) -> Issued {
        self.issue_with(common_name, Algo::Ed25519)
    }

    pub fn issue_with(&self, common_name: &str, algo: Algo) -> Issued {
        self.sign(params_for(common_name, "Test Network"), algo)
    }

    /// Valid from Jan 1 of `from_year` until Jan 1 of `until_year`
    pub fn issue_valid_between(&self, common_name: &str, from_year: i32, until_year: i32) -> Issued {
        let mut params = params_for(common_name, "Test Network");
        params.not_before = date_time_ymd(from_year, 1, 1);
        params.not_after = date_time_ymd(until_year, 1, 1);
        self.sign(params, Algo::Ed25519)
    }

    fn sign(&self, params: CertificateParams, algo: Algo) -> Issued {
        let key = KeyPair::generate_for(algo.rcgen()).unwrap();
        let cert = params.signed_by(&key, &self.cert, &self.key).unwrap();
        Issued { cert, key }
    }
}

/// Fabric config for `name` trusting `root`, with the given admins
pub fn org_config(name: &str, root: &Ca, admins: &[&Issued]) -> MspConfig {
    let mut payload = FabricMspConfig::new(name).with_root_cert(root.pem());
    for admin in admins {
        payload = payload.with_admin(admin.pem());
    }
    MspConfig::fabric(payload)
}
