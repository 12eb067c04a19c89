//! Certificate fixtures for unit tests.

use rcgen::{
    date_time_ymd, BasicConstraints, Certificate, CertificateParams, DistinguishedName, DnType,
    IsCa, KeyPair, PKCS_ECDSA_P256_SHA256, PKCS_ED25519,
};

/// A certificate authority that can issue test certificates
pub struct Authority {
    cert: Certificate,
    key: KeyPair,
}

fn params_for(common_name: &str) -> CertificateParams {
    let mut params = CertificateParams::default();
    let mut name = DistinguishedName::new();
    name.push(DnType::CommonName, common_name);
    params.distinguished_name = name;
    params
}

fn ca_params_for(common_name: &str) -> CertificateParams {
    let mut params = params_for(common_name);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params
}

impl Authority {
    pub fn root(common_name: &str) -> Self {
        let key = KeyPair::generate_for(&PKCS_ED25519).unwrap();
        let cert = ca_params_for(common_name).self_signed(&key).unwrap();
        Self { cert, key }
    }

    pub fn root_p256(common_name: &str) -> Self {
        let key = KeyPair::generate_for(&PKCS_ECDSA_P256_SHA256).unwrap();
        let cert = ca_params_for(common_name).self_signed(&key).unwrap();
        Self { cert, key }
    }

    pub fn intermediate(&self, common_name: &str) -> Self {
        let key = KeyPair::generate_for(&PKCS_ED25519).unwrap();
        let cert = ca_params_for(common_name)
            .signed_by(&key, &self.cert, &self.key)
            .unwrap();
        Self { cert, key }
    }

    /// A non-CA certificate whose key is still used to sign
    pub fn end_entity(&self, common_name: &str) -> Self {
        let key = KeyPair::generate_for(&PKCS_ED25519).unwrap();
        let cert = params_for(common_name)
            .signed_by(&key, &self.cert, &self.key)
            .unwrap();
        Self { cert, key }
    }

    pub fn der(&self) -> Vec<u8> {
        self.cert.der().to_vec()
    }

    pub fn issue(&self, common_name: &str) -> Vec<u8> {
        self.sign(params_for(common_name)).der().to_vec()
    }

    pub fn issue_pem_and_der(&self, common_name: &str) -> (String, Vec<u8>) {
        let cert = self.sign(params_for(common_name));
        (cert.pem(), cert.der().to_vec())
    }

    /// Issue a certificate valid from Jan 1 of `from_year` to Jan 1 of `until_year`
    pub fn issue_valid_between(&self, common_name: &str, from_year: i32, until_year: i32) -> Vec<u8> {
        let mut params = params_for(common_name);
        params.not_before = date_time_ymd(from_year, 1, 1);
        params.not_after = date_time_ymd(until_year, 1, 1);
        self.sign(params).der().to_vec()
    }

    fn sign(&self, params: CertificateParams) -> Certificate {
        let key = KeyPair::generate_for(&PKCS_ED25519).unwrap();
        params.signed_by(&key, &self.cert, &self.key).unwrap()
    }
}
