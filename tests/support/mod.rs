//! Fixtures shared by this crate's integration tests: a deterministic
//! stand-in for `ring` (`FakeCrypto`) and an ASN.1 parser (`FakeParser`),
//! plus a small certificate builder. No real DER or RSA math -- this core
//! takes both as injected dependencies, so the end-to-end tests only need
//! something that behaves consistently.

use chain_verify_core::{
    BasicConstraints, CertParser, Certificate, CryptoProvider, Extension, HashAlgorithmId, KeyUsage, Name,
    ObjectId, PosixSeconds, PublicKey, RawCertificate, SignatureAlgorithm, Tbs, Validity,
};
use chain_verify_core::extensions::{CertExtension, ExtensionValue, GeneralName, SubjectAltName};
use chain_verify_core::name::AttributeTypeValue;

pub fn name(cn: &str) -> Name {
    Name::new(vec![vec![AttributeTypeValue {
        attribute_type: ObjectId::common_name(),
        value: cn.to_string(),
    }]])
}

pub fn key(tag: &str) -> PublicKey {
    PublicKey(tag.as_bytes().to_vec())
}

fn checksum<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, b) in bytes.iter().enumerate() {
        out[i % N] ^= b.wrapping_add(i as u8);
    }
    out
}

pub struct FakeCrypto;

impl CryptoProvider for FakeCrypto {
    fn verify_rsa_pkcs1(&self, key: &PublicKey, signature: &[u8]) -> Option<Vec<u8>> {
        if signature.len() < 4 {
            return None;
        }
        let key_len = u32::from_be_bytes(signature[0..4].try_into().ok()?) as usize;
        if signature.len() < 4 + key_len {
            return None;
        }
        let embedded_key = &signature[4..4 + key_len];
        if embedded_key != key.0.as_slice() {
            return None;
        }
        Some(signature[4 + key_len..].to_vec())
    }

    fn parse_digest_info(&self, bytes: &[u8]) -> Option<(HashAlgorithmId, Vec<u8>)> {
        let (tag, digest) = bytes.split_first()?;
        let alg = match tag {
            0 => HashAlgorithmId::Md5,
            1 => HashAlgorithmId::Sha1,
            _ => return None,
        };
        Some((alg, digest.to_vec()))
    }

    fn md5(&self, bytes: &[u8]) -> [u8; 16] {
        checksum(bytes)
    }

    fn sha1(&self, bytes: &[u8]) -> [u8; 20] {
        checksum(bytes)
    }
}

pub struct FakeParser;

impl CertParser for FakeParser {
    fn tbs_bytes<'a>(&self, _cert: &Certificate, raw: &'a RawCertificate) -> Option<&'a [u8]> {
        Some(raw.as_bytes())
    }
}

fn hash_tag(alg: HashAlgorithmId) -> u8 {
    match alg {
        HashAlgorithmId::Md5 => 0,
        HashAlgorithmId::Sha1 => 1,
    }
}

pub fn sign(signer_key: &PublicKey, tbs: &[u8], alg: HashAlgorithmId) -> Vec<u8> {
    let digest = match alg {
        HashAlgorithmId::Md5 => FakeCrypto.md5(tbs).to_vec(),
        HashAlgorithmId::Sha1 => FakeCrypto.sha1(tbs).to_vec(),
    };
    let mut out = Vec::with_capacity(4 + signer_key.0.len() + 1 + digest.len());
    out.extend_from_slice(&(signer_key.0.len() as u32).to_be_bytes());
    out.extend_from_slice(&signer_key.0);
    out.push(hash_tag(alg));
    out.extend_from_slice(&digest);
    out
}

/// A builder for synthetic certificates, signed against [`FakeCrypto`].
pub struct CertBuilder {
    pub subject: String,
    pub issuer: String,
    pub not_before: PosixSeconds,
    pub not_after: PosixSeconds,
    pub public_key: PublicKey,
    pub alg: HashAlgorithmId,
    pub extensions: Vec<CertExtension>,
}

impl CertBuilder {
    pub fn new(subject: &str, issuer: &str) -> Self {
        Self {
            subject: subject.to_string(),
            issuer: issuer.to_string(),
            not_before: 0,
            not_after: 1_000,
            public_key: key(subject),
            alg: HashAlgorithmId::Sha1,
            extensions: Vec::new(),
        }
    }

    pub fn not_after(mut self, v: PosixSeconds) -> Self {
        self.not_after = v;
        self
    }

    pub fn ca(mut self, path_len: Option<u32>) -> Self {
        self.extensions.push(CertExtension {
            critical: true,
            value: ExtensionValue::Known(Extension::BasicConstraints(BasicConstraints {
                is_ca: true,
                path_len,
            })),
        });
        self.extensions.push(CertExtension {
            critical: true,
            value: ExtensionValue::Known(Extension::KeyUsage(KeyUsage(KeyUsage::KEY_CERT_SIGN))),
        });
        self
    }

    pub fn server_leaf(mut self, dns: &str) -> Self {
        self.extensions.push(CertExtension {
            critical: false,
            value: ExtensionValue::Known(Extension::SubjectAltName(SubjectAltName {
                items: vec![GeneralName::DnsName(dns.to_string())],
            })),
        });
        self.extensions.push(CertExtension {
            critical: false,
            value: ExtensionValue::Known(Extension::KeyUsage(KeyUsage(KeyUsage::KEY_ENCIPHERMENT))),
        });
        self.extensions.push(CertExtension {
            critical: false,
            value: ExtensionValue::Known(Extension::ExtendedKeyUsage(vec![ObjectId::server_auth()])),
        });
        self
    }

    pub fn critical_unknown_extension(mut self) -> Self {
        self.extensions.push(CertExtension {
            critical: true,
            value: ExtensionValue::Unknown(ObjectId::new(vec![1, 2, 3, 4])),
        });
        self
    }

    fn raw_bytes(&self) -> Vec<u8> {
        format!("{}|{}|{}|{}", self.subject, self.issuer, self.not_before, self.not_after).into_bytes()
    }

    /// Builds and signs this certificate with `signer_key`. Pass this
    /// builder's own `public_key` to self-sign a trust anchor.
    pub fn sign_with(&self, signer_key: &PublicKey) -> (Certificate, RawCertificate) {
        let raw = RawCertificate(self.raw_bytes());
        let signature_value = sign(signer_key, raw.as_bytes(), self.alg);
        let tbs = Tbs {
            subject: name(&self.subject),
            issuer: name(&self.issuer),
            validity: Validity { not_before: self.not_before, not_after: self.not_after },
            public_key: self.public_key.clone(),
            extensions: self.extensions.clone(),
        };
        let signature_algorithm = match self.alg {
            HashAlgorithmId::Md5 => SignatureAlgorithm::Md5WithRsa,
            HashAlgorithmId::Sha1 => SignatureAlgorithm::Sha1WithRsa,
        };
        (Certificate { tbs, signature_algorithm, signature_value }, raw)
    }
}

/// Three-certificate chain (leaf -> intermediate -> root anchor), all
/// valid, all signed correctly, leaf's SAN set to `leaf.example.com`.
pub struct ValidChain {
    pub root: (Certificate, RawCertificate),
    pub chain: Vec<(Certificate, RawCertificate)>,
}

pub fn build_valid_chain() -> ValidChain {
    let root_key = key("Root CA");
    let root = CertBuilder::new("Root CA", "Root CA").ca(None).sign_with(&root_key);

    let inter_key = key("Intermediate CA");
    let inter = CertBuilder::new("Intermediate CA", "Root CA").ca(None).sign_with(&root_key);

    let leaf = CertBuilder::new("leaf.example.com", "Intermediate CA")
        .server_leaf("leaf.example.com")
        .sign_with(&inter_key);

    ValidChain { root, chain: vec![leaf, inter] }
}
