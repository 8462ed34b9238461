//! Shared fixtures for the unit tests in this crate: a deterministic
//! `CryptoProvider`/`CertParser` pair standing in for `ring`-backed RSA and
//! an ASN.1 parser, plus a small certificate builder. Not a real signature
//! scheme -- good enough to exercise pass/fail paths without DER or modular
//! exponentiation, both of which this core leaves to the caller.

#![cfg(test)]

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use crate::certificate::{Certificate, RawCertificate, SignatureAlgorithm, Tbs, Validity};
use crate::extensions::CertExtension;
use crate::name::{AttributeTypeValue, Name};
use crate::oid::ObjectId;
use crate::primitives::{CertParser, CryptoProvider, HashAlgorithmId, PosixSeconds, PublicKey};

pub(crate) fn name(cn: &str) -> Name {
    Name::new(vec![vec![AttributeTypeValue {
        attribute_type: ObjectId::common_name(),
        value: cn.to_string(),
    }]])
}

pub(crate) fn key(tag: &str) -> PublicKey {
    PublicKey(tag.as_bytes().to_vec())
}

fn checksum<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, b) in bytes.iter().enumerate() {
        out[i % N] ^= b.wrapping_add(i as u8);
    }
    out
}

/// Stands in for a `ring`-backed `CryptoProvider`. A "signature" is the
/// signer's key tag, length-prefixed, followed by a one-byte hash tag and
/// the digest -- just enough structure to model recovery, algorithm
/// mismatch, and tampering without real RSA math.
pub(crate) struct TestCrypto;

impl CryptoProvider for TestCrypto {
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

pub(crate) struct TestParser;

impl CertParser for TestParser {
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

/// Builds a signature over `tbs` as if `signer_key` had signed it, for the
/// algorithm in `alg`, using [`TestCrypto`]'s hash functions.
pub(crate) fn sign(signer_key: &PublicKey, tbs: &[u8], alg: HashAlgorithmId) -> Vec<u8> {
    let digest = match alg {
        HashAlgorithmId::Md5 => TestCrypto.md5(tbs).to_vec(),
        HashAlgorithmId::Sha1 => TestCrypto.sha1(tbs).to_vec(),
    };
    let mut out = Vec::with_capacity(4 + signer_key.0.len() + 1 + digest.len());
    out.extend_from_slice(&(signer_key.0.len() as u32).to_be_bytes());
    out.extend_from_slice(&signer_key.0);
    out.push(hash_tag(alg));
    out.extend_from_slice(&digest);
    out
}

pub(crate) struct CertFixture {
    pub subject: &'static str,
    pub issuer: &'static str,
    pub not_before: PosixSeconds,
    pub not_after: PosixSeconds,
    pub public_key: PublicKey,
    pub alg: HashAlgorithmId,
    pub extensions: Vec<CertExtension>,
}

impl CertFixture {
    pub(crate) fn new(subject: &'static str, issuer: &'static str) -> Self {
        Self {
            subject,
            issuer,
            not_before: 0,
            not_after: 1_000,
            public_key: key(subject),
            alg: HashAlgorithmId::Sha1,
            extensions: vec![],
        }
    }

    fn raw_bytes(&self) -> Vec<u8> {
        alloc::format!(
            "{}|{}|{}|{}",
            self.subject, self.issuer, self.not_before, self.not_after
        )
        .into_bytes()
    }

    /// Builds and signs this certificate with `signer_key`. Pass this
    /// fixture's own `public_key` to self-sign a trust anchor.
    pub(crate) fn sign_with(&self, signer_key: &PublicKey) -> (Certificate, RawCertificate) {
        let raw = RawCertificate(self.raw_bytes());
        let signature_value = sign(signer_key, raw.as_bytes(), self.alg);
        let tbs = Tbs {
            subject: name(self.subject),
            issuer: name(self.issuer),
            validity: Validity { not_before: self.not_before, not_after: self.not_after },
            public_key: self.public_key.clone(),
            extensions: self.extensions.clone(),
        };
        let signature_algorithm = match self.alg {
            HashAlgorithmId::Md5 => SignatureAlgorithm::Md5WithRsa,
            HashAlgorithmId::Sha1 => SignatureAlgorithm::Sha1WithRsa,
        };
        (
            Certificate { tbs, signature_algorithm, signature_value },
            raw,
        )
    }
}
