// Copyright 2015 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR
// ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
// ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
// OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use alloc::vec::Vec;

use crate::extensions::CertExtension;
use crate::name::Name;
use crate::primitives::{PosixSeconds, PublicKey};

/// The two outer signature algorithms this core verifies: RSA with an MD5
/// or SHA-1 digest. Broader algorithm coverage is a matter of growing this
/// enum later, not a redesign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    Md5WithRsa,
    Sha1WithRsa,
}

impl SignatureAlgorithm {
    pub fn hash(&self) -> crate::primitives::HashAlgorithmId {
        match self {
            SignatureAlgorithm::Md5WithRsa => crate::primitives::HashAlgorithmId::Md5,
            SignatureAlgorithm::Sha1WithRsa => crate::primitives::HashAlgorithmId::Sha1,
        }
    }
}

/// `notBefore`/`notAfter`, already decoded to POSIX seconds by the (out of
/// scope) parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub not_before: PosixSeconds,
    pub not_after: PosixSeconds,
}

impl Validity {
    pub fn covers(&self, now: PosixSeconds) -> bool {
        self.not_before <= now && now <= self.not_after
    }
}

/// The signed body of a certificate (RFC 5280's `TBSCertificate`).
#[derive(Debug, Clone)]
pub struct Tbs {
    pub subject: Name,
    pub issuer: Name,
    pub validity: Validity,
    pub public_key: PublicKey,
    pub extensions: Vec<CertExtension>,
}

/// A decoded X.509 v3 certificate.
///
/// Immutable once constructed: every field is set at decode time and
/// nothing in this core ever mutates a `Certificate` in place. Validation
/// state (max path length, inherited constraints) lives alongside the
/// chain-walk, not on the certificate itself.
#[derive(Debug, Clone)]
pub struct Certificate {
    pub tbs: Tbs,
    pub signature_algorithm: SignatureAlgorithm,
    pub signature_value: Vec<u8>,
}

impl Certificate {
    /// Whether this certificate's issuer and subject are the same name.
    ///
    /// Note this says nothing about whether the self-signature actually
    /// verifies -- that's `RoleVerifiers::verify_anchor`'s job.
    pub fn self_signed(&self) -> bool {
        self.tbs.subject == self.tbs.issuer
    }
}

/// The original DER bytes a `Certificate` was decoded from, kept alongside
/// it because signature verification is defined over the raw encoding of
/// the `tbsCertificate`, not a re-encoding of the decoded form.
#[derive(Debug, Clone)]
pub struct RawCertificate(pub Vec<u8>);

impl RawCertificate {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
