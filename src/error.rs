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

use core::fmt;

/// The outcome of chain validation.
///
/// Every stage of [`crate::chain_walker::verify_chain`] short-circuits on the
/// first failure; this is the exhaustive set of reasons a chain can fail.
/// A given chain always reports the same `FailKind` across runs (see
/// `RelationVerifier` / `RoleVerifiers` for the evaluation order that makes
/// this deterministic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailKind {
    /// The certificate itself is malformed or its issuer/subject relation is
    /// wrong (e.g. `parent.subject != child.issuer`).
    InvalidCertificate,

    /// A signature failed to verify, or the recovered `DigestInfo` did not
    /// match the outer signature algorithm.
    InvalidSignature,

    /// `now` is outside of `[not_before, not_after]`.
    CertificateExpired,

    /// A CA or anchor certificate's extensions don't satisfy the
    /// CA-intermediate rules (missing `BasicConstraints`, missing
    /// `keyCertSign`, or an unhandled critical extension).
    InvalidExtensions,

    /// `BasicConstraints.pathLenConstraint` on some ancestor was exceeded.
    InvalidPathlen,

    /// The top of the chain is self-signed and not found among the trust
    /// anchors.
    SelfSigned,

    /// No trust anchor issued the top of the chain.
    NoTrustAnchor,

    /// The caller-supplied chain itself is invalid (empty, or longer than
    /// the configured maximum).
    InvalidInput,

    /// A server (end-entity) leaf's extensions don't satisfy the
    /// server-leaf rules.
    InvalidServerExtensions,

    /// `servername` didn't match the leaf's SAN/CN, or wasn't supplied at
    /// all.
    InvalidServerName,

    /// A trust anchor failed self-verification (not self-signed, or its
    /// self-signature didn't verify).
    InvalidCA,
}

impl fmt::Display for FailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FailKind::InvalidCertificate => "certificate issuer/subject relation is invalid",
            FailKind::InvalidSignature => "signature is invalid",
            FailKind::CertificateExpired => "certificate is not valid at the given time",
            FailKind::InvalidExtensions => "certificate extensions are invalid for a CA",
            FailKind::InvalidPathlen => "path length constraint violated",
            FailKind::SelfSigned => "chain terminates in an untrusted self-signed certificate",
            FailKind::NoTrustAnchor => "no trust anchor issued the top of the chain",
            FailKind::InvalidInput => "the certificate chain itself is invalid",
            FailKind::InvalidServerExtensions => "certificate extensions are invalid for a server",
            FailKind::InvalidServerName => "server name does not match the certificate",
            FailKind::InvalidCA => "trust anchor failed self-verification",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FailKind {}

/// The result of a validation stage: `Ok(())` or the first `FailKind`
/// encountered.
pub type ChainResult = Result<(), FailKind>;
