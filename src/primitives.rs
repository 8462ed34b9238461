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

//! The boundary this core verifies against: injected crypto, DER parsing and
//! the wall clock.
//!
//! Everything in this module is a trait. The core never touches the
//! filesystem, the network, or `SystemTime::now()` directly -- a caller
//! wires up concrete implementations (backed by `ring`, `openssl`, or
//! whatever the embedding application already uses) and hands them to
//! [`crate::chain_walker::verify_chain`].

use alloc::vec::Vec;

/// Seconds since the Unix epoch, as returned by [`Clock::now`].
pub type PosixSeconds = u64;

/// A source of the current time, injected so tests can pin it.
///
/// Mirrors the `time` parameter threaded through every call in webpki's
/// `verify_cert::build_chain` -- this core takes the same approach but
/// behind a trait object instead of a `Copy` value, since `now()` here also
/// has to be obtainable without the caller re-deriving it at every call
/// site.
pub trait Clock {
    fn now(&self) -> PosixSeconds;
}

/// A [`Clock`] backed by the real system clock.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> PosixSeconds {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A [`Clock`] that always returns a fixed value. Used by tests so that
/// fixtures don't expire out from under the test suite.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub PosixSeconds);

impl Clock for FixedClock {
    fn now(&self) -> PosixSeconds {
        self.0
    }
}

/// The two hash algorithms this core's signature checking understands.
///
/// Per the core's stated scope, this is deliberately narrow: RSA with MD5 or
/// SHA-1 only. Adding SHA-256 (or any other algorithm) is a matter of
/// growing this enum and the matching arms in `RelationVerifier` -- it does
/// not require touching the trait below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithmId {
    Md5,
    Sha1,
}

/// Opaque RSA public key material, as recovered from a certificate's
/// `subjectPublicKeyInfo` by the (out-of-scope) parser. The core never
/// inspects the modulus or exponent itself; it only ever hands this back to
/// [`CryptoProvider::verify_rsa_pkcs1`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(pub Vec<u8>);

/// The injected cryptography boundary: RSA PKCS#1 v1.5 signature recovery,
/// `DigestInfo` parsing, and the two supported hash functions.
///
/// Failures are always reported as `None`, never panicked on or logged by
/// the provider itself -- logging, if any, happens at the call site in
/// `RelationVerifier` so a single log line can carry the hop's context.
pub trait CryptoProvider {
    /// RSA-decrypts `signature` under `key` and undoes PKCS#1 v1.5 padding,
    /// returning the recovered `DigestInfo` bytes on success.
    fn verify_rsa_pkcs1(&self, key: &PublicKey, signature: &[u8]) -> Option<Vec<u8>>;

    /// Parses a `DigestInfo` SEQUENCE, returning its hash algorithm and
    /// digest bytes.
    fn parse_digest_info(&self, bytes: &[u8]) -> Option<(HashAlgorithmId, Vec<u8>)>;

    fn md5(&self, bytes: &[u8]) -> [u8; 16];

    fn sha1(&self, bytes: &[u8]) -> [u8; 20];
}

/// The injected parsing boundary: recovering the exact signed byte range of
/// a certificate's `tbsCertificate`.
///
/// Deliberately not reproduced here: a byte-arithmetic slice
/// (`len - sig_len - 4 - 19 - adj`) that can be made to work but is fragile
/// against encoding variance. This trait instead requires the caller's
/// ASN.1 parser to hand back the range it actually parsed.
pub trait CertParser {
    /// Returns the DER encoding of `cert`'s `tbsCertificate`, sliced out of
    /// `raw`. Returns `None` if `raw` does not correspond to `cert` or is
    /// otherwise unusable -- the caller treats this the same as a signature
    /// failure.
    fn tbs_bytes<'a>(
        &self,
        cert: &crate::certificate::Certificate,
        raw: &'a crate::certificate::RawCertificate,
    ) -> Option<&'a [u8]>;
}
