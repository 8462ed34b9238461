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

//! Holds trust anchors that have already passed self-verification, and
//! answers issuer lookups for the top of a chain.

use alloc::vec::Vec;

use crate::certificate::{Certificate, RawCertificate};
use crate::primitives::{CertParser, Clock, CryptoProvider, PosixSeconds};
use crate::relation::aki_ski_matches;
use crate::roles::verify_anchor;

/// A certificate that has completed anchor self-validation.
#[derive(Debug, Clone)]
pub struct TrustAnchor {
    pub certificate: Certificate,
    pub raw: RawCertificate,
}

/// A read-only, already-validated set of trust anchors.
///
/// Construction is the only place `verify_anchor` runs; once built, an
/// `AnchorStore` never re-validates its contents, and nothing in this core
/// ever mutates one. Multiple `verify_chain` calls may share a single
/// `AnchorStore` by reference.
pub struct AnchorStore {
    anchors: Vec<TrustAnchor>,
    attempted: usize,
}

impl AnchorStore {
    /// Runs `verify_anchor` on every candidate and retains only the ones
    /// that pass. `attempted()` and `retained()` are exposed for
    /// diagnostics.
    pub fn new(
        candidates: Vec<(Certificate, RawCertificate)>,
        now: PosixSeconds,
        crypto: &dyn CryptoProvider,
        parser: &dyn CertParser,
    ) -> Self {
        let attempted = candidates.len();
        let mut anchors = Vec::with_capacity(candidates.len());

        for (certificate, raw) in candidates {
            match verify_anchor(now, &certificate, &raw, crypto, parser) {
                Ok(()) => anchors.push(TrustAnchor { certificate, raw }),
                Err(reason) => {
                    #[cfg(feature = "logging")]
                    log::debug!(
                        "discarding candidate trust anchor: {}",
                        reason
                    );
                    #[cfg(not(feature = "logging"))]
                    let _ = reason;
                }
            }
        }

        Self { anchors, attempted }
    }

    /// Builds a store from a clock implementation directly, convenient when
    /// the caller doesn't already have `now` in hand.
    pub fn from_clock(
        candidates: Vec<(Certificate, RawCertificate)>,
        clock: &dyn Clock,
        crypto: &dyn CryptoProvider,
        parser: &dyn CertParser,
    ) -> Self {
        Self::new(candidates, clock.now(), crypto, parser)
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn retained(&self) -> usize {
        self.anchors.len()
    }

    /// Resolves the issuer of `child` among the stored anchors.
    ///
    /// Zero matches is `None`; exactly one match additionally requires the
    /// AKI/SKI hint (when both sides carry one) to agree; more than one
    /// match gives up and returns `None` rather than trying each in turn.
    pub fn find_issuer(&self, child: &Certificate) -> Option<&TrustAnchor> {
        let mut matches = self
            .anchors
            .iter()
            .filter(|a| a.certificate.tbs.subject == child.tbs.issuer);

        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }

        if aki_ski_matches(&first.certificate, child) {
            Some(first)
        } else {
            None
        }
    }
}
