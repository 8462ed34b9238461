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

//! The top-level `verify_chain` pipeline: leaf role check, intermediate
//! role checks, the pairwise climb, then anchor resolution. Every stage
//! short-circuits on the first failure.

use crate::anchor_store::AnchorStore;
use crate::certificate::{Certificate, RawCertificate};
use crate::error::{ChainResult, FailKind};
use crate::oid::ObjectId;
use crate::primitives::{CertParser, Clock, CryptoProvider};
use crate::relation::verify_relation;
use crate::roles::{verify_intermediate, verify_leaf};

/// The longest chain (leaf + intermediates) this core will consider before
/// giving up with `InvalidInput`. Not specified by RFC 5280; chosen the way
/// webpki bounds `sub_ca_count` against `MAX_SUB_CA_COUNT` in
/// `verify_cert::build_chain` -- a constant guard against pathological
/// inputs.
pub const MAX_CHAIN_LEN: usize = 10;

/// Tunables for [`verify_chain`] left to the embedder: the chain-length cap
/// and which Extended Key Usage the leaf must carry (if it carries an EKU
/// extension at all).
#[derive(Debug, Clone)]
pub struct ChainWalkerConfig {
    pub max_chain_len: usize,
    pub required_leaf_eku: ObjectId,
}

impl Default for ChainWalkerConfig {
    fn default() -> Self {
        Self {
            max_chain_len: MAX_CHAIN_LEN,
            required_leaf_eku: ObjectId::server_auth(),
        }
    }
}

/// One hop's outcome, for the optional tracing hook below.
#[cfg(feature = "logging")]
fn trace_hop(subject_cn: &str, pathlen: usize, outcome: &ChainResult) {
    match outcome {
        Ok(()) => log::debug!("chain hop ok: subject={subject_cn} pathlen={pathlen}"),
        Err(e) => log::debug!("chain hop failed: subject={subject_cn} pathlen={pathlen} reason={e}"),
    }
}

/// Validates `chain` (`[leaf, intermediate_1, .., intermediate_k]`) against
/// `anchors`, for use as a server identified by `servername` (if given).
///
/// This is the sole entry point into the core. All cryptography, DER
/// parsing and timekeeping are supplied by the caller through `crypto`,
/// `parser` and `clock`; this function and everything it calls are
/// synchronous and hold no state of their own.
pub fn verify_chain(
    anchors: &AnchorStore,
    clock: &dyn Clock,
    crypto: &dyn CryptoProvider,
    parser: &dyn CertParser,
    config: &ChainWalkerConfig,
    servername: Option<&str>,
    chain: &[(Certificate, RawCertificate)],
) -> ChainResult {
    if chain.is_empty() || chain.len() > config.max_chain_len {
        return Err(FailKind::InvalidInput);
    }

    let now = clock.now();
    let (leaf, _) = &chain[0];
    let tail = &chain[1..];

    // 1. Leaf role check.
    verify_leaf(now, leaf, servername, &config.required_leaf_eku)?;

    // 2. Intermediate role checks -- each intermediate's own validity and
    //    CA posture, before any relation is checked.
    for (cert, _) in tail {
        verify_intermediate(now, cert)?;
    }

    // 3. Chain-walk (climb): leaf up to the top of the supplied chain.
    let mut pathlen = 0usize;
    let mut current = leaf;
    let mut current_raw = &chain[0].1;

    for (parent, parent_raw) in tail {
        let outcome = verify_relation(pathlen, parent, current, current_raw, crypto, parser);
        #[cfg(feature = "logging")]
        trace_hop(
            current.tbs.subject.common_name().unwrap_or("?"),
            pathlen,
            &outcome,
        );
        outcome?;

        current = parent;
        current_raw = parent_raw;
        pathlen += 1;
    }

    // 4. Anchor resolution.
    match anchors.find_issuer(current) {
        None if current.self_signed() => Err(FailKind::SelfSigned),
        None => Err(FailKind::NoTrustAnchor),
        Some(anchor) => {
            if !anchor.certificate.tbs.validity.covers(now) {
                return Err(FailKind::CertificateExpired);
            }
            verify_relation(
                pathlen,
                &anchor.certificate,
                current,
                current_raw,
                crypto,
                parser,
            )
        }
    }
}
