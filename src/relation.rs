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

//! Verifies one parent -> child hop: naming, the AKI/SKI hint, the
//! signature itself, and the path-length budget, in that order so that
//! which `FailKind` comes back is deterministic.

use crate::certificate::{Certificate, RawCertificate};
use crate::error::{ChainResult, FailKind};
use crate::extensions::ExtensionInspector;
use crate::primitives::{CertParser, CryptoProvider};

/// Whether the child's `AuthorityKeyId.keyIdentifier` (if present) matches
/// the parent's `SubjectKeyId` (if present). This is a hint, not a
/// mandatory check: if either side lacks the identifier, the check
/// silently passes.
pub(crate) fn aki_ski_matches(parent: &Certificate, child: &Certificate) -> bool {
    let child_key_id = ExtensionInspector::authority_key_id(&child.tbs.extensions)
        .and_then(|(_, aki)| aki.key_id.as_ref());
    let parent_key_id =
        ExtensionInspector::subject_key_id(&parent.tbs.extensions).map(|(_, id)| id);

    match (child_key_id, parent_key_id) {
        (Some(child_id), Some(parent_id)) => child_id.as_slice() == parent_id,
        _ => true,
    }
}

/// Verifies that `child.signature_value` is a valid RSA-PKCS#1 v1.5
/// signature over `child`'s `tbsCertificate`, made with `parent`'s public
/// key, using the hash implied by `child.signature_algorithm`.
///
/// Shared between `verify_relation` (parent != child) and
/// `roles::verify_anchor` (parent == child, self-signature).
pub(crate) fn verify_signature_step(
    parent: &Certificate,
    child: &Certificate,
    child_raw: &RawCertificate,
    crypto: &dyn CryptoProvider,
    parser: &dyn CertParser,
) -> ChainResult {
    let tbs = match parser.tbs_bytes(child, child_raw) {
        Some(bytes) => bytes,
        None => return Err(FailKind::InvalidSignature),
    };

    let computed_digest: alloc::vec::Vec<u8> = match child.signature_algorithm.hash() {
        crate::primitives::HashAlgorithmId::Md5 => crypto.md5(tbs).to_vec(),
        crate::primitives::HashAlgorithmId::Sha1 => crypto.sha1(tbs).to_vec(),
    };

    let recovered = crypto
        .verify_rsa_pkcs1(&parent.tbs.public_key, &child.signature_value)
        .ok_or(FailKind::InvalidSignature)?;

    let (recovered_alg, recovered_digest) = crypto
        .parse_digest_info(&recovered)
        .ok_or(FailKind::InvalidSignature)?;

    if recovered_alg != child.signature_algorithm.hash() {
        return Err(FailKind::InvalidSignature);
    }

    if recovered_digest != computed_digest {
        return Err(FailKind::InvalidSignature);
    }

    Ok(())
}

/// Verifies one parent -> child hop, in order: name match, AKI/SKI hint,
/// signature, path-length budget.
///
/// `pathlen` is the number of non-self-issued intermediates already walked
/// between the leaf and `parent` (see `chain_walker`).
pub fn verify_relation(
    pathlen: usize,
    parent: &Certificate,
    child: &Certificate,
    child_raw: &RawCertificate,
    crypto: &dyn CryptoProvider,
    parser: &dyn CertParser,
) -> ChainResult {
    // 1. Name match.
    if parent.tbs.subject != child.tbs.issuer {
        return Err(FailKind::InvalidCertificate);
    }

    // 2. Authority <-> Subject key identifiers (a hint, not mandatory).
    if !aki_ski_matches(parent, child) {
        return Err(FailKind::InvalidExtensions);
    }

    // 3. Signature.
    verify_signature_step(parent, child, child_raw, crypto, parser)?;

    // 4. Path-length budget.
    if let Some((_, bc)) = ExtensionInspector::basic_constraints(&parent.tbs.extensions) {
        if let Some(n) = bc.path_len {
            if (n as usize) < pathlen {
                return Err(FailKind::InvalidPathlen);
            }
        }
    }

    Ok(())
}
