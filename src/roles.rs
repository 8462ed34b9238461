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

//! Role-specific validity-window and extension checks for CA intermediates,
//! server leaves, and self-signed trust anchors.

use crate::certificate::{Certificate, RawCertificate};
use crate::error::{ChainResult, FailKind};
use crate::extensions::{ExtensionInspector, ExtensionKind, GeneralName};
use crate::oid::ObjectId;
use crate::primitives::{CertParser, CryptoProvider, PosixSeconds};
use crate::relation::verify_signature_step;

/// The recognised extensions a CA-intermediate (and, self-verifying, a
/// trust anchor) actually constrains: exactly `{KeyUsage,
/// BasicConstraints}`. A critical `SubjectAltName` or `CertificatePolicies`
/// on a CA certificate is therefore rejected, even though
/// `ExtensionInspector` recognises both.
const CA_HANDLED: &[ExtensionKind] = &[ExtensionKind::KeyUsage, ExtensionKind::BasicConstraints];

/// The recognised extensions a server leaf's role check constrains; see
/// `DESIGN.md` for why `SubjectAltName` (read elsewhere for the hostname
/// match) is deliberately left out of this set.
const LEAF_HANDLED: &[ExtensionKind] = &[
    ExtensionKind::BasicConstraints,
    ExtensionKind::KeyUsage,
    ExtensionKind::ExtendedKeyUsage,
    ExtensionKind::CertificatePolicies,
];

fn check_ca_extensions(cert: &Certificate) -> ChainResult {
    let extensions = &cert.tbs.extensions;

    if ExtensionInspector::basic_constraints(extensions).is_none() {
        return Err(FailKind::InvalidExtensions);
    }

    match ExtensionInspector::key_usage(extensions) {
        Some((_, ku)) if ku.key_cert_sign() => {}
        _ => return Err(FailKind::InvalidExtensions),
    }

    if ExtensionInspector::find_unhandled_critical(extensions, CA_HANDLED).is_some() {
        return Err(FailKind::InvalidExtensions);
    }

    Ok(())
}

/// `verify_intermediate`: validity window, then CA extensions.
pub fn verify_intermediate(now: PosixSeconds, cert: &Certificate) -> ChainResult {
    if !cert.tbs.validity.covers(now) {
        return Err(FailKind::CertificateExpired);
    }
    check_ca_extensions(cert)
}

fn dns_name_matches(pattern: &str, candidate: &str) -> bool {
    pattern.eq_ignore_ascii_case(candidate)
}

fn check_server_name(cert: &Certificate, servername: Option<&str>) -> ChainResult {
    let servername = match servername {
        Some(name) => name,
        // Absence of a servername fails closed.
        None => return Err(FailKind::InvalidServerName),
    };

    if let Some((_, san)) = ExtensionInspector::subject_alt_name(&cert.tbs.extensions) {
        let matched = san.items.iter().any(|name| match name {
            GeneralName::DnsName(dns) => dns_name_matches(dns, servername),
            GeneralName::Other => false,
        });
        return if matched {
            Ok(())
        } else {
            Err(FailKind::InvalidServerName)
        };
    }

    match cert.tbs.subject.common_name() {
        Some(cn) if dns_name_matches(cn, servername) => Ok(()),
        _ => Err(FailKind::InvalidServerName),
    }
}

fn check_leaf_extensions(cert: &Certificate, required_eku: &ObjectId) -> ChainResult {
    let extensions = &cert.tbs.extensions;

    if let Some((_, bc)) = ExtensionInspector::basic_constraints(extensions) {
        if bc.is_ca || bc.path_len.is_some() {
            return Err(FailKind::InvalidServerExtensions);
        }
    }

    if let Some((_, ku)) = ExtensionInspector::key_usage(extensions) {
        if !ku.key_encipherment() {
            return Err(FailKind::InvalidServerExtensions);
        }
    }

    if let Some((_, ekus)) = ExtensionInspector::ext_key_usage(extensions) {
        if !ekus.contains(required_eku) {
            return Err(FailKind::InvalidServerExtensions);
        }
    }

    if let Some((true, policies)) = ExtensionInspector::policies(extensions) {
        if !policies.contains(&ObjectId::any_policy()) {
            return Err(FailKind::InvalidServerExtensions);
        }
    }

    if ExtensionInspector::find_unhandled_critical(extensions, LEAF_HANDLED).is_some() {
        return Err(FailKind::InvalidServerExtensions);
    }

    Ok(())
}

/// `verify_leaf`: validity window, server-name match, then leaf extensions.
pub fn verify_leaf(
    now: PosixSeconds,
    cert: &Certificate,
    servername: Option<&str>,
    required_eku: &ObjectId,
) -> ChainResult {
    if !cert.tbs.validity.covers(now) {
        return Err(FailKind::CertificateExpired);
    }
    check_server_name(cert, servername)?;
    check_leaf_extensions(cert, required_eku)
}

/// `verify_anchor`: applied once, when loading a candidate trust anchor.
/// All four checks must hold, in this order.
pub fn verify_anchor(
    now: PosixSeconds,
    cert: &Certificate,
    raw: &RawCertificate,
    crypto: &dyn CryptoProvider,
    parser: &dyn CertParser,
) -> ChainResult {
    if !cert.self_signed() {
        return Err(FailKind::InvalidCA);
    }

    verify_signature_step(cert, cert, raw, crypto, parser).map_err(|_| FailKind::InvalidSignature)?;

    if !cert.tbs.validity.covers(now) {
        return Err(FailKind::CertificateExpired);
    }

    check_ca_extensions(cert)
}
