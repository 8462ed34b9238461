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

use alloc::string::String;
use alloc::vec::Vec;

use crate::name::Name;
use crate::oid::ObjectId;

/// `BasicConstraints` (RFC 5280 section 4.2.1.9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicConstraints {
    pub is_ca: bool,
    pub path_len: Option<u32>,
}

/// `KeyUsage` (RFC 5280 section 4.2.1.3), as a bitset. Bit positions follow
/// the ASN.1 BIT STRING's named bits in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyUsage(pub u16);

impl KeyUsage {
    pub const DIGITAL_SIGNATURE: u16 = 1 << 0;
    pub const KEY_ENCIPHERMENT: u16 = 1 << 2;
    pub const KEY_CERT_SIGN: u16 = 1 << 5;
    pub const CRL_SIGN: u16 = 1 << 6;

    pub fn digital_signature(&self) -> bool {
        self.0 & Self::DIGITAL_SIGNATURE != 0
    }

    pub fn key_encipherment(&self) -> bool {
        self.0 & Self::KEY_ENCIPHERMENT != 0
    }

    pub fn key_cert_sign(&self) -> bool {
        self.0 & Self::KEY_CERT_SIGN != 0
    }

    pub fn crl_sign(&self) -> bool {
        self.0 & Self::CRL_SIGN != 0
    }
}

/// The general names this core cares about. RFC 5280's `GeneralName` has
/// eight variants; only `dNSName` matters for RFC 6125 server-identity
/// checking, so that's all we keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralName {
    DnsName(String),
    Other,
}

#[derive(Debug, Clone, Default)]
pub struct SubjectAltName {
    pub items: Vec<GeneralName>,
}

#[derive(Debug, Clone, Default)]
pub struct AuthorityKeyId {
    pub key_id: Option<Vec<u8>>,
    pub issuer: Option<Name>,
    pub serial: Option<Vec<u8>>,
}

/// The payload of one of the seven extension types this core recognises.
#[derive(Debug, Clone)]
pub enum Extension {
    BasicConstraints(BasicConstraints),
    KeyUsage(KeyUsage),
    ExtendedKeyUsage(Vec<ObjectId>),
    SubjectKeyId(Vec<u8>),
    AuthorityKeyId(AuthorityKeyId),
    SubjectAltName(SubjectAltName),
    CertificatePolicies(Vec<ObjectId>),
}

/// Which of the seven recognised extension variants a given `Extension`
/// is -- used as the currency of the per-role "handled set" criticality
/// policy (see [`ExtensionInspector`] and `RoleVerifiers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    BasicConstraints,
    KeyUsage,
    ExtendedKeyUsage,
    SubjectKeyId,
    AuthorityKeyId,
    SubjectAltName,
    CertificatePolicies,
}

impl Extension {
    pub fn kind(&self) -> ExtensionKind {
        match self {
            Extension::BasicConstraints(_) => ExtensionKind::BasicConstraints,
            Extension::KeyUsage(_) => ExtensionKind::KeyUsage,
            Extension::ExtendedKeyUsage(_) => ExtensionKind::ExtendedKeyUsage,
            Extension::SubjectKeyId(_) => ExtensionKind::SubjectKeyId,
            Extension::AuthorityKeyId(_) => ExtensionKind::AuthorityKeyId,
            Extension::SubjectAltName(_) => ExtensionKind::SubjectAltName,
            Extension::CertificatePolicies(_) => ExtensionKind::CertificatePolicies,
        }
    }
}

/// A single extension as carried by a decoded certificate: either one of
/// the seven recognised variants, or an opaque OID this core doesn't
/// understand.
#[derive(Debug, Clone)]
pub enum ExtensionValue {
    Known(Extension),
    Unknown(ObjectId),
}

#[derive(Debug, Clone)]
pub struct CertExtension {
    pub critical: bool,
    pub value: ExtensionValue,
}

/// Typed, criticality-aware queries over a certificate's extension list.
///
/// This implements RFC 5280 section 4.2's rule in two layers:
/// [`ExtensionInspector::find_unhandled_critical`] rejects any
/// *unrecognised* extension marked critical outright; each role in
/// `roles` additionally narrows "handled" to the subset of recognised
/// extensions it actually checks, and rejects a recognised extension
/// outside that subset if marked critical.
pub struct ExtensionInspector;

impl ExtensionInspector {
    fn find<'a>(extensions: &'a [CertExtension], kind: ExtensionKind) -> Option<&'a CertExtension> {
        extensions.iter().find(|e| match &e.value {
            ExtensionValue::Known(ext) => ext.kind() == kind,
            ExtensionValue::Unknown(_) => false,
        })
    }

    pub fn basic_constraints(extensions: &[CertExtension]) -> Option<(bool, &BasicConstraints)> {
        Self::find(extensions, ExtensionKind::BasicConstraints).map(|e| match &e.value {
            ExtensionValue::Known(Extension::BasicConstraints(bc)) => (e.critical, bc),
            _ => unreachable!(),
        })
    }

    pub fn key_usage(extensions: &[CertExtension]) -> Option<(bool, &KeyUsage)> {
        Self::find(extensions, ExtensionKind::KeyUsage).map(|e| match &e.value {
            ExtensionValue::Known(Extension::KeyUsage(ku)) => (e.critical, ku),
            _ => unreachable!(),
        })
    }

    pub fn ext_key_usage(extensions: &[CertExtension]) -> Option<(bool, &[ObjectId])> {
        Self::find(extensions, ExtensionKind::ExtendedKeyUsage).map(|e| match &e.value {
            ExtensionValue::Known(Extension::ExtendedKeyUsage(list)) => (e.critical, list.as_slice()),
            _ => unreachable!(),
        })
    }

    pub fn subject_key_id(extensions: &[CertExtension]) -> Option<(bool, &[u8])> {
        Self::find(extensions, ExtensionKind::SubjectKeyId).map(|e| match &e.value {
            ExtensionValue::Known(Extension::SubjectKeyId(bytes)) => (e.critical, bytes.as_slice()),
            _ => unreachable!(),
        })
    }

    pub fn authority_key_id(extensions: &[CertExtension]) -> Option<(bool, &AuthorityKeyId)> {
        Self::find(extensions, ExtensionKind::AuthorityKeyId).map(|e| match &e.value {
            ExtensionValue::Known(Extension::AuthorityKeyId(aki)) => (e.critical, aki),
            _ => unreachable!(),
        })
    }

    pub fn subject_alt_name(extensions: &[CertExtension]) -> Option<(bool, &SubjectAltName)> {
        Self::find(extensions, ExtensionKind::SubjectAltName).map(|e| match &e.value {
            ExtensionValue::Known(Extension::SubjectAltName(san)) => (e.critical, san),
            _ => unreachable!(),
        })
    }

    pub fn policies(extensions: &[CertExtension]) -> Option<(bool, &[ObjectId])> {
        Self::find(extensions, ExtensionKind::CertificatePolicies).map(|e| match &e.value {
            ExtensionValue::Known(Extension::CertificatePolicies(list)) => (e.critical, list.as_slice()),
            _ => unreachable!(),
        })
    }

    /// Returns the first extension that is marked critical and is either
    /// unrecognised, or recognised but outside `handled`.
    pub fn find_unhandled_critical(
        extensions: &[CertExtension],
        handled: &[ExtensionKind],
    ) -> Option<UnhandledCritical> {
        extensions.iter().find_map(|e| {
            if !e.critical {
                return None;
            }
            match &e.value {
                ExtensionValue::Unknown(oid) => Some(UnhandledCritical::Unrecognized(oid.clone())),
                ExtensionValue::Known(ext) if !handled.contains(&ext.kind()) => {
                    Some(UnhandledCritical::OutsideRole(ext.kind()))
                }
                ExtensionValue::Known(_) => None,
            }
        })
    }
}

/// Why [`ExtensionInspector::find_unhandled_critical`] rejected a
/// certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnhandledCritical {
    /// The extension's OID isn't one of the seven this core understands.
    Unrecognized(ObjectId),
    /// The extension is recognised, but the current role doesn't handle it
    /// (e.g. a critical `SubjectAltName` on a CA certificate).
    OutsideRole(ExtensionKind),
}
