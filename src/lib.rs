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

//! chain-verify-core: the RFC 5280 path-validation and RFC 6125
//! server-identity decision core for a TLS certificate chain verifier.
//!
//! This crate deliberately does not parse ASN.1/DER, does not implement RSA
//! or hashing, does not read files, and does not touch the wall clock --
//! all four are injected through the traits in [`primitives`]. What's left
//! is the hard part: walking a peer-presented chain from leaf to trust
//! anchor, checking names, key identifiers, signatures, validity windows,
//! path-length budgets and extension criticality at each hop, in an order
//! that makes the reported failure deterministic.
//!
//! See `DESIGN.md` in the repository root for the design decisions behind
//! this crate and what each module is grounded on.

#![no_std]
#![allow(clippy::result_unit_err)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod anchor_store;
pub mod certificate;
pub mod chain_walker;
pub mod error;
pub mod extensions;
pub mod name;
pub mod oid;
pub mod primitives;
pub mod relation;
pub mod roles;

#[cfg(test)]
mod testutil;

pub use anchor_store::{AnchorStore, TrustAnchor};
pub use certificate::{Certificate, RawCertificate, SignatureAlgorithm, Tbs, Validity};
pub use chain_walker::{verify_chain, ChainWalkerConfig, MAX_CHAIN_LEN};
pub use error::{ChainResult, FailKind};
pub use extensions::{BasicConstraints, Extension, ExtensionInspector, KeyUsage};
pub use name::Name;
pub use oid::ObjectId;
pub use primitives::{CertParser, Clock, CryptoProvider, HashAlgorithmId, PosixSeconds, PublicKey};

#[cfg(feature = "std")]
pub use primitives::SystemClock;
