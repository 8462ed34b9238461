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

/// A dotted-decimal OID, e.g. `1.2.840.113549.1.1.5`.
///
/// The core never encodes or decodes the DER base-128 representation of an
/// OID -- that's the parser's job, out of scope per the core's charter.
/// This is just the already-decoded component list, kept around so the
/// well-known OIDs below can be compared against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(pub Vec<u32>);

impl ObjectId {
    pub fn new(components: Vec<u32>) -> Self {
        Self(components)
    }

    /// id-at-commonName, 2.5.4.3
    pub fn common_name() -> Self {
        Self(alloc::vec![2, 5, 4, 3])
    }

    /// id-kp-serverAuth, 1.3.6.1.5.5.7.3.1
    pub fn server_auth() -> Self {
        Self(alloc::vec![1, 3, 6, 1, 5, 5, 7, 3, 1])
    }

    /// anyPolicy, 2.5.29.32.0
    pub fn any_policy() -> Self {
        Self(alloc::vec![2, 5, 29, 32, 0])
    }
}
