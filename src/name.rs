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

use crate::oid::ObjectId;

/// A single `AttributeTypeAndValue` inside an RDN.
#[derive(Debug, Clone)]
pub struct AttributeTypeValue {
    pub attribute_type: ObjectId,
    pub value: String,
}

/// One `RelativeDistinguishedName` -- normally a single attribute, but
/// X.501 permits (and some real certificates use) a set of several.
pub type Rdn = Vec<AttributeTypeValue>;

/// An RDN sequence (a `Name`, RFC 5280 section 4.1.2.4).
///
/// Equality follows RFC 5280 section 7.1's string-matching rules in
/// abbreviated form: RDN count and attribute-type sequence must match, and
/// each value is compared case-insensitively after collapsing internal
/// whitespace and trimming the ends (`caseIgnoreMatch`-style). This is not a
/// full implementation of every X.520 matching rule (no support for
/// `TeletexString` transliteration or Unicode normalization), but it is
/// enough to agree with real CA-issued name pairs.
#[derive(Debug, Clone, Default)]
pub struct Name {
    pub rdns: Vec<Rdn>,
}

impl Name {
    pub fn new(rdns: Vec<Rdn>) -> Self {
        Self { rdns }
    }

    /// Looks up the first `commonName` attribute in the name, if any.
    pub fn common_name(&self) -> Option<&str> {
        self.rdns
            .iter()
            .flatten()
            .find(|atv| atv.attribute_type == ObjectId::common_name())
            .map(|atv| atv.value.as_str())
    }
}

fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_was_space = true; // trims a leading space for free
    for ch in value.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

impl PartialEq for AttributeTypeValue {
    fn eq(&self, other: &Self) -> bool {
        self.attribute_type == other.attribute_type && normalize(&self.value) == normalize(&other.value)
    }
}
impl Eq for AttributeTypeValue {}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        if self.rdns.len() != other.rdns.len() {
            return false;
        }
        self.rdns.iter().zip(other.rdns.iter()).all(|(a, b)| {
            a.len() == b.len() && a.iter().all(|atv| b.contains(atv))
        })
    }
}
impl Eq for Name {}
