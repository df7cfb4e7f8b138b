use std::str::FromStr;

use crate::{ parse_dn, Error };

/// A single `type=value` pair of a relative distinguished name.
///
/// The value is stored fully unescaped: hex escapes are decoded, escaped
/// specials are literal, and BER-encoded (`#`-prefixed) values hold the
/// decoder's rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeTypeAndValue {
    attr_type: String,
    value: String,
}

impl AttributeTypeAndValue {
    pub fn new(attr_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self { attr_type: attr_type.into(), value: value.into() }
    }

    /// The attribute type name, e.g. `CN` or `1.3.6.1.4.1.1466.0`.
    pub fn attr_type(&self) -> &str {
        &self.attr_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One component of a DN. Holds more than one attribute when the input
/// joined them with `+`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelativeDn {
    attributes: Vec<AttributeTypeAndValue>,
}

impl RelativeDn {
    pub fn new(attributes: Vec<AttributeTypeAndValue>) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &[AttributeTypeAndValue] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeTypeAndValue> {
        self.attributes.iter()
    }

    pub(crate) fn push(&mut self, attribute: AttributeTypeAndValue) {
        self.attributes.push(attribute);
    }
}

impl IntoIterator for RelativeDn {
    type Item = AttributeTypeAndValue;
    type IntoIter = std::vec::IntoIter<AttributeTypeAndValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RelativeDn {
    type Item = &'a AttributeTypeAndValue;
    type IntoIter = std::slice::Iter<'a, AttributeTypeAndValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A distinguished name: its RDNs in input order, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dn {
    rdns: Vec<RelativeDn>,
}

impl Dn {
    pub fn new(rdns: Vec<RelativeDn>) -> Self {
        Self { rdns }
    }

    pub fn rdns(&self) -> &[RelativeDn] {
        &self.rdns
    }

    pub fn into_rdns(self) -> Vec<RelativeDn> {
        self.rdns
    }

    pub fn len(&self) -> usize {
        self.rdns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rdns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RelativeDn> {
        self.rdns.iter()
    }
}

impl IntoIterator for Dn {
    type Item = RelativeDn;
    type IntoIter = std::vec::IntoIter<RelativeDn>;

    fn into_iter(self) -> Self::IntoIter {
        self.rdns.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dn {
    type Item = &'a RelativeDn;
    type IntoIter = std::slice::Iter<'a, RelativeDn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for Dn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dn(s)
    }
}
