use super::HeaderValue;
use smallvec::{SmallVec, smallvec};
use std::{
    borrow::Cow,
    fmt::{Debug, Formatter},
    ops::Deref,
};

/// An ordered collection of [`HeaderValue`]s sharing one header
/// name. Values are kept in insertion order, which is the order they
/// will be written to the wire.
#[derive(Clone, Eq, PartialEq, Default)]
pub struct HeaderValues(SmallVec<[HeaderValue; 1]>);

impl Deref for HeaderValues {
    type Target = [HeaderValue];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for HeaderValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &*self.0 {
            [one] => Debug::fmt(one, f),
            many => f.debug_list().entries(many).finish(),
        }
    }
}

impl IntoIterator for HeaderValues {
    type Item = HeaderValue;
    type IntoIter = smallvec::IntoIter<[HeaderValue; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderValues {
    type Item = &'a HeaderValue;
    type IntoIter = std::slice::Iter<'a, HeaderValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I> FromIterator<I> for HeaderValues
where
    I: Into<HeaderValue>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl HeaderValues {
    /// Builds an empty `HeaderValues`
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently added value, if any
    pub fn last_value(&self) -> Option<&HeaderValue> {
        self.0.last()
    }

    /// The most recently added value as a &str, if it exists and is
    /// utf8
    pub fn as_str(&self) -> Option<&str> {
        self.last_value().and_then(HeaderValue::as_str)
    }

    /// Push a single value onto the end of this collection
    pub fn append(&mut self, value: impl Into<HeaderValue>) {
        self.0.push(value.into());
    }

    /// Push every value in `values` onto the end of this collection,
    /// preserving their order
    pub fn extend(&mut self, values: impl Into<HeaderValues>) {
        self.0.extend(values.into());
    }
}

impl From<String> for HeaderValues {
    fn from(s: String) -> Self {
        Self(smallvec![s.into()])
    }
}

impl From<&'static str> for HeaderValues {
    fn from(s: &'static str) -> Self {
        Self(smallvec![s.into()])
    }
}

impl From<Cow<'static, str>> for HeaderValues {
    fn from(c: Cow<'static, str>) -> Self {
        Self(smallvec![c.into()])
    }
}

impl From<HeaderValue> for HeaderValues {
    fn from(v: HeaderValue) -> Self {
        Self(smallvec![v])
    }
}

impl<HV> From<Vec<HV>> for HeaderValues
where
    HV: Into<HeaderValue>,
{
    fn from(v: Vec<HV>) -> Self {
        v.into_iter().collect()
    }
}

impl PartialEq<[&str]> for HeaderValues {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}
