mod header_name;
mod header_value;
mod header_values;
mod known_header_name;
mod unknown_header_name;

pub use header_name::HeaderName;
use header_name::HeaderNameInner::{KnownHeader, UnknownHeader};
pub use header_value::HeaderValue;
pub use header_values::HeaderValues;
pub use known_header_name::KnownHeaderName;
use unknown_header_name::UnknownHeaderName;

use hashbrown::HashMap;
use std::fmt::{self, Debug, Formatter};

/// Header storage for a single request or response.
///
/// Each header name maps to an ordered [`HeaderValues`]. [`Headers::append`]
/// adds to the end of the existing values and never replaces them, which
/// is how repeatable headers like `Set-Cookie` accumulate.
#[derive(Clone, Default)]
pub struct Headers {
    known: HashMap<KnownHeaderName, HeaderValues>,
    unknown: HashMap<UnknownHeaderName<'static>, HeaderValues>,
}

impl Debug for Headers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Headers {
    /// Construct a new Headers, expecting to see at least this many known headers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            known: HashMap::with_capacity(capacity),
            unknown: HashMap::new(),
        }
    }

    /// Construct a new headers with a default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Return an iterator over borrowed header names and header
    /// values. First yields the known headers and then the unknown
    /// headers, if any.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderName<'_>, &HeaderValues)> {
        self.known
            .iter()
            .map(|(k, v)| (HeaderName::from(*k), v))
            .chain(
                self.unknown
                    .iter()
                    .map(|(k, v)| (HeaderName::from(UnknownHeaderName::from(&**k)), v)),
            )
    }

    /// The number of distinct header names
    pub fn len(&self) -> usize {
        self.known.len() + self.unknown.len()
    }

    /// Whether there are no headers at all
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }

    /// Add the header value or header values into this header map. If
    /// there is already a header with the same name, the new values
    /// will be added to the existing ones in order.
    pub fn append(
        &mut self,
        name: impl Into<HeaderName<'static>>,
        value: impl Into<HeaderValues>,
    ) {
        let values = self.values_mut(name.into());
        values.extend(value);
    }

    /// Add the header value or header values into this header map,
    /// replacing any existing values under the same name.
    pub fn insert(
        &mut self,
        name: impl Into<HeaderName<'static>>,
        value: impl Into<HeaderValues>,
    ) {
        match name.into().0 {
            KnownHeader(known) => {
                self.known.insert(known, value.into());
            }
            UnknownHeader(unknown) => {
                self.unknown.insert(unknown, value.into());
            }
        }
    }

    /// Retrieves all of the values for a given header name, if any
    pub fn get_values<'a>(&self, name: impl Into<HeaderName<'a>>) -> Option<&HeaderValues> {
        match name.into().0 {
            KnownHeader(known) => self.known.get(&known),
            UnknownHeader(unknown) => self.unknown.get(&&unknown),
        }
    }

    /// Retrieves the last value for this header name as a &str, if
    /// it exists and is utf8
    pub fn get_str<'a>(&self, name: impl Into<HeaderName<'a>>) -> Option<&str> {
        self.get_values(name).and_then(HeaderValues::as_str)
    }

    /// Retrieves the last value for this header name
    pub fn get<'a>(&self, name: impl Into<HeaderName<'a>>) -> Option<&HeaderValue> {
        self.get_values(name).and_then(HeaderValues::last_value)
    }

    /// Removes all values for the given header name, returning them
    pub fn remove<'a>(&mut self, name: impl Into<HeaderName<'a>>) -> Option<HeaderValues> {
        match name.into().0 {
            KnownHeader(known) => self.known.remove(&known),
            UnknownHeader(unknown) => self.unknown.remove(&&unknown),
        }
    }

    /// Predicate function to check whether this header map contains
    /// the provided header name
    pub fn has_header<'a>(&self, name: impl Into<HeaderName<'a>>) -> bool {
        match name.into().0 {
            KnownHeader(known) => self.known.contains_key(&known),
            UnknownHeader(unknown) => self.unknown.contains_key(&&unknown),
        }
    }

    fn values_mut(&mut self, name: HeaderName<'static>) -> &mut HeaderValues {
        match name.0 {
            KnownHeader(known) => self.known.entry(known).or_default(),
            UnknownHeader(unknown) => self.unknown.entry(unknown).or_default(),
        }
    }
}

impl<HN, HV> Extend<(HN, HV)> for Headers
where
    HN: Into<HeaderName<'static>>,
    HV: Into<HeaderValues>,
{
    fn extend<T: IntoIterator<Item = (HN, HV)>>(&mut self, iter: T) {
        for (name, values) in iter {
            self.append(name, values);
        }
    }
}

impl<HN, HV> FromIterator<(HN, HV)> for Headers
where
    HN: Into<HeaderName<'static>>,
    HV: Into<HeaderValues>,
{
    fn from_iter<T: IntoIterator<Item = (HN, HV)>>(iter: T) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (HeaderName<'a>, &'a HeaderValues);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
