use std::fmt::Display;

use smol_str::SmolStr;

use crate::types::{Numeric, Object, Stream};

/// Represents a PDF dictionary object containing key-value pairs.
///
/// PDF dictionaries map name keys to arbitrary PDF object values and are
/// used throughout a document to describe its structure and metadata.
///
/// # Structure
/// - Keys are PDF names (rendered with a leading '/')
/// - Values can be any PDF object type
/// - Entries keep their insertion order; setting an existing key replaces
///   its value in place
/// - At most one [`Stream`] may be attached; it is written right after the
///   dictionary
///
/// Dictionaries are persistent: [`Dictionary::with`], [`Dictionary::merge`]
/// and [`Dictionary::with_stream`] return new values and leave `self`
/// untouched, so a base dictionary (a shared font entry, for instance) can
/// be extended independently by several owners.
///
/// # Examples
/// <<
///   /Type /Catalog
///   /Pages 2 0 R
/// >>
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Dictionary {
    records: Vec<(SmolStr, Object)>,
    stream: Option<Stream>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with(&self, key: impl Into<SmolStr>, value: impl Into<Object>) -> Self {
        let mut result = self.clone();
        result.set(key.into(), value.into());
        result
    }

    /// Right-biased union of two dictionaries.
    ///
    /// Keys of `other` overwrite the same keys of `self`; the result lists
    /// `self`'s keys first, then the keys only `other` has. A stream attached
    /// to `other` replaces the one attached to `self`.
    pub fn merge(&self, other: &Dictionary) -> Self {
        let mut result = self.clone();
        for (key, value) in other.records.iter() {
            result.set(key.clone(), value.clone());
        }

        if other.stream.is_some() {
            result.stream = other.stream.clone();
        }

        result
    }

    /// Returns a copy carrying `stream`, with `/Length` set to its size.
    pub fn with_stream(&self, stream: impl Into<Stream>) -> Self {
        let stream = stream.into();
        let mut result = self.with("Length", Numeric::from(stream.len()));
        result.stream = Some(stream);
        result
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.records
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Object)> {
        self.records.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stream(&self) -> Option<&Stream> {
        self.stream.as_ref()
    }

    /// Renders the dictionary followed by its stream, if any.
    ///
    /// Stream data is copied as-is, it is never escaped.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut result = self.to_string().into_bytes();

        if let Some(stream) = &self.stream {
            result.extend_from_slice(b"\nstream\n");
            result.extend_from_slice(stream.as_bytes());
            result.extend_from_slice(b"\nendstream");
        }

        result
    }

    fn set(&mut self, key: SmolStr, value: Object) {
        match self.records.iter_mut().find(|(name, _)| *name == key) {
            Some((_, current)) => *current = value,
            None => self.records.push((key, value)),
        }
    }
}

impl<K: std::convert::Into<SmolStr>> From<Vec<(K, Object)>> for Dictionary {
    fn from(value: Vec<(K, Object)>) -> Self {
        value
            .into_iter()
            .fold(Self::default(), |mut dictionary, (key, val)| {
                dictionary.set(key.into(), val);
                dictionary
            })
    }
}

impl<K: std::convert::Into<SmolStr>, const N: usize> From<[(K, Object); N]> for Dictionary {
    fn from(value: [(K, Object); N]) -> Self {
        Self::from(Vec::from(value))
    }
}

impl Display for Dictionary {
    /// Writes `<< /Key value ... >>`. An entry whose value renders empty is
    /// written as a bare key.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<<")?;
        for (key, value) in self.records.iter() {
            let value = value.to_string();
            match value.is_empty() {
                true => write!(f, " /{key}")?,
                false => write!(f, " /{key} {value}")?,
            }
        }
        f.write_str(" >>")
    }
}
