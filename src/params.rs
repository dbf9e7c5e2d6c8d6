//! Query string encoding for GET endpoints
//!
//! The Business API takes every GET parameter through the query string, composite
//! values included. Lists and filter objects travel as a single JSON encoded value.

use std::fmt::Display;

use serde::Serialize;

use crate::{Error, Result, types::Pagination};

/// Ordered query parameters, percent-encoded when the request is built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, dropping any earlier value for it
    pub fn set(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.retain(|(k, _)| k != key);
        self.add(key, value)
    }

    /// Appends `key`, keeping earlier values (`key=a&key=b`)
    pub fn add(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    pub fn set_optional(&mut self, key: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Writes `page` and `page_size`, each only when supplied
    pub fn pagination(&mut self, pagination: &Pagination) -> &mut Self {
        self.set_optional("page", pagination.page);
        self.set_optional("page_size", pagination.page_size)
    }

    /// Writes a JSON array, or nothing at all when `values` is empty
    ///
    /// An absent parameter means "no filter", which is not the same as an empty one.
    pub fn string_slice(&mut self, key: &str, values: &[String]) -> Result<&mut Self> {
        if values.is_empty() {
            return Ok(self);
        }
        self.json(key, values)
    }

    /// Writes `value` as a JSON string, skipped when it serializes to `null`
    pub fn json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<&mut Self> {
        let encoded = serde_json::to_string(value).map_err(|source| Error::Param {
            key: key.to_owned(),
            source,
        })?;

        if encoded == "null" {
            return Ok(self);
        }

        Ok(self.set(key, encoded))
    }

    /// First value recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
