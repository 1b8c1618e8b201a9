//! Ordered query-string multimap.
//!
//! Keys iterate in order of first occurrence. All values of a key are kept
//! in the order they appeared, so `a=1&b=2&a=3` iterates as
//! `a => [1, 3]`, `b => [2]`.
//!
//! Keys and values are held as decoded bytes, not strings, so parameters
//! in legacy encodings (EUC-KR from some PGs) survive a parse/encode cycle
//! byte for byte.

use std::collections::HashMap;

use percent_encoding::percent_decode;
use url::form_urlencoded;

/// Decoded query parameters of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(Vec<u8>, Vec<Vec<u8>>)>,
    /// Key → position in `entries`.
    index: HashMap<Vec<u8>, usize>,
}

/// `+` becomes a space, then `%XX` sequences are decoded.
fn decode(segment: &[u8]) -> Vec<u8> {
    let unplussed: Vec<u8> = segment
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&unplussed).collect()
}

impl QueryParams {
    /// Parse a raw (still percent-encoded) query string.
    ///
    /// `+` decodes to a space and a bare `flag` decodes to `("flag", "")`.
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::default();
        for pair in raw.as_bytes().split(|&b| b == b'&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(eq) => (&pair[..eq], &pair[eq + 1..]),
                None => (pair, &[][..]),
            };
            params.push(decode(key), decode(value));
        }
        params
    }

    /// Append one value, grouping it under an existing key if present.
    pub fn push(&mut self, key: Vec<u8>, value: Vec<u8>) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    /// First value of `key`.
    pub fn first(&self, key: &str) -> Option<&[u8]> {
        self.get_all(key)
            .and_then(|values| values.first())
            .map(Vec::as_slice)
    }

    pub fn get_all(&self, key: &str) -> Option<&[Vec<u8>]> {
        let &i = self.index.get(key.as_bytes())?;
        Some(self.entries[i].1.as_slice())
    }

    /// Remove `key` (exact, case-sensitive match) with all its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<Vec<u8>>> {
        let removed = self.index.remove(key.as_bytes())?;
        for i in self.index.values_mut() {
            if *i > removed {
                *i -= 1;
            }
        }
        Some(self.entries.remove(removed).1)
    }

    /// Flattened `(key, value)` pairs in iteration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_slice(), value.as_slice()))
        })
    }

    /// Serialize as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.pairs() {
            if !out.is_empty() {
                out.push('&');
            }
            out.extend(form_urlencoded::byte_serialize(key));
            out.push('=');
            out.extend(form_urlencoded::byte_serialize(value));
        }
        out
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
