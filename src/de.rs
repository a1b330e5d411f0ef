//! Key-order recovery for JSON objects.
//!
//! JSON decoders that build hash or tree maps lose the order in which keys
//! were written. This module decodes the text once without regard for order,
//! then locates every decoded key in the source text and sorts the keys by
//! where they were found.
//!
//! ## Locating a key
//!
//! String literals are searched backward from the end of the text, and a
//! literal whose decoded text equals the key is a candidate, however its
//! characters were escaped. A candidate is accepted when the text before it,
//! with trailing whitespace and one trailing comma removed, becomes a valid
//! JSON object once `}` is appended. Occurrences inside sibling values or
//! deeper objects fail that check and the search continues further back.
//! The length of the accepted prefix is the key's offset.
//!
//! Nested objects and arrays are recovered recursively from the raw value text
//! that follows each accepted key.
//!
//! ## Cost
//!
//! Each candidate check re-parses a prefix of the text, so recovery is
//! quadratic in the worst case. See [`JsonOptions::warn_above_bytes`].
//!
//! ```rust
//! use serde_ordermap::from_str;
//!
//! let map = from_str(r#"{"b": 1, "a": {"z": 2, "y": 3}, "c": "a"}"#).unwrap();
//! assert_eq!(map.keys(), vec!["b", "a", "c"]);
//! assert_eq!(map.get("a").as_object().unwrap().keys(), vec!["z", "y"]);
//!
//! let map = from_str(r#"{"caf\u00e9": 1, "b": 2}"#).unwrap();
//! assert_eq!(map.keys(), vec!["café", "b"]);
//! ```

use crate::guard::Guard;
use crate::map::Entries;
use crate::{Error, JsonOptions, OrderedMap, Result, Value};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

/// Recovers the entries of a JSON object in source order.
pub(crate) fn recover_entries(text: &str) -> Result<Entries> {
    recover_entries_with_options(text, &JsonOptions::default())
}

pub(crate) fn recover_entries_with_options(text: &str, options: &JsonOptions) -> Result<Entries> {
    if options.is_large(text.len()) {
        warn!(
            bytes = text.len(),
            limit = ?options.warn_above_bytes,
            "recovering key order from a large input"
        );
    }

    let text = text.trim();
    debug!(bytes = text.len(), "recovering key order");
    let entries = recover_object(text)?;
    debug!(keys = entries.len(), "recovered key order");
    Ok(entries)
}

/// First pass: values and last-wins duplicates, no order.
fn decode_object(text: &str) -> Result<BTreeMap<String, Value>> {
    serde_json::from_str(text).map_err(|err| {
        if !err.is_data() {
            return Error::from(err);
        }
        // a data error on a well-formed document means the root has the wrong shape
        match serde_json::from_str::<Value>(text) {
            Ok(value) if !value.is_object() => Error::not_an_object(value.kind()),
            _ => Error::from(err),
        }
    })
}

fn recover_object(text: &str) -> Result<Entries> {
    let decoded = decode_object(text)?;

    let mut located = Vec::with_capacity(decoded.len());
    for (key, value) in decoded {
        let (after_key, offset) = KeyScanner::new(text, &key)
            .locate()
            .ok_or_else(|| Error::key_not_recovered(&key))?;
        let raw = value_text(text, after_key);
        let value = recover_value(raw, value)?;
        located.push((offset, key, value));
    }

    located.sort_by_key(|(offset, _, _)| *offset);
    Ok(located
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .collect())
}

/// Raw text following a key up to the closing brace of the enclosing object,
/// with the separating `:` removed.
fn value_text(text: &str, after_key: usize) -> &str {
    let end = text.len().saturating_sub(1);
    let rest = text.get(after_key..end).unwrap_or_default().trim_start();
    rest.strip_prefix(':').unwrap_or(rest).trim_start()
}

fn recover_value(raw: &str, decoded: Value) -> Result<Value> {
    match decoded {
        Value::Object(_) => match closing_span::<BTreeMap<String, IgnoredAny>>(raw, '{', '}') {
            Some(span) => Ok(Value::Object(OrderedMap::from_entries(recover_object(span)?))),
            None => Ok(decoded),
        },
        Value::Array(_) => match closing_span::<Vec<IgnoredAny>>(raw, '[', ']') {
            Some(span) => recover_array(span).map(Value::Array),
            None => Ok(decoded),
        },
        scalar => Ok(scalar),
    }
}

/// Shortest prefix of `raw` ending at `close` that decodes as `T`.
fn closing_span<T>(raw: &str, open: char, close: char) -> Option<&str>
where
    T: de::DeserializeOwned,
{
    if !raw.starts_with(open) {
        return None;
    }
    raw.match_indices(close)
        .map(|(i, _)| &raw[..i + close.len_utf8()])
        .find(|candidate| serde_json::from_str::<T>(candidate).is_ok())
}

/// Splits a bracketed array into items, recovering nested objects and arrays.
///
/// An item ends at the first comma (or the closing bracket) where the text
/// accumulated so far decodes as a JSON value.
fn recover_array(span: &str) -> Result<Vec<Value>> {
    let inner = span
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or_default();

    let ends = inner
        .match_indices(',')
        .map(|(i, _)| i)
        .chain(std::iter::once(inner.len()));

    let mut items = Vec::new();
    let mut start = 0;
    for end in ends {
        let candidate = inner[start..end].trim();
        let Ok(item) = serde_json::from_str::<Value>(candidate) else {
            continue;
        };
        let item = match item {
            Value::Object(_) => {
                Value::Object(OrderedMap::from_entries(recover_object(candidate)?))
            }
            Value::Array(_) => Value::Array(recover_array(candidate)?),
            scalar => scalar,
        };
        items.push(item);
        start = end + 1;
    }
    Ok(items)
}

/// Where a [`KeyScanner`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Search for the last literal spelling the key that ends by `end`.
    Seek { end: usize },
    /// Check whether the literal at `at..after` is a key of the outer object.
    Validate { at: usize, after: usize },
    /// Accepted literal. `offset` is the length of the validated prefix.
    Found {
        at: usize,
        after: usize,
        offset: usize,
    },
    /// No literal is left to try.
    Exhausted,
}

/// Backward search for one key in an object's text.
pub(crate) struct KeyScanner<'a> {
    text: &'a str,
    key: &'a str,
    state: ScanState,
}

impl<'a> KeyScanner<'a> {
    pub(crate) fn new(text: &'a str, key: &'a str) -> Self {
        KeyScanner {
            text,
            key,
            state: ScanState::Seek { end: text.len() },
        }
    }

    /// Performs one transition. `Found` and `Exhausted` are terminal.
    pub(crate) fn step(&mut self) -> ScanState {
        self.state = match self.state {
            ScanState::Seek { end } => {
                let head = self.text.get(..end).unwrap_or_default();
                head.rmatch_indices('"')
                    .find_map(|(at, _)| {
                        let literal = string_literal(&head[at..])?;
                        spells_key(literal, self.key).then_some(ScanState::Validate {
                            at,
                            after: at + literal.len(),
                        })
                    })
                    .unwrap_or(ScanState::Exhausted)
            }
            ScanState::Validate { at, after } => {
                let prefix = truncated_prefix(self.text, at);
                if closes_object(prefix) {
                    ScanState::Found {
                        at,
                        after,
                        offset: prefix.len(),
                    }
                } else {
                    trace!(key = self.key, at, "rejected key candidate");
                    ScanState::Seek { end: prefix.len() }
                }
            }
            terminal => terminal,
        };
        self.state
    }

    /// Runs to a terminal state; returns the end of the accepted literal and
    /// the key's offset.
    pub(crate) fn locate(mut self) -> Option<(usize, usize)> {
        loop {
            match self.step() {
                ScanState::Found { after, offset, .. } => return Some((after, offset)),
                ScanState::Exhausted => return None,
                ScanState::Seek { .. } | ScanState::Validate { .. } => {}
            }
        }
    }
}

/// The JSON string literal at the start of `text`, quotes included.
///
/// Ends at the first unescaped `"`; `None` when the text runs out first.
fn string_literal(text: &str) -> Option<&str> {
    let mut escaped = false;
    for (i, byte) in text.bytes().enumerate().skip(1) {
        match byte {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(&text[..=i]),
            _ => {}
        }
    }
    None
}

/// Whether a quoted literal decodes to `key`.
fn spells_key(literal: &str, key: &str) -> bool {
    let body = &literal[1..literal.len() - 1];
    if !body.contains('\\') {
        return body == key;
    }
    serde_json::from_str::<String>(literal).map_or(false, |decoded| decoded == key)
}

fn truncated_prefix(text: &str, at: usize) -> &str {
    let head = text.get(..at).unwrap_or_default().trim_end();
    head.strip_suffix(',').unwrap_or(head)
}

fn closes_object(prefix: &str) -> bool {
    let mut candidate = String::with_capacity(prefix.len() + 1);
    candidate.push_str(prefix);
    candidate.push('}');
    serde_json::from_str::<BTreeMap<String, IgnoredAny>>(&candidate).is_ok()
}

/// Collects map entries in the order the format delivers them.
///
/// A repeated key keeps its first position and takes its last value.
pub(crate) fn collect_entries<'de, A>(mut map: A) -> std::result::Result<Entries, A::Error>
where
    A: MapAccess<'de>,
{
    let mut entries = Entries::with_capacity(map.size_hint().unwrap_or(0).min(4096));
    while let Some((key, value)) = map.next_entry::<String, Value>()? {
        entries.insert(key, value);
    }
    Ok(entries)
}

impl<'de, G: Guard> Deserialize<'de> for OrderedMap<G> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<G>(PhantomData<G>);

        impl<'de, G: Guard> Visitor<'de> for OrderedMapVisitor<G> {
            type Value = OrderedMap<G>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                collect_entries(map).map(OrderedMap::from_entries)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
