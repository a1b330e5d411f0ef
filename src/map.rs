//! Ordered map type for JSON objects.
//!
//! This module provides [`OrderedMap`], a string-keyed map that remembers the
//! order in which keys were inserted (or explicitly sorted, or found in parsed
//! JSON text) and reproduces that order when serialized.
//!
//! Entries live in an [`IndexMap`] behind a [`Guard`], so every method takes
//! `&self` and a map can be shared between threads when it uses the default
//! [`SyncGuard`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_ordermap::OrderedMap;
//!
//! let map = OrderedMap::new();
//! map.add("name", "Alice").add("age", 30);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get_string("name"), "Alice");
//! assert_eq!(map.to_json().unwrap(), r#"{"name":"Alice","age":30}"#);
//! ```

use crate::cast;
use crate::guard::{Guard, LocalGuard, SyncGuard};
use crate::{Result, Value};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Storage behind the guard: key order is index order.
pub type Entries = IndexMap<String, Value>;

/// An insertion-ordered map of string keys to JSON values.
///
/// The guard type fixes the locking mode for the lifetime of the map; see
/// [`crate::guard`].
///
/// # Repeated keys in JSON input
///
/// Every way of reading JSON keeps the last value of a repeated key, but the
/// key's position depends on the entry point:
///
/// - [`crate::from_str`] and the other `from_*` functions, [`OrderedMap::from_json`]
///   and [`OrderedMap::unmarshal_json`] recover order from the text, and a
///   repeated key sits where it last occurs.
/// - The serde `Deserialize` impl, used when a map is a field of another type,
///   follows the order the format delivers keys, and a repeated key keeps the
///   position of its first occurrence.
///
/// ```rust
/// use serde_ordermap::{from_str, OrderedMap};
///
/// let text = r#"{"a":1,"b":2,"a":3}"#;
///
/// let recovered = from_str(text).unwrap();
/// assert_eq!(recovered.keys(), vec!["b", "a"]);
///
/// let delivered: OrderedMap = serde_json::from_str(text).unwrap();
/// assert_eq!(delivered.keys(), vec!["a", "b"]);
///
/// assert_eq!(recovered.get_i64("a"), 3);
/// assert_eq!(delivered.get_i64("a"), 3);
/// ```
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::OrderedMap;
///
/// let map = OrderedMap::new();
/// map.set("first", 1).set("second", 2).set("first", 3);
///
/// // `set` never moves an existing key
/// assert_eq!(map.keys(), vec!["first", "second"]);
/// assert_eq!(map.get_i64("first"), 3);
/// ```
pub struct OrderedMap<G: Guard = SyncGuard> {
    guard: G,
}

/// An ordered map without locking, for single-threaded use.
pub type LocalOrderedMap = OrderedMap<LocalGuard>;

/// A borrowed `(key, value)` pair handed to [`OrderedMap::sort_by`] comparators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<'a> {
    key: &'a str,
    value: &'a Value,
}

impl<'a> Pair<'a> {
    fn new(key: &'a str, value: &'a Value) -> Self {
        Pair { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &'a str {
        self.key
    }

    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

impl OrderedMap<SyncGuard> {
    /// Creates an empty map guarded by a read/write lock.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
    }
}

impl OrderedMap<LocalGuard> {
    /// Creates an empty map without locking.
    #[must_use]
    pub fn new_local() -> Self {
        Self::empty()
    }
}

impl<G: Guard> OrderedMap<G> {
    /// Creates an empty map with the guard chosen by the type parameter.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_entries(Entries::new())
    }

    /// Wraps already-ordered entries.
    #[must_use]
    pub fn from_entries(entries: Entries) -> Self {
        OrderedMap {
            guard: G::new(entries),
        }
    }

    /// Builds a map from any key/value mapping.
    ///
    /// Keys are coerced with [`cast::to_string`]; keys that fail to coerce or
    /// coerce to an empty string are skipped. Order follows the source's
    /// iteration order, which is arbitrary for hash maps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::OrderedMap;
    /// use std::collections::HashMap;
    ///
    /// let source = HashMap::from([(1, "one"), (2, "two")]);
    /// let map: OrderedMap = OrderedMap::from_map(source);
    /// assert_eq!(map.get_string("2"), "two");
    /// ```
    pub fn from_map<I, K, V>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let entries = map
            .into_iter()
            .filter_map(|(key, value)| match cast::to_string(&key.into()) {
                Ok(key) if !key.is_empty() => Some((key, value.into())),
                _ => None,
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Parses a JSON object, recovering the key order of the source text.
    ///
    /// # Errors
    ///
    /// Fails when the text is not valid JSON, its root is not an object, or a
    /// key's position cannot be recovered.
    pub fn from_json(text: &str) -> Result<Self> {
        crate::de::recover_entries(text).map(Self::from_entries)
    }

    /// `true` when this map performs real locking.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.guard.is_safe()
    }

    /// Inserts or replaces a value; the key always ends up last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.add("a", 1).add("b", 2).add("a", 3);
    /// assert_eq!(map.keys(), vec!["b", "a"]);
    /// ```
    pub fn add(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        let (key, value) = (key.into(), value.into());
        self.guard.write(|entries| {
            entries.shift_remove(&key);
            entries.insert(key, value);
        });
        self
    }

    /// Inserts or replaces a value; an existing key keeps its position.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        let (key, value) = (key.into(), value.into());
        self.guard.write(|entries| {
            entries.insert(key, value);
        });
        self
    }

    /// Returns the existing value for `key`, or sets and returns `value`.
    pub fn set_or_get(&self, key: impl Into<String>, value: impl Into<Value>) -> Value {
        let (key, value) = (key.into(), value.into());
        self.guard
            .write(|entries| entries.entry(key).or_insert(value).clone())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.guard.read(|entries| entries.contains_key(key))
    }

    /// Position of `key` in the current order.
    #[must_use]
    pub fn index(&self, key: &str) -> Option<usize> {
        self.guard.read(|entries| entries.get_index_of(key))
    }

    /// Returns a copy of the value for `key`, if present.
    #[must_use]
    pub fn search(&self, key: &str) -> Option<Value> {
        self.guard.read(|entries| entries.get(key).cloned())
    }

    /// Coerced lookup: `None` when absent, `Some(false)` when present but not
    /// convertible.
    #[must_use]
    pub fn search_bool(&self, key: &str) -> Option<bool> {
        self.search_with(key, cast::to_bool_or_default)
    }

    #[must_use]
    pub fn search_int(&self, key: &str) -> Option<isize> {
        self.search_with(key, cast::to_int_or_default)
    }

    #[must_use]
    pub fn search_i64(&self, key: &str) -> Option<i64> {
        self.search_with(key, cast::to_i64_or_default)
    }

    #[must_use]
    pub fn search_string(&self, key: &str) -> Option<String> {
        self.search_with(key, cast::to_string_or_default)
    }

    /// Returns a copy of the value for `key`, or [`Value::Null`] when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        self.search(key).unwrap_or_default()
    }

    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        self.search_bool(key).unwrap_or_default()
    }

    #[must_use]
    pub fn get_int(&self, key: &str) -> isize {
        self.search_int(key).unwrap_or_default()
    }

    #[must_use]
    pub fn get_i64(&self, key: &str) -> i64 {
        self.search_i64(key).unwrap_or_default()
    }

    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        self.search_string(key).unwrap_or_default()
    }

    fn search_with<T>(&self, key: &str, coerce: fn(&Value) -> T) -> Option<T> {
        self.guard.read(|entries| entries.get(key).map(coerce))
    }

    /// Visits entries in order until `f` returns `false`.
    ///
    /// The map stays read-locked for the whole visit; `f` must not call back
    /// into this map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.add("a", 1).add("b", 2).add("c", 3);
    ///
    /// let mut seen = Vec::new();
    /// map.iterate(|key, _| {
    ///     seen.push(key.to_string());
    ///     key != "b"
    /// });
    /// assert_eq!(seen, vec!["a", "b"]);
    /// ```
    pub fn iterate<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Value) -> bool,
    {
        self.guard.read(|entries| {
            for (key, value) in entries {
                if !f(key.as_str(), value) {
                    break;
                }
            }
        });
    }

    /// Unordered snapshot of the entries.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.guard.read(|entries| {
            entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
    }

    /// Keys in order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.guard.read(|entries| entries.keys().cloned().collect())
    }

    /// Values in key order.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.guard.read(|entries| entries.values().cloned().collect())
    }

    /// Removes every listed key that is present; the rest keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.add("a", 1).add("b", 2).add("c", 3);
    /// map.remove(["a", "missing"]);
    /// assert_eq!(map.keys(), vec!["b", "c"]);
    /// ```
    pub fn remove<I, K>(&self, keys: I) -> &Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.guard.write(|entries| {
            for key in keys {
                entries.shift_remove(key.as_ref());
            }
        });
        self
    }

    pub fn clear(&self) -> &Self {
        self.guard.write(Entries::clear);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guard.read(Entries::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies `other` into this map in `other`'s order.
    ///
    /// Existing keys are overwritten in place; new keys are appended. Merging
    /// a map into itself leaves it unchanged.
    ///
    /// `other` is snapshotted before this map is write-locked, so two maps
    /// merging into each other from different threads cannot deadlock.
    pub fn merge<H: Guard>(&self, other: &OrderedMap<H>) -> &Self {
        let this = (self as *const Self).cast::<()>();
        let that = (other as *const OrderedMap<H>).cast::<()>();
        if std::ptr::eq(this, that) {
            return self;
        }

        let incoming: Vec<(String, Value)> = other.guard.read(|entries| {
            entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        });
        debug!(count = incoming.len(), "merging ordered map");
        self.guard.write(|entries| entries.extend(incoming));
        self
    }

    /// Swaps keys and values: each `(k, v)` becomes `(string(v), k)`.
    ///
    /// When several values stringify to the same key, the first one fixes the
    /// position and the last one supplies the value. Values without a string
    /// form (arrays, objects) become the empty key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.add("a", 1).add("b", 2).add("c", 1);
    /// map.flip();
    ///
    /// assert_eq!(map.keys(), vec!["1", "2"]);
    /// assert_eq!(map.get_string("1"), "c");
    /// ```
    pub fn flip(&self) -> &Self {
        self.guard.write(|entries| {
            let mut flipped = Entries::with_capacity(entries.len());
            for (key, value) in entries.drain(..) {
                flipped.insert(cast::to_string_or_default(&value), Value::String(key));
            }
            *entries = flipped;
        });
        self
    }

    /// Sorts keys in ascending byte order.
    pub fn sort_keys(&self) -> &Self {
        self.guard.write(Entries::sort_keys);
        self
    }

    /// Sorts keys in descending byte order.
    pub fn rsort_keys(&self) -> &Self {
        self.sort_by(|a, b| b.key().cmp(a.key()))
    }

    /// Sorts by the string form of each value, ascending.
    pub fn sort_values(&self) -> &Self {
        self.sort_by(|a, b| compare_as_strings(a.value(), b.value()))
    }

    /// Sorts by the string form of each value, descending.
    pub fn rsort_values(&self) -> &Self {
        self.sort_by(|a, b| compare_as_strings(b.value(), a.value()))
    }

    /// Reorders keys with a custom comparator. The sort is stable and values
    /// are untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.add("x", 3).add("y", 1).add("z", 2);
    /// map.sort_by(|a, b| a.value().as_i64().cmp(&b.value().as_i64()));
    /// assert_eq!(map.keys(), vec!["y", "z", "x"]);
    /// ```
    pub fn sort_by<F>(&self, mut compare: F) -> &Self
    where
        F: FnMut(&Pair<'_>, &Pair<'_>) -> Ordering,
    {
        self.guard.write(|entries| {
            entries.sort_by(|k1, v1, k2, v2| compare(&Pair::new(k1, v1), &Pair::new(k2, v2)));
        });
        self
    }

    /// Serializes to compact JSON in key order.
    ///
    /// # Errors
    ///
    /// Fails when a value has no JSON encoding (non-finite floats).
    pub fn to_json(&self) -> Result<String> {
        crate::ser::to_json(self)
    }

    /// Replaces the contents with the JSON object in `text`, recovering its
    /// key order.
    ///
    /// The text is fully parsed before the map is touched; on error the map
    /// is unchanged.
    ///
    /// # Errors
    ///
    /// See [`OrderedMap::from_json`].
    pub fn unmarshal_json(&self, text: &str) -> Result<()> {
        let recovered = crate::de::recover_entries(text)?;
        self.guard.write(|entries| *entries = recovered);
        Ok(())
    }

    /// Consumes the map and returns its entries in order.
    #[must_use]
    pub fn into_entries(self) -> Entries {
        self.guard.into_inner()
    }

    /// Exclusive access to the entries without locking.
    pub fn entries_mut(&mut self) -> &mut Entries {
        self.guard.get_mut()
    }

    pub(crate) fn with_entries<R>(&self, f: impl FnOnce(&Entries) -> R) -> R {
        self.guard.read(f)
    }
}

fn compare_as_strings(a: &Value, b: &Value) -> Ordering {
    cast::to_string_or_default(a).cmp(&cast::to_string_or_default(b))
}

impl Default for OrderedMap<SyncGuard> {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for OrderedMap<LocalGuard> {
    fn default() -> Self {
        Self::new_local()
    }
}

impl<G: Guard> Clone for OrderedMap<G> {
    fn clone(&self) -> Self {
        Self::from_entries(self.guard.read(Entries::clone))
    }
}

impl<G: Guard> fmt::Debug for OrderedMap<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.guard.read(|entries| f.debug_map().entries(entries.iter()).finish())
    }
}

/// Order-sensitive equality: same keys, same values, same order.
impl<G: Guard, H: Guard> PartialEq<OrderedMap<H>> for OrderedMap<G> {
    fn eq(&self, other: &OrderedMap<H>) -> bool {
        let this = (self as *const Self).cast::<()>();
        let that = (other as *const OrderedMap<H>).cast::<()>();
        if std::ptr::eq(this, that) {
            return true;
        }
        // one lock at a time, as in merge
        let theirs = other.guard.read(Entries::clone);
        self.guard.read(|ours| ours.iter().eq(theirs.iter()))
    }
}

/// Compact JSON; empty when a value cannot be encoded.
impl<G: Guard> fmt::Display for OrderedMap<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().unwrap_or_default())
    }
}

impl<G: Guard> From<HashMap<String, Value>> for OrderedMap<G> {
    fn from(map: HashMap<String, Value>) -> Self {
        Self::from_entries(map.into_iter().collect())
    }
}

impl<G: Guard> From<Entries> for OrderedMap<G> {
    fn from(entries: Entries) -> Self {
        Self::from_entries(entries)
    }
}

impl<G: Guard> From<OrderedMap<G>> for HashMap<String, Value> {
    fn from(map: OrderedMap<G>) -> Self {
        map.into_entries().into_iter().collect()
    }
}

impl<G: Guard> IntoIterator for OrderedMap<G> {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_entries().into_iter()
    }
}

/// Collects in iteration order; a repeated key keeps its first position and
/// its last value, as with [`OrderedMap::set`].
impl<G: Guard, K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OrderedMap<G> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_entries(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<G: Guard, K: Into<String>, V: Into<Value>> Extend<(K, V)> for OrderedMap<G> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.entries_mut()
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> OrderedMap {
        let map = OrderedMap::new();
        map.add("a", 1).add("b", 2).add("c", 3);
        map
    }

    #[test]
    fn test_add_moves_existing_key_to_end() {
        let map = abc();
        map.add("a", 10);
        assert_eq!(map.keys(), vec!["b", "c", "a"]);
        assert_eq!(map.index("a"), Some(map.len() - 1));
        assert_eq!(map.get_i64("a"), 10);
    }

    #[test]
    fn test_set_keeps_position() {
        let map = abc();
        map.set("a", 10).set("d", 4);
        assert_eq!(map.keys(), vec!["a", "b", "c", "d"]);
        assert_eq!(map.get_i64("a"), 10);
    }

    #[test]
    fn test_set_or_get() {
        let map = abc();
        assert_eq!(map.set_or_get("a", 99), Value::from(1));
        assert_eq!(map.set_or_get("z", 26), Value::from(26));
        assert_eq!(map.keys(), vec!["a", "b", "c", "z"]);
    }

    #[test]
    fn test_lookups() {
        let map = abc();
        map.set("flag", "true").set("name", "x").set("list", vec![Value::Null]);

        assert!(map.contains("a"));
        assert!(!map.contains("nope"));
        assert_eq!(map.index("c"), Some(2));
        assert_eq!(map.index("nope"), None);
        assert_eq!(map.search("b"), Some(Value::from(2)));
        assert_eq!(map.search("nope"), None);
        assert_eq!(map.get("nope"), Value::Null);

        assert_eq!(map.search_bool("flag"), Some(true));
        assert_eq!(map.search_bool("name"), Some(false));
        assert_eq!(map.search_bool("nope"), None);
        assert_eq!(map.search_int("b"), Some(2));
        assert_eq!(map.search_i64("list"), Some(0));
        assert_eq!(map.search_string("a"), Some("1".to_string()));

        assert!(map.get_bool("flag"));
        assert_eq!(map.get_int("c"), 3);
        assert_eq!(map.get_i64("nope"), 0);
        assert_eq!(map.get_string("nope"), "");
    }

    #[test]
    fn test_remove_and_clear() {
        let map = abc();
        map.remove(["b", "zz"]);
        assert_eq!(map.keys(), vec!["a", "c"]);
        assert_eq!(map.len(), 2);

        map.clear();
        assert!(map.is_empty());
        assert!(map.keys().is_empty());
    }

    #[test]
    fn test_values_and_snapshot() {
        let map = abc();
        assert_eq!(
            map.values(),
            vec![Value::from(1), Value::from(2), Value::from(3)]
        );
        let snapshot = map.to_map();
        map.clear();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot["b"], Value::from(2));
    }

    #[test]
    fn test_from_map_skips_empty_and_unconvertible_keys() {
        let map: OrderedMap = OrderedMap::from_map(vec![
            (Value::from("a"), Value::from(1)),
            (Value::from(""), Value::from(2)),
            (Value::Array(vec![]), Value::from(3)),
            (Value::Null, Value::from(4)),
            (Value::from(true), Value::from(5)),
        ]);
        assert_eq!(map.keys(), vec!["a", "true"]);
    }

    #[test]
    fn test_clone_is_independent_and_keeps_mode() {
        let map = abc();
        let copy = map.clone();
        map.add("d", 4);
        assert_eq!(copy.keys(), vec!["a", "b", "c"]);
        assert!(copy.is_safe());

        let local = LocalOrderedMap::new_local();
        local.add("x", 1);
        assert!(!local.clone().is_safe());
    }

    #[test]
    fn test_merge() {
        let map = abc();
        let other = LocalOrderedMap::new_local();
        other.add("d", 4).add("b", 20).add("e", 5);

        map.merge(&other);
        assert_eq!(map.keys(), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(map.get_i64("b"), 20);
    }

    #[test]
    fn test_self_merge_is_identity() {
        let map = abc();
        map.merge(&map);
        assert_eq!(map, abc());
    }

    #[test]
    fn test_flip_first_position_last_value() {
        let map = OrderedMap::new();
        map.add("a", 1).add("b", 2).add("c", 1);
        map.flip();
        assert_eq!(map.keys(), vec!["1", "2"]);
        assert_eq!(map.get("1"), Value::from("c"));
        assert_eq!(map.get("2"), Value::from("b"));
    }

    #[test]
    fn test_sorting() {
        let map = OrderedMap::new();
        map.add("b", "y").add("c", "x").add("a", "z");

        map.sort_keys();
        assert_eq!(map.keys(), vec!["a", "b", "c"]);
        map.rsort_keys();
        assert_eq!(map.keys(), vec!["c", "b", "a"]);
        map.sort_values();
        assert_eq!(map.keys(), vec!["c", "b", "a"]);
        map.rsort_values();
        assert_eq!(map.keys(), vec!["a", "b", "c"]);
        assert_eq!(map.get_string("a"), "z");
    }

    #[test]
    fn test_sort_values_is_stable() {
        let map = OrderedMap::new();
        map.add("first", 1).add("second", 0).add("third", 1).add("fourth", 0);
        map.sort_values();
        assert_eq!(map.keys(), vec!["second", "fourth", "first", "third"]);
        map.rsort_values();
        assert_eq!(map.keys(), vec!["first", "third", "second", "fourth"]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab = OrderedMap::new();
        ab.add("a", 1).add("b", 2);
        let ba = OrderedMap::new();
        ba.add("b", 2).add("a", 1);
        assert_ne!(ab, ba);
        ba.sort_keys();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_iterators_and_extend() {
        let mut map: OrderedMap = vec![("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
        assert_eq!(map.keys(), vec!["x", "y"]);
        assert_eq!(map.get_i64("x"), 3);

        map.extend([("z", 4)]);
        let pairs: Vec<(String, Value)> = map.into_iter().collect();
        assert_eq!(pairs.last(), Some(&("z".to_string(), Value::from(4))));
    }

    #[test]
    fn test_debug_lists_entries_in_order() {
        let map = OrderedMap::new();
        map.add("b", 1).add("a", true);
        assert_eq!(
            format!("{:?}", map),
            r#"{"b": Number(Integer(1)), "a": Bool(true)}"#
        );
    }
}
