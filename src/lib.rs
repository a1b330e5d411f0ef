//! # serde_ordermap
//!
//! An insertion-ordered, string-keyed map of JSON values that keeps its key
//! order through JSON text in both directions.
//!
//! ## Why?
//!
//! Most JSON object representations are hash or tree maps: they forget the
//! order in which keys were written. `OrderedMap` remembers it. Serializing
//! writes keys in map order, and parsing recovers the order the keys had in
//! the source text, including inside nested objects and arrays.
//!
//! ## Key Features
//!
//! - **Ordered**: insertion order, explicit sorts, or source-text order
//! - **Shareable**: every method takes `&self`; the default guard is a
//!   read/write lock so a map can sit behind an `Arc`
//! - **Lock-free option**: [`LocalOrderedMap`] skips locking and is `!Sync`
//! - **Typed getters**: lenient coercion through the [`cast`] module
//! - **Serde Compatible**: `OrderedMap` and [`Value`] implement `Serialize`
//!   and `Deserialize`
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_ordermap = "0.1"
//! ```
//!
//! ### Parsing and writing JSON
//!
//! ```rust
//! use serde_ordermap::{from_str, to_string};
//!
//! let map = from_str(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
//! assert_eq!(map.keys(), vec!["b", "a", "c"]);
//!
//! map.add("a", 4);
//! assert_eq!(to_string(&map).unwrap(), r#"{"b":1,"c":3,"a":4}"#);
//! ```
//!
//! ### Building values with the value! macro
//!
//! ```rust
//! use serde_ordermap::{value, Value};
//!
//! let data = value!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.keys(), vec!["name", "age", "tags"]);
//!     assert_eq!(obj.get_string("name"), "Alice");
//! }
//! ```
//!
//! ### Sharing between threads
//!
//! ```rust
//! use serde_ordermap::OrderedMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(OrderedMap::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             map.set(format!("worker-{i}"), i);
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(map.len(), 4);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Lookups and `set`**: O(1) average
//! - **`add` of an existing key, `remove`**: O(n), the remaining keys shift
//! - **Serialization**: O(n) in the size of the output
//! - **Order recovery**: quadratic in the worst case; see [`JsonOptions`]
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`round_trip.rs`** - Parsing, editing and writing JSON in order
//! - **`sorting.rs`** - Key, value and custom sorts, flip and merge
//! - **`shared_map.rs`** - Sharing a map between threads
//!
//! Run any example with: `cargo run --example <name>`

pub mod cast;
mod de;
pub mod error;
pub mod guard;
pub mod macros;
pub mod map;
pub mod options;
mod ser;
pub mod value;

pub use error::{Error, Result};
pub use guard::{Guard, LocalGuard, SyncGuard};
pub use map::{Entries, LocalOrderedMap, OrderedMap, Pair};
pub use options::JsonOptions;
pub use value::{Number, Value};

use std::io;
use tracing::debug;

/// Serialize a map to compact JSON text, keys in map order.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::{to_string, OrderedMap};
///
/// let map = OrderedMap::new();
/// map.add("y", 1).add("x", 2);
/// assert_eq!(to_string(&map).unwrap(), r#"{"y":1,"x":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if a value cannot be encoded (non-finite floats).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<G: Guard>(map: &OrderedMap<G>) -> Result<String> {
    ser::to_json(map)
}

/// Serialize a map to pretty-printed JSON text with 2-space indentation.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::{to_string_pretty, OrderedMap};
///
/// let map = OrderedMap::new();
/// map.add("y", 1).add("x", 2);
/// assert_eq!(to_string_pretty(&map).unwrap(), "{\n  \"y\": 1,\n  \"x\": 2\n}");
/// ```
///
/// # Errors
///
/// Returns an error if a value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<G: Guard>(map: &OrderedMap<G>) -> Result<String> {
    to_string_with_options(map, &JsonOptions::pretty())
}

/// Serialize a map to JSON text with custom options.
///
/// # Errors
///
/// Returns an error if a value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<G: Guard>(
    map: &OrderedMap<G>,
    options: &JsonOptions,
) -> Result<String> {
    ser::to_json_with_options(map, options)
}

/// Serialize a map as compact JSON to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::{to_writer, OrderedMap};
///
/// let map = OrderedMap::new();
/// map.add("k", "v");
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &map).unwrap();
/// assert_eq!(buffer, br#"{"k":"v"}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, G>(writer: W, map: &OrderedMap<G>) -> Result<()>
where
    W: io::Write,
    G: Guard,
{
    to_writer_with_options(writer, map, &JsonOptions::default())
}

/// Serialize a map as JSON to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, G>(
    mut writer: W,
    map: &OrderedMap<G>,
    options: &JsonOptions,
) -> Result<()>
where
    W: io::Write,
    G: Guard,
{
    let json = to_string_with_options(map, options)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse a JSON object, recovering the key order of the text.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::from_str;
///
/// let map = from_str(r#"{"z": [{"b": 1, "a": 2}], "y": null}"#).unwrap();
/// assert_eq!(map.keys(), vec!["z", "y"]);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON, its root is not an object,
/// or a key's position cannot be recovered. Syntax errors include line and
/// column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<OrderedMap> {
    from_str_with_options(s, &JsonOptions::default())
}

/// Parse a JSON object with custom options.
///
/// Only [`JsonOptions::warn_above_bytes`] affects parsing.
///
/// # Errors
///
/// Same as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &JsonOptions) -> Result<OrderedMap> {
    de::recover_entries_with_options(s, options).map(OrderedMap::from_entries)
}

/// Parse a JSON object from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::from_reader;
/// use std::io::Cursor;
///
/// let map = from_reader(Cursor::new(br#"{"b":1,"a":2}"#)).unwrap();
/// assert_eq!(map.keys(), vec!["b", "a"]);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or parsing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<OrderedMap>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    debug!(bytes = bytes.len(), "read JSON input");
    from_slice(&bytes)
}

/// Parse a JSON object from bytes.
///
/// # Errors
///
/// Returns a syntax error if the bytes are not valid UTF-8, otherwise the
/// same errors as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<OrderedMap> {
    let s = std::str::from_utf8(v).map_err(|e| Error::invalid_utf8(v, e))?;
    from_str(s)
}
