//! Ordered JSON output.
//!
//! Compact output is assembled by hand at the top level: each key is escaped
//! as a JSON string and each value is encoded with `serde_json`, concatenated
//! in key order. The result has the same content as encoding the entries as a
//! plain JSON object and differs only in key order.
//!
//! Pretty output drives `serde_json`'s `PrettyFormatter` over the
//! [`Serialize`] impl of [`OrderedMap`], which emits entries in key order.
//!
//! ```rust
//! use serde_ordermap::{to_string, OrderedMap, Value};
//!
//! let map = OrderedMap::new();
//! map.add("z", 1).add("a", Value::Null);
//! assert_eq!(to_string(&map).unwrap(), r#"{"z":1,"a":null}"#);
//! assert_eq!(to_string(&OrderedMap::new()).unwrap(), "{}");
//! ```

use crate::guard::Guard;
use crate::{Error, JsonOptions, OrderedMap, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::trace;

/// Compact JSON text with keys in map order.
pub(crate) fn to_json<G: Guard>(map: &OrderedMap<G>) -> Result<String> {
    map.with_entries(|entries| {
        let mut out = String::with_capacity(2 + entries.len() * 16);
        out.push('{');
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::to_string(key)?);
            out.push(':');
            let encoded = serde_json::to_string(value).map_err(Error::unsupported_value)?;
            out.push_str(&encoded);
        }
        out.push('}');
        trace!(keys = entries.len(), bytes = out.len(), "serialized ordered map");
        Ok(out)
    })
}

/// Indented JSON text with keys in map order.
pub(crate) fn to_json_pretty<G: Guard>(map: &OrderedMap<G>, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    map.serialize(&mut serializer).map_err(Error::unsupported_value)?;
    String::from_utf8(out).map_err(Error::custom)
}

pub(crate) fn to_json_with_options<G: Guard>(
    map: &OrderedMap<G>,
    options: &JsonOptions,
) -> Result<String> {
    if options.pretty {
        to_json_pretty(map, options.indent)
    } else {
        to_json(map)
    }
}

impl<G: Guard> Serialize for OrderedMap<G> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.with_entries(|entries| {
            let mut map = serializer.serialize_map(Some(entries.len()))?;
            for (key, value) in entries {
                map.serialize_entry(key, value)?;
            }
            map.end()
        })
    }
}
