//! Configuration options for ordered JSON reading and writing.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ordermap::{to_string_with_options, JsonOptions, OrderedMap};
//!
//! let map = OrderedMap::new();
//! map.add("b", 1).add("a", 2);
//!
//! let options = JsonOptions::pretty().with_indent(4);
//! let json = to_string_with_options(&map, &options).unwrap();
//! assert_eq!(json, "{\n    \"b\": 1,\n    \"a\": 2\n}");
//! ```

/// Inputs above this size log a warning before order recovery runs.
pub const DEFAULT_WARN_ABOVE_BYTES: usize = 1 << 20;

/// Configuration for serialization and order recovery.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::JsonOptions;
///
/// // Compact output, default size warning
/// let options = JsonOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
///
/// // Custom configuration
/// let options = JsonOptions::pretty()
///     .with_indent(4)
///     .with_warn_above(64 * 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    pub indent: usize,
    pub pretty: bool,
    /// Order recovery is quadratic in the worst case; larger inputs emit a
    /// `tracing` warning. `None` disables the warning.
    pub warn_above_bytes: Option<usize>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 2,
            pretty: false,
            warn_above_bytes: Some(DEFAULT_WARN_ABOVE_BYTES),
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output, 2-space indent when pretty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Warns when recovering order from inputs larger than `bytes`.
    #[must_use]
    pub fn with_warn_above(mut self, bytes: usize) -> Self {
        self.warn_above_bytes = Some(bytes);
        self
    }

    /// Never warns about input size.
    #[must_use]
    pub fn without_size_warning(mut self) -> Self {
        self.warn_above_bytes = None;
        self
    }

    pub(crate) fn is_large(&self, len: usize) -> bool {
        self.warn_above_bytes.is_some_and(|limit| len > limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let options = JsonOptions::pretty().with_indent(4).with_warn_above(10);
        assert!(options.pretty);
        assert_eq!(options.indent, 4);
        assert!(options.is_large(11));
        assert!(!options.is_large(10));

        let options = options.without_size_warning();
        assert!(!options.is_large(usize::MAX));
    }
}
