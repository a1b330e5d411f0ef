//! Error types for ordered JSON serialization and deserialization.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the input is not valid JSON, with line/column information
//! - **Data Errors**: well-formed JSON that does not decode into the requested type
//! - **Shape Errors**: the JSON root is not an object
//! - **Recovery Errors**: a decoded key could not be located in the source text
//! - **Unsupported Values**: a value has no JSON encoding (non-finite floats)
//! - **Cast Errors**: a value could not be coerced to the requested type
//! - **I/O Errors**: reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_ordermap::{from_str, Error};
//!
//! let result = from_str("[1, 2, 3]");
//! assert!(matches!(result, Err(Error::NotAnObject { .. })));
//!
//! if let Err(err) = from_str("{\"a\": ") {
//!     assert!(err.is_deserialization());
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input is not syntactically valid JSON
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// The input is well-formed JSON that does not fit the requested type
    #[error("Invalid data at line {line}, column {col}: {msg}")]
    Data { line: usize, col: usize, msg: String },

    /// The input is valid JSON but its root is not an object
    #[error("Expected a JSON object at the root, found {found}")]
    NotAnObject { found: String },

    /// A decoded key has no occurrence in the text that closes into a valid object
    #[error("Could not recover the position of key {key:?} in the source text")]
    KeyNotRecovered { key: String },

    /// A value that cannot be encoded as JSON
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// A value that cannot be coerced to the requested type
    #[error("Unable to cast {value} to {target}")]
    Cast { value: String, target: &'static str },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::Error;
    ///
    /// let err = Error::syntax(10, 5, "expected `:`");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a data error with line and column information.
    pub fn data(line: usize, col: usize, msg: &str) -> Self {
        Error::Data {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a syntax error for input bytes that are not UTF-8.
    ///
    /// The position is that of the first invalid byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::Error;
    ///
    /// let bytes = b"{\n\"a\": \xff}";
    /// let err = Error::invalid_utf8(bytes, std::str::from_utf8(bytes).unwrap_err());
    /// assert!(matches!(err, Error::Syntax { line: 2, col: 6, .. }));
    /// ```
    pub fn invalid_utf8(bytes: &[u8], err: std::str::Utf8Error) -> Self {
        let valid = &bytes[..err.valid_up_to()];
        let line = 1 + valid.iter().filter(|&&b| b == b'\n').count();
        let col = 1 + valid.iter().rev().take_while(|&&b| b != b'\n').count();
        Error::syntax(line, col, &err.to_string())
    }

    /// Creates an error for a JSON root that is not an object.
    pub fn not_an_object(found: &str) -> Self {
        Error::NotAnObject {
            found: found.to_string(),
        }
    }

    /// Creates an error for a key whose source position could not be recovered.
    pub fn key_not_recovered(key: &str) -> Self {
        Error::KeyNotRecovered {
            key: key.to_string(),
        }
    }

    /// Creates an unsupported value error for values with no JSON encoding.
    pub fn unsupported_value<T: fmt::Display>(msg: T) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a cast error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::Error;
    ///
    /// let err = Error::cast("[1,2]", "bool");
    /// assert_eq!(err.to_string(), "Unable to cast [1,2] to bool");
    /// ```
    pub fn cast(value: &str, target: &'static str) -> Self {
        Error::Cast {
            value: value.to_string(),
            target,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised while reading JSON text.
    #[must_use]
    pub fn is_deserialization(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. }
                | Error::Data { .. }
                | Error::NotAnObject { .. }
                | Error::KeyNotRecovered { .. }
        )
    }

    /// Returns `true` for errors raised while producing JSON text.
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::UnsupportedValue(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let text = err.to_string();
        // serde_json appends " at line L column C"; keep only the message
        let msg = text
            .rsplit_once(" at line ")
            .map_or(text.as_str(), |(head, _)| head);

        match err.classify() {
            Category::Io => Error::Io(text.clone()),
            Category::Syntax | Category::Eof => Error::syntax(err.line(), err.column(), msg),
            Category::Data => Error::data(err.line(), err.column(), msg),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
