//! Value coercion used by typed getters, [`OrderedMap::flip`] and value sorting.
//!
//! Each `to_*` function returns an error when the value has no sensible
//! conversion; the `*_or_default` variants swallow that error and return the
//! type's zero value instead.
//!
//! ```rust
//! use serde_ordermap::{cast, Value};
//!
//! assert_eq!(cast::to_i64(&Value::from("0x1f")).unwrap(), 31);
//! assert!(cast::to_bool(&Value::from("yes")).is_err());
//! assert_eq!(cast::to_string_or_default(&Value::from(2.5)), "2.5");
//! ```
//!
//! [`OrderedMap::flip`]: crate::OrderedMap::flip

use crate::{Error, Number, Result, Value};

/// Coerces a value to `bool`.
///
/// Null is `false`, numbers are `true` when non-zero, and strings accept
/// `1 t T TRUE true True 0 f F FALSE false False`.
pub fn to_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(false),
        Value::Number(Number::Integer(i)) => Ok(*i != 0),
        Value::Number(Number::Float(f)) => Ok(*f != 0.0),
        Value::String(s) => match s.as_str() {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(Error::cast(&value.to_string(), "bool")),
        },
        Value::Array(_) | Value::Object(_) => Err(Error::cast(&value.to_string(), "bool")),
    }
}

/// Coerces a value to `i64`.
///
/// Floats are truncated toward zero (saturating at the `i64` bounds), bools
/// are `1`/`0`, null is `0`, and strings are parsed as integer literals with an
/// optional sign and `0x`/`0o`/`0b` or legacy leading-`0` octal prefixes.
pub fn to_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Number(Number::Integer(i)) => Ok(*i),
        Value::Number(Number::Float(f)) => Ok(*f as i64),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null => Ok(0),
        Value::String(s) => {
            parse_int_literal(s).ok_or_else(|| Error::cast(&value.to_string(), "i64"))
        }
        Value::Array(_) | Value::Object(_) => Err(Error::cast(&value.to_string(), "i64")),
    }
}

/// Coerces a value to `isize`, with the same rules as [`to_i64`].
pub fn to_int(value: &Value) -> Result<isize> {
    let wide = to_i64(value)?;
    isize::try_from(wide).map_err(|_| Error::cast(&value.to_string(), "isize"))
}

/// Coerces a value to its string form.
///
/// Strings are returned as-is, numbers in their shortest decimal form without
/// an exponent, bools as `true`/`false`, and null as the empty string. Arrays
/// and objects have no string form.
pub fn to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(Number::Integer(i)) => Ok(i.to_string()),
        Value::Number(Number::Float(f)) => Ok(f.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::cast(&value.to_string(), "string")),
    }
}

/// [`to_bool`], or `false` on error.
#[must_use]
pub fn to_bool_or_default(value: &Value) -> bool {
    to_bool(value).unwrap_or_default()
}

/// [`to_i64`], or `0` on error.
#[must_use]
pub fn to_i64_or_default(value: &Value) -> i64 {
    to_i64(value).unwrap_or_default()
}

/// [`to_int`], or `0` on error.
#[must_use]
pub fn to_int_or_default(value: &Value) -> isize {
    to_int(value).unwrap_or_default()
}

/// [`to_string`], or `""` on error.
#[must_use]
pub fn to_string_or_default(value: &Value) -> String {
    to_string(value).unwrap_or_default()
}

fn parse_int_literal(s: &str) -> Option<i64> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..]),
        _ => (10, unsigned),
    };

    // separators are only legal once a base prefix is present
    let digits = if radix == 10 {
        digits.to_string()
    } else {
        digits.replace('_', "")
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(&digits, radix).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderedMap;

    #[test]
    fn test_to_bool() {
        assert!(to_bool(&Value::Bool(true)).unwrap());
        assert!(!to_bool(&Value::Null).unwrap());
        assert!(to_bool(&Value::from(3)).unwrap());
        assert!(!to_bool(&Value::from(0.0)).unwrap());
        assert!(to_bool(&Value::from("True")).unwrap());
        assert!(!to_bool(&Value::from("F")).unwrap());
        assert!(to_bool(&Value::from("yes")).is_err());
        assert!(to_bool(&Value::Array(vec![])).is_err());
        assert!(!to_bool_or_default(&Value::from("maybe")));
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(to_i64(&Value::from(42)).unwrap(), 42);
        assert_eq!(to_i64(&Value::from(-3.9)).unwrap(), -3);
        assert_eq!(to_i64(&Value::Bool(true)).unwrap(), 1);
        assert_eq!(to_i64(&Value::Null).unwrap(), 0);
        assert_eq!(to_i64(&Value::from("-17")).unwrap(), -17);
        assert_eq!(to_i64(&Value::from("+8")).unwrap(), 8);
        assert_eq!(to_i64(&Value::from("0x_ff")).unwrap(), 255);
        assert_eq!(to_i64(&Value::from("0b101")).unwrap(), 5);
        assert_eq!(to_i64(&Value::from("0o17")).unwrap(), 15);
        assert_eq!(to_i64(&Value::from("017")).unwrap(), 15);
        assert_eq!(to_i64(&Value::from("0")).unwrap(), 0);
        assert_eq!(
            to_i64(&Value::from("-9223372036854775808")).unwrap(),
            i64::MIN
        );
        assert!(to_i64(&Value::from("9223372036854775808")).is_err());
        assert!(to_i64(&Value::from("1_000")).is_err());
        assert!(to_i64(&Value::from("--1")).is_err());
        assert!(to_i64(&Value::from("")).is_err());
        assert!(to_i64(&Value::from("1.5")).is_err());
        assert_eq!(to_i64_or_default(&Value::from("abc")), 0);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(&Value::from("12")).unwrap(), 12);
        assert_eq!(to_int_or_default(&Value::Array(vec![])), 0);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&Value::from("a")).unwrap(), "a");
        assert_eq!(to_string(&Value::from(7)).unwrap(), "7");
        assert_eq!(to_string(&Value::from(1.0)).unwrap(), "1");
        assert_eq!(to_string(&Value::from(0.25)).unwrap(), "0.25");
        assert_eq!(
            to_string(&Value::from(1e21)).unwrap(),
            "1000000000000000000000"
        );
        assert_eq!(to_string(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(to_string(&Value::Null).unwrap(), "");
        assert!(to_string(&Value::from(OrderedMap::new())).is_err());
        assert_eq!(to_string_or_default(&Value::Array(vec![])), "");
    }
}
