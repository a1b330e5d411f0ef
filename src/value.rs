//! Dynamic value representation for JSON data.
//!
//! This module provides the [`Value`] enum which represents any value an
//! [`OrderedMap`] can hold. Objects are themselves ordered maps, so key order
//! survives arbitrarily deep nesting.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array or ordered object
//! - [`Number`]: an integer or a float
//!
//!
//! ```rust
//! use serde_ordermap::{from_str, Value};
//!
//! let map = from_str(r#"{"point": {"y": 2, "x": 1}}"#).unwrap();
//! let point = map.get("point");
//! assert_eq!(point.kind(), "object");
//! assert_eq!(point.as_object().unwrap().keys(), vec!["y", "x"]);
//! assert_eq!(Value::from(7).as_i64(), Some(7));
//! ```

use crate::guard::Guard;
use crate::OrderedMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed JSON value whose objects keep their key order.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::{Number, Value};
///
/// assert_eq!(Value::from(42), Value::Number(Number::Integer(42)));
/// assert_eq!(Value::from("hello").kind(), "string");
/// assert_eq!(Value::from(None::<bool>), Value::Null);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(OrderedMap),
}

/// A JSON number: either a signed integer or a float.
///
/// Unsigned integers above `i64::MAX` are stored as floats.
///
/// # Examples
///
/// ```rust
/// use serde_ordermap::Number;
///
/// assert_eq!(Number::from(u64::MAX), Number::Float(u64::MAX as f64));
/// assert_eq!(Number::Float(2.0).to_string(), "2.0");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Converts this number to an `i64` if possible.
    ///
    /// Floats convert only when they have no fractional part and fit the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ordermap::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => match serde_json::Number::from_f64(*fl) {
                Some(n) => write!(f, "{}", n),
                None => write!(f, "{}", fl),
            },
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Float(value as f64),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Returns `true` if the value is an ordered object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Short name of the JSON kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Integer form of a number value; whole floats count, strings do not.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Number(n) = self {
            n.as_i64()
        } else {
            None
        }
    }

    /// The items of an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// The map of an object value.
    #[must_use]
    pub fn as_object(&self) -> Option<&OrderedMap> {
        if let Value::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }
}

/// Renders compact JSON. Non-finite floats, which JSON cannot carry, render as
/// `NaN`/`inf` instead of failing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => obj.with_entries(|entries| {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    let quoted = serde_json::to_string(key).map_err(|_| fmt::Error)?;
                    write!(f, "{}:{}", quoted, value)?;
                }
                f.write_str("}")
            }),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => {
                if !f.is_finite() {
                    return Err(serde::ser::Error::custom(format!(
                        "{} has no JSON representation",
                        f
                    )));
                }
                serializer.serialize_f64(*f)
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let entries = crate::de::collect_entries(map)?;
                Ok(Value::Object(OrderedMap::from_entries(entries)))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<G: Guard> From<OrderedMap<G>> for Value {
    fn from(value: OrderedMap<G>) -> Self {
        Value::Object(OrderedMap::from_entries(value.into_entries()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_as_i64() {
        assert_eq!(Number::Integer(-3).as_i64(), Some(-3));
        assert_eq!(Number::Float(42.0).as_i64(), Some(42));
        assert_eq!(Number::Float(42.5).as_i64(), None);
        assert_eq!(Number::Float(1e300).as_i64(), None);
        assert_eq!(Value::from("42").as_i64(), None);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(
            Value::from(u64::MAX),
            Value::Number(Number::Float(u64::MAX as f64))
        );
    }

    #[test]
    fn test_display_is_compact_json() {
        let map = OrderedMap::new();
        map.add("z", 1).add("a", vec![Value::from("x"), Value::Null]);
        let value = Value::from(map);
        assert_eq!(value.to_string(), r#"{"z":1,"a":["x",null]}"#);
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from("say \"hi\"").to_string(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_non_finite_float_fails_to_serialize() {
        let result = serde_json::to_string(&Value::from(f64::NAN));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_keeps_delivery_order() {
        let value: Value = serde_json::from_str(r#"{"b":1,"a":{"d":2,"c":3}}"#).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys(), vec!["b", "a"]);
        let inner = obj.get("a");
        assert_eq!(inner.as_object().unwrap().keys(), vec!["d", "c"]);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(vec![]).kind(), "array");
        assert_eq!(Value::from(OrderedMap::new()).kind(), "object");
    }
}
