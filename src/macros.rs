/// Builds a [`Value`](crate::Value) from JSON-like syntax, keeping object keys
/// in the order they are written.
///
/// ```rust
/// use serde_ordermap::value;
///
/// let config = value!({
///     "port": 8080,
///     "host": "localhost",
///     "features": ["auth", "logging"]
/// });
/// let object = config.as_object().unwrap();
/// assert_eq!(object.keys(), vec!["port", "host", "features"]);
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::OrderedMap::new())
    };

    // Handle non-empty object; a repeated key keeps its first position
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let object = $crate::OrderedMap::new();
        $(
            object.set($key, $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression convertible into a Value
    ($s:expr) => {
        $crate::Value::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, OrderedMap, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        let arr = value!([1, 2, 3]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[2], Value::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(value!({}), Value::Object(OrderedMap::new()));

        let obj = value!({
            "name": "Alice",
            "age": 30,
            "name": "Bob"
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.keys(), vec!["name", "age"]);
                assert_eq!(map.get("name"), Value::String("Bob".to_string()));
                assert_eq!(map.get("age"), Value::Number(Number::Integer(30)));
            }
            _ => panic!("Expected object"),
        }
    }
}
