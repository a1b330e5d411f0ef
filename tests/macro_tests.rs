use serde_ordermap::{to_string, value, Number, OrderedMap, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    let true_val = value!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = value!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    let int_val = value!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = value!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = value!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    let value = value!("hello world");
    assert_eq!(value, Value::String("hello world".to_string()));
}

#[test]
fn test_value_macro_arrays() {
    let empty = value!([]);
    assert_eq!(empty, Value::Array(vec![]));

    let mixed = value!([1, "two", null, [true], {}]);
    match mixed {
        Value::Array(items) => {
            assert_eq!(items.len(), 5);
            assert_eq!(items[1], Value::from("two"));
            assert_eq!(items[2], Value::Null);
            assert_eq!(items[3], Value::Array(vec![Value::Bool(true)]));
            assert_eq!(items[4], Value::Object(OrderedMap::new()));
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_value_macro_object_order() {
    let value = value!({
        "zebra": 1,
        "apple": 2,
        "mango": { "inner_z": true, "inner_a": false },
    });

    let object = value.as_object().unwrap();
    assert_eq!(object.keys(), vec!["zebra", "apple", "mango"]);

    let mango = object.get("mango");
    assert_eq!(mango.as_object().unwrap().keys(), vec!["inner_z", "inner_a"]);
}

#[test]
fn test_value_macro_expressions() {
    let name = "dynamic".to_string();
    let count: u8 = 7;
    let value = value!({ "name": (name.clone()), "count": count });

    let object = value.as_object().unwrap();
    assert_eq!(object.get_string("name"), "dynamic");
    assert_eq!(object.get_i64("count"), 7);
}

#[test]
fn test_value_macro_serializes_in_order() {
    let value = value!({ "b": [1, { "d": null, "c": "x" }], "a": 2.5 });
    let map = OrderedMap::new();
    map.add("doc", value);
    assert_eq!(
        to_string(&map).unwrap(),
        r#"{"doc":{"b":[1,{"d":null,"c":"x"}],"a":2.5}}"#
    );
}
