use serde_json::json;
use test_case::test_case;
use typeoracle_json::{Error, from_str, json_to_value, to_string, value_to_json};
use typeoracle_runtime::{ClassTag, HostEnvironment, Realm, Symbol, Value};

#[test]
fn parse_primitives() {
    let realm = Realm::default();

    assert!(from_str(&realm, "null").unwrap().is_null());
    assert!(from_str(&realm, "true").unwrap().strict_equals(&true.into()));
    assert!(from_str(&realm, "1.5").unwrap().strict_equals(&1.5.into()));
    assert!(from_str(&realm, "\"abc\"").unwrap().strict_equals(&"abc".into()));
}

#[test]
fn parse_composites() {
    let realm = Realm::default();
    let value = from_str(&realm, r#"{"list": [1, "two", null], "nested": {"x": false}}"#).unwrap();

    assert_eq!(value.class_tag(), ClassTag::Object);

    let list = value.get("list");
    assert_eq!(list.class_tag(), ClassTag::Array);
    assert!(list.get("length").strict_equals(&3.into()));
    assert!(list.get("1").strict_equals(&"two".into()));
    assert!(list.get("2").is_null());

    assert!(value.get("nested").get("x").strict_equals(&false.into()));
}

#[test]
fn parsed_objects_use_the_realms_builtins() {
    let realm = Realm::new(HostEnvironment::Node);
    let value = json_to_value(&realm, &json!({"a": [1]}));

    let object_constructor = realm.lookup("Object");
    let array_constructor = realm.lookup("Array");
    assert!(value.get("constructor").strict_equals(&object_constructor));
    assert!(value.get("a").get("constructor").strict_equals(&array_constructor));
}

#[test]
fn parse_errors() {
    let realm = Realm::default();

    assert!(matches!(from_str(&realm, "{"), Err(Error::Parse(_))));
    assert!(matches!(from_str(&realm, "undefined"), Err(Error::Parse(_))));
}

#[test_case(r#"{"a":1,"b":[true,null,"x"]}"#)]
#[test_case(r#"[1.5,-2,{"nested":{}}]"#)]
#[test_case(r#""just a string""#)]
fn round_trip(input: &str) {
    let realm = Realm::default();
    let value = from_str(&realm, input).unwrap();
    assert_eq!(to_string(&value).unwrap(), input);
}

#[test]
fn integer_keys_are_serialized_first() {
    let realm = Realm::default();
    let value = from_str(&realm, r#"{"b":1,"2":2,"a":3,"1":4}"#).unwrap();
    assert_eq!(to_string(&value).unwrap(), r#"{"1":4,"2":2,"b":1,"a":3}"#);
}

#[test]
fn numbers() {
    assert_eq!(value_to_json(&1.0.into()).unwrap(), json!(1));
    assert_eq!(value_to_json(&(-0.0).into()).unwrap(), json!(0));
    assert_eq!(value_to_json(&0.25.into()).unwrap(), json!(0.25));
    assert_eq!(value_to_json(&f64::NAN.into()).unwrap(), json!(null));
    assert_eq!(value_to_json(&f64::INFINITY.into()).unwrap(), json!(null));
}

#[test]
fn dates_are_rendered_as_timestamps() {
    let realm = Realm::default();

    let date = Value::from(realm.date(1500.0));
    assert_eq!(
        value_to_json(&date).unwrap(),
        json!("1970-01-01T00:00:01.500Z")
    );

    let invalid = Value::from(realm.date(f64::NAN));
    assert_eq!(value_to_json(&invalid).unwrap(), json!(null));
}

#[test]
fn boxed_primitives_are_unwrapped() {
    let realm = Realm::default();
    let boxed = |value: Value| Value::from(realm.boxed(&value).unwrap());

    assert_eq!(value_to_json(&boxed(true.into())).unwrap(), json!(true));
    assert_eq!(value_to_json(&boxed(3.into())).unwrap(), json!(3));
    assert_eq!(value_to_json(&boxed("s".into())).unwrap(), json!("s"));
}

#[test]
fn unrepresentable_values_are_dropped() {
    let realm = Realm::default();

    let object = realm.object();
    object.set("f", realm.arrow_function("f"));
    object.set("u", Value::Undefined);
    object.set("s", Symbol::new(None));
    object.set("kept", 1);
    assert_eq!(value_to_json(&object.into()).unwrap(), json!({"kept": 1}));

    let array = realm.array([Value::Undefined, realm.function("F").into(), 2.into()]);
    assert_eq!(value_to_json(&array.into()).unwrap(), json!([null, null, 2]));
}

#[test]
fn special_objects() {
    let realm = Realm::default();

    let error = Value::from(realm.error("oops"));
    assert_eq!(value_to_json(&error).unwrap(), json!({}));

    let map = Value::from(realm.map());
    assert_eq!(value_to_json(&map).unwrap(), json!({}));

    let arguments = Value::from(realm.arguments(["a", "b"]));
    assert_eq!(value_to_json(&arguments).unwrap(), json!({"0": "a", "1": "b"}));
}

#[test]
fn serialization_errors() {
    let realm = Realm::default();

    assert!(matches!(
        value_to_json(&Value::Undefined),
        Err(Error::Unrepresentable("undefined"))
    ));
    assert!(matches!(
        value_to_json(&realm.function("F").into()),
        Err(Error::Unrepresentable("function"))
    ));

    let with_big_int = realm.array([Value::BigInt(1)]);
    assert!(matches!(
        value_to_json(&with_big_int.into()),
        Err(Error::BigInt)
    ));

    let cyclic = realm.object();
    cyclic.set("self", cyclic.clone());
    assert!(matches!(value_to_json(&cyclic.clone().into()), Err(Error::Cyclic)));
    cyclic.set("self", Value::Null);
}

#[test]
fn repeated_values_arent_cycles() {
    let realm = Realm::default();
    let shared = realm.array([1]);
    let object = realm.object();
    object.set("a", shared.clone());
    object.set("b", shared);

    assert_eq!(
        value_to_json(&object.into()).unwrap(),
        json!({"a": [1], "b": [1]})
    );
}
