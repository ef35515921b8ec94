//! Predicates that classify a value by its kind

use typeoracle_runtime::prelude::*;

/// Returns true if `typeof value` is the given name, e.g. `"number"` or `"function"`
pub fn type_of(value: &Value, name: &str) -> bool {
    value.type_of().as_str() == name
}

/// Returns true if the value isn't `undefined`
pub fn defined(value: &Value) -> bool {
    !value.is_undefined()
}

/// Returns true if the value is `undefined`
pub fn undefined(value: &Value) -> bool {
    value.is_undefined()
}

/// Returns true if the value is `null`
pub fn null(value: &Value) -> bool {
    value.is_null()
}

/// Returns true if the value is empty
///
/// Arrays, arguments objects and strings are empty when their length is zero, plain objects are
/// empty when they have no own enumerable properties, and any other value is empty if it's
/// falsy.
pub fn empty(value: &Value) -> bool {
    match value.class_tag() {
        ClassTag::Array | ClassTag::Arguments | ClassTag::String => {
            value.get("length").as_number() == Some(0.0)
        }
        ClassTag::Object => match value {
            Value::Object(object) => object.own_keys().is_empty(),
            _ => true,
        },
        _ => !value.is_truthy(),
    }
}

/// Returns true if the value is an arguments object
///
/// Along with native arguments objects, plain array-like objects with a callable `callee`
/// property are also detected.
pub fn arguments(value: &Value) -> bool {
    if value.class_tag() == ClassTag::Arguments {
        return true;
    }

    !array(value) && array_like(value) && object(value) && value.get("callee").is_callable()
}

/// Returns true if the value is an empty arguments object
pub fn arguments_empty(value: &Value) -> bool {
    arguments(value) && value.get("length").strict_equals(&0.into())
}

/// Returns true if the value is an array
pub fn array(value: &Value) -> bool {
    value.is_array()
}

/// Returns true if the value is an empty array
pub fn array_empty(value: &Value) -> bool {
    match value {
        Value::Object(object) => object.elements().is_some_and(|e| e.is_empty()) && array(value),
        _ => false,
    }
}

/// Returns true if the value is array-like
///
/// Array-like values are truthy non-booleans with an own `length` property that is a finite,
/// non-negative number.
pub fn array_like(value: &Value) -> bool {
    if !value.is_truthy() || boolean(value) || !value.has_own_property("length") {
        return false;
    }

    match value.get("length") {
        Value::Number(length) => length.is_finite() && length >= 0.0,
        _ => false,
    }
}

/// Returns true if the value is a boolean, either as a primitive or boxed
pub fn boolean(value: &Value) -> bool {
    value.class_tag() == ClassTag::Boolean
}

/// Returns true if the value is a `true` boolean, either as a primitive or boxed
pub fn bool_true(value: &Value) -> bool {
    value.as_bool() == Some(true)
}

/// Returns true if the value is a `false` boolean, either as a primitive or boxed
pub fn bool_false(value: &Value) -> bool {
    value.as_bool() == Some(false)
}

/// Returns true if the value is a date
pub fn date(value: &Value) -> bool {
    value.class_tag() == ClassTag::Date
}

/// Returns true if the value is a date with a valid instant
pub fn valid_date(value: &Value) -> bool {
    match value {
        Value::Object(object) => object.date_value().is_some_and(|time| !time.is_nan()),
        _ => false,
    }
}

/// Returns true if the value is an error
pub fn error(value: &Value) -> bool {
    value.class_tag() == ClassTag::Error
}

/// Returns true if the value can be called
pub fn function(value: &Value) -> bool {
    value.type_of() == TypeOf::Function
}

/// Returns true if the value is a number, either as a primitive or boxed
///
/// NaN and the infinities are numbers.
pub fn number(value: &Value) -> bool {
    value.class_tag() == ClassTag::Number
}

/// Returns true if the value is a plain object
///
/// Arrays, functions, dates, and other specialized objects aren't plain objects, and nor is
/// `null`.
pub fn object(value: &Value) -> bool {
    value.class_tag() == ClassTag::Object
}

/// Returns true if the value is a primitive
///
/// All falsy values are considered to be primitive.
pub fn primitive(value: &Value) -> bool {
    !value.is_truthy() || !matches!(value, Value::Object(_))
}

/// Returns true if the value is a plain object literal
///
/// The value's constructor must be the built-in `Object`, and objects with `nodeType` or
/// `setInterval` properties are excluded to reject host globals like `window`.
pub fn hash(value: &Value) -> bool {
    object(value)
        && matches!(
            value.get("constructor"),
            Value::Object(c) if c.builtin() == Some(Builtin::Constructor(Intrinsic::Object))
        )
        && !value.get("nodeType").is_truthy()
        && !value.get("setInterval").is_truthy()
}

/// Returns true if the value is a regular expression
pub fn regexp(value: &Value) -> bool {
    value.class_tag() == ClassTag::RegExp
}

/// Returns true if the value is a string, either as a primitive or boxed
pub fn string(value: &Value) -> bool {
    value.class_tag() == ClassTag::String
}

/// Returns true if the value is a symbol
pub fn symbol(value: &Value) -> bool {
    value.type_of() == TypeOf::Symbol
}

/// Returns true if the value is a big integer
pub fn big_int(value: &Value) -> bool {
    value.type_of() == TypeOf::BigInt
}

/// Returns true if the value is a `Map`
pub fn map(value: &Value) -> bool {
    inherits_from(value, Intrinsic::Map)
}

/// Returns true if the value is a `WeakMap`
pub fn weak_map(value: &Value) -> bool {
    inherits_from(value, Intrinsic::WeakMap)
}

/// Returns true if the value is a `Set`
pub fn set(value: &Value) -> bool {
    inherits_from(value, Intrinsic::Set)
}

/// Returns true if the value is a `WeakSet`
pub fn weak_set(value: &Value) -> bool {
    inherits_from(value, Intrinsic::WeakSet)
}

fn inherits_from(value: &Value, intrinsic: Intrinsic) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.inherits_from(Builtin::Prototype(intrinsic)))
}
