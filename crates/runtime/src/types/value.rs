//! The core value type used at the boundary

use crate::prelude::*;
use std::fmt;

/// A value of unknown kind
///
/// Primitives are held inline, composite values are shared [Object]s with reference identity.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value
    #[default]
    Undefined,

    /// The null value
    Null,

    /// A boolean primitive
    Bool(bool),

    /// A number primitive, including NaN and the infinities
    Number(f64),

    /// An arbitrary-precision integer primitive, limited here to 128 bits
    BigInt(i128),

    /// A string primitive
    Str(JsString),

    /// A symbol primitive
    Symbol(Symbol),

    /// An object, see [ObjectKind] for the different kinds
    Object(Object),
}

impl Value {
    /// Returns the category that `typeof` reports for the value
    pub fn type_of(&self) -> TypeOf {
        use Value::*;
        match self {
            Undefined => TypeOf::Undefined,
            Null => TypeOf::Object,
            Bool(_) => TypeOf::Boolean,
            Number(_) => TypeOf::Number,
            BigInt(_) => TypeOf::BigInt,
            Str(_) => TypeOf::String,
            Symbol(_) => TypeOf::Symbol,
            Object(o) if o.is_callable() => TypeOf::Function,
            Object(_) => TypeOf::Object,
        }
    }

    /// Returns the value's intrinsic class tag
    pub fn class_tag(&self) -> ClassTag {
        use Value::*;
        match self {
            Undefined => ClassTag::Undefined,
            Null => ClassTag::Null,
            Bool(_) => ClassTag::Boolean,
            Number(_) => ClassTag::Number,
            BigInt(_) => ClassTag::BigInt,
            Str(_) => ClassTag::String,
            Symbol(_) => ClassTag::Symbol,
            Object(o) => o.class_tag(),
        }
    }

    /// Returns true if the value is `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if the value is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value can be called
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Object(o) if o.is_callable())
    }

    /// Returns true if the value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Object(o) if matches!(*o.kind(), ObjectKind::Array(_)))
    }

    /// The truthiness of the value when used as a condition
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Undefined | Null => false,
            Bool(b) => *b,
            Number(n) => !(*n == 0.0 || n.is_nan()),
            BigInt(n) => *n != 0,
            Str(s) => !s.is_empty(),
            Symbol(_) | Object(_) => true,
        }
    }

    /// Returns the object if the value is one
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the boolean held by a boolean primitive or a boxed boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Object(o) => match *o.kind() {
                ObjectKind::Boolean(b) => Some(b),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the number held by a number primitive or a boxed number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Object(o) => match *o.kind() {
                ObjectKind::Number(n) => Some(n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the string held by a string primitive or a boxed string
    pub fn as_string(&self) -> Option<JsString> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Object(o) => match &*o.kind() {
                ObjectKind::String(s) => Some(s.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Looks up a property of the value
    ///
    /// Objects are searched along their prototype chain. String primitives expose `length` and
    /// their characters, other primitives have no properties.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Self::Object(o) => o.get(key),
            Self::Str(s) => string_property(s, key).unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// Returns true if the value has the given own property
    pub fn has_own_property(&self, key: &str) -> bool {
        match self {
            Self::Object(o) => o.has_own_property(key),
            Self::Str(s) => string_property(s, key).is_some(),
            _ => false,
        }
    }

    /// Strict equality (`===`)
    ///
    /// Numbers compare by value, so NaN is never equal to itself and `-0` equals `0`. Strings
    /// compare by content, symbols and objects by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Undefined, Undefined) | (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (BigInt(a), BigInt(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Symbol(a), Symbol(b)) => a == b,
            (Object(a), Object(b)) => crate::Object::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn string_property(s: &JsString, key: &str) -> Option<Value> {
    if key == "length" {
        Some(Value::Number(s.len_utf16() as f64))
    } else {
        super::array_index(key)
            .and_then(|index| s.char_at_utf16(index))
            .map(Value::Str)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Value::*;
        match self {
            Undefined => write!(f, "undefined"),
            Null => write!(f, "null"),
            Bool(b) => write!(f, "{b}"),
            Number(n) => write!(f, "{}", crate::coerce::number_to_string(*n)),
            BigInt(n) => write!(f, "{n}n"),
            Str(s) => write!(f, "{s:?}"),
            Symbol(s) => write!(f, "{s}"),
            Object(o) => write!(f, "{o:?}"),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<JsString> for Value {
    fn from(value: JsString) -> Self {
        Self::Str(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<&Object> for Value {
    fn from(value: &Object) -> Self {
        Self::Object(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Value::Undefined, TypeOf::Undefined)]
    #[test_case(Value::Null, TypeOf::Object)]
    #[test_case(true.into(), TypeOf::Boolean)]
    #[test_case(f64::NAN.into(), TypeOf::Number)]
    #[test_case(Value::BigInt(1), TypeOf::BigInt)]
    #[test_case("".into(), TypeOf::String)]
    #[test_case(Symbol::new(None).into(), TypeOf::Symbol)]
    fn primitive_type_of(value: Value, expected: TypeOf) {
        assert_eq!(value.type_of(), expected);
    }

    #[test_case(Value::Undefined, false)]
    #[test_case(Value::Null, false)]
    #[test_case(false.into(), false)]
    #[test_case(0.into(), false)]
    #[test_case((-0.0).into(), false)]
    #[test_case(f64::NAN.into(), false)]
    #[test_case(Value::BigInt(0), false)]
    #[test_case("".into(), false)]
    #[test_case(true.into(), true)]
    #[test_case(f64::INFINITY.into(), true)]
    #[test_case("0".into(), true)]
    #[test_case(Symbol::new(None).into(), true)]
    fn truthiness(value: Value, expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn strict_equality() {
        assert!(Value::from(0).strict_equals(&(-0.0).into()));
        assert!(!Value::from(f64::NAN).strict_equals(&f64::NAN.into()));
        assert!(Value::from("abc").strict_equals(&"abc".into()));
        assert!(!Value::from(1).strict_equals(&"1".into()));
        assert!(!Value::Null.strict_equals(&Value::Undefined));

        let symbol = Symbol::new(Some("x"));
        assert!(Value::from(symbol.clone()).strict_equals(&symbol.into()));
        assert!(!Value::from(Symbol::new(Some("x"))).strict_equals(&Symbol::new(Some("x")).into()));
    }

    #[test]
    fn string_primitive_properties() {
        let s = Value::from("abc");
        assert!(s.has_own_property("length"));
        assert!(s.get("length").strict_equals(&3.into()));
        assert!(s.get("1").strict_equals(&"b".into()));
        assert!(s.get("then").is_undefined());
        assert!(!Value::from(1).has_own_property("length"));
    }
}
