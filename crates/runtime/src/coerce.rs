//! Conversions between values, following the host's implicit coercion rules

use crate::prelude::*;
use std::cmp::Ordering;

impl Value {
    /// Converts the value into a primitive, preferring a number where there's a choice
    ///
    /// Boxed primitives are unwrapped and dates produce their instant. Other objects produce
    /// their default string form, with an array that contains itself rendering the repeated
    /// reference as an empty string.
    pub fn to_primitive(&self) -> Value {
        Converter::default().primitive(self)
    }

    /// Converts the value into a number
    ///
    /// Strings are parsed after trimming whitespace, with the empty string producing 0 and
    /// unparseable strings producing NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::BigInt(n) => *n as f64,
            Value::Str(s) => string_to_number(s),
            Value::Symbol(_) => f64::NAN,
            Value::Object(_) => self.to_primitive().to_number(),
        }
    }

    /// Converts the value into a string
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".into(),
            Value::Null => "null".into(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::BigInt(n) => n.to_string(),
            Value::Str(s) => s.to_string(),
            Value::Symbol(s) => s.to_string(),
            Value::Object(_) => self.to_primitive().to_js_string(),
        }
    }

    /// The abstract relational comparison used by `<`, `<=`, `>` and `>=`
    ///
    /// Two strings compare by their UTF-16 code units, anything else compares numerically.
    /// `None` is returned when either side converts to NaN, in which case every ordering
    /// operator evaluates to false.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        let a = self.to_primitive();
        let b = other.to_primitive();

        match (&a, &b) {
            (Value::Str(a), Value::Str(b)) => Some(a.cmp_utf16(b)),
            (Value::BigInt(a), Value::BigInt(b)) => Some(a.cmp(b)),
            _ => a.to_number().partial_cmp(&b.to_number()),
        }
    }
}

#[derive(Default)]
struct Converter {
    // The objects that are currently being converted
    active: Vec<Object>,
}

impl Converter {
    fn primitive(&mut self, value: &Value) -> Value {
        match value {
            Value::Object(object) => self.object_primitive(object),
            primitive => primitive.clone(),
        }
    }

    fn string(&mut self, value: &Value) -> String {
        self.primitive(value).to_js_string()
    }

    fn object_primitive(&mut self, object: &Object) -> Value {
        if self.active.iter().any(|active| Object::ptr_eq(active, object)) {
            return "".into();
        }

        // The kind is cloned so that the object isn't borrowed while its elements or
        // properties are converted
        let kind = object.kind().clone();
        self.active.push(object.clone());

        let result = match kind {
            ObjectKind::Boolean(b) => Value::Bool(b),
            ObjectKind::Number(n) => Value::Number(n),
            ObjectKind::String(s) => Value::Str(s),
            ObjectKind::Date(time) => Value::Number(time),
            ObjectKind::Array(elements) => elements
                .iter()
                .map(|element| match element {
                    Value::Undefined | Value::Null => String::new(),
                    other => self.string(other),
                })
                .collect::<Vec<_>>()
                .join(",")
                .into(),
            ObjectKind::Function(f) => format!("function {}() {{ [native code] }}", f.name()).into(),
            ObjectKind::RegExp { source, flags } => format!("/{source}/{flags}").into(),
            ObjectKind::Error => {
                let name = match object.get("name") {
                    Value::Undefined => "Error".to_string(),
                    name => self.string(&name),
                };
                let message = match object.get("message") {
                    Value::Undefined => String::new(),
                    message => self.string(&message),
                };
                match (name.is_empty(), message.is_empty()) {
                    (_, true) => name.into(),
                    (true, false) => message.into(),
                    (false, false) => format!("{name}: {message}").into(),
                }
            }
            other => other.class_tag().to_string().into(),
        };

        self.active.pop();
        result
    }
}

/// Renders a number the way the host does, e.g. `1` rather than `1.0`, and `Infinity`
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.into()
    } else if n == 0.0 {
        "0".into()
    } else {
        n.to_string()
    }
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    let radix_prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_prefixed {
        return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
    }

    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust's float parser also accepts "inf" and "nan", which the host doesn't
        _ if trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) =>
        {
            trimmed.parse::<f64>().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0.0)]
    #[test_case("  42  ", 42.0)]
    #[test_case("1e3", 1000.0)]
    #[test_case("-1.5", -1.5)]
    #[test_case("0x1f", 31.0)]
    #[test_case("0b101", 5.0)]
    #[test_case("Infinity", f64::INFINITY)]
    #[test_case("-Infinity", f64::NEG_INFINITY)]
    fn string_to_number_parses(input: &str, expected: f64) {
        assert_eq!(string_to_number(input), expected);
    }

    #[test_case("abc")]
    #[test_case("inf")]
    #[test_case("nan")]
    #[test_case("1,5")]
    #[test_case("0xfg")]
    fn string_to_number_rejects(input: &str) {
        assert!(string_to_number(input).is_nan());
    }

    #[test_case(1.0, "1")]
    #[test_case(-0.0, "0")]
    #[test_case(1.5, "1.5")]
    #[test_case(f64::NAN, "NaN")]
    #[test_case(f64::NEG_INFINITY, "-Infinity")]
    fn numbers_to_strings(n: f64, expected: &str) {
        assert_eq!(number_to_string(n), expected);
    }

    #[test]
    fn primitive_conversions() {
        assert_eq!(Value::Null.to_number(), 0.0);
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert_eq!(Value::from(2.5).to_js_string(), "2.5");
        assert_eq!(Value::Undefined.to_js_string(), "undefined");
    }

    #[test]
    fn relational_comparison() {
        let cmp = |a: Value, b: Value| a.compare(&b);

        assert_eq!(cmp(3.into(), 2.into()), Some(Ordering::Greater));
        assert_eq!(cmp("a".into(), "abc".into()), Some(Ordering::Less));
        assert_eq!(cmp("10".into(), "9".into()), Some(Ordering::Less));
        assert_eq!(cmp("10".into(), 9.into()), Some(Ordering::Greater));
        assert_eq!(cmp(Value::Null, 0.into()), Some(Ordering::Equal));
        assert_eq!(cmp(f64::NAN.into(), 0.into()), None);
        assert_eq!(cmp("abc".into(), 1.into()), None);
        assert_eq!(cmp(Value::Undefined, Value::Undefined), None);
    }

    #[test]
    fn arrays_are_joined() {
        let realm = Realm::default();
        let nested = realm.array([Value::from(2), realm.array([3, 4]).into()]);
        let array = realm.array([Value::from(1), Value::Null, nested.into()]);

        assert_eq!(Value::from(array).to_js_string(), "1,,2,3,4");
    }

    #[test]
    fn cyclic_arrays_render_repeats_as_empty() {
        let realm = Realm::default();
        let inner = realm.array([1]);
        inner.push(inner.clone());
        let outer = realm.array([Value::from(inner.clone()), 2.into()]);

        assert_eq!(Value::from(inner.clone()).to_js_string(), "1,");
        assert_eq!(Value::from(outer).to_js_string(), "1,,2");
        assert_eq!(Value::from(inner.clone()).compare(&"1,".into()), Some(Ordering::Equal));

        inner.set("length", 0);
    }

    #[test]
    fn shared_elements_arent_cycles() {
        let realm = Realm::default();
        let shared = realm.array([1, 2]);
        let array = realm.array([shared.clone(), shared]);

        assert_eq!(Value::from(array).to_js_string(), "1,2,1,2");
    }
}
