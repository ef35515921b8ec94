use crate::JsString;
use std::fmt;

/// The intrinsic type marker of a value
///
/// This is the tag that appears in a value's default string form, e.g. `[object Array]`.
/// Unlike [TypeOf] it distinguishes between the different kinds of objects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ClassTag {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Object,
    Array,
    Arguments,
    Function,
    Date,
    RegExp,
    Error,
    Map,
    WeakMap,
    Set,
    WeakSet,
    Promise,
    /// An object provided by the host environment, e.g. `Window` or `HTMLDivElement`
    Host(JsString),
}

impl ClassTag {
    /// Returns the tag's name
    pub fn name(&self) -> &str {
        use ClassTag::*;
        match self {
            Undefined => "Undefined",
            Null => "Null",
            Boolean => "Boolean",
            Number => "Number",
            BigInt => "BigInt",
            String => "String",
            Symbol => "Symbol",
            Object => "Object",
            Array => "Array",
            Arguments => "Arguments",
            Function => "Function",
            Date => "Date",
            RegExp => "RegExp",
            Error => "Error",
            Map => "Map",
            WeakMap => "WeakMap",
            Set => "Set",
            WeakSet => "WeakSet",
            Promise => "Promise",
            Host(name) => name.as_str(),
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[object {}]", self.name())
    }
}

/// The category reported by the `typeof` operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TypeOf {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl TypeOf {
    /// Returns the name as reported by `typeof`
    pub fn as_str(self) -> &'static str {
        use TypeOf::*;
        match self {
            Undefined => "undefined",
            Object => "object",
            Boolean => "boolean",
            Number => "number",
            BigInt => "bigint",
            String => "string",
            Symbol => "symbol",
            Function => "function",
        }
    }

    /// Returns the category matching a `typeof` name
    pub fn from_name(name: &str) -> Option<Self> {
        use TypeOf::*;
        let result = match name {
            "undefined" => Undefined,
            "object" => Object,
            "boolean" => Boolean,
            "number" => Number,
            "bigint" => BigInt,
            "string" => String,
            "symbol" => Symbol,
            "function" => Function,
            _ => return None,
        };
        Some(result)
    }
}

impl fmt::Display for TypeOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tag_display() {
        assert_eq!(ClassTag::Array.to_string(), "[object Array]");
        assert_eq!(
            ClassTag::Host("HTMLDivElement".into()).to_string(),
            "[object HTMLDivElement]"
        );
    }

    #[test]
    fn type_of_names_round_trip() {
        for name in [
            "undefined",
            "object",
            "boolean",
            "number",
            "bigint",
            "string",
            "symbol",
            "function",
        ] {
            assert_eq!(TypeOf::from_name(name).unwrap().as_str(), name);
        }
        assert!(TypeOf::from_name("array").is_none());
    }
}
