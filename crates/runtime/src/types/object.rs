use crate::{Error, PtrMut, Result, prelude::*};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;
use std::{
    cell::Ref,
    fmt,
    hash::BuildHasherDefault,
    iter,
};

/// The hasher used for property maps
pub type PropertyHasher = BuildHasherDefault<FxHasher>;

/// The insertion-ordered map of an object's own properties
pub type PropertyMap = IndexMap<JsString, Property, PropertyHasher>;

// Arrays don't model sparse storage, so writes further than this past the end are kept as plain
// properties rather than filling the gap with holes.
const MAX_ARRAY_GROWTH: usize = 1 << 16;

/// An own property of an object
#[derive(Clone, Debug)]
pub struct Property {
    /// The property's value
    pub value: Value,
    /// True if the property is visited when enumerating keys (e.g. with `for..in`)
    pub enumerable: bool,
}

/// The built-in constructors that a [Realm] provides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Intrinsic {
    Object,
    Function,
    Array,
    Boolean,
    Number,
    String,
    Date,
    RegExp,
    Error,
    Map,
    WeakMap,
    Set,
    WeakSet,
    Promise,
    HtmlElement,
}

impl Intrinsic {
    /// The intrinsics that every realm provides
    pub const CORE: [Intrinsic; 14] = [
        Self::Object,
        Self::Function,
        Self::Array,
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Date,
        Self::RegExp,
        Self::Error,
        Self::Map,
        Self::WeakMap,
        Self::Set,
        Self::WeakSet,
        Self::Promise,
    ];

    /// The number of declared parameters of the constructor, its `length` property
    pub fn arity(self) -> usize {
        use Intrinsic::*;
        match self {
            Object | Function | Array | Boolean | Number | String | Error | Promise => 1,
            Date => 7,
            RegExp => 2,
            Map | WeakMap | Set | WeakSet | HtmlElement => 0,
        }
    }

    /// The global name of the constructor
    pub fn name(self) -> &'static str {
        use Intrinsic::*;
        match self {
            Object => "Object",
            Function => "Function",
            Array => "Array",
            Boolean => "Boolean",
            Number => "Number",
            String => "String",
            Date => "Date",
            RegExp => "RegExp",
            Error => "Error",
            Map => "Map",
            WeakMap => "WeakMap",
            Set => "Set",
            WeakSet => "WeakSet",
            Promise => "Promise",
            HtmlElement => "HTMLElement",
        }
    }
}

/// Marks an object as one of a realm's built-ins
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// The constructor function, e.g. `Object`
    Constructor(Intrinsic),
    /// The constructor's prototype object, e.g. `Object.prototype`
    Prototype(Intrinsic),
}

/// The internal kind of an object, which determines its [ClassTag]
#[derive(Clone, Debug)]
pub enum ObjectKind {
    /// A plain object
    Ordinary,
    /// An array, holes are represented by `undefined`
    Array(Vec<Value>),
    /// The variadic arguments object of a function call
    Arguments(Vec<Value>),
    /// A boxed boolean
    Boolean(bool),
    /// A boxed number
    Number(f64),
    /// A boxed string
    String(JsString),
    /// A date, holding its instant in milliseconds since the epoch (NaN for invalid dates)
    Date(f64),
    /// A regular expression
    RegExp {
        /// The pattern's source
        source: JsString,
        /// The pattern's flags
        flags: JsString,
    },
    /// An error
    Error,
    /// A function
    Function(FunctionData),
    /// A map collection
    Map,
    /// A weak map collection
    WeakMap,
    /// A set collection
    Set,
    /// A weak set collection
    WeakSet,
    /// A promise
    Promise,
    /// An object provided by the host environment, with its class tag name
    Host(JsString),
}

impl ObjectKind {
    /// Returns the class tag that objects of this kind report
    pub fn class_tag(&self) -> ClassTag {
        use ObjectKind::*;
        match self {
            Ordinary => ClassTag::Object,
            Array(_) => ClassTag::Array,
            Arguments(_) => ClassTag::Arguments,
            Boolean(_) => ClassTag::Boolean,
            Number(_) => ClassTag::Number,
            String(_) => ClassTag::String,
            Date(_) => ClassTag::Date,
            RegExp { .. } => ClassTag::RegExp,
            Error => ClassTag::Error,
            Function(_) => ClassTag::Function,
            Map => ClassTag::Map,
            WeakMap => ClassTag::WeakMap,
            Set => ClassTag::Set,
            WeakSet => ClassTag::WeakSet,
            Promise => ClassTag::Promise,
            Host(name) => ClassTag::Host(name.clone()),
        }
    }
}

struct ObjectData {
    kind: ObjectKind,
    properties: PropertyMap,
    prototype: Option<Object>,
    builtin: Option<Builtin>,
    // The `constructor` back-link of prototype objects, which forms a reference cycle with the
    // constructor's `prototype`
    constructor: Option<Object>,
}

/// A composite value with reference identity
///
/// Clones share the same underlying data, use [Object::ptr_eq] to check for identity.
#[derive(Clone)]
pub struct Object(PtrMut<ObjectData>);

impl Object {
    /// Makes a new object with the given kind and prototype
    ///
    /// Objects are usually made via a [Realm], which provides the matching built-in prototypes.
    pub fn new(kind: ObjectKind, prototype: Option<&Object>) -> Self {
        Self(PtrMut::new_mut(ObjectData {
            kind,
            properties: PropertyMap::default(),
            prototype: prototype.cloned(),
            builtin: None,
            constructor: None,
        }))
    }

    /// Returns true if both objects are the same object
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        PtrMut::ptr_eq(&a.0, &b.0)
    }

    /// Provides a reference to the object's kind
    pub fn kind(&self) -> Ref<'_, ObjectKind> {
        Ref::map(self.0.borrow(), |data| &data.kind)
    }

    /// Returns the object's class tag
    pub fn class_tag(&self) -> ClassTag {
        self.kind().class_tag()
    }

    /// Returns true if the object is a function
    pub fn is_callable(&self) -> bool {
        matches!(*self.kind(), ObjectKind::Function(_))
    }

    /// Returns the object's prototype
    pub fn prototype(&self) -> Option<Object> {
        self.0.borrow().prototype.clone()
    }

    /// Replaces the object's prototype
    ///
    /// An error is returned if the object would end up in its own prototype chain.
    pub fn set_prototype(&self, prototype: Option<&Object>) -> Result<()> {
        if let Some(prototype) = prototype {
            if Self::ptr_eq(self, prototype)
                || prototype.prototype_chain().any(|p| Self::ptr_eq(self, &p))
            {
                return Err(Error::CyclicPrototype);
            }
        }
        self.0.borrow_mut().prototype = prototype.cloned();
        Ok(())
    }

    /// Iterates over the object's prototype chain, starting with its prototype
    pub fn prototype_chain(&self) -> impl Iterator<Item = Object> + use<> {
        iter::successors(self.prototype(), Object::prototype)
    }

    /// Returns the built-in role of the object, if it has one
    pub fn builtin(&self) -> Option<Builtin> {
        self.0.borrow().builtin
    }

    pub(crate) fn set_builtin(&self, builtin: Builtin) {
        self.0.borrow_mut().builtin = Some(builtin);
    }

    /// Links a prototype object back to its constructor
    ///
    /// The link is exposed as the object's `constructor` property. The prototype and the
    /// constructor keep each other alive, so neither is freed while the other is reachable.
    pub fn link_constructor(&self, constructor: &Object) {
        self.0.borrow_mut().constructor = Some(constructor.clone());
    }

    /// Returns true if a built-in prototype is in the object's prototype chain
    pub fn inherits_from(&self, builtin: Builtin) -> bool {
        self.prototype_chain().any(|p| p.builtin() == Some(builtin))
    }

    /// The `instanceof` relationship
    ///
    /// Returns false rather than failing when `constructor` isn't a function or has no
    /// object `prototype`.
    pub fn is_instance_of(&self, constructor: &Object) -> bool {
        if !constructor.is_callable() {
            return false;
        }
        match constructor.get("prototype") {
            Value::Object(target) => self.prototype_chain().any(|p| Self::ptr_eq(&p, &target)),
            _ => false,
        }
    }

    /// Returns the value of an own property, including the properties that are implied by the
    /// object's kind (e.g. an array's `length`)
    pub fn get_own(&self, key: &str) -> Option<Value> {
        let data = self.0.borrow();

        if let Some(property) = data.properties.get(key) {
            return Some(property.value.clone());
        }

        match &data.kind {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => {
                if key == "length" {
                    return Some(Value::Number(elements.len() as f64));
                }
                if let Some(element) = array_index(key).and_then(|i| elements.get(i)) {
                    return Some(element.clone());
                }
            }
            ObjectKind::String(s) => {
                if key == "length" {
                    return Some(Value::Number(s.len_utf16() as f64));
                }
                if let Some(c) = array_index(key).and_then(|i| s.char_at_utf16(i)) {
                    return Some(c.into());
                }
            }
            ObjectKind::Function(f) => match key {
                "prototype" => return f.prototype().cloned(),
                "name" => return Some(f.name().clone().into()),
                "length" => return Some(Value::Number(f.length() as f64)),
                _ => {}
            },
            _ => {}
        }

        if key == "constructor" {
            if let Some(constructor) = &data.constructor {
                return Some(constructor.clone().into());
            }
        }

        None
    }

    /// Returns true if the object has the given own property
    pub fn has_own_property(&self, key: &str) -> bool {
        self.get_own(key).is_some()
    }

    /// Looks up a property on the object or its prototype chain
    ///
    /// `undefined` is returned for missing properties.
    pub fn get(&self, key: &str) -> Value {
        iter::once(self.clone())
            .chain(self.prototype_chain())
            .find_map(|object| object.get_own(key))
            .unwrap_or_default()
    }

    /// Returns true if the property is found on the object or its prototype chain (the `in`
    /// operator)
    pub fn has_property(&self, key: &str) -> bool {
        iter::once(self.clone())
            .chain(self.prototype_chain())
            .any(|object| object.has_own_property(key))
    }

    /// Sets an enumerable property
    ///
    /// Index keys and `length` update the elements of arrays and arguments objects, a function's
    /// `prototype` replaces the function's prototype. Writes to a boxed string's characters or
    /// to a function's `length` are ignored.
    pub fn set(&self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let mut data = self.0.borrow_mut();

        match &mut data.kind {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => {
                if key == "length" {
                    let max_length = (elements.len() + MAX_ARRAY_GROWTH) as f64;
                    if let Value::Number(n) = value {
                        if n >= 0.0 && n.fract() == 0.0 && n <= max_length {
                            elements.resize(n as usize, Value::Undefined);
                        }
                    }
                    return;
                }
                if let Some(index) = array_index(key) {
                    if index < elements.len() {
                        elements[index] = value;
                        return;
                    } else if index <= elements.len() + MAX_ARRAY_GROWTH {
                        elements.resize(index, Value::Undefined);
                        elements.push(value);
                        return;
                    }
                }
            }
            ObjectKind::String(_) if key == "length" || array_index(key).is_some() => return,
            ObjectKind::Function(_) if key == "length" => return,
            ObjectKind::Function(f) if key == "prototype" => {
                f.set_prototype(value);
                return;
            }
            _ => {}
        }

        match data.properties.get_mut(key) {
            Some(property) => property.value = value,
            None => {
                data.properties.insert(
                    key.into(),
                    Property {
                        value,
                        enumerable: true,
                    },
                );
            }
        }
    }

    /// Defines an own property, replacing any existing property with the same key
    pub fn define(&self, key: &str, value: impl Into<Value>, enumerable: bool) {
        self.0.borrow_mut().properties.insert(
            key.into(),
            Property {
                value: value.into(),
                enumerable,
            },
        );
    }

    /// Appends a value to an array or arguments object
    ///
    /// Returns false if the object doesn't have elements.
    pub fn push(&self, value: impl Into<Value>) -> bool {
        match &mut self.0.borrow_mut().kind {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => {
                elements.push(value.into());
                true
            }
            _ => false,
        }
    }

    /// Returns a copy of the elements of an array or arguments object
    pub fn elements(&self) -> Option<Vec<Value>> {
        match &*self.kind() {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => {
                Some(elements.clone())
            }
            _ => None,
        }
    }

    /// Returns the instant of a date object
    pub fn date_value(&self) -> Option<f64> {
        match *self.kind() {
            ObjectKind::Date(time) => Some(time),
            _ => None,
        }
    }

    /// Returns the object's own enumerable keys, in the host's enumeration order
    ///
    /// Element indices come first, followed by integer-like property keys in ascending order,
    /// and then the remaining keys in insertion order.
    pub fn own_keys(&self) -> Vec<JsString> {
        let data = self.0.borrow();

        let element_count = match &data.kind {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => elements.len(),
            ObjectKind::String(s) => s.len_utf16(),
            _ => 0,
        };

        let mut integer_keys = Vec::new();
        let mut other_keys = Vec::new();
        for (key, property) in data.properties.iter() {
            if !property.enumerable {
                continue;
            }
            match array_index(key) {
                Some(index) => integer_keys.push((index, key.clone())),
                None => other_keys.push(key.clone()),
            }
        }
        integer_keys.sort_by_key(|(index, _)| *index);

        (0..element_count)
            .map(|i| JsString::from(i.to_string()))
            .chain(integer_keys.into_iter().map(|(_, key)| key))
            .chain(other_keys)
            .collect()
    }

    /// Returns the keys visited by a `for..in` loop over the object
    ///
    /// This includes enumerable keys inherited from the prototype chain, with keys shadowed by
    /// objects earlier in the chain skipped.
    pub fn for_in_keys(&self) -> Vec<JsString> {
        let mut seen = IndexSet::<JsString, PropertyHasher>::default();
        let mut result = Vec::new();

        for object in iter::once(self.clone()).chain(self.prototype_chain()) {
            for key in object.own_keys() {
                if seen.insert(key.clone()) {
                    result.push(key);
                }
            }
            let data = object.0.borrow();
            seen.extend(data.properties.keys().cloned());
        }

        result
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.class_tag())
    }
}

/// Parses a canonical array index, e.g. "0" or "42" but not "01" or "-1"
pub(crate) fn array_index(key: &str) -> Option<usize> {
    let canonical = match key.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    };

    if canonical {
        key.parse::<u32>()
            .ok()
            .filter(|index| *index != u32::MAX)
            .map(|index| index as usize)
    } else {
        None
    }
}
