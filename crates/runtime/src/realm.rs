use crate::{Error, Ptr, Result, prelude::*};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use std::fmt;

// The largest magnitude of a valid date instant, in milliseconds either side of the epoch
const MAX_DATE_MILLIS: f64 = 8.64e15;

/// The kind of host that a [Realm] emulates
///
/// The host determines which environment-specific globals are available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostEnvironment {
    /// Only the core built-ins are available
    #[default]
    Bare,
    /// A server-side host, providing `global` and `process`
    Node,
    /// A browser host, providing `window`, `document`, and `HTMLElement`
    Browser,
}

/// A set of built-in constructors and prototypes, along with a global object
///
/// Composite values should be created via a realm so that their prototype chains are linked to
/// the realm's built-ins. Clones of a realm share the same built-ins.
#[derive(Clone)]
pub struct Realm(Ptr<RealmData>);

struct RealmData {
    environment: HostEnvironment,
    constructors: FxHashMap<Intrinsic, Object>,
    prototypes: FxHashMap<Intrinsic, Object>,
    global: Object,
}

impl Realm {
    /// Makes a new realm for the given host environment
    pub fn new(environment: HostEnvironment) -> Self {
        let object_prototype = Object::new(ObjectKind::Ordinary, None);
        let function_prototype = Object::new(
            ObjectKind::Function(FunctionData::method("")),
            Some(&object_prototype),
        );

        let mut intrinsics = Intrinsic::CORE.to_vec();
        if environment == HostEnvironment::Browser {
            intrinsics.push(Intrinsic::HtmlElement);
        }

        let mut constructors = FxHashMap::default();
        let mut prototypes = FxHashMap::default();

        for intrinsic in intrinsics {
            let prototype = match intrinsic {
                Intrinsic::Object => object_prototype.clone(),
                Intrinsic::Function => function_prototype.clone(),
                other => Object::new(prototype_kind(other), Some(&object_prototype)),
            };
            prototype.set_builtin(Builtin::Prototype(intrinsic));

            let constructor = Object::new(
                ObjectKind::Function(
                    FunctionData::constructor(intrinsic.name(), prototype.clone().into())
                        .with_length(intrinsic.arity()),
                ),
                Some(&function_prototype),
            );
            constructor.set_builtin(Builtin::Constructor(intrinsic));
            prototype.link_constructor(&constructor);

            constructors.insert(intrinsic, constructor);
            prototypes.insert(intrinsic, prototype);
        }

        let method = |name: &str, length: usize| {
            Object::new(
                ObjectKind::Function(FunctionData::method(name).with_length(length)),
                Some(&function_prototype),
            )
        };

        if let Some(promise_prototype) = prototypes.get(&Intrinsic::Promise) {
            for (name, length) in [("then", 2), ("catch", 1), ("finally", 1)] {
                promise_prototype.define(name, method(name, length), false);
            }
        }

        if let Some(error_prototype) = prototypes.get(&Intrinsic::Error) {
            error_prototype.define("name", "Error", false);
            error_prototype.define("message", "", false);
        }

        if let Some(element_prototype) = prototypes.get(&Intrinsic::HtmlElement) {
            element_prototype.define("nodeType", 1, false);
        }

        let host_object = |class: &str| {
            Object::new(ObjectKind::Host(class.into()), Some(&object_prototype))
        };

        let global = match environment {
            HostEnvironment::Bare => Object::new(ObjectKind::Ordinary, Some(&object_prototype)),
            HostEnvironment::Node => {
                let global = host_object("global");
                global.define("setInterval", method("setInterval", 2), false);
                global.define("process", host_object("process"), false);
                global
            }
            HostEnvironment::Browser => {
                let window = host_object("Window");
                window.define("setInterval", method("setInterval", 2), false);
                let document = host_object("HTMLDocument");
                document.define("nodeType", 9, false);
                window.define("document", document, false);
                window
            }
        };

        for (intrinsic, constructor) in constructors.iter() {
            global.define(intrinsic.name(), constructor.clone(), false);
        }

        tracing::debug!(?environment, "created realm");

        Self(Ptr::new(RealmData {
            environment,
            constructors,
            prototypes,
            global,
        }))
    }

    /// The host environment that the realm emulates
    pub fn environment(&self) -> HostEnvironment {
        self.0.environment
    }

    /// Returns the built-in constructor, if it's available in the realm
    pub fn constructor(&self, intrinsic: Intrinsic) -> Option<Object> {
        self.0.constructors.get(&intrinsic).cloned()
    }

    /// Returns the built-in prototype, if it's available in the realm
    pub fn prototype(&self, intrinsic: Intrinsic) -> Option<Object> {
        self.0.prototypes.get(&intrinsic).cloned()
    }

    /// The realm's global object
    pub fn global(&self) -> Object {
        self.0.global.clone()
    }

    /// Resolves a global name
    ///
    /// The global object's own aliases (e.g. `globalThis`, or `window` in browser hosts)
    /// resolve to the global object, `undefined` is returned for unknown names.
    pub fn lookup(&self, name: &str) -> Value {
        use HostEnvironment::*;

        let is_global_alias = match (name, self.0.environment) {
            ("globalThis", _) => true,
            ("window" | "self", Browser) => true,
            ("global", Node) => true,
            _ => false,
        };

        if is_global_alias {
            self.global().into()
        } else {
            self.0.global.get(name)
        }
    }

    /// Makes a plain object, equivalent to `{}`
    pub fn object(&self) -> Object {
        self.instance_of(Intrinsic::Object, ObjectKind::Ordinary)
    }

    /// Makes a plain object with the given prototype, equivalent to `Object.create(prototype)`
    pub fn object_with_prototype(&self, prototype: Option<&Object>) -> Object {
        Object::new(ObjectKind::Ordinary, prototype)
    }

    /// Makes an array containing the given elements
    pub fn array<I>(&self, elements: I) -> Object
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let elements = elements.into_iter().map(Into::into).collect();
        self.instance_of(Intrinsic::Array, ObjectKind::Array(elements))
    }

    /// Makes the arguments object of a function call with the given arguments
    pub fn arguments<I>(&self, arguments: I) -> Object
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let arguments = arguments.into_iter().map(Into::into).collect();
        self.instance_of(Intrinsic::Object, ObjectKind::Arguments(arguments))
    }

    /// Makes a date at the given instant, in milliseconds since the epoch
    ///
    /// Instants that are out of range produce an invalid date, with NaN as its instant.
    pub fn date(&self, millis: f64) -> Object {
        let time = if millis.is_finite() && millis.abs() <= MAX_DATE_MILLIS {
            // The added zero normalizes -0
            millis.trunc() + 0.0
        } else {
            f64::NAN
        };
        self.instance_of(Intrinsic::Date, ObjectKind::Date(time))
    }

    /// Makes a date at the current time
    pub fn date_now(&self) -> Object {
        self.date(Utc::now().timestamp_millis() as f64)
    }

    /// Makes a date from an RFC 3339 timestamp, e.g. `2024-05-01T12:00:00Z`
    pub fn date_from_rfc3339(&self, input: &str) -> Result<Object> {
        let parsed = DateTime::parse_from_rfc3339(input).map_err(|e| Error::InvalidDate {
            input: input.into(),
            reason: e.to_string(),
        })?;
        Ok(self.date(parsed.timestamp_millis() as f64))
    }

    /// Makes a regular expression object
    ///
    /// The pattern isn't compiled, only its source and flags are retained.
    pub fn regexp(&self, source: &str, flags: &str) -> Object {
        self.instance_of(
            Intrinsic::RegExp,
            ObjectKind::RegExp {
                source: source.into(),
                flags: flags.into(),
            },
        )
    }

    /// Makes an error object with the given message
    pub fn error(&self, message: &str) -> Object {
        let error = self.instance_of(Intrinsic::Error, ObjectKind::Error);
        error.define("message", message, false);
        error
    }

    /// Makes a function that can be used as a constructor, with a fresh `prototype` object
    pub fn function(&self, name: &str) -> Object {
        self.function_with_length(name, 0)
    }

    /// Makes a constructor function that declares `length` parameters
    pub fn function_with_length(&self, name: &str, length: usize) -> Object {
        let prototype = self.object();
        let function = self.instance_of(
            Intrinsic::Function,
            ObjectKind::Function(
                FunctionData::constructor(name, prototype.clone().into()).with_length(length),
            ),
        );
        prototype.link_constructor(&function);
        function
    }

    /// Makes a function without a `prototype` property, like an arrow function or a method
    pub fn arrow_function(&self, name: &str) -> Object {
        self.instance_of(
            Intrinsic::Function,
            ObjectKind::Function(FunctionData::method(name)),
        )
    }

    /// The `new` operator
    ///
    /// Built-in constructors produce objects of the matching kind, other constructors produce
    /// plain objects linked to the constructor's `prototype`.
    pub fn construct(&self, constructor: &Object, arguments: &[Value]) -> Result<Object> {
        let name = match &*constructor.kind() {
            ObjectKind::Function(f) if f.is_constructor() => None,
            ObjectKind::Function(f) => Some(f.name().to_string()),
            other => Some(other.class_tag().to_string()),
        };
        if let Some(name) = name {
            return Err(Error::NotAConstructor(name));
        }

        let first = arguments.first().cloned().unwrap_or_default();

        let result = match constructor.builtin() {
            Some(Builtin::Constructor(intrinsic)) => match intrinsic {
                Intrinsic::Object => match first {
                    Value::Object(object) => object,
                    Value::Undefined | Value::Null => self.object(),
                    primitive => self.boxed(&primitive)?,
                },
                Intrinsic::Function => self.function("anonymous"),
                Intrinsic::Array => self.array(arguments.iter().cloned()),
                Intrinsic::Boolean => self.boxed(&first.is_truthy().into())?,
                Intrinsic::Number => {
                    let n = if arguments.is_empty() {
                        0.0
                    } else {
                        first.to_number()
                    };
                    self.boxed(&n.into())?
                }
                Intrinsic::String => {
                    let s = if arguments.is_empty() {
                        String::new()
                    } else {
                        first.to_js_string()
                    };
                    self.boxed(&s.into())?
                }
                Intrinsic::Date => match first {
                    _ if arguments.is_empty() => self.date_now(),
                    Value::Str(s) => self
                        .date_from_rfc3339(&s)
                        .unwrap_or_else(|_| self.date(f64::NAN)),
                    other => self.date(other.to_number()),
                },
                Intrinsic::RegExp => {
                    let source = match first {
                        Value::Undefined => "(?:)".to_string(),
                        other => other.to_js_string(),
                    };
                    let flags = match arguments.get(1) {
                        None | Some(Value::Undefined) => String::new(),
                        Some(other) => other.to_js_string(),
                    };
                    self.regexp(&source, &flags)
                }
                Intrinsic::Error => {
                    let message = match first {
                        Value::Undefined => String::new(),
                        other => other.to_js_string(),
                    };
                    self.error(&message)
                }
                Intrinsic::Map => self.map(),
                Intrinsic::WeakMap => self.weak_map(),
                Intrinsic::Set => self.set(),
                Intrinsic::WeakSet => self.weak_set(),
                Intrinsic::Promise => self.promise(),
                Intrinsic::HtmlElement => {
                    return Err(Error::NotAConstructor(intrinsic.name().into()));
                }
            },
            _ => match constructor.get("prototype") {
                Value::Object(prototype) => Object::new(ObjectKind::Ordinary, Some(&prototype)),
                _ => self.object(),
            },
        };

        Ok(result)
    }

    /// Wraps a primitive in an object, equivalent to `Object(value)`
    ///
    /// Objects are returned unchanged.
    pub fn boxed(&self, value: &Value) -> Result<Object> {
        let result = match value {
            Value::Bool(b) => self.instance_of(Intrinsic::Boolean, ObjectKind::Boolean(*b)),
            Value::Number(n) => self.instance_of(Intrinsic::Number, ObjectKind::Number(*n)),
            Value::Str(s) => self.instance_of(Intrinsic::String, ObjectKind::String(s.clone())),
            Value::Object(o) => o.clone(),
            other => return Err(Error::CantBox(other.type_of().as_str())),
        };
        Ok(result)
    }

    /// Makes an empty `Map`
    pub fn map(&self) -> Object {
        self.instance_of(Intrinsic::Map, ObjectKind::Map)
    }

    /// Makes an empty `WeakMap`
    pub fn weak_map(&self) -> Object {
        self.instance_of(Intrinsic::WeakMap, ObjectKind::WeakMap)
    }

    /// Makes an empty `Set`
    pub fn set(&self) -> Object {
        self.instance_of(Intrinsic::Set, ObjectKind::Set)
    }

    /// Makes an empty `WeakSet`
    pub fn weak_set(&self) -> Object {
        self.instance_of(Intrinsic::WeakSet, ObjectKind::WeakSet)
    }

    /// Makes a pending promise
    pub fn promise(&self) -> Object {
        self.instance_of(Intrinsic::Promise, ObjectKind::Promise)
    }

    /// Makes a DOM element with the given tag name, e.g. `div`
    ///
    /// Returns `None` when the realm isn't a browser host.
    pub fn element(&self, tag_name: &str) -> Option<Object> {
        let prototype = self.prototype(Intrinsic::HtmlElement)?;

        let mut chars = tag_name.chars();
        let class = match chars.next() {
            Some(first) => format!("HTML{}{}Element", first.to_ascii_uppercase(), chars.as_str()),
            None => "HTMLElement".to_string(),
        };

        let element = Object::new(ObjectKind::Host(class.into()), Some(&prototype));
        element.define("tagName", tag_name.to_ascii_uppercase(), false);
        Some(element)
    }

    /// Makes an object that belongs to the host, with the given class tag name
    pub fn host(&self, class: &str) -> Object {
        self.instance_of(Intrinsic::Object, ObjectKind::Host(class.into()))
    }

    fn instance_of(&self, intrinsic: Intrinsic, kind: ObjectKind) -> Object {
        Object::new(kind, self.0.prototypes.get(&intrinsic))
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new(HostEnvironment::default())
    }
}

impl fmt::Debug for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Realm({:?})", self.0.environment)
    }
}

fn prototype_kind(intrinsic: Intrinsic) -> ObjectKind {
    match intrinsic {
        Intrinsic::Array => ObjectKind::Array(Vec::new()),
        Intrinsic::Boolean => ObjectKind::Boolean(false),
        Intrinsic::Number => ObjectKind::Number(0.0),
        Intrinsic::String => ObjectKind::String(JsString::empty()),
        Intrinsic::HtmlElement => ObjectKind::Host("HTMLElement".into()),
        _ => ObjectKind::Ordinary,
    }
}
