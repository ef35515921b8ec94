//! Predicates that inspect a value's structure and capabilities

use typeoracle_runtime::prelude::*;

/// Returns true if the value is the prototype object of its own constructor
///
/// Values without a constructor (or with a constructor that has no `prototype`) are compared
/// against the root `Object.prototype`.
pub fn prototype(value: &Value) -> bool {
    let Value::Object(object) = value else {
        return false;
    };

    let constructor = value.get("constructor");
    let constructor_prototype = match constructor.get("prototype") {
        p if constructor.is_callable() && p.is_truthy() => p,
        _ => return object.builtin() == Some(Builtin::Prototype(Intrinsic::Object)),
    };

    value.strict_equals(&constructor_prototype)
}

/// The `instanceof` relationship
///
/// Returns false when `constructor` isn't a function with an object `prototype`, rather than
/// failing.
pub fn instance(value: &Value, constructor: &Value) -> bool {
    match (value, constructor) {
        (Value::Object(value), Value::Object(constructor)) => value.is_instance_of(constructor),
        _ => false,
    }
}

/// Returns true if the value is truthy and has a callable `then` member
pub fn thenable(value: &Value) -> bool {
    value.is_truthy() && value.get("then").is_callable()
}

/// Returns true if the value is [thenable] and also has a callable `catch` member
pub fn promise(value: &Value) -> bool {
    thenable(value) && value.get("catch").is_callable()
}

/// Returns true if the value has callable `listen` and `broadcast` members
pub fn event(value: &Value) -> bool {
    value.get("listen").is_callable() && value.get("broadcast").is_callable()
}

/// Returns true if `host[key]` looks like it's provided by the host rather than a plain
/// primitive
///
/// Object properties are host-provided if they're non-null, and other properties are
/// host-provided unless they're booleans, numbers, strings, or `undefined`.
///
/// Primitive hosts don't inherit methods from their built-in prototypes, so a primitive only
/// provides a string's `length` and characters. For example `hosted("toFixed", &1.into())` is
/// false, box the primitive with [Realm::boxed] to search its prototype chain instead.
pub fn hosted(key: &str, host: &Value) -> bool {
    let property = host.get(key);
    match property.type_of() {
        TypeOf::Object => property.is_truthy(),
        TypeOf::Boolean | TypeOf::Number | TypeOf::String | TypeOf::Undefined => false,
        TypeOf::Function | TypeOf::Symbol | TypeOf::BigInt => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_prototypes() {
        let realm = Realm::default();

        for intrinsic in Intrinsic::CORE {
            let prototype_object = realm.prototype(intrinsic).unwrap();
            assert!(prototype(&prototype_object.into()), "{intrinsic:?}");
        }
    }

    #[test]
    fn user_prototypes() {
        let realm = Realm::default();
        let f = realm.function("F");

        assert!(prototype(&f.get("prototype")));
        assert!(!prototype(&realm.construct(&f, &[]).unwrap().into()));
        assert!(!prototype(&f.into()));
    }

    #[test]
    fn non_prototypes() {
        let realm = Realm::default();

        assert!(!prototype(&realm.object().into()));
        assert!(!prototype(&realm.array([1]).into()));
        assert!(!prototype(&realm.object_with_prototype(None).into()));
        assert!(!prototype(&Value::Null));
        assert!(!prototype(&"abc".into()));
    }

    #[test]
    fn instances() {
        let realm = Realm::default();
        let f = realm.function("F");
        let g = realm.function("G");
        let instance_of_f = Value::from(realm.construct(&f, &[]).unwrap());
        let object_constructor = realm.constructor(Intrinsic::Object).unwrap();

        assert!(instance(&instance_of_f, &f.clone().into()));
        assert!(instance(&instance_of_f, &object_constructor.into()));
        assert!(!instance(&instance_of_f, &g.into()));
        assert!(!instance(&1.into(), &f.into()));

        // Invalid constructors are rejected without failing
        assert!(!instance(&instance_of_f, &realm.object().into()));
        assert!(!instance(&instance_of_f, &realm.arrow_function("f").into()));
        assert!(!instance(&instance_of_f, &Value::Null));
    }

    #[test]
    fn thenables_and_promises() {
        let realm = Realm::default();

        assert!(thenable(&realm.promise().into()));
        assert!(promise(&realm.promise().into()));

        let then_only = realm.object();
        then_only.set("then", realm.arrow_function("then"));
        assert!(thenable(&then_only.clone().into()));
        assert!(!promise(&then_only.clone().into()));

        then_only.set("catch", realm.arrow_function("catch"));
        assert!(promise(&then_only.into()));

        let not_callable = realm.object();
        not_callable.set("then", true);
        assert!(!thenable(&not_callable.into()));

        assert!(!thenable(&Value::Undefined));
        assert!(!promise(&"then".into()));
    }

    #[test]
    fn events() {
        let realm = Realm::default();

        let emitter = realm.object();
        emitter.set("listen", realm.arrow_function("listen"));
        assert!(!event(&emitter.clone().into()));
        emitter.set("broadcast", realm.arrow_function("broadcast"));
        assert!(event(&emitter.into()));

        assert!(!event(&Value::Null));
        assert!(!event(&Value::Undefined));
        assert!(!event(&42.into()));
    }

    #[test]
    fn hosted_properties() {
        let realm = Realm::new(HostEnvironment::Browser);
        let window = realm.lookup("window");

        assert!(hosted("document", &window));
        assert!(hosted("setInterval", &window));
        assert!(!hosted("missing", &window));

        let host = realm.object();
        host.set("object", realm.object());
        host.set("null", Value::Null);
        host.set("number", 1);
        host.set("string", "x");
        host.set("bool", true);
        host.set("symbol", Symbol::new(None));
        let host = Value::from(host);

        assert!(hosted("object", &host));
        assert!(!hosted("null", &host));
        assert!(!hosted("number", &host));
        assert!(!hosted("string", &host));
        assert!(!hosted("bool", &host));
        assert!(hosted("symbol", &host));
    }

    #[test]
    fn primitive_hosts_have_no_methods() {
        let realm = Realm::default();
        let number_prototype = realm.prototype(Intrinsic::Number).unwrap();
        number_prototype.define("toFixed", realm.arrow_function("toFixed"), false);

        assert!(!hosted("toFixed", &1.into()));
        assert!(hosted("toFixed", &realm.boxed(&1.into()).unwrap().into()));
        assert!(!hosted("length", &"abc".into()));
    }

    #[test]
    fn prototypes_outlive_their_constructor_handles() {
        let realm = Realm::default();
        let prototype_object = {
            let f = realm.function("F");
            f.get("prototype")
        };

        assert!(prototype(&prototype_object));
        assert!(prototype_object.get("constructor").is_callable());
    }

    #[test]
    fn builtin_prototypes_outlive_their_realm() {
        let prototype_object = {
            let realm = Realm::default();
            Value::from(realm.prototype(Intrinsic::Array).unwrap())
        };

        assert!(prototype(&prototype_object));
    }
}
