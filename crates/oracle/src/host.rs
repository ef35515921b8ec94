//! Predicates that depend on the host environment
//!
//! None of these fail when the host's globals are missing, they return false instead.

use typeoracle_runtime::prelude::*;

/// Returns true if the value is a DOM element
///
/// Only browser realms provide `HTMLElement`, so this is always false in other hosts.
pub fn element(value: &Value, realm: &Realm) -> bool {
    let Some(constructor) = realm.constructor(Intrinsic::HtmlElement) else {
        return false;
    };

    match value {
        Value::Object(object) => {
            object.is_instance_of(&constructor) && value.get("nodeType").strict_equals(&1.into())
        }
        _ => false,
    }
}

/// Returns true if the realm is a server-side host, detected by the presence of `process`
pub fn node(realm: &Realm) -> bool {
    !realm.lookup("process").is_undefined()
}

/// Returns true if the realm is a browser host, detected by the presence of `window` and
/// `document`
pub fn browser(realm: &Realm) -> bool {
    !realm.lookup("window").is_undefined() && !realm.lookup("document").is_undefined()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(HostEnvironment::Bare, false, false)]
    #[test_case(HostEnvironment::Node, true, false)]
    #[test_case(HostEnvironment::Browser, false, true)]
    fn host_detection(environment: HostEnvironment, is_node: bool, is_browser: bool) {
        let realm = Realm::new(environment);
        assert_eq!(node(&realm), is_node);
        assert_eq!(browser(&realm), is_browser);
    }

    #[test]
    fn elements() {
        let realm = Realm::new(HostEnvironment::Browser);

        assert!(element(&realm.element("div").unwrap().into(), &realm));
        assert!(element(&realm.element("span").unwrap().into(), &realm));
        assert!(!element(&realm.lookup("document"), &realm));
        assert!(!element(&realm.object().into(), &realm));
        assert!(!element(&Value::Undefined, &realm));

        let prototype = realm.prototype(Intrinsic::HtmlElement).unwrap();
        assert!(!element(&prototype.into(), &realm));
    }

    #[test]
    fn elements_need_a_matching_node_type() {
        let realm = Realm::new(HostEnvironment::Browser);

        let text = realm.element("p").unwrap();
        text.define("nodeType", 3, false);
        assert!(!element(&text.into(), &realm));
    }

    #[test]
    fn no_elements_outside_of_browsers() {
        let browser_realm = Realm::new(HostEnvironment::Browser);
        let div = Value::from(browser_realm.element("div").unwrap());

        assert!(!element(&div, &Realm::default()));
        assert!(!element(&div, &Realm::new(HostEnvironment::Node)));
    }
}
