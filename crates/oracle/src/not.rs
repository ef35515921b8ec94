//! Negated versions of every predicate
//!
//! Each function here returns the inverse of the predicate with the same name. Predicates that
//! can fail keep their errors, only the successful result is inverted.
//!
//! ```
//! use typeoracle::{Value, not};
//!
//! assert!(not::string(&Value::Null));
//! assert!(not::ge(&f64::NAN.into(), &1.into()).is_err());
//! ```

use crate::Result;
use typeoracle_runtime::{Realm, Value};

/// The result of a predicate that can be inverted
pub trait Negate {
    /// Returns the inverted result
    fn negate(self) -> Self;
}

impl Negate for bool {
    fn negate(self) -> Self {
        !self
    }
}

impl Negate for Result<bool> {
    fn negate(self) -> Self {
        self.map(|result| !result)
    }
}

/// Inverts the result of a predicate
pub fn negate<T: Negate>(result: T) -> T {
    result.negate()
}

macro_rules! negated {
    ($( $name:ident ( $( $arg:ident : $arg_type:ty ),* ) -> $output:ty; )*) => {
        $(
            #[doc = concat!("The inverse of [", stringify!($name), "](crate::", stringify!($name), ")")]
            pub fn $name($( $arg: $arg_type ),*) -> $output {
                negate(crate::$name($( $arg ),*))
            }
        )*
    };
}

negated! {
    type_of(value: &Value, name: &str) -> bool;
    defined(value: &Value) -> bool;
    undefined(value: &Value) -> bool;
    null(value: &Value) -> bool;
    empty(value: &Value) -> bool;
    arguments(value: &Value) -> bool;
    arguments_empty(value: &Value) -> bool;
    array(value: &Value) -> bool;
    array_empty(value: &Value) -> bool;
    array_like(value: &Value) -> bool;
    boolean(value: &Value) -> bool;
    bool_true(value: &Value) -> bool;
    bool_false(value: &Value) -> bool;
    date(value: &Value) -> bool;
    valid_date(value: &Value) -> bool;
    error(value: &Value) -> bool;
    function(value: &Value) -> bool;
    number(value: &Value) -> bool;
    object(value: &Value) -> bool;
    primitive(value: &Value) -> bool;
    hash(value: &Value) -> bool;
    regexp(value: &Value) -> bool;
    string(value: &Value) -> bool;
    symbol(value: &Value) -> bool;
    big_int(value: &Value) -> bool;
    map(value: &Value) -> bool;
    weak_map(value: &Value) -> bool;
    set(value: &Value) -> bool;
    weak_set(value: &Value) -> bool;

    prototype(value: &Value) -> bool;
    instance(value: &Value, constructor: &Value) -> bool;
    thenable(value: &Value) -> bool;
    promise(value: &Value) -> bool;
    event(value: &Value) -> bool;
    hosted(key: &str, host: &Value) -> bool;

    element(value: &Value, realm: &Realm) -> bool;
    node(realm: &Realm) -> bool;
    browser(realm: &Realm) -> bool;

    base64(value: &Value) -> bool;
    hex(value: &Value) -> bool;

    infinite(value: &Value) -> bool;
    decimal(value: &Value) -> bool;
    integer(value: &Value) -> bool;
    safe_integer(value: &Value) -> bool;
    float(value: &Value) -> bool;
    divisible_by(value: &Value, n: &Value) -> bool;
    even(value: &Value) -> bool;
    odd(value: &Value) -> bool;
    nan(value: &Value) -> bool;
    maximum(value: &Value, others: &Value) -> Result<bool>;
    minimum(value: &Value, others: &Value) -> Result<bool>;
    ge(value: &Value, other: &Value) -> Result<bool>;
    gt(value: &Value, other: &Value) -> Result<bool>;
    le(value: &Value, other: &Value) -> Result<bool>;
    lt(value: &Value, other: &Value) -> Result<bool>;
    within(value: &Value, start: &Value, finish: &Value) -> Result<bool>;

    equal(a: &Value, b: &Value) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn booleans_are_inverted() {
        let realm = Realm::default();

        assert!(string(&1.into()));
        assert!(!string(&"1".into()));
        assert!(array(&realm.object().into()));
        assert!(!array(&realm.array([1]).into()));
        assert!(instance(&1.into(), &realm.function("F").into()));
        assert!(hosted("missing", &realm.global().into()));
        assert!(node(&realm));
        assert!(browser(&realm));
        assert!(!equal(&1.into(), &1.into()));
    }

    #[test]
    fn errors_are_preserved() {
        let realm = Realm::default();

        assert_eq!(ge(&2.into(), &1.into()), Ok(false));
        assert_eq!(lt(&2.into(), &1.into()), Ok(true));
        assert_eq!(gt(&f64::NAN.into(), &1.into()), Err(Error::NanValue));
        assert_eq!(
            maximum(&1.into(), &Value::Null),
            Err(Error::NotArrayLike)
        );
        assert_eq!(
            within(&"1".into(), &0.into(), &2.into()),
            Err(Error::NonNumericArgument)
        );
        assert_eq!(minimum(&1.into(), &realm.array([2]).into()), Ok(false));
    }

    #[test]
    fn negate_is_an_involution() {
        assert!(negate(negate(true)));
        assert_eq!(negate(negate(Ok::<_, Error>(false))), Ok(false));
        assert_eq!(negate(Err::<bool, _>(Error::NanValue)), Err(Error::NanValue));
    }
}
