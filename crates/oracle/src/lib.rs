//! Runtime type-testing predicates for dynamically typed values
//!
//! Every predicate is a free function that takes the value(s) to be tested and returns a
//! `bool`. The ordering predicates ([maximum], [minimum], [ge], [gt], [le], [lt], and
//! [within]) reject invalid arguments with an [Error], every other predicate accepts any
//! value.
//!
//! Negated versions of the predicates are available in the [not] module.
//!
//! ```
//! use typeoracle::{Realm, Value};
//!
//! let realm = Realm::default();
//! let list = Value::from(realm.array([1, 2, 3]));
//!
//! assert!(typeoracle::array(&list));
//! assert!(typeoracle::array_like(&"abc".into()));
//! assert!(!typeoracle::hash(&list));
//! assert_eq!(typeoracle::maximum(&3.into(), &list), Ok(true));
//! assert!(typeoracle::equal(&list, &realm.array([1, 2, 3]).into()));
//! ```

#![warn(missing_docs)]

mod encoding;
mod equal;
mod error;
mod host;
mod kind;
mod number;
mod settings;
mod shape;

pub mod not;

pub use crate::{
    encoding::{base64, hex},
    equal::{equal, equal_with_settings},
    error::{Error, ErrorKind, Result},
    host::{browser, element, node},
    kind::{
        arguments, arguments_empty, array, array_empty, array_like, big_int, bool_false,
        bool_true, boolean, date, defined, empty, error, function, hash, map, null, number,
        object, primitive, regexp, set, string, symbol, type_of, undefined, valid_date, weak_map,
        weak_set,
    },
    number::{
        decimal, divisible_by, even, float, ge, gt, infinite, integer, le, lt, maximum, minimum,
        nan, odd, safe_integer, within,
    },
    settings::Settings,
    shape::{event, hosted, instance, promise, prototype, thenable},
};

#[doc(inline)]
pub use typeoracle_runtime::{
    self as runtime, Builtin, ClassTag, HostEnvironment, Intrinsic, JsString, Object,
    ObjectKind, Realm, Symbol, TypeOf, Value,
};
