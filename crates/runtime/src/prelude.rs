//! A collection of useful items to make it easier to work with `typeoracle_runtime`

#[doc(inline)]
pub use crate::{
    Builtin, ClassTag, FunctionData, HostEnvironment, Intrinsic, JsString, Object, ObjectKind,
    Realm, Symbol, TypeOf, Value,
};
