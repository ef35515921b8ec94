//! Contains the value model that the typeoracle predicates operate on
//!
//! Values cross the boundary from a dynamically typed host, so the model follows the host's
//! semantics: objects have reference identity, prototype chains, and intrinsic class tags, and
//! the built-in constructors and prototypes belong to a [Realm].

#![warn(missing_docs)]

mod coerce;
mod error;
mod ptr;
mod realm;
mod types;

pub mod prelude;

pub use crate::{
    coerce::number_to_string,
    error::{Error, Result},
    ptr::{Ptr, PtrMut},
    realm::{HostEnvironment, Realm},
    types::{
        Builtin, ClassTag, FunctionData, Intrinsic, JsString, Object, ObjectKind, Property,
        PropertyHasher, PropertyMap, Symbol, TypeOf, Value,
    },
};
