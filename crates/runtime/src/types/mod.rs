//! The core types used at the boundary

mod function;
mod object;
mod string;
mod symbol;
mod tag;
pub mod value;

pub(crate) use self::object::array_index;

pub use self::{
    function::FunctionData,
    object::{Builtin, Intrinsic, Object, ObjectKind, Property, PropertyHasher, PropertyMap},
    string::JsString,
    symbol::Symbol,
    tag::{ClassTag, TypeOf},
    value::Value,
};
