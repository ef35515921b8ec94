use crate::{JsString, Value};

/// The internal data of a function object
///
/// Function bodies aren't modelled, a function is identified by its name, its arity, whether
/// it can be used with `new`, and its `prototype` property.
#[derive(Clone, Debug)]
pub struct FunctionData {
    name: JsString,
    length: usize,
    constructor: bool,
    prototype: Option<Value>,
}

impl FunctionData {
    /// Makes the data for a function that can be used as a constructor
    ///
    /// The `prototype` property is usually an object, see [Realm::function](crate::Realm::function).
    pub fn constructor(name: &str, prototype: Value) -> Self {
        Self {
            name: name.into(),
            length: 0,
            constructor: true,
            prototype: Some(prototype),
        }
    }

    /// Makes the data for a function without a `prototype` property, e.g. an arrow function or
    /// a built-in method
    pub fn method(name: &str) -> Self {
        Self {
            name: name.into(),
            length: 0,
            constructor: false,
            prototype: None,
        }
    }

    /// Sets the number of declared parameters, exposed as the function's `length`
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// The function's name
    pub fn name(&self) -> &JsString {
        &self.name
    }

    /// The number of declared parameters
    pub fn length(&self) -> usize {
        self.length
    }

    /// True if the function can be called with `new`
    pub fn is_constructor(&self) -> bool {
        self.constructor
    }

    /// The function's own `prototype` property, if it has one
    pub fn prototype(&self) -> Option<&Value> {
        self.prototype.as_ref()
    }

    pub(crate) fn set_prototype(&mut self, prototype: Value) {
        self.prototype = Some(prototype);
    }
}
