use crate::{JsString, Ptr};
use std::fmt;

/// A unique symbol value
///
/// Symbols are compared by identity, two symbols with the same description are distinct.
#[derive(Clone)]
pub struct Symbol(Ptr<SymbolData>);

struct SymbolData {
    description: Option<JsString>,
}

impl Symbol {
    /// Makes a new unique symbol with an optional description
    pub fn new(description: Option<&str>) -> Self {
        Self(Ptr::new(SymbolData {
            description: description.map(JsString::from),
        }))
    }

    /// Returns the symbol's description
    pub fn description(&self) -> Option<&JsString> {
        self.0.description.as_ref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => write!(f, "Symbol({description})"),
            None => write!(f, "Symbol()"),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
