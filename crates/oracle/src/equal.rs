//! Structural equality

use crate::Settings;
use typeoracle_runtime::prelude::*;

/// Returns true if the two values are structurally equal
///
/// Values that are strictly equal are always equal. Otherwise the values must share the same
/// class tag, and then:
/// - plain objects must have the same enumerable keys (including inherited keys), with equal
///   values for each key.
/// - arrays must have the same length, with equal elements at each index.
/// - functions are equal if they share the same `prototype` property. Note that this is a weak
///   check, e.g. any two arrow functions are considered to be equal.
/// - dates are equal if they refer to the same instant. Invalid dates are never equal.
/// - any other values are unequal.
///
/// Nesting deeper than the default [Settings::max_depth] causes the values to be considered
/// unequal, see [equal_with_settings].
pub fn equal(a: &Value, b: &Value) -> bool {
    equal_with_settings(a, b, &Settings::default())
}

/// Returns true if the two values are structurally equal, using the provided settings
///
/// See [equal] for the comparison rules.
pub fn equal_with_settings(a: &Value, b: &Value, settings: &Settings) -> bool {
    let comparison = Comparison {
        max_depth: settings.max_depth,
    };

    match comparison.equal(a, b, 0) {
        Ok(result) => result,
        Err(DepthExceeded) => {
            tracing::warn!(
                max_depth = settings.max_depth,
                "maximum depth exceeded while comparing values"
            );
            false
        }
    }
}

struct DepthExceeded;

struct Comparison {
    max_depth: usize,
}

impl Comparison {
    fn equal(&self, a: &Value, b: &Value, depth: usize) -> Result<bool, DepthExceeded> {
        if a.strict_equals(b) {
            return Ok(true);
        }

        let tag = a.class_tag();
        if tag != b.class_tag() {
            return Ok(false);
        }

        let (Value::Object(a), Value::Object(b)) = (a, b) else {
            // Primitives with matching tags that aren't strictly equal, e.g. NaN
            return Ok(false);
        };

        match tag {
            ClassTag::Object => self.equal_objects(a, b, depth),
            ClassTag::Array => self.equal_arrays(a, b, depth),
            ClassTag::Function => Ok(a.get("prototype").strict_equals(&b.get("prototype"))),
            ClassTag::Date => Ok(matches!(
                (a.date_value(), b.date_value()),
                (Some(a), Some(b)) if a == b
            )),
            _ => Ok(false),
        }
    }

    fn equal_objects(&self, a: &Object, b: &Object, depth: usize) -> Result<bool, DepthExceeded> {
        let depth = self.nested(depth)?;

        // Keys are checked in both directions to catch keys that are only present in `b`
        for (from, to) in [(a, b), (b, a)] {
            for key in from.for_in_keys() {
                if !to.has_property(&key) || !self.equal(&from.get(&key), &to.get(&key), depth)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    fn equal_arrays(&self, a: &Object, b: &Object, depth: usize) -> Result<bool, DepthExceeded> {
        let (Some(a), Some(b)) = (a.elements(), b.elements()) else {
            return Ok(false);
        };

        if a.len() != b.len() {
            return Ok(false);
        }

        let depth = self.nested(depth)?;

        for (a, b) in a.iter().zip(b.iter()).rev() {
            if !self.equal(a, b, depth)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn nested(&self, depth: usize) -> Result<usize, DepthExceeded> {
        if depth < self.max_depth {
            Ok(depth + 1)
        } else {
            Err(DepthExceeded)
        }
    }
}
