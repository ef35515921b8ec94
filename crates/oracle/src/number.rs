//! Numeric predicates and ordering comparisons
//!
//! Boxed numbers are treated the same as their unboxed values throughout.

use crate::{Error, Result, kind::array_like};
use std::cmp::Ordering;
use typeoracle_runtime::{number_to_string, prelude::*};

// 2^53 - 1, the largest integer that can be represented exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns true if the value is positive or negative infinity
pub fn infinite(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_infinite)
}

/// Returns true if the value is a finite number with a fractional part
pub fn decimal(value: &Value) -> bool {
    value.as_number().is_some_and(|n| n.is_finite() && n % 1.0 != 0.0)
}

/// Returns true if the value is a number without a fractional part
///
/// Both infinities are considered to be integers.
pub fn integer(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_infinite() || n % 1.0 == 0.0)
}

/// Returns true if the value is an integer that can be represented exactly
pub fn safe_integer(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER)
}

/// Returns true if the value is a number that isn't equal to its own floor
pub fn float(value: &Value) -> bool {
    value.as_number().is_some_and(|n| !n.is_nan() && n.floor() != n)
}

/// Returns true if the value is divisible by `n`
///
/// If either argument is infinite then divisibility is vacuously true, otherwise both
/// arguments must be numbers, and division by zero is false.
pub fn divisible_by(value: &Value, n: &Value) -> bool {
    if infinite(value) || infinite(n) {
        return true;
    }

    match (value.as_number(), n.as_number()) {
        (Some(value), Some(n)) if !value.is_nan() && !n.is_nan() && n != 0.0 => value % n == 0.0,
        _ => false,
    }
}

/// Returns true if the value is an even number, or infinite
pub fn even(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_infinite() || n % 2.0 == 0.0)
}

/// Returns true if the value is an odd number, or infinite
pub fn odd(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_infinite() || (!n.is_nan() && n % 2.0 != 0.0))
}

/// Returns true if the value isn't usable as a number, i.e. it's NaN or not a number at all
pub fn nan(value: &Value) -> bool {
    value.as_number().is_none_or(f64::is_nan)
}

/// Returns true if no element of `others` is greater than the value
///
/// Elements are compared with the relational comparison operators, so strings are supported
/// alongside numbers.
///
/// An error is returned if the value is NaN, or if `others` isn't array-like.
pub fn maximum(value: &Value, others: &Value) -> Result<bool> {
    extremum(value, others, Ordering::Less)
}

/// Returns true if no element of `others` is less than the value
///
/// See [maximum] for details.
pub fn minimum(value: &Value, others: &Value) -> Result<bool> {
    extremum(value, others, Ordering::Greater)
}

fn extremum(value: &Value, others: &Value, disqualifying: Ordering) -> Result<bool> {
    check_not_nan(&[value])?;
    if !array_like(others) {
        return Err(Error::NotArrayLike);
    }

    // array_like guarantees a finite non-negative length. A fractional length is counted down
    // as it is, so `2.5` visits the keys `1.5` and `0.5`.
    let length = others.get("length").to_number().min(MAX_SAFE_INTEGER);

    let mut index = length - 1.0;
    while index >= 0.0 {
        let other = others.get(&number_to_string(index));
        if value.compare(&other) == Some(disqualifying) {
            return Ok(false);
        }
        index -= 1.0;
    }

    Ok(true)
}

/// Returns true if the value is greater than or equal to `other`
///
/// Infinite values never compare, so false is returned if either argument is infinite.
/// An error is returned if either argument is NaN.
pub fn ge(value: &Value, other: &Value) -> Result<bool> {
    ordered(value, other, |ordering| ordering.is_ge())
}

/// Returns true if the value is greater than `other`
///
/// See [ge] for details.
pub fn gt(value: &Value, other: &Value) -> Result<bool> {
    ordered(value, other, |ordering| ordering.is_gt())
}

/// Returns true if the value is less than or equal to `other`
///
/// See [ge] for details.
pub fn le(value: &Value, other: &Value) -> Result<bool> {
    ordered(value, other, |ordering| ordering.is_le())
}

/// Returns true if the value is less than `other`
///
/// See [ge] for details.
pub fn lt(value: &Value, other: &Value) -> Result<bool> {
    ordered(value, other, |ordering| ordering.is_lt())
}

fn ordered(value: &Value, other: &Value, test: impl Fn(Ordering) -> bool) -> Result<bool> {
    check_not_nan(&[value, other])?;

    if infinite(value) || infinite(other) {
        return Ok(false);
    }

    Ok(value.compare(other).is_some_and(test))
}

/// Returns true if the value is within the inclusive range `start..=finish`
///
/// If any argument is infinite then the result is vacuously true.
/// An error is returned if any argument is NaN, or isn't a number.
pub fn within(value: &Value, start: &Value, finish: &Value) -> Result<bool> {
    let arguments = [value, start, finish];

    check_not_nan(&arguments)?;

    let mut numbers = [0.0; 3];
    for (n, argument) in numbers.iter_mut().zip(arguments) {
        *n = argument.as_number().ok_or(Error::NonNumericArgument)?;
    }

    let [value, start, finish] = numbers;
    if numbers.iter().any(|n| n.is_infinite()) {
        return Ok(true);
    }

    Ok(value >= start && value <= finish)
}

fn check_not_nan(values: &[&Value]) -> Result<()> {
    if values
        .iter()
        .any(|value| value.as_number().is_some_and(f64::is_nan))
    {
        Err(Error::NanValue)
    } else {
        Ok(())
    }
}
