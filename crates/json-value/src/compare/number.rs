//! Exact comparison across `i64`, `u64` and `f64`.
//!
//! Mixed pairs go through `num-cmp`, which never rounds an integer into a
//! float, so the ordering stays transitive near 2^53 and beyond.
//!
//! NaN equals NaN and orders after every other number. `-0.0 == 0.0`.

use std::cmp::Ordering;

use num_cmp::NumCmp;

use crate::kind::Content;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Number {
    Int(i64),
    Uint(u64),
    Double(f64),
}

impl Number {
    pub(crate) fn is_double(self) -> bool {
        matches!(self, Number::Double(_))
    }
}

/// Numeric payload of `content`, if it is a number.
pub(crate) fn number_of(content: &Content<'_, '_>) -> Option<Number> {
    match *content {
        Content::Int(i) => Some(Number::Int(i)),
        Content::Uint(u) => Some(Number::Uint(u)),
        Content::Double(d) => Some(Number::Double(d)),
        _ => None,
    }
}

pub(crate) fn cmp_numbers(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.cmp(&y),
        (Number::Uint(x), Number::Uint(y)) => x.cmp(&y),
        (Number::Int(x), Number::Uint(y)) => NumCmp::num_cmp(x, y).unwrap_or(Ordering::Less),
        (Number::Uint(x), Number::Int(y)) => NumCmp::num_cmp(x, y).unwrap_or(Ordering::Greater),
        (Number::Double(x), Number::Double(y)) => cmp_doubles(x, y),
        (Number::Int(x), Number::Double(y)) => cmp_int_double(x, y),
        (Number::Uint(x), Number::Double(y)) => cmp_uint_double(x, y),
        (Number::Double(x), Number::Int(y)) => cmp_int_double(y, x).reverse(),
        (Number::Double(x), Number::Uint(y)) => cmp_uint_double(y, x).reverse(),
    }
}

fn cmp_doubles(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

fn cmp_int_double(x: i64, y: f64) -> Ordering {
    // `None` only for NaN, which orders last.
    NumCmp::num_cmp(x, y).unwrap_or(Ordering::Less)
}

fn cmp_uint_double(x: u64, y: f64) -> Ordering {
    NumCmp::num_cmp(x, y).unwrap_or(Ordering::Less)
}
