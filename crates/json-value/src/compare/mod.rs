//! Structural comparison of [`Value`]s.
//!
//! [`equals`] and [`less`] are the two primitives; everything else is derived
//! from them by negation or by swapping operands. Both resolve aliases before
//! looking at a value and never fail.
//!
//! Neither evaluator recurses: arrays and objects are walked with an explicit
//! work-list, so arbitrarily deep trees compare without exhausting the call
//! stack. Scalar comparisons do not allocate. Container comparisons keep the
//! work-list on the heap, and ordering two non-empty objects also sorts their
//! member references by key.

mod equal;
mod number;
mod options;
mod order;

use std::cmp::Ordering;

pub use options::{CompareOptions, NumberPolicy};

use crate::value::Value;

/// Comparator bound to a set of [`CompareOptions`].
///
/// ```
/// use docval::{Comparator, CompareOptions, NumberPolicy, Value};
///
/// let strict = Comparator::new(CompareOptions::default().with_number_policy(NumberPolicy::Strict));
/// assert!(!strict.equals(&Value::from(3), &Value::from(3.0)));
/// assert!(Comparator::default().equals(&Value::from(3), &Value::from(3.0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CompareOptions {
        self.options
    }

    pub fn equals(&self, a: &Value<'_>, b: &Value<'_>) -> bool {
        equal::equals_with(a, b, self.options.number_policy)
    }

    /// Three-way comparison; `Equal` exactly when [`Comparator::equals`] holds.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        order::compare_with(a, b, self.options.number_policy)
    }

    pub fn less(&self, a: &Value<'_>, b: &Value<'_>) -> bool {
        self.compare(a, b).is_lt()
    }

    pub fn not_equals(&self, a: &Value<'_>, b: &Value<'_>) -> bool {
        !self.equals(a, b)
    }

    pub fn greater(&self, a: &Value<'_>, b: &Value<'_>) -> bool {
        self.less(b, a)
    }

    pub fn less_or_equal(&self, a: &Value<'_>, b: &Value<'_>) -> bool {
        !self.less(b, a)
    }

    pub fn greater_or_equal(&self, a: &Value<'_>, b: &Value<'_>) -> bool {
        !self.less(a, b)
    }
}

/// Whether `a` and `b` denote the same content.
pub fn equals(a: &Value<'_>, b: &Value<'_>) -> bool {
    Comparator::default().equals(a, b)
}

/// Strict weak ordering over values.
pub fn less(a: &Value<'_>, b: &Value<'_>) -> bool {
    Comparator::default().less(a, b)
}

pub fn compare(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    Comparator::default().compare(a, b)
}

pub fn not_equals(a: &Value<'_>, b: &Value<'_>) -> bool {
    !equals(a, b)
}

pub fn greater(a: &Value<'_>, b: &Value<'_>) -> bool {
    less(b, a)
}

pub fn less_or_equal(a: &Value<'_>, b: &Value<'_>) -> bool {
    !less(b, a)
}

pub fn greater_or_equal(a: &Value<'_>, b: &Value<'_>) -> bool {
    !less(a, b)
}

impl<'b> PartialEq<Value<'b>> for Value<'_> {
    fn eq(&self, other: &Value<'b>) -> bool {
        equals(self, other)
    }
}

impl Eq for Value<'_> {}

impl<'b> PartialOrd<Value<'b>> for Value<'_> {
    fn partial_cmp(&self, other: &Value<'b>) -> Option<Ordering> {
        Some(compare(self, other))
    }

    fn lt(&self, other: &Value<'b>) -> bool {
        less(self, other)
    }
}

impl Ord for Value<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_operations() {
        let one = Value::from(1);
        let two = Value::from(2);
        assert!(less(&one, &two));
        assert!(greater(&two, &one));
        assert!(less_or_equal(&one, &two));
        assert!(less_or_equal(&one, &one));
        assert!(greater_or_equal(&two, &two));
        assert!(!greater_or_equal(&one, &two));
        assert!(not_equals(&one, &two));
    }

    #[test]
    fn test_operators() {
        let one = Value::from(1);
        let two = Value::from(2.0);
        assert!(one < two);
        assert!(two > one);
        assert!(one <= one);
        assert!(one != two);
        assert_eq!(one.cmp(&two), Ordering::Less);
    }

    #[test]
    fn test_sort() {
        let mut values = vec![
            Value::default(),
            Value::from("s"),
            Value::Null,
            Value::from(2.5),
            Value::from(true),
            Value::from(-3),
        ];
        values.sort();
        let kinds: Vec<String> = values.iter().map(|v| v.kind().to_string()).collect();
        assert_eq!(kinds, vec!["null", "bool", "int", "double", "string", "object"]);
    }
}
