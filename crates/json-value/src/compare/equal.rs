//! Equality evaluator.

use docval_buffers::bytes_equal;

use super::number::{cmp_numbers, number_of, Number};
use super::NumberPolicy;
use crate::kind::{Content, Members};
use crate::value::Value;

/// Walks both trees side by side with an explicit stack of pending child
/// pairs, so nesting depth costs heap, not call stack.
pub(crate) fn equals_with<'v>(a: &'v Value<'v>, b: &'v Value<'v>, policy: NumberPolicy) -> bool {
    let mut pending: Vec<(&'v Value<'v>, &'v Value<'v>)> = Vec::new();
    let (mut x, mut y) = (a, b);
    loop {
        match (x.content(), y.content()) {
            (Content::Array(p), Content::Array(q)) => {
                if p.len() != q.len() {
                    return false;
                }
                pending.extend(p.iter().zip(q));
            }
            (Content::Object(p), Content::Object(q)) => {
                if !push_members(p, q, &mut pending) {
                    return false;
                }
            }
            (p, q) => {
                if !scalars_equal(&p, &q, policy) {
                    return false;
                }
            }
        }
        match pending.pop() {
            Some((next_x, next_y)) => (x, y) = (next_x, next_y),
            None => return true,
        }
    }
}

fn scalars_equal(a: &Content<'_, '_>, b: &Content<'_, '_>, policy: NumberPolicy) -> bool {
    match (a, b) {
        (Content::Null, Content::Null) => true,
        (Content::Bool(x), Content::Bool(y)) => x == y,
        (Content::String(x), Content::String(y)) => x.len() == y.len() && x == y,
        (Content::Bytes(x), Content::Bytes(y)) => bytes_equal(x.as_slice(), y.as_slice()),
        _ => match (number_of(a), number_of(b)) {
            (Some(m), Some(n)) => numbers_equal(m, n, policy),
            _ => false,
        },
    }
}

fn numbers_equal(a: Number, b: Number, policy: NumberPolicy) -> bool {
    if policy == NumberPolicy::Strict && a.is_double() != b.is_double() {
        return false;
    }
    cmp_numbers(a, b).is_eq()
}

/// Queues the member pairs of two objects; `false` when the key sets differ.
fn push_members<'v>(
    a: Members<'v, 'v>,
    b: Members<'v, 'v>,
    pending: &mut Vec<(&'v Value<'v>, &'v Value<'v>)>,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // Equal sizes plus every key of `a` present in `b` means the key sets match.
    for (key, value_a) in a.iter() {
        match b.get(key) {
            Some(value_b) => pending.push((value_a, value_b)),
            None => return false,
        }
    }
    true
}
