//! Order evaluator.
//!
//! Kinds order by [`Kind::rank`](crate::Kind::rank). Within a kind, numbers
//! order by value, strings and byte strings lexicographically, arrays
//! element-wise with a prefix first, and objects by member count, then by
//! their members sorted by key (key first, then value).

use std::cmp::Ordering;

use super::number::{cmp_numbers, number_of};
use super::NumberPolicy;
use crate::kind::{Content, Members};
use crate::value::Value;

/// Containers being walked, innermost last. The first non-equal step anywhere
/// decides the result.
enum Frame<'v> {
    Array {
        a: &'v [Value<'v>],
        b: &'v [Value<'v>],
        next: usize,
    },
    Object {
        a: Vec<(&'v str, &'v Value<'v>)>,
        b: Vec<(&'v str, &'v Value<'v>)>,
        next: usize,
    },
}

enum Step<'v> {
    Descend(&'v Value<'v>, &'v Value<'v>),
    Finish(Ordering),
}

impl<'v> Frame<'v> {
    fn advance(&mut self) -> Step<'v> {
        match self {
            Frame::Array { a, b, next } => {
                let (a, b) = (*a, *b);
                match (a.get(*next), b.get(*next)) {
                    (Some(x), Some(y)) => {
                        *next += 1;
                        Step::Descend(x, y)
                    }
                    // One side exhausted: the shorter array orders first.
                    _ => Step::Finish(a.len().cmp(&b.len())),
                }
            }
            Frame::Object { a, b, next } => match (a.get(*next).copied(), b.get(*next).copied()) {
                (Some((key_a, x)), Some((key_b, y))) => {
                    *next += 1;
                    match key_a.cmp(key_b) {
                        Ordering::Equal => Step::Descend(x, y),
                        non_eq => Step::Finish(non_eq),
                    }
                }
                // Member counts were already found equal.
                _ => Step::Finish(Ordering::Equal),
            },
        }
    }
}

/// Orders `a` against `b` without recursion: containers become frames on an
/// explicit stack and are walked pair by pair.
pub(crate) fn compare_with<'v>(a: &'v Value<'v>, b: &'v Value<'v>, policy: NumberPolicy) -> Ordering {
    let mut frames: Vec<Frame<'v>> = Vec::new();
    let (mut x, mut y) = (a, b);
    loop {
        let ord = enter(x, y, policy, &mut frames);
        if ord.is_ne() {
            return ord;
        }
        loop {
            let Some(frame) = frames.last_mut() else {
                return Ordering::Equal;
            };
            match frame.advance() {
                Step::Descend(next_x, next_y) => {
                    (x, y) = (next_x, next_y);
                    break;
                }
                Step::Finish(Ordering::Equal) => {
                    frames.pop();
                }
                Step::Finish(ord) => return ord,
            }
        }
    }
}

/// Compares the heads of `a` and `b`. Scalars are decided here; non-empty
/// containers of the same kind push a frame and report `Equal` so far.
fn enter<'v>(a: &'v Value<'v>, b: &'v Value<'v>, policy: NumberPolicy, frames: &mut Vec<Frame<'v>>) -> Ordering {
    match (a.content(), b.content()) {
        (Content::Null, Content::Null) => Ordering::Equal,
        (Content::Bool(x), Content::Bool(y)) => x.cmp(&y),
        (Content::String(x), Content::String(y)) => x.cmp(y),
        (Content::Bytes(x), Content::Bytes(y)) => x.cmp(y),
        (Content::Array(x), Content::Array(y)) => {
            frames.push(Frame::Array { a: x, b: y, next: 0 });
            Ordering::Equal
        }
        (Content::Object(x), Content::Object(y)) => enter_objects(x, y, frames),
        (x, y) => {
            let rank_x = x.kind().rank(policy);
            let rank_y = y.kind().rank(policy);
            match (number_of(&x), number_of(&y)) {
                (Some(m), Some(n)) if rank_x == rank_y => cmp_numbers(m, n),
                _ => rank_x.cmp(&rank_y),
            }
        }
    }
}

fn enter_objects<'v>(a: Members<'v, 'v>, b: Members<'v, 'v>, frames: &mut Vec<Frame<'v>>) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal if a.is_empty() => Ordering::Equal,
        Ordering::Equal => {
            frames.push(Frame::Object {
                a: a.sorted(),
                b: b.sorted(),
                next: 0,
            });
            Ordering::Equal
        }
        non_eq => non_eq,
    }
}
