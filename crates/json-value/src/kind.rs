//! Kind resolution.
//!
//! An alias carries no kind of its own. Everything that inspects the kind of
//! a value goes through [`Value::resolve`] first, so aliases are invisible to
//! both evaluators.

use std::fmt;

use docval_buffers::ByteString;

use crate::compare::NumberPolicy;
use crate::object::Object;
use crate::value::Value;

/// Effective kind of a value, after alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Double,
    String,
    ByteString,
    Array,
    Object,
}

impl Kind {
    pub fn is_number(self) -> bool {
        matches!(self, Kind::Int | Kind::Uint | Kind::Double)
    }

    /// Position of this kind in the fixed cross-kind order:
    /// Null < Bool < Number < String < ByteString < Array < Object.
    ///
    /// Under [`NumberPolicy::Strict`] integers and doubles occupy two
    /// adjacent ranks, integers first.
    pub fn rank(self, policy: NumberPolicy) -> u8 {
        match self {
            Kind::Null => 0,
            Kind::Bool => 1,
            Kind::Int | Kind::Uint => 2,
            Kind::Double => match policy {
                NumberPolicy::CrossKind => 2,
                NumberPolicy::Strict => 3,
            },
            Kind::String => 4,
            Kind::ByteString => 5,
            Kind::Array => 6,
            Kind::Object => 7,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::ByteString => "byte string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Borrowed effective content of a value.
#[derive(Debug, Clone, Copy)]
pub enum Content<'v, 'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),
    String(&'v str),
    Bytes(&'v ByteString),
    Array(&'v [Value<'a>]),
    Object(Members<'v, 'a>),
}

impl Content<'_, '_> {
    pub fn kind(&self) -> Kind {
        match self {
            Content::Null => Kind::Null,
            Content::Bool(_) => Kind::Bool,
            Content::Int(_) => Kind::Int,
            Content::Uint(_) => Kind::Uint,
            Content::Double(_) => Kind::Double,
            Content::String(_) => Kind::String,
            Content::Bytes(_) => Kind::ByteString,
            Content::Array(_) => Kind::Array,
            Content::Object(_) => Kind::Object,
        }
    }
}

/// Read-only view over the members of an object, whichever storage holds it.
///
/// The allocation-free empty object and a populated [`Object`] look the same
/// through this view.
#[derive(Debug, Clone, Copy)]
pub struct Members<'v, 'a> {
    object: Option<&'v Object<'a>>,
}

impl<'v, 'a> Members<'v, 'a> {
    pub(crate) fn empty() -> Self {
        Self { object: None }
    }

    pub(crate) fn of(object: &'v Object<'a>) -> Self {
        Self {
            object: Some(object),
        }
    }

    pub fn len(&self) -> usize {
        self.object.map_or(0, Object::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<&'v Value<'a>> {
        self.object.and_then(|o| o.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'v str, &'v Value<'a>)> {
        self.object.into_iter().flat_map(|object| object.iter())
    }

    pub fn sorted(&self) -> Vec<(&'v str, &'v Value<'a>)> {
        self.object.map(Object::sorted_members).unwrap_or_default()
    }
}

impl<'a> Value<'a> {
    /// Follows alias indirections to the first non-alias value.
    ///
    /// A dangling referent cannot exist: the borrow checker ties every alias
    /// to its referent's lifetime.
    pub fn resolve(&self) -> &Value<'a> {
        let mut current = self;
        while let Value::Alias(referent) = current {
            current = referent;
        }
        current
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Value::Alias(_))
    }

    pub fn kind(&self) -> Kind {
        self.content().kind()
    }

    /// Effective content, resolved through aliases. Never copies.
    pub fn content(&self) -> Content<'_, 'a> {
        match self {
            Value::Null => Content::Null,
            Value::Bool(b) => Content::Bool(*b),
            Value::Int(i) => Content::Int(*i),
            Value::Uint(u) => Content::Uint(*u),
            Value::Double(d) => Content::Double(*d),
            Value::String(s) => Content::String(s),
            Value::Bytes(b) => Content::Bytes(b),
            Value::Array(items) => Content::Array(items),
            Value::EmptyObject => Content::Object(Members::empty()),
            Value::Object(o) => Content::Object(Members::of(o)),
            Value::Alias(referent) => referent.content(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_through_alias_chain() {
        let base = Value::from("x");
        let first = Value::alias(&base);
        let second = Value::alias(&first);
        assert!(second.is_alias());
        assert!(!second.resolve().is_alias());
        assert_eq!(second.kind(), Kind::String);
    }

    #[test]
    fn test_empty_object_storages_share_kind() {
        assert_eq!(Value::default().kind(), Kind::Object);
        assert_eq!(Value::Object(Object::new()).kind(), Kind::Object);
        assert!(matches!(Value::default().content(), Content::Object(m) if m.is_empty()));
    }

    #[test]
    fn test_rank_order() {
        let policy = NumberPolicy::CrossKind;
        let kinds = [
            Kind::Null,
            Kind::Bool,
            Kind::Int,
            Kind::String,
            Kind::ByteString,
            Kind::Array,
            Kind::Object,
        ];
        for pair in kinds.windows(2) {
            assert!(pair[0].rank(policy) < pair[1].rank(policy));
        }
        assert_eq!(Kind::Int.rank(policy), Kind::Double.rank(policy));
        assert!(Kind::Uint.rank(NumberPolicy::Strict) < Kind::Double.rank(NumberPolicy::Strict));
    }
}
