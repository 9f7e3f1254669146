//! The document value model.

use docval_buffers::ByteString;

use crate::error::{Result, ValueError};
use crate::object::Object;

/// A tree-shaped document value.
///
/// Arrays and objects own their children. [`Value::Alias`] borrows a value
/// owned elsewhere and is transparent to comparison: it always behaves as
/// its referent.
///
/// A default-constructed value is the empty object, stored without
/// allocating ([`Value::EmptyObject`]). It is indistinguishable by content
/// from `Value::Object(Object::new())` and from a parsed `{}`.
#[derive(Debug, Clone, Default)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),
    String(String),
    Bytes(ByteString),
    Array(Vec<Value<'a>>),
    #[default]
    EmptyObject,
    Object(Object<'a>),
    Alias(&'a Value<'a>),
}

impl<'a> Value<'a> {
    /// The empty object, without allocating member storage.
    ///
    /// ```
    /// use docval::{Object, Value};
    ///
    /// assert!(Value::empty_object() == Value::Object(Object::new()));
    /// assert!(Value::empty_object() == Value::default());
    /// ```
    pub fn empty_object() -> Self {
        Value::EmptyObject
    }

    /// An array with no elements.
    pub fn empty_array() -> Self {
        Value::Array(Vec::new())
    }

    /// Non-owning reference to `referent`.
    pub fn alias(referent: &'a Value<'a>) -> Self {
        Value::Alias(referent)
    }

    /// Byte-string value from anything convertible to a [`ByteString`].
    pub fn bytes(bytes: impl Into<ByteString>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Sets `key` to `value`, returning the replaced member if there was one.
    ///
    /// The empty-object storage is promoted to a populated [`Object`], so a
    /// default-constructed value can be built up member by member.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value<'a>>) -> Result<Option<Value<'a>>> {
        match self {
            Value::EmptyObject => {
                let mut object = Object::with_capacity(1);
                object.insert(key, value);
                *self = Value::Object(object);
                Ok(None)
            }
            Value::Object(object) => Ok(object.insert(key, value)),
            Value::Alias(_) => Err(ValueError::AliasNotMutable),
            other => Err(ValueError::NotAnObject(other.kind())),
        }
    }

    /// Appends `value` to an array.
    pub fn push(&mut self, value: impl Into<Value<'a>>) -> Result<()> {
        match self {
            Value::Array(items) => {
                items.push(value.into());
                Ok(())
            }
            Value::Alias(_) => Err(ValueError::AliasNotMutable),
            other => Err(ValueError::NotAnArray(other.kind())),
        }
    }

    /// Number of array elements or object members; zero for scalars.
    pub fn len(&self) -> usize {
        match self.resolve() {
            Value::Array(items) => items.len(),
            Value::Object(object) => object.len(),
            _ => 0,
        }
    }

    /// `true` when [`Value::len`] is zero, which includes every scalar.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Member `key` of an object, looking through aliases.
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        match self.resolve() {
            Value::Object(object) => object.get(key),
            _ => None,
        }
    }

    /// Element `index` of an array, looking through aliases.
    pub fn at(&self, index: usize) -> Option<&Value<'a>> {
        match self.resolve() {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value<'_> {
            fn from(value: $ty) -> Self {
                Value::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value<'_> {
            fn from(value: $ty) -> Self {
                Value::Uint(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Double(f64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value<'_> {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<ByteString> for Value<'_> {
    fn from(value: ByteString) -> Self {
        Value::Bytes(value)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(value: Vec<Value<'a>>) -> Self {
        Value::Array(value)
    }
}

impl<'a> From<Object<'a>> for Value<'a> {
    fn from(value: Object<'a>) -> Self {
        Value::Object(value)
    }
}

impl<'a> FromIterator<Value<'a>> for Value<'a> {
    fn from_iter<T: IntoIterator<Item = Value<'a>>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    #[test]
    fn test_default_is_empty_object() {
        let v = Value::default();
        assert!(matches!(v, Value::EmptyObject));
        assert_eq!(v.kind(), Kind::Object);
        assert!(v.is_empty());
    }

    #[test]
    fn test_insert_promotes_default() {
        let mut v = Value::default();
        assert!(v.insert("a", 1).unwrap().is_none());
        assert!(matches!(v, Value::Object(_)));
        assert_eq!(v.len(), 1);
        assert!(matches!(v.insert("a", 2).unwrap(), Some(Value::Int(1))));
    }

    #[test]
    fn test_insert_into_string_fails() {
        let mut v = Value::from("42");
        let err = v.insert("a", 1).unwrap_err();
        assert!(matches!(err, ValueError::NotAnObject(Kind::String)));
        assert_eq!(err.to_string(), "not an object: value is string");
    }

    #[test]
    fn test_push() {
        let mut v = Value::empty_array();
        v.push("a").unwrap();
        v.push("b").unwrap();
        assert_eq!(v.len(), 2);
        assert!(matches!(v.at(1), Some(Value::String(s)) if s == "b"));
        assert!(matches!(Value::default().push(1), Err(ValueError::NotAnArray(Kind::Object))));
    }

    #[test]
    fn test_alias_is_read_only() {
        let base = Value::empty_array();
        let mut alias = Value::alias(&base);
        assert!(matches!(alias.push(1), Err(ValueError::AliasNotMutable)));
        assert!(matches!(alias.insert("k", 1), Err(ValueError::AliasNotMutable)));
    }

    #[test]
    fn test_accessors_see_through_alias() {
        let mut base = Value::default();
        base.insert("names", vec![Value::from("a"), Value::from("b")]).unwrap();
        let alias = Value::alias(&base);
        assert_eq!(alias.len(), 1);
        assert_eq!(alias.get("names").map(Value::len), Some(2));
    }
}
