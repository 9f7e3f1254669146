//! Tree-shaped document values with structural equality and ordering.
//!
//! A [`Value`] is null, a boolean, a number, a string, a byte string, an
//! array, an object, or an alias borrowing another value. Comparison looks
//! only at logical content:
//!
//! - aliases compare exactly as their referents,
//! - object member order is ignored,
//! - a default-constructed value, [`Value::empty_object`] and a parsed `{}`
//!   are the same empty object,
//! - integers and doubles compare by mathematical value unless
//!   [`NumberPolicy::Strict`] is selected.
//!
//! # Example
//!
//! ```
//! use docval::Value;
//!
//! let names = Value::parse(r#"{"names": ["a", "b", "c", "d"]}"#).unwrap();
//! let fewer = Value::parse(r#"{"names": ["a", "b"]}"#).unwrap();
//! let alias = Value::alias(&names);
//!
//! assert!(alias == names);
//! assert!(alias != fewer);
//! assert!(fewer < alias);
//! ```

mod compare;
mod error;
mod kind;
mod object;
mod parse;
mod value;

pub use compare::{
    compare, equals, greater, greater_or_equal, less, less_or_equal, not_equals, Comparator,
    CompareOptions, NumberPolicy,
};
pub use docval_buffers::ByteString;
pub use error::{Result, ValueError};
pub use kind::{Content, Kind, Members};
pub use object::Object;
pub use value::Value;
