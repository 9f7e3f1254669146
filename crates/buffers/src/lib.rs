//! Byte payload utilities for docval.
//!
//! # Overview
//!
//! - [`ByteString`] - An immutable owned byte sequence
//! - [`bytes_equal`], [`bytes_cmp`] - Byte slice comparisons
//! - [`print_octets`] - Hex rendering for diagnostics
//!
//! # Example
//!
//! ```
//! use docval_buffers::{bytes_cmp, ByteString};
//! use std::cmp::Ordering;
//!
//! let short = ByteString::from(b"ab");
//! let long = ByteString::from(b"abcd");
//! assert_eq!(bytes_cmp(short.as_slice(), long.as_slice()), Ordering::Less);
//! ```

mod byte_string;
mod cmp;
mod print_octets;

pub use byte_string::ByteString;
pub use cmp::{bytes_cmp, bytes_equal};
pub use print_octets::{print_octets, print_octets_default};
