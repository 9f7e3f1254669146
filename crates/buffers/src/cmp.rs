//! Byte slice comparison utilities.

use std::cmp::Ordering;

/// Compares two byte slices for equality.
///
/// A length mismatch returns `false` without looking at any byte.
///
/// # Example
///
/// ```
/// use docval_buffers::bytes_equal;
///
/// assert!(bytes_equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!bytes_equal(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!bytes_equal(&[1, 2], &[1, 2, 3]));
/// ```
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a == b
}

/// Compares two byte slices lexicographically by unsigned byte value.
///
/// When one slice is a strict prefix of the other, the shorter one orders
/// first.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use docval_buffers::bytes_cmp;
///
/// assert_eq!(bytes_cmp(&[1, 2], &[1, 2, 3]), Ordering::Less);
/// assert_eq!(bytes_cmp(&[1, 2, 3], &[1, 2]), Ordering::Greater);
/// assert_eq!(bytes_cmp(&[1, 2, 3], &[1, 2, 3]), Ordering::Equal);
/// assert_eq!(bytes_cmp(&[1, 2, 3], &[1, 3, 2]), Ordering::Less);
/// ```
pub fn bytes_cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}
