//! [`ByteString`] — an immutable sequence of raw bytes.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cmp::{bytes_cmp, bytes_equal};
use crate::print_octets::print_octets_default;

/// Owned, immutable byte payload.
///
/// Distinct from text: two byte strings compare by their raw bytes only.
/// Ordering is lexicographic by unsigned byte value, with a strict prefix
/// ordering first.
///
/// # Example
///
/// ```
/// use docval_buffers::ByteString;
///
/// let a = ByteString::from(b"123456789");
/// let b = ByteString::from(b"12345678");
/// assert_ne!(a, b);
/// assert!(b < a);
/// ```
#[derive(Clone, Default)]
pub struct ByteString {
    bytes: Box<[u8]>,
}

impl ByteString {
    /// Takes ownership of `bytes`.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The payload as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.bytes.iter()
    }

    /// Gives the payload back as a `Vec`.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ByteString {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ByteString {
    fn from(bytes: &[u8; N]) -> Self {
        Self::new(&bytes[..])
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl<'b> IntoIterator for &'b ByteString {
    type Item = &'b u8;
    type IntoIter = std::slice::Iter<'b, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        bytes_equal(&self.bytes, &other.bytes)
    }
}

impl Eq for ByteString {}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        bytes_cmp(&self.bytes, &other.bytes)
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteString[{}]({})", self.len(), print_octets_default(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_contents() {
        let a = ByteString::from(b"123456789");
        let b: ByteString = b"123456789".iter().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_mismatch() {
        let a = ByteString::from(b"123456789");
        let b = ByteString::from(b"12345678");
        assert_ne!(a, b);
        assert!(b < a);
    }

    #[test]
    fn test_empty() {
        let a = ByteString::default();
        assert!(a.is_empty());
        assert_eq!(a, ByteString::from(Vec::new()));
    }

    #[test]
    fn test_debug_prints_octets() {
        let a = ByteString::from([0x01u8, 0xff]);
        assert_eq!(format!("{a:?}"), "ByteString[2](01 ff)");
    }
}
