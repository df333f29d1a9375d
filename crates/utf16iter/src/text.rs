//! Immutable UTF-16 text snapshots.

use alloc::{string::String, sync::Arc, vec::Vec};
use core::{char, fmt};

use crate::{element::Element, iter::CodePointIter};

/// An immutable, shareable sequence of 16-bit code units.
///
/// `Utf16Text` stores arbitrary code units, including unpaired surrogates,
/// so any value a UTF-16 host string can hold round-trips through it.
/// Cloning is cheap (a reference-count bump); the underlying units are
/// fixed for the lifetime of every clone, which is what lets iterators hold
/// a snapshot instead of a borrow.
///
/// # Examples
///
/// ```
/// use utf16iter::Utf16Text;
///
/// let text = Utf16Text::from("héllo");
/// assert_eq!(text.len(), 5);
/// assert_eq!(text.to_string_lossy(), "héllo");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Utf16Text {
    units: Arc<[u16]>,
}

impl Utf16Text {
    /// Creates an empty text.
    #[must_use]
    pub fn new() -> Self {
        Self { units: Arc::from([]) }
    }

    /// Number of code units (not code points).
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the text holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The code unit at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.units.get(index).copied()
    }

    /// All code units, in order.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Creates a fresh iterator over this text with its cursor at zero.
    ///
    /// Each call returns an independent iterator; advancing one does not
    /// affect any other.
    #[must_use]
    pub fn code_points(&self) -> CodePointIter {
        CodePointIter::new(self.clone())
    }

    /// Decodes the text to a `String`, substituting U+FFFD for unpaired
    /// surrogates.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        char::decode_utf16(self.units.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl Default for Utf16Text {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Utf16Text {
    fn from(s: &str) -> Self {
        s.encode_utf16().collect()
    }
}

impl From<&String> for Utf16Text {
    fn from(s: &String) -> Self {
        s.as_str().into()
    }
}

impl From<String> for Utf16Text {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<&[u16]> for Utf16Text {
    fn from(units: &[u16]) -> Self {
        Self { units: Arc::from(units) }
    }
}

impl<const N: usize> From<[u16; N]> for Utf16Text {
    fn from(units: [u16; N]) -> Self {
        Self { units: Arc::from(units.as_slice()) }
    }
}

impl From<Vec<u16>> for Utf16Text {
    fn from(units: Vec<u16>) -> Self {
        Self { units: units.into() }
    }
}

impl From<char> for Utf16Text {
    fn from(c: char) -> Self {
        Element::from(c).units().into()
    }
}

impl FromIterator<u16> for Utf16Text {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self { units: iter.into_iter().collect() }
    }
}

impl FromIterator<char> for Utf16Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut units = Vec::new();
        let mut buf = [0u16; 2];
        for c in iter {
            units.extend_from_slice(c.encode_utf16(&mut buf));
        }
        units.into()
    }
}

impl IntoIterator for &Utf16Text {
    type Item = Element;
    type IntoIter = CodePointIter;

    fn into_iter(self) -> Self::IntoIter {
        self.code_points()
    }
}

impl fmt::Debug for Utf16Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Utf16Text").field(&self.to_string_lossy()).finish()
    }
}

impl fmt::Display for Utf16Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            fmt::Display::fmt(&c.unwrap_or(char::REPLACEMENT_CHARACTER), f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Utf16Text {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.units().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Utf16Text {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<u16>::deserialize(deserializer).map(Self::from)
    }
}
