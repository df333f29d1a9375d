//! The per-step yield of code point iteration.

use core::{char, fmt};

use crate::surrogate::{self, is_high_surrogate, is_low_surrogate};

/// One element of a UTF-16 iteration: either a single code unit or both
/// units of a valid surrogate pair.
///
/// A `Unit` is produced for BMP characters and for unpaired surrogates; a
/// `Pair` is produced only when a high surrogate is immediately followed by
/// a low surrogate in the source text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// A single code unit.
    Unit(u16),
    /// A high surrogate followed by a low surrogate, in source order.
    Pair([u16; 2]),
}

impl Element {
    /// Builds a surrogate-pair element from its two halves.
    ///
    /// # Panics
    ///
    /// Panics if `high` is not a high surrogate or `low` is not a low
    /// surrogate; pairs are only ever constructed from validated units.
    #[must_use]
    pub fn pair(high: u16, low: u16) -> Self {
        assert!(
            is_high_surrogate(high) && is_low_surrogate(low),
            "not a surrogate pair: {high:#06X} {low:#06X}"
        );
        Self::Pair([high, low])
    }

    /// The code units of this element, in source order.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        match self {
            Self::Unit(unit) => core::slice::from_ref(unit),
            Self::Pair(pair) => pair,
        }
    }

    /// Number of code units consumed by this element (1 or 2).
    #[must_use]
    pub fn unit_len(&self) -> usize {
        self.units().len()
    }

    /// Returns `true` if this element is a combined surrogate pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(_))
    }

    /// Decodes this element to a Unicode scalar value.
    ///
    /// Returns `None` for an unpaired surrogate, which encodes no scalar
    /// value.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match *self {
            Self::Unit(unit) => char::from_u32(u32::from(unit)),
            Self::Pair([high, low]) => char::from_u32(surrogate::combine(high, low)),
        }
    }

    /// Decodes this element, substituting U+FFFD for unpaired surrogates.
    #[must_use]
    pub fn to_char_lossy(&self) -> char {
        self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        let mut buf = [0u16; 2];
        let encoded = c.encode_utf16(&mut buf).len();
        if encoded == 1 { Self::Unit(buf[0]) } else { Self::Pair(buf) }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_char_lossy(), f)
    }
}
