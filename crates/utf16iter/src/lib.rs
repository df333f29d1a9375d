//! Code point iteration over UTF-16 text with ECMAScript semantics.
//!
//! A [`Utf16Text`] is an immutable sequence of 16-bit code units. Iterating
//! it yields one [`Element`] per step: a single code unit for characters in
//! the Basic Multilingual Plane (and for unpaired surrogates), or both units
//! of a valid surrogate pair combined into one step. Pairing only ever looks
//! forward from a high surrogate; a lone low surrogate is yielded as-is.
//!
//! ```rust
//! use utf16iter::{Element, Utf16Text};
//!
//! let text = Utf16Text::from("a😀");
//! let elements: Vec<Element> = text.code_points().collect();
//! assert_eq!(elements[0], Element::Unit(0x61));
//! assert_eq!(elements[1], Element::pair(0xD83D, 0xDE00));
//! ```
//!
//! Besides the plain [`Iterator`] surface, [`CodePointIter::step`] exposes
//! the underlying step protocol directly: each call produces a
//! [`StepResult`] `{value, done}` record, and an exhausted iterator keeps
//! answering `(None, true)` forever instead of failing.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod element;
mod factory;
mod iter;
mod protocol;
mod surrogate;
mod text;

#[cfg(test)]
mod tests;

pub use element::Element;
pub use factory::{ResultFactory, StdResultFactory, StepResult};
pub use iter::CodePointIter;
pub use protocol::{ReceiverError, next_on, next_on_with};
pub use surrogate::{
    HIGH_SURROGATE_MAX, HIGH_SURROGATE_MIN, LOW_SURROGATE_MAX, LOW_SURROGATE_MIN,
    is_high_surrogate, is_low_surrogate, is_surrogate,
};
pub use text::Utf16Text;
