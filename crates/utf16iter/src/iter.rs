//! The code point iterator and its step protocol.

use core::{fmt, iter::FusedIterator};

use crate::{
    element::Element,
    factory::{ResultFactory, StdResultFactory, StepResult},
    surrogate::{is_high_surrogate, is_low_surrogate},
    text::Utf16Text,
};

/// A stateful iterator over the code points of a [`Utf16Text`].
///
/// Each step yields one [`Element`]: a single code unit, or a high/low
/// surrogate pair combined into one step. The iterator owns a snapshot of
/// the text and a cursor; once the cursor passes the end, the snapshot is
/// released and the iterator stays exhausted permanently.
///
/// The plain [`Iterator`] impl covers generic consumers; [`step`] and
/// [`step_with`] expose the `{value, done}` protocol directly.
///
/// [`step`]: CodePointIter::step
/// [`step_with`]: CodePointIter::step_with
#[derive(Clone)]
pub struct CodePointIter {
    /// `None` marks the terminal state; the transition is one-way.
    text: Option<Utf16Text>,
    cursor: usize,
}

impl CodePointIter {
    /// Descriptive tag identifying iterator instances in diagnostics.
    ///
    /// Carried by the [`Debug`] output; has no effect on iteration.
    pub const TYPE_TAG: &'static str = "String Iterator";

    /// Creates an iterator over `text` with its cursor at the start.
    #[must_use]
    pub fn new(text: impl Into<Utf16Text>) -> Self {
        Self { text: Some(text.into()), cursor: 0 }
    }

    /// Returns `true` once the iterator has reported completion.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.text.is_none()
    }

    /// Advances by one element and reports a `{value, done}` record.
    ///
    /// After the first `(None, true)` result every further call returns
    /// `(None, true)` again; stepping an exhausted iterator is not an
    /// error.
    pub fn step(&mut self) -> StepResult {
        self.step_with(&StdResultFactory)
    }

    /// Advances by one element, handing the outcome to `factory`.
    ///
    /// The factory is called exactly once per invocation, with either
    /// `(Some(element), false)` or `(None, true)`.
    pub fn step_with<F: ResultFactory>(&mut self, factory: &F) -> F::Result {
        match self.advance() {
            Some(element) => factory.build(Some(element), false),
            None => factory.build(None, true),
        }
    }

    /// Core cursor advance: one element per call, with a single forward
    /// lookahead for surrogate pairing.
    fn advance(&mut self) -> Option<Element> {
        let text = self.text.as_ref()?;
        let units = text.units();
        let mut pos = self.cursor;

        if pos >= units.len() {
            self.text = None;
            return None;
        }

        let first = units[pos];
        pos += 1;

        let element = if is_high_surrogate(first) && pos < units.len() && is_low_surrogate(units[pos])
        {
            let second = units[pos];
            // Lookahead unit is only consumed when it completes the pair;
            // anything else is re-read on the next step.
            pos += 1;
            Element::Pair([first, second])
        } else {
            Element::Unit(first)
        };

        self.cursor = pos;
        Some(element)
    }
}

impl Iterator for CodePointIter {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .text
            .as_ref()
            .map_or(0, |text| text.len() - self.cursor);
        // Every element consumes one or two units.
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for CodePointIter {}

impl fmt::Debug for CodePointIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(Self::TYPE_TAG)
            .field("cursor", &self.cursor)
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}
