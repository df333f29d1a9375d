//! Abstraction over `{value, done}` record construction.

use crate::element::Element;

/// Builds the record returned by each iteration step.
///
/// The iterator never inspects the record it hands back, so embedders can
/// produce whatever result shape their object model wants; the only
/// contract is "a value and a done flag".
pub trait ResultFactory {
    /// The record type this factory produces.
    type Result;

    /// Builds one step record.
    ///
    /// Called with `(Some(element), false)` while iteration continues and
    /// `(None, true)` once the source is exhausted; no other combination
    /// occurs.
    fn build(&self, value: Option<Element>, done: bool) -> Self::Result;
}

/// Factory producing the crate's own [`StepResult`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StdResultFactory;

impl ResultFactory for StdResultFactory {
    type Result = StepResult;

    fn build(&self, value: Option<Element>, done: bool) -> StepResult {
        StepResult { value, done }
    }
}

/// The outcome of one iteration step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepResult {
    /// The element produced by this step; absent exactly when `done`.
    pub value: Option<Element>,
    /// `true` once the source text is exhausted.
    pub done: bool,
}
