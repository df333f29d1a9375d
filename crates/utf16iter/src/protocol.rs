//! Dynamically checked entry point for the step protocol.
//!
//! Host object models hand methods a dynamically typed receiver; [`next_on`]
//! is the step function rendered that way. It accepts any `&mut dyn Any`,
//! validates that the receiver actually carries iterator state, and only
//! then advances it. Receivers that never went through
//! [`CodePointIter::new`] fail with [`ReceiverError`] — the sole error path
//! in the crate.

use core::any::Any;

use thiserror::Error;

use crate::{
    factory::{ResultFactory, StepResult},
    iter::CodePointIter,
};

/// Method name reported when the receiver check fails.
const NEXT_METHOD: &str = "String Iterator.prototype.next";

/// The step function was invoked on a receiver lacking iterator state.
///
/// Fatal to the call and surfaced directly; the receiver is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("incompatible method receiver: {method}")]
pub struct ReceiverError {
    method: &'static str,
}

impl ReceiverError {
    /// The method whose receiver check failed.
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }
}

/// Advances a dynamically typed receiver by one step.
///
/// # Errors
///
/// Returns [`ReceiverError`] if `receiver` is not a [`CodePointIter`].
///
/// # Examples
///
/// ```
/// use utf16iter::{CodePointIter, next_on};
///
/// let mut iter = CodePointIter::new("hi");
/// let result = next_on(&mut iter).unwrap();
/// assert!(!result.done);
///
/// let mut not_an_iter = 5_u32;
/// assert!(next_on(&mut not_an_iter).is_err());
/// ```
pub fn next_on(receiver: &mut dyn Any) -> Result<StepResult, ReceiverError> {
    match receiver.downcast_mut::<CodePointIter>() {
        Some(iter) => Ok(iter.step()),
        None => Err(ReceiverError { method: NEXT_METHOD }),
    }
}

/// Advances a dynamically typed receiver, building the record with
/// `factory`.
///
/// # Errors
///
/// Returns [`ReceiverError`] if `receiver` is not a [`CodePointIter`]; the
/// factory is not invoked in that case.
pub fn next_on_with<F: ResultFactory>(
    receiver: &mut dyn Any,
    factory: &F,
) -> Result<F::Result, ReceiverError> {
    match receiver.downcast_mut::<CodePointIter>() {
        Some(iter) => Ok(iter.step_with(factory)),
        None => Err(ReceiverError { method: NEXT_METHOD }),
    }
}
