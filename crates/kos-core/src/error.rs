//! kOS Error Types
//!
//! Defines the error conditions raised by the value model, suffix dispatch
//! and the script-side widget tree. Every failure a script can observe is a
//! variant here; the host layers wrap these rather than inventing their own.

use thiserror::Error;

use crate::value::convert::PrimitiveKind;
use crate::widget::WidgetId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KosError {
    // Conversion errors
    #[error("cannot cast {from} to {to}")]
    Cast { from: &'static str, to: PrimitiveKind },

    #[error("value {value} is out of range for {to}")]
    Overflow { value: String, to: PrimitiveKind },

    // Suffix dispatch errors
    #[error("suffix '{suffix}' not found on object of type {on}")]
    SuffixNotFound { suffix: String, on: &'static str },

    #[error("suffix '{suffix}' on {on} is read-only")]
    ReadOnlySuffix { suffix: String, on: &'static str },

    #[error("suffix '{suffix}' expects {expected} argument(s), got {got}")]
    ArgumentCount {
        suffix: String,
        expected: usize,
        got: usize,
    },

    #[error("expected a {expected} argument, found {found}")]
    ArgumentType {
        expected: &'static str,
        found: &'static str,
    },

    // Widget tree errors
    #[error("no widget with id {0}")]
    UnknownWidget(WidgetId),

    #[error("widget {id} is a {found}, not a {expected}")]
    WrongWidgetKind {
        id: WidgetId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("widget limit of {0} reached")]
    TooManyWidgets(usize),

    // Script callbacks
    #[error("delegate '{name}' failed: {reason}")]
    Delegate { name: String, reason: String },
}

impl KosError {
    pub fn cast(from: &'static str, to: PrimitiveKind) -> Self {
        KosError::Cast { from, to }
    }

    pub fn argument_type(expected: &'static str, found: &'static str) -> Self {
        KosError::ArgumentType { expected, found }
    }
}

pub type KosResult<T> = Result<T, KosError>;
