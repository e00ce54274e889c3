//! Validation outcomes

use crate::instruction::NormalizedInstruction;
use crate::options::ValidationOptions;
use serde::Serialize;
use serde_json::Value;

/// Expected-versus-provided description of a failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// What the instruction expects, e.g. `an integer`.
    pub expected_text: String,
    /// What was found, e.g. `a string ("x")`.
    pub provided_text: String,
    /// `expected {expected_text} but {provided_text} was provided.`
    pub message: String,
}

impl Mismatch {
    /// Builds the mismatch and its message.
    pub fn new(expected_text: String, provided_text: String) -> Self {
        let message = format!("expected {expected_text} but {provided_text} was provided.");
        Self {
            expected_text,
            provided_text,
            message,
        }
    }
}

/// Why a validation did not simply pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    /// The value was absent and `allow_absent` was set; no check ran.
    Bypassed,
    /// The value did not satisfy the instruction.
    Mismatch(Mismatch),
}

/// Full record of one validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the value satisfied the instruction (or was bypassed).
    pub success: bool,
    /// Options in effect.
    pub options: ValidationOptions,
    /// The evaluated tree; `None` when the value was bypassed.
    pub instructions: Option<NormalizedInstruction>,
    /// The value as given.
    pub initial_value: Value,
    /// `None` on a plain pass.
    pub failure: Option<Failure>,
    /// The value handed back to the caller.
    pub final_value: Value,
}

impl ValidationReport {
    /// Mismatch details of a failed validation.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match &self.failure {
            Some(Failure::Mismatch(mismatch)) => Some(mismatch),
            Some(Failure::Bypassed) | None => None,
        }
    }

    /// Failure message of a failed validation.
    pub fn message(&self) -> Option<&str> {
        self.mismatch().map(|mismatch| mismatch.message.as_str())
    }

    /// Returns true when the value was absent and allowed to be.
    pub fn is_bypassed(&self) -> bool {
        matches!(self.failure, Some(Failure::Bypassed))
    }

    /// Serializes the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Result of a successful `validate` call.
#[derive(Debug, Clone)]
pub enum Validated {
    /// The final value.
    Value(Value),
    /// The full report, when `return_full_result` was set.
    Report(Box<ValidationReport>),
}

impl Validated {
    /// The final value, whichever form was returned.
    pub fn value(&self) -> &Value {
        match self {
            Self::Value(value) => value,
            Self::Report(report) => &report.final_value,
        }
    }

    /// Consumes the outcome and returns the final value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Report(report) => report.final_value,
        }
    }

    /// The full report, if one was requested.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Value(_) => None,
        }
    }

    /// Consumes the outcome and returns the full report, if one was requested.
    pub fn into_report(self) -> Option<ValidationReport> {
        match self {
            Self::Report(report) => Some(*report),
            Self::Value(_) => None,
        }
    }
}
