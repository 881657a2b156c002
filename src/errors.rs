//! Error handling for the magic strings extractor.
//!
//! This module provides the error type shared by the extraction pipeline,
//! the rename collaborator and the report writer, plus a context record
//! used to describe where a program-model failure happened.
//!
//! Scoring and classification never fail: they are total functions over
//! text. Errors only arise at the edges, from the program model (method
//! loading, instruction access), from lifecycle misuse of an
//! `AnalysisResult`, from renames, and from parsing inputs.

use thiserror::Error;
use std::fmt;

/// Main error type for the extractor.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A method body could not be loaded by the program model.
    #[error("Method load error: {0}")]
    MethodLoad(String),

    /// The instruction stream of a loaded method could not be read.
    #[error("Instruction access error: {0}")]
    InstructionAccess(String),

    /// Filtered candidates were queried before the global filter ran.
    #[error("Analysis result has not been finalized")]
    NotFinalized,

    /// New occurrences were fed into a result that was already finalized.
    #[error("Analysis result is already finalized; reset it before extracting again")]
    AlreadyFinalized,

    /// A proposed name has no valid identifier sanitization.
    #[error("Invalid method name '{name}' for {method_id}")]
    InvalidName {
        /// Target method identifier.
        method_id: String,
        /// The rejected name as proposed.
        name: String,
    },

    /// A rename targeted a method the collaborator does not know.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from (de)serializing program models, configs or reports.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for the extractor.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Context information for errors.
///
/// Describes where an error occurred: the method being processed (if any),
/// the component, and the operation.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Method identifier being processed, if applicable.
    pub method_id: Option<String>,

    /// Component where the error occurred (e.g., "program_model").
    pub component: String,

    /// Operation being performed when the error occurred (e.g., "load_method").
    pub operation: String,

    /// Additional context details.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Context for an operation on a single method
    pub fn for_method(component: &str, operation: &str, method_id: &str) -> Self {
        Self {
            method_id: Some(method_id.to_string()),
            component: component.to_string(),
            operation: operation.to_string(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In {} while {}", self.component, self.operation)?;
        if let Some(method_id) = &self.method_id {
            write!(f, " for method {}", method_id)?;
        }
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let context = ErrorContext::for_method("program_model", "load_method", "com.example.Foo.a()V")
            .with_details("dex offset 0x40");
        assert_eq!(
            context.to_string(),
            "In program_model while load_method for method com.example.Foo.a()V (dex offset 0x40)"
        );
    }

    #[test]
    fn test_context_without_method() {
        let context = ErrorContext {
            method_id: None,
            component: "config".to_string(),
            operation: "validate".to_string(),
            details: None,
        };
        assert_eq!(context.to_string(), "In config while validate");
    }

    #[test]
    fn test_invalid_name_message() {
        let err = ExtractorError::InvalidName {
            method_id: "a.B.c()V".to_string(),
            name: "class".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid method name 'class' for a.B.c()V");
    }
}
