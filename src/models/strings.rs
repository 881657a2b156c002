//! Records for observed string constants

use serde::{Serialize, Deserialize};

/// One observed string literal occurrence.
///
/// Duplicates across occurrences are distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringConstant {
    /// Literal text
    pub value: String,
    /// Identifier of the method that loads the literal
    pub owner_method_id: String,
    /// Fully-qualified name of the owning class
    pub owner_class_name: String,
}

impl StringConstant {
    /// Create a new string record
    pub fn new(value: impl Into<String>, owner_method_id: impl Into<String>, owner_class_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            owner_method_id: owner_method_id.into(),
            owner_class_name: owner_class_name.into(),
        }
    }
}

/// A method whose string constant names a source file.
///
/// Grouped under the detected file path by `AnalysisResult::source_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileReference {
    /// Identifier of the referencing method
    pub owner_method_id: String,
    /// Unqualified name of the referencing method
    pub owner_method_name: String,
    /// The full string the path was found in
    pub raw_string: String,
}
