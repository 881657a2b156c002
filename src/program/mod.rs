//! The decompiled-program model the extractor reads from
//!
//! The extractor only needs a narrow view of a program: its classes, their
//! methods, and the string constants loaded by each method's instructions.
//! Anything able to answer those questions can be analyzed.

pub mod memory;

use serde::{Serialize, Deserialize};

use crate::errors::ExtractorResult;

pub use self::memory::{MemoryClass, MemoryMethod, MemoryProgram};

/// One decoded instruction of a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// Loads a string literal. `value` is absent when the decompiler could
    /// not resolve the constant.
    ConstString {
        #[serde(default)]
        value: Option<String>,
    },
    /// Any other instruction
    Other,
}

impl Instruction {
    /// Shorthand for a resolved string load
    pub fn const_string(value: impl Into<String>) -> Self {
        Instruction::ConstString { value: Some(value.into()) }
    }

    /// The literal loaded by this instruction, if any
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Instruction::ConstString { value } => value.as_deref(),
            Instruction::Other => None,
        }
    }
}

/// A whole decompiled program
pub trait ProgramModel {
    type Class: ClassModel;

    /// Every class of the program, in a stable order
    fn classes(&self) -> &[Self::Class];
}

/// One class. Classes are harvested independently, possibly on other threads.
pub trait ClassModel: Sync {
    type Method: MethodModel;

    /// Fully-qualified class name
    fn full_name(&self) -> &str;

    fn methods(&self) -> &[Self::Method];
}

/// One method of a class
pub trait MethodModel {
    /// Unique identifier, e.g. `com.example.Foo.bar(I)V`
    fn method_id(&self) -> &str;

    /// Unqualified name as currently known
    fn name(&self) -> &str;

    /// Abstract and native methods have no body to scan
    fn has_no_code(&self) -> bool;

    /// Make the instruction stream available. Calling it again is a no-op.
    fn load(&self) -> ExtractorResult<()>;

    /// The decoded instructions of a loaded method
    fn instructions(&self) -> ExtractorResult<Vec<Instruction>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_json_shape() {
        let insns: Vec<Instruction> = serde_json::from_str(
            r#"[{"op": "const_string", "value": "loadConfig"}, {"op": "const_string"}, {"op": "other"}]"#,
        )
        .unwrap();

        assert_eq!(insns[0], Instruction::const_string("loadConfig"));
        assert_eq!(insns[1], Instruction::ConstString { value: None });
        assert_eq!(insns[2], Instruction::Other);
        assert_eq!(insns[0].string_value(), Some("loadConfig"));
        assert_eq!(insns[1].string_value(), None);
    }
}
