//! An in-memory program model, loadable from JSON
//!
//! ```json
//! {
//!   "classes": [{
//!     "name": "com.example.DataProcessor",
//!     "methods": [{
//!       "id": "com.example.DataProcessor.a(Ljava/lang/String;)V",
//!       "name": "a",
//!       "instructions": [{"op": "const_string", "value": "DataProcessor, validateInput, invalid data: %s"}]
//!     }]
//!   }]
//! }
//! ```

use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};

use crate::errors::{ErrorContext, ExtractorError, ExtractorResult};
use crate::program::{ClassModel, Instruction, MethodModel, ProgramModel};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryMethod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub no_code: bool,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    /// When set, `load` fails with this message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
    /// When set, `instructions` fails with this message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_error: Option<String>,
}

impl MemoryMethod {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// A method whose body loads each of `strings` in order
    pub fn with_strings(id: impl Into<String>, name: impl Into<String>, strings: &[&str]) -> Self {
        let mut method = Self::new(id, name);
        method.instructions = strings
            .iter()
            .flat_map(|s| [Instruction::const_string(*s), Instruction::Other])
            .collect();
        method
    }
}

impl MethodModel for MemoryMethod {
    fn method_id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_no_code(&self) -> bool {
        self.no_code
    }

    fn load(&self) -> ExtractorResult<()> {
        match &self.load_error {
            Some(msg) => Err(ExtractorError::MethodLoad(
                ErrorContext::for_method("memory_program", "load_method", &self.id)
                    .with_details(msg.as_str())
                    .to_string(),
            )),
            None => Ok(()),
        }
    }

    fn instructions(&self) -> ExtractorResult<Vec<Instruction>> {
        match &self.instruction_error {
            Some(msg) => Err(ExtractorError::InstructionAccess(
                ErrorContext::for_method("memory_program", "read_instructions", &self.id)
                    .with_details(msg.as_str())
                    .to_string(),
            )),
            None => Ok(self.instructions.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryClass {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MemoryMethod>,
}

impl MemoryClass {
    pub fn new(name: impl Into<String>, methods: Vec<MemoryMethod>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }
}

impl ClassModel for MemoryClass {
    type Method = MemoryMethod;

    fn full_name(&self) -> &str {
        &self.name
    }

    fn methods(&self) -> &[MemoryMethod] {
        &self.methods
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryProgram {
    #[serde(default)]
    pub classes: Vec<MemoryClass>,
}

impl MemoryProgram {
    pub fn new(classes: Vec<MemoryClass>) -> Self {
        Self { classes }
    }

    /// Parse a program from its JSON form
    pub fn from_json(json: &str) -> ExtractorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a program from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read program file: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse program file: {}", path.display()))
    }

    /// Total number of methods across all classes
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

impl ProgramModel for MemoryProgram {
    type Class = MemoryClass;

    fn classes(&self) -> &[MemoryClass] {
        &self.classes
    }
}
