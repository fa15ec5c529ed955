//! Macro record types

use serde::{Deserialize, Serialize};

/// A single macro extracted from a configuration report.
///
/// Keys need not be unique across one extraction run; duplicates pass
/// through unmodified and the renderer's include guards make the first
/// definition win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRecord {
    /// Macro name as it will appear in `#define`/`#ifndef`
    pub key: String,

    /// Resolved value; absent for bare macros declared without one
    pub value: Option<String>,
}

impl MacroRecord {
    /// Create a bare macro that is simply defined (no value)
    pub fn defined(key: &str) -> Self {
        Self {
            key: key.to_string(),
            value: None,
        }
    }

    /// Create a macro with a resolved value
    pub fn with_value(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: Some(value.to_string()),
        }
    }
}
