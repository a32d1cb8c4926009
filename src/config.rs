//! Export options
//!
//! Defaults can be overridden by a YAML file and then by CLI flags or
//! environment variables (handled by clap in `main.rs`).

use crate::error::{TimetableError, TimetableResult};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SHEET_NAME: &str = "Stundenplan";
pub const DEFAULT_TEACHER_HEADER: &str = "Lehrkraft";
pub const DEFAULT_SLOT_COLUMN_WIDTH: f64 = 2.5;
pub const DEFAULT_OUTPUT_FILE: &str = "stundenplan2.xlsx";

const SHEET_NAME_MAX_LEN: usize = 31;
const SHEET_NAME_ILLEGAL: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Layout options of the exported worksheet
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    pub sheet_name: String,
    pub teacher_header: String,
    pub slot_column_width: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            teacher_header: DEFAULT_TEACHER_HEADER.to_string(),
            slot_column_width: DEFAULT_SLOT_COLUMN_WIDTH,
        }
    }
}

impl ExportOptions {
    /// Load options from a YAML file; missing keys keep their defaults
    pub fn from_yaml_file(path: &Path) -> TimetableResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TimetableError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let options: ExportOptions = serde_yaml::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// Apply overrides that were given explicitly
    pub fn with_overrides(
        mut self,
        sheet_name: Option<String>,
        teacher_header: Option<String>,
        slot_column_width: Option<f64>,
    ) -> Self {
        if let Some(name) = sheet_name {
            self.sheet_name = name;
        }
        if let Some(header) = teacher_header {
            self.teacher_header = header;
        }
        if let Some(width) = slot_column_width {
            self.slot_column_width = width;
        }
        self
    }

    pub fn validate(&self) -> TimetableResult<()> {
        validate_sheet_name(&self.sheet_name)?;

        if !(self.slot_column_width.is_finite()
            && self.slot_column_width > 0.0
            && self.slot_column_width <= 255.0)
        {
            return Err(TimetableError::Config(format!(
                "Slot column width must be in (0, 255], got {}",
                self.slot_column_width
            )));
        }

        Ok(())
    }
}

/// Excel sheet names: 1..=31 chars, none of `[]:*?/\`, no leading/trailing `'`
pub fn validate_sheet_name(name: &str) -> TimetableResult<()> {
    let len = name.chars().count();
    if len == 0 || len > SHEET_NAME_MAX_LEN {
        return Err(TimetableError::Config(format!(
            "Sheet name must be 1 to {} characters: '{}'",
            SHEET_NAME_MAX_LEN, name
        )));
    }
    if let Some(c) = name.chars().find(|c| SHEET_NAME_ILLEGAL.contains(c)) {
        return Err(TimetableError::Config(format!(
            "Sheet name contains illegal character '{}': '{}'",
            c, name
        )));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(TimetableError::Config(format!(
            "Sheet name must not start or end with an apostrophe: '{}'",
            name
        )));
    }
    Ok(())
}
