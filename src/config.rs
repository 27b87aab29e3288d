//! Run configuration
//!
//! Everything the pipeline would otherwise hard-code (input path, sheet name,
//! output folder, anchor matching) lives here so tests can swap it out.

use std::path::PathBuf;

/// Label of the cell above-left of the default comment list
pub const DEFAULT_COMMENTS_LABEL: &str = "Default Comments:";

/// Label of the cell above the rubric field type (e.g. "Task" or "Q")
pub const RUBRIC_FIELD_TYPE_LABEL: &str = "Rubric Field Type:";

pub const DEFAULT_INPUT: &str = "ProjectGrades.xlsx";
pub const DEFAULT_SHEET: &str = "Sheet1";
pub const DEFAULT_OUTPUT_DIR: &str = "attachments";

/// How an anchor scan treats a label that occurs more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Fail with `AmbiguousLabel` when the label is not unique
    #[default]
    Unique,
    /// Take the first match in row-major order
    First,
    /// Take the last match in row-major order
    Last,
}

#[derive(Debug, Clone)]
pub struct GradeConfig {
    pub input: PathBuf,
    pub sheet_name: String,
    pub output_dir: PathBuf,
    pub label_policy: LabelPolicy,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sheet_name: DEFAULT_SHEET.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            label_policy: LabelPolicy::default(),
        }
    }
}

impl GradeConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }
}
