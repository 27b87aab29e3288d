use std::path::PathBuf;
use thiserror::Error;

pub type GradeResult<T> = Result<T, GradeError>;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Failed to open spreadsheet: {0}")]
    Workbook(String),

    #[error("Sheet not found: {sheet}")]
    SheetNotFound { sheet: String },

    #[error("Couldn't find cell: {label}")]
    LabelNotFound { label: String },

    #[error("Cell '{label}' appears more than once (at {})", .positions.join(", "))]
    AmbiguousLabel {
        label: String,
        positions: Vec<String>,
    },

    #[error("Malformed layout: {0}")]
    MalformedLayout(String),

    #[error("Can't recreate output folder '{}': {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Incomplete row {row} ({student}): {field} expects column {column} but the row has {len} cells")]
    IncompleteRow {
        student: String,
        row: usize,
        field: String,
        column: usize,
        len: usize,
    },

    #[error("Row {row} has an unusable student identifier '{id}'")]
    InvalidStudentId { row: usize, id: String },

    #[error("Failed to write '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GradeError {
    /// True for errors confined to a single student row.
    ///
    /// The batch reports these and moves on; everything else aborts the run.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            GradeError::IncompleteRow { .. }
                | GradeError::InvalidStudentId { .. }
                | GradeError::WriteFailed { .. }
        )
    }
}
