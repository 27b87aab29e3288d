//! Gradesheet - per-student feedback files from a grading spreadsheet
//!
//! The sheet has no fixed schema. Two label cells locate the sheet-wide
//! values (the default comment per criterion and the criterion heading
//! prefix), and every row below the header is rendered into a plain-text
//! feedback document.
//!
//! # Example
//!
//! ```no_run
//! use gradesheet::config::LabelPolicy;
//! use gradesheet::core::{locate_rubric, render_student_document};
//! use gradesheet::excel::SheetReader;
//!
//! let grid = SheetReader::new("ProjectGrades.xlsx").read_grid("Sheet1")?;
//! let rubric = locate_rubric(&grid, LabelPolicy::Unique)?;
//!
//! if let Some(row) = grid.row(1) {
//!     println!("{}", render_student_document(row, 2, &rubric)?);
//! }
//! # Ok::<(), gradesheet::error::GradeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::{GradeConfig, LabelPolicy};
pub use error::{GradeError, GradeResult};
pub use types::{BatchReport, ColumnLayout, Field, Grid, Rubric};
