//! Batch loop over student rows

use crate::core::renderer::{render_student_document, student_id};
use crate::error::GradeResult;
use crate::types::{BatchReport, Grid, RowFailure, Rubric};
use crate::writer::AttachmentWriter;
use std::path::PathBuf;
use tracing::debug;

/// Write a feedback file for every row below the header.
///
/// A failing row is recorded in the report and the loop moves on to the
/// next one. Rows are handled in sheet order.
pub fn grade_rows(grid: &Grid, rubric: &Rubric, writer: &AttachmentWriter) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, row) in grid.rows().iter().enumerate().skip(1) {
        let row_number = index + 1;

        match grade_row(row, row_number, rubric, writer) {
            Ok(path) => report.written.push(path),
            Err(error) => {
                debug!(row = row_number, %error, "skipping row");
                report.failures.push(RowFailure {
                    row: row_number,
                    student: row.get(1).filter(|id| !id.is_empty()).cloned(),
                    error,
                });
            }
        }
    }

    report
}

fn grade_row(
    row: &[String],
    row_number: usize,
    rubric: &Rubric,
    writer: &AttachmentWriter,
) -> GradeResult<PathBuf> {
    let id = student_id(row, row_number, rubric)?;
    let text = render_student_document(row, row_number, rubric)?;
    writer.write(id, &text)
}
