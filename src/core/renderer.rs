//! Student feedback rendering
//!
//! A feedback document has four parts, in order:
//!
//! ```text
//! Comments:
//!
//! Task1: <comment or default>
//!
//! <overall comment, only when present>
//!
//! Scores:
//! 	Task1: <score>	Task2: <score>
//!
//! Total Score: <total>
//! ```
//!
//! Score segments are tab-prefixed and written back to back with no newline
//! between them.

use crate::error::{GradeError, GradeResult};
use crate::types::{ColumnLayout, Field, Rubric};

/// A student row read through its column layout
struct StudentRow<'a> {
    cells: &'a [String],
    number: usize,
    layout: ColumnLayout,
}

impl<'a> StudentRow<'a> {
    fn get(&self, field: Field) -> Option<&'a str> {
        self.cells
            .get(self.layout.column(field))
            .map(String::as_str)
    }

    fn require(&self, field: Field) -> GradeResult<&'a str> {
        self.get(field).ok_or_else(|| GradeError::IncompleteRow {
            student: self.display_name(),
            row: self.number,
            field: field.to_string(),
            column: self.layout.column(field),
            len: self.cells.len(),
        })
    }

    fn display_name(&self) -> String {
        match self.get(Field::StudentId) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => "unknown student".to_string(),
        }
    }
}

/// Identifier of the student on this row, usable as a file name stem.
///
/// `row_number` is the one-based spreadsheet row, used in errors only.
pub fn student_id<'r>(
    row: &'r [String],
    row_number: usize,
    rubric: &Rubric,
) -> GradeResult<&'r str> {
    let student = StudentRow {
        cells: row,
        number: row_number,
        layout: rubric.layout(),
    };
    let id = student.require(Field::StudentId)?;

    let unusable = id.trim().is_empty() || id == "." || id == ".." || id.contains(['/', '\\']);
    if unusable {
        return Err(GradeError::InvalidStudentId {
            row: row_number,
            id: id.to_string(),
        });
    }
    Ok(id)
}

/// Render the feedback text for one student row.
///
/// Empty per-criterion comments fall back to the rubric's default comment.
/// Scores and the total have no fallback: a row too short to hold them is an
/// `IncompleteRow` error. The whole document is built before returning, so a
/// failing row never produces partial output.
pub fn render_student_document(
    row: &[String],
    row_number: usize,
    rubric: &Rubric,
) -> GradeResult<String> {
    let student = StudentRow {
        cells: row,
        number: row_number,
        layout: rubric.layout(),
    };

    let mut doc = String::from("Comments:\n\n");

    for (i, default_comment) in rubric.default_comments.iter().enumerate() {
        let comment = match student.require(Field::Comment(i))? {
            "" => default_comment.as_str(),
            custom => custom,
        };
        doc.push_str(&format!("{}: {}\n\n", rubric.heading(i), comment));
    }

    if let Some(overall) = student.get(Field::OverallComment).filter(|c| !c.is_empty()) {
        doc.push_str(&format!("{}\n\n", overall));
    }

    doc.push_str("Scores:\n");
    for i in 0..rubric.criteria() {
        let score = student.require(Field::Score(i))?;
        doc.push_str(&format!("\t{}: {}", rubric.heading(i), score));
    }

    let total = student.require(Field::TotalScore)?;
    doc.push_str(&format!("\n\nTotal Score: {}", total));

    Ok(doc)
}
