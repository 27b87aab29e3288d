use std::fmt;
use std::path::PathBuf;

use crate::error::GradeError;

//==============================================================================
// Grid
//==============================================================================

/// Spreadsheet content as rows of cell text.
///
/// Rows are ragged: trailing empty cells may be missing, and an empty row is
/// an empty vector. Row 0 / column 0 is cell A1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a grid from anything that looks like rows of strings
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//==============================================================================
// Cell positions
//==============================================================================

/// Zero-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Displays as an A1 reference
impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row + 1)
    }
}

/// Convert column index to spreadsheet column letter (0→A, 25→Z, 26→AA)
pub fn column_letter(n: usize) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

//==============================================================================
// Student row layout
//==============================================================================

/// Logical field of a student row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StudentId,
    /// Score of criterion `i` (zero-based)
    Score(usize),
    /// Comment of criterion `i` (zero-based)
    Comment(usize),
    TotalScore,
    OverallComment,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::StudentId => write!(f, "student id"),
            Field::Score(i) => write!(f, "criterion {} score", i + 1),
            Field::Comment(i) => write!(f, "criterion {} comment", i + 1),
            Field::TotalScore => write!(f, "total score"),
            Field::OverallComment => write!(f, "overall comment"),
        }
    }
}

/// Column positions of a student row for a sheet with `criteria` criteria.
///
/// Column 0 is unused, column 1 holds the student id, then one
/// (score, comment) pair per criterion, then the total score and the
/// overall comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    criteria: usize,
}

impl ColumnLayout {
    pub fn new(criteria: usize) -> Self {
        Self { criteria }
    }

    pub fn column(&self, field: Field) -> usize {
        match field {
            Field::StudentId => 1,
            Field::Score(i) => 2 + 2 * i,
            Field::Comment(i) => 3 + 2 * i,
            Field::TotalScore => 2 + 2 * self.criteria,
            Field::OverallComment => 3 + 2 * self.criteria,
        }
    }
}

//==============================================================================
// Rubric
//==============================================================================

/// Sheet-wide values found through the anchor cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rubric {
    /// Heading prefix for each criterion, e.g. "Task" renders "Task1"
    pub field_type: String,
    /// Fallback comment per criterion, in criterion order
    pub default_comments: Vec<String>,
}

impl Rubric {
    pub fn new(field_type: impl Into<String>, default_comments: Vec<String>) -> Self {
        Self {
            field_type: field_type.into(),
            default_comments,
        }
    }

    pub fn criteria(&self) -> usize {
        self.default_comments.len()
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::new(self.criteria())
    }

    /// Heading for criterion `i` (zero-based), e.g. "Task1"
    pub fn heading(&self, i: usize) -> String {
        format!("{}{}", self.field_type, i + 1)
    }
}

//==============================================================================
// Batch results
//==============================================================================

/// A student row that could not be turned into a feedback file
#[derive(Debug)]
pub struct RowFailure {
    /// One-based spreadsheet row number
    pub row: usize,
    pub student: Option<String>,
    pub error: GradeError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn rows_seen(&self) -> usize {
        self.written.len() + self.failures.len()
    }
}
