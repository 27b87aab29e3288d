//! Anchor cell lookup
//!
//! The grading sheet has no fixed schema. Two label cells anywhere in the
//! grid tell us where the sheet-wide values live:
//!
//! - `Default Comments:` at (r, c): one default comment per criterion in
//!   column c + 1, from row r + 1 down to the end of the sheet.
//! - `Rubric Field Type:` at (r, c): the heading prefix at (r + 1, c).

use crate::config::{LabelPolicy, DEFAULT_COMMENTS_LABEL, RUBRIC_FIELD_TYPE_LABEL};
use crate::error::{GradeError, GradeResult};
use crate::types::{CellPos, Grid, Rubric};
use tracing::debug;

/// Find the cell whose text is exactly `label`, scanning row-major
pub fn find_label(grid: &Grid, label: &str, policy: LabelPolicy) -> GradeResult<CellPos> {
    let matches: Vec<CellPos> = grid
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.as_str() == label)
                .map(move |(c, _)| CellPos::new(r, c))
        })
        .collect();

    let found = match (policy, matches.as_slice()) {
        (_, []) => None,
        (_, [only]) => Some(*only),
        (LabelPolicy::First, [first, ..]) => Some(*first),
        (LabelPolicy::Last, [.., last]) => Some(*last),
        (LabelPolicy::Unique, _) => {
            return Err(GradeError::AmbiguousLabel {
                label: label.to_string(),
                positions: matches.iter().map(ToString::to_string).collect(),
            });
        }
    };

    found.ok_or_else(|| GradeError::LabelNotFound {
        label: label.to_string(),
    })
}

/// Default comment per criterion, read down the column right of the label.
///
/// Rows too short to reach that column are skipped, not filled with an empty
/// comment, so a ragged sheet still yields a dense list.
pub fn locate_default_comments(grid: &Grid, policy: LabelPolicy) -> GradeResult<Vec<String>> {
    let label = find_label(grid, DEFAULT_COMMENTS_LABEL, policy)?;
    let start = CellPos::new(label.row + 1, label.col + 1);

    let comments: Vec<String> = grid
        .rows()
        .iter()
        .skip(start.row)
        .filter_map(|row| row.get(start.col).cloned())
        .collect();

    if comments.is_empty() {
        return Err(GradeError::MalformedLayout(format!(
            "no default comments below-right of '{}' at {}",
            DEFAULT_COMMENTS_LABEL, label
        )));
    }

    debug!(
        anchor = %label,
        criteria = comments.len(),
        "found default comments"
    );
    Ok(comments)
}

/// Heading prefix for criteria, read from the cell under the label
pub fn locate_rubric_field_type(grid: &Grid, policy: LabelPolicy) -> GradeResult<String> {
    let label = find_label(grid, RUBRIC_FIELD_TYPE_LABEL, policy)?;
    let value = CellPos::new(label.row + 1, label.col);

    let field_type = grid.cell(value.row, value.col).ok_or_else(|| {
        GradeError::MalformedLayout(format!(
            "'{}' at {} has no value below it ({})",
            RUBRIC_FIELD_TYPE_LABEL, label, value
        ))
    })?;

    debug!(anchor = %label, field_type, "found rubric field type");
    Ok(field_type.to_string())
}

/// Both sheet-wide values, looked up with the same policy
pub fn locate_rubric(grid: &Grid, policy: LabelPolicy) -> GradeResult<Rubric> {
    let default_comments = locate_default_comments(grid, policy)?;
    let field_type = locate_rubric_field_type(grid, policy)?;
    Ok(Rubric::new(field_type, default_comments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labelled_grid() -> Grid {
        Grid::from_rows(vec![
            vec!["", "Student", "Task1"],
            vec!["", "", "", "", "Default Comments:"],
            vec!["", "", "", "", "", "Good"],
            vec!["", "", "", "", "", "Fine"],
        ])
    }

    #[test]
    fn test_find_label_position() {
        let pos = find_label(&labelled_grid(), DEFAULT_COMMENTS_LABEL, LabelPolicy::Unique).unwrap();
        assert_eq!(pos, CellPos::new(1, 4));
    }

    #[test]
    fn test_find_label_policies() {
        let grid = Grid::from_rows(vec![vec!["x", "Rubric Field Type:"], vec!["Rubric Field Type:"]]);

        let first = find_label(&grid, RUBRIC_FIELD_TYPE_LABEL, LabelPolicy::First).unwrap();
        assert_eq!(first, CellPos::new(0, 1));

        let last = find_label(&grid, RUBRIC_FIELD_TYPE_LABEL, LabelPolicy::Last).unwrap();
        assert_eq!(last, CellPos::new(1, 0));

        let unique = find_label(&grid, RUBRIC_FIELD_TYPE_LABEL, LabelPolicy::Unique);
        match unique {
            Err(GradeError::AmbiguousLabel { positions, .. }) => {
                assert_eq!(positions, vec!["B1", "A2"]);
            }
            other => panic!("Expected AmbiguousLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_label_match_is_exact() {
        let grid = Grid::from_rows(vec![vec!["Default Comments", "default comments:", " Default Comments:"]]);
        let result = find_label(&grid, DEFAULT_COMMENTS_LABEL, LabelPolicy::Unique);
        assert!(matches!(result, Err(GradeError::LabelNotFound { .. })));
    }

    #[test]
    fn test_default_comments_in_last_row_is_malformed() {
        let grid = Grid::from_rows(vec![vec!["header"], vec!["Default Comments:"]]);
        let result = locate_default_comments(&grid, LabelPolicy::Unique);
        assert!(matches!(result, Err(GradeError::MalformedLayout(_))));
    }

    #[test]
    fn test_rubric_field_type_in_last_row_is_malformed() {
        let grid = Grid::from_rows(vec![vec!["header"], vec!["", "Rubric Field Type:"]]);
        let result = locate_rubric_field_type(&grid, LabelPolicy::Unique);
        assert!(matches!(result, Err(GradeError::MalformedLayout(_))));
    }

    #[test]
    fn test_rubric_field_type_below_short_row_is_malformed() {
        let grid = Grid::from_rows(vec![vec!["", "", "Rubric Field Type:"], vec!["Task"]]);
        let result = locate_rubric_field_type(&grid, LabelPolicy::Unique);
        assert!(matches!(result, Err(GradeError::MalformedLayout(_))));
    }
}
