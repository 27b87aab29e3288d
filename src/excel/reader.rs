//! Sheet reader implementation - workbook → Grid

use crate::error::{GradeError, GradeResult};
use crate::types::Grid;
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveTime;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a single worksheet into a ragged grid of strings
pub struct SheetReader {
    path: PathBuf,
}

impl SheetReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read `sheet_name` from the workbook
    pub fn read_grid(&self, sheet_name: &str) -> GradeResult<Grid> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            GradeError::Workbook(format!("{}: {}", self.path.display(), e))
        })?;

        if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(GradeError::SheetNotFound {
                sheet: sheet_name.to_string(),
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| GradeError::Workbook(format!("sheet '{}': {}", sheet_name, e)))?;

        let grid = grid_from_range(&range);
        debug!(
            sheet = sheet_name,
            rows = grid.len(),
            "read worksheet from {}",
            self.path.display()
        );
        Ok(grid)
    }
}

/// Flatten a calamine range into an A1-anchored grid.
///
/// calamine ranges start at the first used cell, so leading rows and columns
/// are padded back in. Trailing empty cells of each row are dropped.
pub fn grid_from_range(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Grid::default();
    };

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];

    for data_row in range.rows() {
        let mut row: Vec<String> = vec![String::new(); start_col as usize];
        row.extend(data_row.iter().map(cell_text));

        while row.last().is_some_and(|cell| cell.is_empty()) {
            row.pop();
        }
        rows.push(row);
    }

    Grid::new(rows)
}

/// Text shown for a cell
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => number_text(*f),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if Some(ndt.time()) == NaiveTime::from_hms_opt(0, 0, 0) => {
                ndt.format("%Y-%m-%d").to_string()
            }
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => number_text(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Number as a spreadsheet shows it: 15 significant digits, no trailing zeros
fn number_text(f: f64) -> String {
    let rounded = format!("{:.14e}", f).parse::<f64>().unwrap_or(f);

    // Whole numbers without decimals
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
