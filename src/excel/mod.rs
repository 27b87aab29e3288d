//! Spreadsheet import
//!
//! Reads one worksheet of a workbook (xlsx, xlsm, xls, ods) into a [`Grid`]
//! of cell text, the only shape the rest of the crate works with.
//!
//! [`Grid`]: crate::types::Grid

mod reader;

pub use reader::{cell_text, grid_from_range, SheetReader};
