//! Row-to-document core: anchor lookup, rendering, and the batch loop

pub mod anchors;
pub mod batch;
pub mod renderer;

pub use anchors::{find_label, locate_default_comments, locate_rubric, locate_rubric_field_type};
pub use batch::grade_rows;
pub use renderer::{render_student_document, student_id};
