//! Feedback document rendering tests

use gradesheet::core::render_student_document;
use gradesheet::error::GradeError;
use gradesheet::types::Rubric;
use pretty_assertions::assert_eq;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn rubric(field_type: &str, defaults: &[&str]) -> Rubric {
    Rubric::new(field_type, row(defaults))
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMENT FALLBACK
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_comment_falls_back_to_default() {
    let rubric = rubric("Task", &["D1", "D2"]);
    let student = row(&["", "erin", "3", "", "4", "custom", "7"]);

    let doc = render_student_document(&student, 2, &rubric).unwrap();
    assert!(doc.contains("Task1: D1\n\n"));
    assert!(doc.contains("Task2: custom\n\n"));
    assert!(!doc.contains("D2"));
}

#[test]
fn test_full_document_with_overall_comment() {
    let rubric = rubric("Q", &["Default one", "Default two"]);
    let student = row(&[
        "42",
        "frank",
        "10",
        "Clear answer",
        "6",
        "",
        "16",
        "Solid work, revise Q2.",
    ]);

    let doc = render_student_document(&student, 9, &rubric).unwrap();
    assert_eq!(
        doc,
        "Comments:\n\n\
         Q1: Clear answer\n\n\
         Q2: Default two\n\n\
         Solid work, revise Q2.\n\n\
         Scores:\n\
         \tQ1: 10\tQ2: 6\n\n\
         Total Score: 16"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// OVERALL COMMENT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_row_without_overall_comment_column() {
    let rubric = rubric("Task", &["D1", "D2", "D3"]);
    // Exactly long enough for the total score
    let student = row(&["", "gina", "1", "a", "2", "b", "3", "c", "6"]);

    let doc = render_student_document(&student, 4, &rubric).unwrap();
    assert_eq!(
        doc,
        "Comments:\n\nTask1: a\n\nTask2: b\n\nTask3: c\n\nScores:\n\tTask1: 1\tTask2: 2\tTask3: 3\n\nTotal Score: 6"
    );
}

#[test]
fn test_scores_and_total_are_not_defaulted() {
    let rubric = rubric("Task", &["D1"]);
    let student = row(&["", "hank", "", "", ""]);

    let doc = render_student_document(&student, 2, &rubric).unwrap();
    assert!(doc.ends_with("Scores:\n\tTask1: \n\nTotal Score: "));
}

// ═══════════════════════════════════════════════════════════════════════════
// INCOMPLETE ROWS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_three_criteria_four_cells_is_incomplete() {
    let rubric = rubric("Task", &["D1", "D2", "D3"]);
    let student = row(&["", "ivan", "5", "ok"]);

    match render_student_document(&student, 6, &rubric) {
        Err(GradeError::IncompleteRow { student, row, .. }) => {
            assert_eq!(student, "ivan");
            assert_eq!(row, 6);
        }
        other => panic!("Expected IncompleteRow, got {:?}", other),
    }
}

#[test]
fn test_incomplete_row_error_names_the_student() {
    let rubric = rubric("Task", &["D1", "D2"]);
    let student = row(&["", "judy", "5", "ok", "4", "fine"]);

    let err = render_student_document(&student, 3, &rubric).unwrap_err();
    assert!(err.is_row_error());
    let msg = err.to_string();
    assert!(msg.contains("judy"), "message was: {}", msg);
    assert!(msg.contains("total score"), "message was: {}", msg);
}

#[test]
fn test_incomplete_row_without_id() {
    let rubric = rubric("Task", &["D1"]);

    let err = render_student_document(&row(&[]), 12, &rubric).unwrap_err();
    assert!(err.to_string().contains("unknown student"));
}
