use crate::config::GradeConfig;
use crate::core::{grade_rows, locate_rubric};
use crate::error::GradeResult;
use crate::excel::SheetReader;
use crate::types::{BatchReport, RowFailure};
use crate::writer::AttachmentWriter;
use colored::Colorize;

/// Execute the grade command
///
/// Reads the sheet, finds both anchors, then recreates the output folder and
/// writes one feedback file per student row. Anything that fails before the
/// first row is fatal; row failures are printed and counted in the report.
pub fn grade(config: &GradeConfig) -> GradeResult<BatchReport> {
    println!("{}", "📝 Gradesheet - Writing student feedback".bold().green());
    println!("   File:   {}", config.input.display());
    println!("   Sheet:  {}", config.sheet_name);
    println!("   Output: {}\n", config.output_dir.display());

    let grid = SheetReader::new(&config.input).read_grid(&config.sheet_name)?;
    let rubric = locate_rubric(&grid, config.label_policy)?;

    println!(
        "   Rubric: {} ({} criteria)\n",
        rubric.field_type.bright_blue().bold(),
        rubric.criteria()
    );

    let writer = AttachmentWriter::recreate(&config.output_dir)?;
    let report = grade_rows(&grid, &rubric, &writer);

    for failure in &report.failures {
        print_failure(failure);
    }
    if !report.failures.is_empty() {
        println!();
    }

    print_summary(&report, &writer);
    Ok(report)
}

fn print_failure(failure: &RowFailure) {
    let who = failure.student.as_deref().unwrap_or("no id");
    println!(
        "   {} row {} ({}): {}",
        "❌".red(),
        failure.row,
        who.yellow(),
        failure.error
    );
}

fn print_summary(report: &BatchReport, writer: &AttachmentWriter) {
    println!(
        "{}",
        format!(
            "✅ Wrote {} feedback files to {}",
            report.written.len(),
            writer.dir().display()
        )
        .bold()
        .green()
    );

    if !report.is_clean() {
        println!(
            "{}",
            format!(
                "⚠️  Skipped {} of {} rows",
                report.failures.len(),
                report.rows_seen()
            )
            .yellow()
        );
    }
}
