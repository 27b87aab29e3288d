use clap::Parser;
use gradesheet::cli;
use gradesheet::config::{GradeConfig, DEFAULT_INPUT};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gradesheet")]
#[command(about = "Write one plain-text feedback file per student from a grading spreadsheet")]
#[command(long_about = "Gradesheet - per-student feedback files from a grading spreadsheet

Reads 'Sheet1' of the workbook and writes attachments/<student>.txt for every
row below the header. The sheet must contain, anywhere in the grid:

  Default Comments:    with one default comment per criterion in the
                       column to its right, starting one row down
  Rubric Field Type:   with the criterion prefix (e.g. Task, Q) below it

Student rows: column B is the student id, then a score/comment column pair
per criterion, then the total score and an optional overall comment.

The attachments folder is deleted and recreated on every run. Rows that
can't be rendered are reported and skipped.

EXAMPLES:
  gradesheet                          # Reads ProjectGrades.xlsx
  gradesheet -f marks/Assignment2.xlsx")]
#[command(version)]
struct Cli {
    /// Filepath for the grades spreadsheet
    #[arg(short = 'f', long = "file", default_value = DEFAULT_INPUT)]
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradesheet=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli::grade(&GradeConfig::new(cli.file)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌ Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
