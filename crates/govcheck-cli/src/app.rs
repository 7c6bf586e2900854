//! CLI Application logic

use std::fmt::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use govcheck_core::{check_file, CheckError, Finding};

/// First line of every report
pub const REPORT_HEADING: &str = "--- GOV.UK Style & Content Findings ---";

#[derive(Parser)]
#[command(name = "govcheck")]
#[command(author, version, about = "Check HTML and DOCX content against the GOV.UK style guide", long_about = None)]
struct Cli {
    /// HTML (.htm, .html) or Word (.docx) file to check
    input: PathBuf,
}

/// Run the CLI application
pub fn run_cli() -> Result<()> {
    // RUST_LOG wins; warnings only when it is unset
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    check_command(&cli.input)
}

/// Check a file and print the report
///
/// A missing file or unsupported extension prints a single line and is not
/// an error. Content that cannot be parsed is.
pub fn check_command(input: &Path) -> Result<()> {
    match check_file(input) {
        Ok(findings) => {
            info!(path = %input.display(), findings = findings.len(), "check complete");
            print!("{}", render_report(&findings));
            Ok(())
        }
        Err(CheckError::Input(err)) => {
            println!("{}", err);
            Ok(())
        }
        Err(err) => {
            Err(anyhow::Error::new(err)).with_context(|| format!("Failed to parse {}", input.display()))
        }
    }
}

/// Render findings as the plain-text report
pub fn render_report(findings: &[Finding]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}\n", REPORT_HEADING);
    for finding in findings {
        let _ = writeln!(out, "{}", finding);
    }
    if findings.is_empty() {
        out.push_str("No issues found.\n");
    }
    let _ = writeln!(out, "\nTotal findings: {}", findings.len());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_one_input() {
        assert!(Cli::try_parse_from(["govcheck"]).is_err());
        assert!(Cli::try_parse_from(["govcheck", "a.html", "b.html"]).is_err());

        let cli = Cli::try_parse_from(["govcheck", "guide.docx"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("guide.docx"));
    }

    #[test]
    fn test_render_report_with_findings() {
        let findings = vec![
            Finding::bullet("List may be missing a lead-in sentence."),
            Finding::style("Slash '/' found in text."),
        ];
        assert_eq!(
            render_report(&findings),
            "\n--- GOV.UK Style & Content Findings ---\n\n\
             BULLET: List may be missing a lead-in sentence.\n\
             STYLE: Slash '/' found in text.\n\
             \nTotal findings: 2\n"
        );
    }

    #[test]
    fn test_render_report_empty() {
        assert_eq!(
            render_report(&[]),
            "\n--- GOV.UK Style & Content Findings ---\n\nNo issues found.\n\nTotal findings: 0\n"
        );
    }

    #[test]
    fn test_check_command_input_errors_are_not_failures() {
        assert!(check_command(Path::new("/no/such/file.html")).is_ok());
    }

    #[test]
    fn test_check_command_parse_error_has_context() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, "not a zip").unwrap();

        let err = check_command(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse "));
    }
}
