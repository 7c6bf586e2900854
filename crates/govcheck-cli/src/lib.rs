//! govcheck CLI - Command-line interface library
//!
//! Checks one HTML or DOCX file against the GOV.UK style rules and prints
//! the findings.
//!
//! # Library Usage
//!
//! ```ignore
//! use govcheck_cli::{check_command, render_report, run_cli};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or check a single file programmatically
//! check_command(Path::new("guide.html"))?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! govcheck guide.html
//! RUST_LOG=debug govcheck guide.docx
//! ```

pub mod app;

pub use app::{check_command, render_report, run_cli, REPORT_HEADING};
