pub mod config;
pub mod engine;
pub mod error;
pub mod html;
pub mod input;
pub mod models;
pub mod report;
pub mod validate;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use config::ReportConfig;
use error::{ReportError, Result};
use report::{ClientSummary, Report};

/// Read a client document from `reader` and write its HTML report to `writer`
pub fn process_client<R: Read, W: Write>(mut reader: R, writer: W) -> Result<Report> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let client = input::parse_client(&content)?;
    let report = report::build_report(&client);

    html::render_html(&report, writer)?;

    Ok(report)
}

/// Generate the report for the client document at `input_path`.
///
/// Nothing is written unless the whole document is valid. Returns the client
/// header so the caller can confirm which report was produced.
pub fn generate_report(input_path: &Path, config: &ReportConfig) -> Result<ClientSummary> {
    let client = input::load_client(input_path)?;
    let report = report::build_report(&client);

    let output_error = |source: std::io::Error| ReportError::OutputUnwritable {
        path: config.output_path.clone(),
        source,
    };

    let file = File::create(&config.output_path).map_err(output_error)?;
    html::render_html(&report, BufWriter::new(file)).map_err(output_error)?;

    Ok(report.header)
}
