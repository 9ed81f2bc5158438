//! CLI command for exporting entered data
//!
//! Writes the revenue and expense items as a spreadsheet (the default), as
//! CSV, or as a JSON report snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::{BusinessPaths, Settings};
use crate::error::{BusinessError, BusinessResult};
use crate::export::{export_report_json, ReportExporter};
use crate::services::ReportService;
use crate::session::Session;

use super::input::ItemArgs;

/// Export format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook with Revenue and Expenses sheets
    #[default]
    Xlsx,
    /// Single CSV table with a Section column
    Csv,
    /// JSON snapshot including totals
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub items: ItemArgs,

    /// Output file path (default: the configured file name in the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(
    paths: &BusinessPaths,
    settings: &Settings,
    args: ExportArgs,
) -> BusinessResult<()> {
    let session = args.items.into_session()?;
    let service = ReportService::new(&session, settings);

    let output = match args.output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            service
                .default_export_path(paths)
                .with_extension(args.format.extension())
        }
    };

    match args.format {
        ExportFormat::Xlsx => {
            let bytes = service.export_to(&ReportExporter::xlsx(), &output)?;
            println!("Workbook exported to: {} ({} bytes)", output.display(), bytes);
        }
        ExportFormat::Csv => {
            service.export_to(&ReportExporter::csv(), &output)?;
            println!("CSV exported to: {}", output.display());
        }
        ExportFormat::Json => {
            write_json(&session, settings, &output, args.pretty)?;
            println!("Report snapshot exported to: {}", output.display());
        }
    }

    println!(
        "  {} revenue items, {} expense items",
        session.revenue().len(),
        session.expenses().len()
    );

    Ok(())
}

fn write_json(
    session: &Session,
    settings: &Settings,
    output: &Path,
    pretty: bool,
) -> BusinessResult<()> {
    let mut buffer = Vec::new();
    export_report_json(
        session.revenue(),
        session.expenses(),
        &settings.currency_code,
        &mut buffer,
        pretty,
    )?;

    fs::write(output, &buffer).map_err(|e| {
        BusinessError::Export(format!("Failed to write file {}: {}", output.display(), e))
    })
}
