//! Batch command - process many OCR text dumps at once.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use vizit_core::card::{CardParser, ContactParser};
use vizit_core::models::contact::ContactRecord;
use vizit_core::models::ocr::OcrOutput;
use vizit_core::note;

use super::extract::{OutputFormat, format_record};
use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (OCR text dumps)
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single text dump.
struct ProcessResult {
    path: PathBuf,
    record: Option<ContactRecord>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = CardParser::new().with_role_keywords(&config.extraction.extra_role_keywords);

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match process_single_file(&path, &parser, config.ocr.min_text_length) {
            Ok(record) => {
                results.push(ProcessResult {
                    path,
                    record: Some(record),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        record: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write per-file outputs
    if let Some(ref output_dir) = args.output_dir {
        for result in &results {
            let Some(record) = &result.record else { continue };

            let output_path = output_dir.join(output_file_name(result, record, args.format));
            let content = format_record(record, args.format)?;
            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!();
    println!(
        "{} Processed {} files in {:?} ({} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        failed
    );

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    parser: &CardParser,
    min_text_length: usize,
) -> anyhow::Result<ContactRecord> {
    let text = fs::read_to_string(path)?;
    let ocr = OcrOutput::new(text);
    let usable = ocr.usable_text(min_text_length)?;
    Ok(parser.parse(usable))
}

/// Notes get the generated name-plus-date file name; other formats keep
/// the input file stem.
fn output_file_name(result: &ProcessResult, record: &ContactRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Note => note::note_file_name(record, chrono::Local::now().date_naive()),
        OutputFormat::Json | OutputFormat::Text => {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("card");
            let extension = match format {
                OutputFormat::Json => "json",
                _ => "txt",
            };
            format!("{}.{}", stem, extension)
        }
    }
}

fn write_summary(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "file", "full_name", "company", "position", "phone", "email", "address", "website",
        "error",
    ])?;

    for result in results {
        let record = result.record.clone().unwrap_or_default();
        let field = |v: &Option<String>| v.clone().unwrap_or_default();

        wtr.write_record([
            result.path.display().to_string(),
            field(&record.full_name),
            field(&record.company),
            field(&record.position),
            field(&record.phone),
            field(&record.email),
            field(&record.address),
            field(&record.website),
            result.error.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
