//! Extract command - parse contact data from a single OCR text dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use vizit_core::card::{CardParser, ContactParser};
use vizit_core::models::contact::ContactRecord;
use vizit_core::models::ocr::OcrOutput;
use vizit_core::note;

use super::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file with raw OCR text, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List fields the extractor could not determine
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON record
    Json,
    /// Plain text summary
    Text,
    /// Markdown note (the persistence template)
    Note,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    let ocr = OcrOutput::new(text);

    // Reject recognition noise before extraction is attempted.
    let usable = ocr.usable_text(config.ocr.min_text_length)?;

    info!(
        "Extracting contact data from {} characters",
        usable.chars().count()
    );

    let parser = CardParser::new().with_role_keywords(&config.extraction.extra_role_keywords);
    let record = parser.parse(usable);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        let path = resolve_output_path(output_path, &record, args.format)?;
        fs::write(&path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing {
        let missing = record.missing_fields();
        if missing.is_empty() {
            println!("{} All fields extracted", style("✓").green());
        } else {
            println!(
                "{} Not determined: {}",
                style("ℹ").blue(),
                missing.join(", ")
            );
        }
    }

    Ok(())
}

fn read_input(input: &PathBuf) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        debug!("Read {} bytes from stdin", text.len());
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

/// A directory output gets a generated note file name; that only makes
/// sense for the note format.
fn resolve_output_path(
    output: &PathBuf,
    record: &ContactRecord,
    format: OutputFormat,
) -> anyhow::Result<PathBuf> {
    if !output.is_dir() {
        return Ok(output.clone());
    }

    match format {
        OutputFormat::Note => {
            let name = note::note_file_name(record, chrono::Local::now().date_naive());
            Ok(output.join(name))
        }
        _ => anyhow::bail!(
            "Output {} is a directory; pass a file path for this format",
            output.display()
        ),
    }
}

pub fn format_record(record: &ContactRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(format_text(record)),
        OutputFormat::Note => Ok(note::render_note(record)),
    }
}

fn format_text(record: &ContactRecord) -> String {
    let line = |value: &Option<String>| -> String {
        value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
    };

    let mut out = String::new();
    out.push_str(&format!("Full name: {}\n", line(&record.full_name)));
    out.push_str(&format!("Company:   {}\n", line(&record.company)));
    out.push_str(&format!("Position:  {}\n", line(&record.position)));
    out.push_str(&format!("Phone:     {}\n", line(&record.phone)));
    out.push_str(&format!("Email:     {}\n", line(&record.email)));
    out.push_str(&format!("Address:   {}\n", line(&record.address)));
    out.push_str(&format!("Website:   {}\n", line(&record.website)));
    out
}
