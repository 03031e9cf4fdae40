use crate::domain::model::{PartOutcome, ReportFormat, RunSummary};
use crate::utils::error::{AocError, Result};
use serde::Serialize;
use std::path::Path;

const CSV_HEADER: [&str; 7] = ["day", "title", "part", "status", "answer", "error", "elapsed_us"];

/// One CSV line per solved (or failed) part.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    day: u8,
    title: &'a str,
    part: u8,
    status: &'static str,
    answer: Option<u64>,
    error: Option<&'a str>,
    elapsed_us: u64,
}

pub fn render(summary: &RunSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(summary)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        ReportFormat::Csv => render_csv(summary),
    }
}

fn render_text(summary: &RunSummary) -> String {
    let mut out = String::from("advent of code 2022\n");

    for day in &summary.days {
        out.push('\n');
        out.push_str(&format!("Day {}: {}\n", day.day, day.title));
        for part in &day.parts {
            let line = match &part.outcome {
                PartOutcome::Solved { answer } => format!("- Part {}: {}\n", part.part, answer),
                PartOutcome::Failed { error } => {
                    format!("- Part {}: error: {}\n", part.part, error)
                }
            };
            out.push_str(&line);
        }
    }

    out
}

fn render_csv(summary: &RunSummary) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for day in &summary.days {
        for part in &day.parts {
            let (status, answer, error) = match &part.outcome {
                PartOutcome::Solved { answer } => ("solved", Some(*answer), None),
                PartOutcome::Failed { error } => ("failed", None, Some(error.as_str())),
            };
            writer.serialize(ReportRow {
                day: day.day.number(),
                title: &day.title,
                part: part.part.number(),
                status,
                answer,
                error,
                elapsed_us: part.elapsed_us,
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AocError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| AocError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Render the summary and write it to `output_path`, or stdout when no path is given.
pub async fn write_report(
    summary: &RunSummary,
    format: ReportFormat,
    output_path: Option<&str>,
) -> Result<()> {
    let rendered = render(summary, format)?;

    match output_path {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, rendered.as_bytes()).await?;
            tracing::info!("📁 Report saved to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
