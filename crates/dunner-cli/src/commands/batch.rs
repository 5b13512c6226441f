//! Batch command - extract fields from every invoice in a directory.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use dunner_core::{ExtractionDraft, HeuristicInvoiceParser};

use super::{extract_draft, request_for};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory containing *.pdf / *.txt files
    #[arg(required = true)]
    input: PathBuf,

    /// Locale hint for date parsing (e.g. "de", "en-US")
    #[arg(short, long)]
    locale: Option<String>,

    /// Output file, one JSON object per line (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct BatchRecord {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    draft: Option<ExtractionDraft>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    if !args.input.is_dir() {
        anyhow::bail!("Not a directory: {}", args.input.display());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in ["*.pdf", "*.txt"] {
        let full = args.input.join(pattern);
        for entry in glob::glob(&full.to_string_lossy())? {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => warn!(error = %e, "unreadable directory entry"),
            }
        }
    }
    files.sort();

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };

    let parser = HeuristicInvoiceParser::new();
    let mut extracted = 0usize;

    for path in &files {
        // One bad file must not abort the run.
        let draft = match request_for(path, args.locale.as_deref()) {
            Ok(request) => extract_draft(&parser, &request),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping file");
                None
            }
        };

        if draft.is_some() {
            extracted += 1;
        }
        let record = BatchRecord {
            file: path.display().to_string(),
            draft,
        };
        writeln!(writer, "{}", serde_json::to_string(&record)?)?;
    }

    info!(total = files.len(), extracted, "batch finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_record_serialization() {
        let record = BatchRecord {
            file: "a.txt".to_string(),
            draft: None,
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"file":"a.txt"}"#);
    }
}
