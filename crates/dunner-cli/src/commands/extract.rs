//! Extract command - pull fields from a single invoice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use dunner_core::{ExtractionDraft, HeuristicInvoiceParser};

use super::{extract_draft, request_for};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Locale hint for date parsing (e.g. "de", "en-US")
    #[arg(short, long)]
    locale: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let parser = HeuristicInvoiceParser::new();
    let request = request_for(&args.input, args.locale.as_deref())?;
    let draft = extract_draft(&parser, &request);

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&draft)?,
        OutputFormat::Text => render_text(draft.as_ref()),
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render_text(draft: Option<&ExtractionDraft>) -> String {
    let Some(draft) = draft else {
        return style("no fields extracted").yellow().to_string();
    };

    let mut out = String::new();
    let mut field = |label: &str, value: &Option<String>| {
        if let Some(value) = value {
            out.push_str(&format!("{:<16} {}\n", style(label).bold(), value));
        }
    };

    field("Invoice no.", &draft.invoice_number);
    field("Amount", &draft.amount);
    field("Currency", &draft.currency);
    field(
        "Date",
        &draft.invoice_date.map(|d| d.format("%Y-%m-%d").to_string()),
    );
    field("Description", &draft.description);
    field("Company", &draft.debtor_company);
    field("Street", &draft.debtor_street);
    field("Postal code", &draft.debtor_postal_code);
    field("City", &draft.debtor_city);
    field("Contact", &draft.debtor_contact_name);
    field("Email", &draft.debtor_contact_email);
    field("Phone", &draft.debtor_contact_phone);
    out
}
