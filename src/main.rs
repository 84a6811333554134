use cardcheck::application::engine::ValidationEngine;
use cardcheck::config::{PolicyOverrides, load_policy};
use cardcheck::domain::card_number::Normalization;
use cardcheck::domain::issuer::Issuer;
use cardcheck::domain::policy::ValidationPolicy;
use cardcheck::interfaces::csv::number_reader::NumberReader;
use cardcheck::interfaces::csv::verdict_writer::VerdictWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file with a `number` column and an optional `id` column
    input: PathBuf,

    /// JSON policy file. Command-line flags replace the settings it makes.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Accept published test card numbers
    #[arg(long, conflicts_with = "deny_test_numbers")]
    allow_test_numbers: bool,

    /// Reject published test card numbers
    #[arg(long)]
    deny_test_numbers: bool,

    /// Issuer to accept (repeatable or comma separated). Replaces the policy
    /// file's list; all issuers are accepted when neither sets one.
    #[arg(long = "issuer", value_delimiter = ',')]
    issuers: Vec<Issuer>,

    /// How non-digit characters are handled: strict, separators or lenient
    #[arg(long)]
    normalization: Option<Normalization>,

    /// Message for numbers failing the Luhn checksum
    #[arg(long)]
    checksum_message: Option<String>,

    /// Message for numbers rejected by issuer or test-number policy
    #[arg(long)]
    policy_message: Option<String>,

    /// Message for input that is not a card number at all
    #[arg(long)]
    malformed_message: Option<String>,
}

impl Cli {
    fn resolve_policy(&self) -> Result<ValidationPolicy> {
        let base = match &self.policy {
            Some(path) => load_policy(path).into_diagnostic()?,
            None => ValidationPolicy::default(),
        };
        let overrides = PolicyOverrides {
            allow_test_numbers: match (self.allow_test_numbers, self.deny_test_numbers) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            issuers: self.issuers.clone(),
            normalization: self.normalization,
            checksum_failure_message: self.checksum_message.clone(),
            policy_failure_message: self.policy_message.clone(),
            malformed_input_message: self.malformed_message.clone(),
        };
        Ok(overrides.apply(base))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = ValidationEngine::new(cli.resolve_policy()?);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = NumberReader::new(file);

    let stdout = io::stdout();
    let mut writer = VerdictWriter::new(stdout.lock());

    let (mut valid, mut invalid) = (0usize, 0usize);
    for record_result in reader.records() {
        match record_result {
            Ok(record) => {
                let outcome = engine.validate(record.number.as_deref());
                if outcome.is_valid() {
                    valid += 1;
                } else {
                    invalid += 1;
                }
                writer.write_verdict(&record, &outcome).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading record: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    tracing::info!(valid, invalid, "validation finished");
    Ok(())
}
