use crate::domain::card_number::{CardNumber, Normalization};
use crate::domain::issuer::Issuer;
use crate::domain::outcome::{FailureKind, ValidationOutcome};
use crate::error::Result;
use crate::interfaces::csv::number_reader::CardRecord;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Valid,
    Invalid,
}

/// One output row. The card number only ever appears masked.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct VerdictRecord {
    pub id: Option<String>,
    pub card: Option<String>,
    pub status: VerdictStatus,
    pub issuer: Option<Issuer>,
    pub test_number: Option<bool>,
    pub failure: Option<FailureKind>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

impl VerdictRecord {
    pub fn new(record: &CardRecord, outcome: &ValidationOutcome) -> Self {
        // Masking is for display only, so it never rejects characters.
        let card = record
            .number
            .as_deref()
            .and_then(|raw| CardNumber::parse(raw, Normalization::Lenient).ok())
            .map(|number| number.masked());

        let (status, test_number) = match outcome {
            ValidationOutcome::Valid(details) => (VerdictStatus::Valid, Some(details.test_number)),
            ValidationOutcome::Invalid(_) => (VerdictStatus::Invalid, None),
        };

        let rejection = outcome.rejection();
        Self {
            id: record.id.clone(),
            card,
            status,
            issuer: outcome.issuer(),
            test_number,
            failure: outcome.kind(),
            reason: rejection.map(|r| r.reason().to_string()),
            message: rejection.map(|r| r.message().to_string()),
        }
    }
}

/// Writes validation verdicts as CSV.
pub struct VerdictWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> VerdictWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_verdict(&mut self, record: &CardRecord, outcome: &ValidationOutcome) -> Result<()> {
        self.writer.serialize(VerdictRecord::new(record, outcome))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
