use crate::error::{CardError, Result};
use serde::Deserialize;
use std::io::Read;

/// One input row: an optional caller-side identifier and the raw number.
///
/// An empty `number` field deserializes to `None` and is validated as an
/// absent number.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct CardRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// Streams `id,number` rows out of a CSV source.
///
/// Fields are trimmed, and rows may omit trailing columns.
pub struct NumberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> NumberReader<R> {
    /// Wraps `source`; the first row must be the header.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one `CardRecord` per row. A row that cannot be decoded yields
    /// an error without ending the iteration.
    pub fn records(self) -> impl Iterator<Item = Result<CardRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CardError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, number\n1, 4012888888881881\n2, 4012 8888 8888 1882";
        let reader = NumberReader::new(data.as_bytes());
        let results: Vec<Result<CardRecord>> = reader.records().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.id.as_deref(), Some("1"));
        assert_eq!(first.number.as_deref(), Some("4012888888881881"));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.number.as_deref(), Some("4012 8888 8888 1882"));
    }

    #[test]
    fn test_reader_number_only_column() {
        let data = "number\n4485071359608368";
        let reader = NumberReader::new(data.as_bytes());
        let records: Vec<CardRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(
            records,
            vec![CardRecord {
                id: None,
                number: Some("4485071359608368".to_string()),
            }]
        );
    }

    #[test]
    fn test_reader_empty_number_is_absent() {
        let data = "id,number\n7,";
        let reader = NumberReader::new(data.as_bytes());
        let record = reader.records().next().unwrap().unwrap();

        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.number, None);
    }
}
