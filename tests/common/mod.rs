use std::io::Error;
use tempfile::NamedTempFile;

/// Writes an `id,number` CSV with one row per number and returns the file.
pub fn write_numbers_csv(numbers: &[&str]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_path(file.path())?;

    wtr.write_record(["id", "number"])?;
    for (i, number) in numbers.iter().copied().enumerate() {
        let id = (i + 1).to_string();
        wtr.write_record([id.as_str(), number])?;
    }

    wtr.flush()?;
    Ok(file)
}

/// Writes raw bytes, for inputs the CSV writer would not produce.
pub fn write_raw_csv(contents: &[u8]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    std::fs::write(file.path(), contents)?;
    Ok(file)
}
