use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::LoanApplication;

/// Error raised while importing a CSV of applications.
#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("unable to read applications file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed applications csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Read applications from a CSV file on disk.
///
/// Headers match the [`LoanApplication`] field names; enum columns carry the
/// form's display labels (`Owned`, `Education`, `Unsecured`, ...).
pub fn applications_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<LoanApplication>, BatchImportError> {
    let file = File::open(path)?;
    applications_from_reader(file)
}

/// Read applications from any CSV source, trimming stray whitespace.
pub fn applications_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<LoanApplication>, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut applications = Vec::new();
    for row in csv_reader.deserialize::<LoanApplication>() {
        applications.push(row?);
    }

    Ok(applications)
}
