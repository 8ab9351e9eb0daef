//! Spreadsheet ingestion for muscle coordinate and force data.
//!
//! This crate wraps the `calamine` library to read specimen workbooks and
//! batch control workbooks into the shared structs consumed by the script
//! writer. Rows deserialize through the sheet's header row, so column order
//! does not matter.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, RangeDeserializerBuilder, Reader, open_workbook_auto};
use muscle_structs::{ControlEntry, MuscleRecord};
use serde::de::DeserializeOwned;

/// Reads every muscle row from the named worksheet of a workbook.
///
/// # Errors
///
/// Returns an error if the workbook cannot be opened, the sheet does not
/// exist, or a row does not match the expected columns.
pub fn read_muscle_sheet(path: &Path, sheet_name: &str) -> Result<Vec<MuscleRecord>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;
    let range = workbook
        .worksheet_range(sheet_name)
        .with_context(|| format!("No sheet named {sheet_name:?} in {}", path.display()))?;
    rows_from_range(&range)
        .with_context(|| format!("Bad muscle row in {} sheet {sheet_name:?}", path.display()))
}

/// Reads the specimen list from the first worksheet of a control workbook.
///
/// # Errors
///
/// Returns an error if the workbook cannot be opened, has no worksheets, or
/// a row does not match the expected columns.
pub fn read_control_file(path: &Path) -> Result<Vec<ControlEntry>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open control file {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("No worksheets in {}", path.display()))?
        .with_context(|| format!("Failed to read control sheet in {}", path.display()))?;
    rows_from_range(&range)
        .with_context(|| format!("Bad control row in {}", path.display()))
}

/// Keeps only the rows whose `ID` column matches the specimen prefix.
#[must_use]
pub fn records_for_specimen(records: &[MuscleRecord], id: &str) -> Vec<MuscleRecord> {
    records.iter().filter(|r| r.id == id).cloned().collect()
}

/// Deserializes every data row of a range through its header row.
fn rows_from_range<T: DeserializeOwned>(range: &Range<Data>) -> Result<Vec<T>> {
    let rows = RangeDeserializerBuilder::new()
        .from_range(range)?
        .collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}
