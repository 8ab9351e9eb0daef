//! Generate command - writes the MEL script for one specimen.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use mel_writer::{ScriptParams, write_script};
use sheet_parser::{read_muscle_sheet, records_for_specimen};
use tracing::info;

/// Runs the generate command.
///
/// The specimen ID is the STL file stem; the script lands next to the STL
/// as `<stem>.mel`.
///
/// # Errors
///
/// Returns an error if the workbook cannot be read, no rows match the
/// specimen, or the script cannot be written.
pub fn run(
    stl: &Path,
    data: &Path,
    sheet: &str,
    scale_radius: bool,
    max_radius: f64,
    rev_arrows: bool,
) -> Result<()> {
    let prefix = stl
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Cannot derive a specimen prefix from {}", stl.display()))?
        .to_string();
    let out_path = stl.with_file_name(format!("{prefix}.mel"));

    let records = read_muscle_sheet(data, sheet)?;
    let records = records_for_specimen(&records, &prefix);
    if records.is_empty() {
        bail!("No rows with ID {prefix:?} in {}", data.display());
    }

    // Maya needs the full path to the STL.
    let stl_abs = std::path::absolute(stl)
        .with_context(|| format!("Cannot resolve {}", stl.display()))?;

    info!(
        specimen = %prefix,
        muscles = records.len(),
        "Writing {}",
        out_path.display()
    );

    let script_name = out_path.display().to_string();
    let params = ScriptParams {
        script_name: &script_name,
        stl_path: &stl_abs,
        namespace: &prefix,
        scale_radius,
        cylinder_r_max: max_radius,
        rev_arrows,
    };

    let file = File::create(&out_path)
        .with_context(|| format!("Failed to create {}", out_path.display()))?;
    let mut out = BufWriter::new(file);
    write_script(&mut out, &params, &records)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    Ok(())
}
