//! Batch command - runs the generate pipeline for every control-file row.

use std::path::Path;

use anyhow::Result;
use sheet_parser::read_control_file;
use tracing::{info, warn};

use super::generate;

/// Runs the batch command.
///
/// Each control row names a specimen directory with its STL, data workbook
/// and per-specimen options. A failing specimen is logged and skipped; the
/// remaining rows still run.
///
/// # Errors
///
/// Returns an error if the control workbook itself cannot be read.
pub fn run(control: &Path) -> Result<()> {
    let entries = read_control_file(control)?;
    info!(
        specimens = entries.len(),
        "Loaded control file {}",
        control.display()
    );

    let mut written = 0;
    let mut failed = 0;
    for entry in &entries {
        info!("Processing {}", entry.base_path);

        let base = Path::new(&entry.base_path);
        let stl = base.join(&entry.stl_file);
        let data = base.join(&entry.data_file);
        match generate::run(
            &stl,
            &data,
            &entry.sheet_name,
            entry.scale_radius,
            entry.cylinder_r_max,
            entry.rev_arrows,
        ) {
            Ok(()) => written += 1,
            Err(e) => {
                warn!("Failed to process {}: {e:#}", entry.base_path);
                failed += 1;
            }
        }
    }

    info!("Batch complete: {written} written, {failed} failed");
    Ok(())
}
