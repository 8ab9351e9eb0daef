use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use muscle_structs::{MuscleRecord, euler_angles_aligning};
use nalgebra::Vector3;

use crate::dimensions::{ArrowDimensions, dimension_arrows, force_ratio};

/// Timestamp format written into the script header.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Inputs for one specimen's script.
#[derive(Debug, Clone)]
pub struct ScriptParams<'a> {
    /// Script file name written into the header comment.
    pub script_name: &'a str,

    /// Absolute path of the STL surface model to import.
    pub stl_path: &'a Path,

    /// Import namespace for the model (the specimen file prefix).
    pub namespace: &'a str,

    /// Scale cylinder radii to the largest force instead of a fixed radius.
    pub scale_radius: bool,

    /// Radius given to the strongest muscle's cylinder.
    pub cylinder_r_max: f64,

    /// Keep arrowheads on the insertion end; swap endpoints when false.
    pub rev_arrows: bool,
}

/// MEL-safe object name for a muscle: the leading character plus everything
/// after the separator (`m_AMES` → `mAMES`).
#[must_use]
pub fn mel_name(muscle: &str) -> String {
    muscle.chars().take(1).chain(muscle.chars().skip(2)).collect()
}

/// Shading group preset for a muscle, keyed by its name without the leading
/// `m` (`mAMES` → `Color_Presets:AMESSG`).
#[must_use]
pub fn shader_group(name: &str) -> String {
    let key: String = name.chars().skip(1).collect();
    format!("Color_Presets:{key}SG")
}

/// Writes the complete MEL script for one specimen.
///
/// The script imports the shader presets and the surface model, then builds
/// one cylinder-plus-cone arrow per record, anchored at the muscle's origin
/// and pointing at its insertion, with the shaft radius taken from the
/// record's force.
///
/// # Errors
///
/// Returns an error when the record set is empty, when radii cannot be
/// scaled, when a record's endpoints coincide, or on any write failure.
pub fn write_script<W: Write>(
    out: &mut W,
    params: &ScriptParams<'_>,
    records: &[MuscleRecord],
) -> Result<()> {
    let dims = dimension_arrows(records, params.scale_radius, params.cylinder_r_max)?;
    let ratio = force_ratio(records).context("No muscle records to write")?;
    let generated = Local::now().format(TIMESTAMP_FORMAT).to_string();

    write_header(out, params.script_name, &generated, ratio)?;
    write_preamble(out, params.namespace, params.stl_path)?;
    for (record, dim) in records.iter().zip(&dims) {
        write_muscle(out, record, dim, params.rev_arrows)?;
    }
    write_footer(out)?;
    Ok(())
}

fn write_header<W: Write>(out: &mut W, script_name: &str, generated: &str, ratio: f64) -> Result<()> {
    writeln!(out, "// File: {script_name}")?;
    writeln!(out, "// Generated: {generated}")?;
    writeln!(out, "// Note: the ratio of max to min forces is {ratio}.")?;
    writeln!(out)?;
    Ok(())
}

fn write_preamble<W: Write>(out: &mut W, namespace: &str, stl_path: &Path) -> Result<()> {
    writeln!(out, "// Import color shader presets")?;
    writeln!(
        out,
        "file -import -type \"mayaBinary\"  -ignoreVersion -ra true \
         -mergeNamespacesOnClash false -namespace \"Color_Presets\" \
         -options \"v=0;\"  -pr \"Color_Presets.mb\";"
    )?;
    writeln!(out)?;

    writeln!(out, "// Import specimen model")?;
    writeln!(
        out,
        "file -import -type \"STL_ATF\"  -ignoreVersion -ra true \
         -mergeNamespacesOnClash false -namespace \"{namespace}\" -pr \"{}\";",
        stl_path.display()
    )?;
    writeln!(out, "rename polySurface1 stl_model;")?;
    writeln!(out, "select -r stl_model;")?;
    writeln!(out, "hyperShade -assign Color_Presets:Bone;")?;
    writeln!(out, "hide stl_model;")?;
    writeln!(out)?;
    Ok(())
}

/// Writes one muscle's arrow: a circle extruded along the origin→insertion
/// curve for the shaft, and a cone rotated and moved onto the insertion for
/// the head. Both geometry pieces start aligned with `(0, 1, 0)`, so the
/// same rotation triple orients them.
fn write_muscle<W: Write>(
    out: &mut W,
    record: &MuscleRecord,
    dims: &ArrowDimensions,
    rev_arrows: bool,
) -> Result<()> {
    let name = mel_name(&record.muscle);
    let origin = record.origin(rev_arrows);
    let insertion = record.insertion(rev_arrows);

    let angles = euler_angles_aligning(&Vector3::y(), &(insertion - origin)).with_context(|| {
        format!(
            "Degenerate origin/insertion pair for muscle {}",
            record.muscle
        )
    })?;

    let origin_coords = format!("{} {} {}", origin.x, origin.y, origin.z);
    let insertion_coords = format!("{} {} {}", insertion.x, insertion.y, insertion.z);
    let rotations = format!(
        "{} {} {}",
        angle(angles.x),
        angle(angles.y),
        angle(angles.z)
    );

    writeln!(out, "// Muscle {name};")?;
    writeln!(
        out,
        "curve -n curve1 -d 1 -p {origin_coords} -p {insertion_coords} -k 0 -k 1;"
    )?;
    writeln!(
        out,
        "circle -n circ -ch on -o on -c {origin_coords} -nrx 0 -nry 1 -nrz 0 -radius {};",
        dims.cylinder_r
    )?;
    writeln!(out, "rotate -r -pivot {origin_coords} -xyz {rotations} circ;")?;
    writeln!(out, "extrude -n {name}cyl -et 1 -po 0 circ curve1;")?;
    writeln!(
        out,
        "cone -n {name}Cone -po 0 -axis 0 1 0 -r {} -hr {};",
        dims.cone_r, dims.cone_hr
    )?;
    writeln!(out, "rotate -r -xyz {rotations} {name}Cone;")?;
    writeln!(out, "move {insertion_coords} {name}Cone;")?;

    // Drop the scratch construction geometry.
    writeln!(out, "select -r curve1;")?;
    writeln!(out, "doDelete;")?;
    writeln!(out, "select -r circ;")?;
    writeln!(out, "doDelete;")?;

    writeln!(out, "select -r {name}Cone {name}cyl;")?;
    writeln!(out, "hyperShade -assign {};", shader_group(&name))?;
    writeln!(out, "reverseSurface -ch on -rpo on -d 3 {name}cyl;")?;
    writeln!(out)?;
    Ok(())
}

/// atan2 yields IEEE negative zero in axis-aligned cases; collapse it so the
/// script reads `0` rather than `-0`.
fn angle(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

fn write_footer<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "// Unhide stl_model;")?;
    writeln!(out, "showHidden stl_model;")?;
    writeln!(out, "// Group objects for animation;")?;
    Ok(())
}
