use anyhow::{Result, bail};
use muscle_structs::MuscleRecord;

/// Height ratio (`-hr`) given to every arrowhead cone.
pub const CONE_HEIGHT_RATIO: f64 = 2.0;

/// Cylinder and cone sizing for one muscle's arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowDimensions {
    /// Radius of the extruded shaft cylinder.
    pub cylinder_r: f64,

    /// Radius of the arrowhead cone, twice the shaft radius.
    pub cone_r: f64,

    /// Height ratio passed straight to the `cone` command.
    pub cone_hr: f64,
}

/// Sizes each record's arrow.
///
/// With `scale_radius` the shaft radius is the record's share of the largest
/// force in the set, scaled to `cylinder_r_max`, so the strongest muscle gets
/// the full radius. Otherwise every shaft gets half of `cylinder_r_max`.
///
/// # Errors
///
/// Returns an error when `records` is empty, or when scaling is requested
/// and the largest force is not positive.
pub fn dimension_arrows(
    records: &[MuscleRecord],
    scale_radius: bool,
    cylinder_r_max: f64,
) -> Result<Vec<ArrowDimensions>> {
    if records.is_empty() {
        bail!("No muscle records to dimension");
    }
    let max_force = records
        .iter()
        .map(|r| r.force)
        .fold(f64::NEG_INFINITY, f64::max);
    if scale_radius && max_force <= 0.0 {
        bail!("Cannot scale radii to the largest force ({max_force})");
    }

    Ok(records
        .iter()
        .map(|r| {
            let cylinder_r = if scale_radius {
                r.force / max_force * cylinder_r_max
            } else {
                cylinder_r_max / 2.0
            };
            ArrowDimensions {
                cylinder_r,
                cone_r: cylinder_r * 2.0,
                cone_hr: CONE_HEIGHT_RATIO,
            }
        })
        .collect())
}

/// Max-to-min force ratio reported in the script header, rounded to three
/// decimals. `None` for an empty record set.
#[must_use]
pub fn force_ratio(records: &[MuscleRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let max = records
        .iter()
        .map(|r| r.force)
        .fold(f64::NEG_INFINITY, f64::max);
    let min = records.iter().map(|r| r.force).fold(f64::INFINITY, f64::min);
    Some((max / min * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(muscle: &str, force: f64) -> MuscleRecord {
        MuscleRecord {
            id: "AL_008".to_string(),
            muscle: muscle.to_string(),
            x_origin: 0.0,
            y_origin: 0.0,
            z_origin: 0.0,
            x_insertion: 1.0,
            y_insertion: 1.0,
            z_insertion: 1.0,
            force,
        }
    }

    #[test]
    fn scaled_radii_normalize_to_the_largest_force() {
        let records = vec![record("m_A", 4.0), record("m_B", 16.0), record("m_C", 8.0)];
        let dims = dimension_arrows(&records, true, 8.0).unwrap();
        assert_relative_eq!(dims[0].cylinder_r, 2.0);
        assert_relative_eq!(dims[1].cylinder_r, 8.0);
        assert_relative_eq!(dims[2].cylinder_r, 4.0);
        // Cone radius doubles the shaft, height ratio is fixed.
        assert_relative_eq!(dims[1].cone_r, 16.0);
        assert_relative_eq!(dims[1].cone_hr, CONE_HEIGHT_RATIO);
    }

    #[test]
    fn unscaled_radii_use_half_the_maximum() {
        let records = vec![record("m_A", 4.0), record("m_B", 16.0)];
        let dims = dimension_arrows(&records, false, 8.0).unwrap();
        assert_relative_eq!(dims[0].cylinder_r, 4.0);
        assert_relative_eq!(dims[1].cylinder_r, 4.0);
        assert_relative_eq!(dims[0].cone_r, 8.0);
    }

    #[test]
    fn empty_record_set_is_an_error() {
        assert!(dimension_arrows(&[], true, 8.0).is_err());
        assert!(force_ratio(&[]).is_none());
    }

    #[test]
    fn non_positive_forces_cannot_be_scaled() {
        let records = vec![record("m_A", 0.0), record("m_B", -1.0)];
        assert!(dimension_arrows(&records, true, 8.0).is_err());
        // The fixed-radius path does not look at forces.
        assert!(dimension_arrows(&records, false, 8.0).is_ok());
    }

    #[test]
    fn ratio_is_rounded_to_three_decimals() {
        let records = vec![record("m_A", 3.0), record("m_B", 9.0), record("m_C", 7.0)];
        assert_relative_eq!(force_ratio(&records).unwrap(), 3.0);

        let records = vec![record("m_A", 3.0), record("m_B", 10.0)];
        assert_relative_eq!(force_ratio(&records).unwrap(), 3.333);
    }
}
