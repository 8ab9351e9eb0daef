use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One muscle measurement row from a specimen workbook.
///
/// Field names match the workbook column headers so the rows deserialize
/// straight out of the sheet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MuscleRecord {
    /// Specimen identifier, matched against the STL file prefix.
    #[serde(rename = "ID")]
    pub id: String,

    /// Muscle name as recorded in the workbook (e.g. `m_AMES`).
    pub muscle: String,

    /// Origin coordinates.
    pub x_origin: f64,
    pub y_origin: f64,
    pub z_origin: f64,

    /// Insertion coordinates.
    pub x_insertion: f64,
    pub y_insertion: f64,
    pub z_insertion: f64,

    /// Measured force magnitude.
    pub force: f64,
}

impl MuscleRecord {
    /// Point the arrow is anchored at.
    ///
    /// `rev_arrows` keeps the endpoints as recorded; when it is false the
    /// origin and insertion are exchanged so the arrowhead lands on the
    /// opposite end.
    #[must_use]
    pub fn origin(&self, rev_arrows: bool) -> Vector3<f64> {
        if rev_arrows {
            Vector3::new(self.x_origin, self.y_origin, self.z_origin)
        } else {
            Vector3::new(self.x_insertion, self.y_insertion, self.z_insertion)
        }
    }

    /// Point the arrowhead is moved to.
    #[must_use]
    pub fn insertion(&self, rev_arrows: bool) -> Vector3<f64> {
        if rev_arrows {
            Vector3::new(self.x_insertion, self.y_insertion, self.z_insertion)
        } else {
            Vector3::new(self.x_origin, self.y_origin, self.z_origin)
        }
    }

    /// Origin→insertion direction the glyph points along.
    #[must_use]
    pub fn direction(&self, rev_arrows: bool) -> Vector3<f64> {
        self.insertion(rev_arrows) - self.origin(rev_arrows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MuscleRecord {
        MuscleRecord {
            id: "AL_008".to_string(),
            muscle: "m_AMES".to_string(),
            x_origin: 1.0,
            y_origin: 2.0,
            z_origin: 3.0,
            x_insertion: 4.0,
            y_insertion: 6.0,
            z_insertion: 8.0,
            force: 12.5,
        }
    }

    #[test]
    fn endpoints_as_recorded() {
        let r = record();
        assert_eq!(r.origin(true), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(r.insertion(true), Vector3::new(4.0, 6.0, 8.0));
        assert_eq!(r.direction(true), Vector3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn endpoints_swapped() {
        let r = record();
        assert_eq!(r.origin(false), Vector3::new(4.0, 6.0, 8.0));
        assert_eq!(r.insertion(false), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(r.direction(false), Vector3::new(-3.0, -4.0, -5.0));
    }
}
