use serde::{Deserialize, Serialize};

/// One specimen row from the batch control workbook.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlEntry {
    /// Directory holding the specimen's STL and data workbook.
    pub base_path: String,

    /// STL file name, relative to `base_path`.
    #[serde(rename = "stlfile")]
    pub stl_file: String,

    /// Data workbook file name, relative to `base_path`.
    #[serde(rename = "datafile")]
    pub data_file: String,

    /// Worksheet holding the specimen's muscle rows.
    pub sheet_name: String,

    /// Scale cylinder radii to the largest force in the specimen.
    pub scale_radius: bool,

    /// Radius given to the strongest muscle's cylinder.
    pub cylinder_r_max: f64,

    /// Keep arrowheads on the insertion end; swap endpoints when false.
    pub rev_arrows: bool,

    /// Present in existing control workbooks; read but not applied.
    pub rescale_factor: Option<f64>,
}
