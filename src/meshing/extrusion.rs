//! Hyperbolic extrusion option sets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::level::MeshLevel;

/// The option set handed to the hyperbolic volume-mesh extruder,
/// serialized as `wing_vol_<label>.json`.
///
/// Field names follow the extruder's option dictionary, so the JSON can
/// be loaded unchanged on the other side. Per-level fields come from the
/// [`MeshLevel`] schedule; everything else is shared by all levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionOptions {
    // General options
    #[serde(rename = "inputFile")]
    pub input_file: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "unattachedEdgesAreSymmetry")]
    pub unattached_edges_are_symmetry: bool,
    #[serde(rename = "outerFaceBC")]
    pub outer_face_bc: String,
    #[serde(rename = "autoConnect")]
    pub auto_connect: bool,
    #[serde(rename = "BC")]
    pub bc: Map<String, Value>,
    pub families: String,

    // Grid parameters
    #[serde(rename = "N")]
    pub n: usize,
    pub s0: f64,
    #[serde(rename = "marchDist")]
    pub march_dist: f64,
    #[serde(rename = "nConstantStart")]
    pub n_constant_start: usize,
    pub coarsen: usize,

    // Pseudo-grid parameters
    pub ps0: f64,
    #[serde(rename = "pGridRatio")]
    pub p_grid_ratio: f64,
    #[serde(rename = "cMax")]
    pub c_max: f64,

    // Smoothing parameters
    #[serde(rename = "epsE")]
    pub eps_e: f64,
    #[serde(rename = "epsI")]
    pub eps_i: f64,
    pub theta: f64,
    #[serde(rename = "volCoef")]
    pub vol_coef: f64,
    #[serde(rename = "volBlend")]
    pub vol_blend: f64,
    #[serde(rename = "volSmoothIter")]
    pub vol_smooth_iter: usize,
    pub kspreltol: f64,

    // Linear solver parameters
    #[serde(rename = "kspRelTol")]
    pub ksp_rel_tol: f64,
    #[serde(rename = "kspMaxIts")]
    pub ksp_max_its: usize,
    #[serde(rename = "kspSubspaceSize")]
    pub ksp_subspace_size: usize,
}

impl ExtrusionOptions {
    /// The archived option set for one level of the schedule.
    pub fn for_level(level: MeshLevel, surface_file: &str) -> Self {
        Self {
            input_file: surface_file.to_string(),
            file_type: "Plot3D".to_string(),
            unattached_edges_are_symmetry: true,
            outer_face_bc: "farfield".to_string(),
            auto_connect: true,
            bc: Map::new(),
            families: "wall".to_string(),
            n: level.n_grid(),
            s0: level.s0(),
            march_dist: level.march_dist(),
            n_constant_start: level.n_constant_start(),
            coarsen: level.coarsen(),
            ps0: -1.0,
            p_grid_ratio: -1.0,
            c_max: 1.0,
            eps_e: 1.0,
            eps_i: 2.0,
            theta: 3.0,
            vol_coef: 0.25,
            vol_blend: 1e-4,
            vol_smooth_iter: 100,
            kspreltol: 1e-8,
            ksp_rel_tol: 1e-10,
            ksp_max_its: 1500,
            ksp_subspace_size: 50,
        }
    }

    /// JSON file name for the level, e.g. `wing_vol_L2.json`.
    pub fn file_name(level: MeshLevel) -> String {
        format!("{}.json", level.mesh_name())
    }
}
