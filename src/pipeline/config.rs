//! Pipeline configuration.

use std::path::{Path, PathBuf};

use crate::ffd::{FfdLayout, FfdResolution};
use crate::meshing::MeshLevel;
use crate::structures::{ElementOrder, WingboxLevel};

/// What the pipeline generates and where.
///
/// The default configuration produces the full benchmark archive: both
/// FFD layouts at all three resolutions, all five CFD mesh levels, and
/// all wingbox level/order combinations.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Output directory, created if missing.
    pub output_dir: PathBuf,
    /// Chordwise cells of the OML visualization surface.
    pub oml_n_chord: usize,
    /// Spanwise cells of the OML visualization surface.
    pub oml_n_span: usize,
    /// Chordwise cells of the S1-family CFD surface; must be a multiple
    /// of 4 so every level's coarsening is exact.
    pub surface_n_chord: usize,
    /// Spanwise cells of the S1-family CFD surface; same multiple-of-4
    /// requirement.
    pub surface_n_span: usize,
    /// FFD layouts to fit.
    pub ffd_layouts: Vec<FfdLayout>,
    /// FFD resolutions per layout.
    pub ffd_resolutions: Vec<FfdResolution>,
    /// CFD mesh levels to emit surfaces and extrusion options for.
    pub mesh_levels: Vec<MeshLevel>,
    /// Wingbox refinement levels.
    pub wingbox_levels: Vec<WingboxLevel>,
    /// Wingbox element orders per level.
    pub element_orders: Vec<ElementOrder>,
    /// Print per-step progress lines.
    pub verbose: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            oml_n_chord: 96,
            oml_n_span: 48,
            surface_n_chord: 128,
            surface_n_span: 64,
            ffd_layouts: FfdLayout::all().to_vec(),
            ffd_resolutions: FfdResolution::all().to_vec(),
            mesh_levels: MeshLevel::all().to_vec(),
            wingbox_levels: WingboxLevel::all().to_vec(),
            element_orders: ElementOrder::all().to_vec(),
            verbose: false,
        }
    }
}

impl PipelineConfig {
    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the OML visualization surface cell counts.
    pub fn with_oml_sizing(mut self, n_chord: usize, n_span: usize) -> Self {
        self.oml_n_chord = n_chord;
        self.oml_n_span = n_span;
        self
    }

    /// Set the S1-family CFD surface cell counts.
    pub fn with_surface_sizing(mut self, n_chord: usize, n_span: usize) -> Self {
        self.surface_n_chord = n_chord;
        self.surface_n_span = n_span;
        self
    }

    /// Select the FFD layouts and resolutions.
    pub fn with_ffd(mut self, layouts: Vec<FfdLayout>, resolutions: Vec<FfdResolution>) -> Self {
        self.ffd_layouts = layouts;
        self.ffd_resolutions = resolutions;
        self
    }

    /// Select the CFD mesh levels.
    pub fn with_mesh_levels(mut self, levels: Vec<MeshLevel>) -> Self {
        self.mesh_levels = levels;
        self
    }

    /// Select the wingbox levels and element orders.
    pub fn with_wingbox(mut self, levels: Vec<WingboxLevel>, orders: Vec<ElementOrder>) -> Self {
        self.wingbox_levels = levels;
        self.element_orders = orders;
        self
    }

    /// Enable or disable progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_full_archive() {
        let config = PipelineConfig::default();
        assert_eq!(config.ffd_layouts.len(), 2);
        assert_eq!(config.ffd_resolutions.len(), 3);
        assert_eq!(config.mesh_levels.len(), 5);
        assert_eq!(config.wingbox_levels.len(), 3);
        assert_eq!(config.element_orders.len(), 3);
        assert_eq!(config.surface_n_chord % 4, 0);
        assert_eq!(config.surface_n_span % 4, 0);
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_output_dir("/tmp/archive")
            .with_surface_sizing(64, 32)
            .with_verbose(true);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/archive"));
        assert_eq!(config.surface_n_chord, 64);
        assert!(config.verbose);
    }
}
