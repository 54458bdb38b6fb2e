//! Pipeline runner.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::airfoil::Airfoil;
use crate::ffd::{FfdError, FfdLayout, FfdResolution, Margins, fit_lattice};
use crate::geometry::AircraftGeometry;
use crate::io::bdf::{BdfError, write_bdf};
use crate::io::plot3d::{Plot3dError, write_plot3d};
use crate::io::stl::{StlError, write_stl};
use crate::io::tecplot::{StructuredZone, TecplotError, write_fe_zones, write_structured_zones};
use crate::meshing::{ExtrusionOptions, MeshLevel, SurfaceFamily};
use crate::oml::{OmlError, SpanSpacing, WingLoft};
use crate::specs::{AircraftSpecs, FlightPointSet};
use crate::structures::{
    ElementOrder, MeshQualityReport, WingboxGrid, WingboxLevel, WingboxMesher,
};

use super::config::PipelineConfig;
use super::report::{Artifact, ArtifactKind, PipelineReport};

/// Error type for pipeline runs, aggregating every step's errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Loft error: {0}")]
    Oml(#[from] OmlError),

    #[error("FFD fitting error: {0}")]
    Ffd(#[from] FfdError),

    #[error("Wingbox meshing error: {0}")]
    Mesh(#[from] crate::structures::WingboxMeshError),

    #[error("Plot3D output error: {0}")]
    Plot3d(#[from] Plot3dError),

    #[error("Tecplot output error: {0}")]
    Tecplot(#[from] TecplotError),

    #[error("STL output error: {0}")]
    Stl(#[from] StlError),

    #[error("BDF output error: {0}")]
    Bdf(#[from] BdfError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Surface cells must survive every requested level's coarsening.
    #[error(
        "CFD surface sizing {n_chord}x{n_span} is not a multiple of 4; level coarsening would not be exact"
    )]
    SurfaceSizing { n_chord: usize, n_span: usize },
}

/// The archive generation pipeline.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Generate the archive for one geometry and airfoil.
    ///
    /// The airfoil is applied at every planform section; the loft is
    /// built once and shared by all downstream steps.
    pub fn run(
        &self,
        geometry: &AircraftGeometry,
        airfoil: &Airfoil,
    ) -> Result<PipelineReport, PipelineError> {
        let config = &self.config;
        if config.surface_n_chord % 4 != 0 || config.surface_n_span % 4 != 0 {
            return Err(PipelineError::SurfaceSizing {
                n_chord: config.surface_n_chord,
                n_span: config.surface_n_span,
            });
        }
        fs::create_dir_all(&config.output_dir)?;

        if config.verbose {
            println!("Lofting wing through {} sections", geometry.wing.sections.len());
        }
        let airfoils = vec![airfoil.clone(); geometry.wing.sections.len()];
        let loft = WingLoft::new(&geometry.wing, &airfoils)?;

        let mut report = PipelineReport::default();
        report.artifacts.extend(self.write_oml(&loft)?);
        report.artifacts.extend(self.write_ffd_sweep(geometry, &loft)?);
        report.artifacts.extend(self.write_cfd_surfaces(&loft)?);
        report.artifacts.extend(self.write_wingbox_sweep(geometry, &loft)?);
        report.artifacts.extend(self.write_tables(geometry)?);

        if config.verbose {
            print!("{}", report.summary());
        }
        Ok(report)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(name)
    }

    /// OML surface: Tecplot zone plus an STL triangulation.
    fn write_oml(&self, loft: &WingLoft) -> Result<Vec<Artifact>, PipelineError> {
        let config = &self.config;
        if config.verbose {
            println!(
                "Writing OML surface ({} x {} cells)",
                config.oml_n_chord, config.oml_n_span
            );
        }
        let mesh = loft.surface_mesh(config.oml_n_chord, config.oml_n_span, SpanSpacing::Cosine)?;

        let tecplot_path = self.path("wing.dat");
        write_structured_zones(
            &tecplot_path,
            "wing OML",
            &[StructuredZone {
                name: "wing".into(),
                ni: mesh.ni,
                nj: mesh.nj,
                nk: 1,
                points: mesh.points.clone(),
            }],
        )?;

        let stl_path = self.path("wing.stl");
        write_stl(&stl_path, "wing", &mesh.triangulate())?;

        Ok(vec![
            Artifact {
                kind: ArtifactKind::OmlTecplot,
                path: tecplot_path,
            },
            Artifact {
                kind: ArtifactKind::OmlStl,
                path: stl_path,
            },
        ])
    }

    /// Fit and write every requested FFD layout/resolution pair.
    fn write_ffd_sweep(
        &self,
        geometry: &AircraftGeometry,
        loft: &WingLoft,
    ) -> Result<Vec<Artifact>, PipelineError> {
        let config = &self.config;
        let combos: Vec<(FfdLayout, FfdResolution)> = config
            .ffd_layouts
            .iter()
            .flat_map(|&layout| config.ffd_resolutions.iter().map(move |&res| (layout, res)))
            .collect();

        let member = |&(layout, res): &(FfdLayout, FfdResolution)| {
            let name = layout.file_name(res);
            if config.verbose {
                println!("Fitting FFD lattice {}", name);
            }
            let stations = layout.stations(&geometry.wing, &geometry.wingbox, res.n_span());
            let lattice = fit_lattice(loft, &stations, res.n_chord(), Margins::default())?;
            let path = self.path(&name);
            write_plot3d(&path, &[lattice.to_plot3d()])?;
            Ok(Artifact {
                kind: ArtifactKind::FfdLattice,
                path,
            })
        };

        #[cfg(feature = "parallel")]
        let artifacts = combos
            .par_iter()
            .map(member)
            .collect::<Result<Vec<_>, PipelineError>>()?;
        #[cfg(not(feature = "parallel"))]
        let artifacts = combos
            .iter()
            .map(member)
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(artifacts)
    }

    /// Per-level CFD surface meshes and extrusion option sets.
    fn write_cfd_surfaces(&self, loft: &WingLoft) -> Result<Vec<Artifact>, PipelineError> {
        let config = &self.config;
        let mut artifacts = Vec::new();

        for family in SurfaceFamily::all() {
            let levels: Vec<MeshLevel> = config
                .mesh_levels
                .iter()
                .copied()
                .filter(|l| l.family() == family)
                .collect();
            if levels.is_empty() {
                continue;
            }

            let n_chord = (config.surface_n_chord as f64 * family.refinement()) as usize;
            let n_span = (config.surface_n_span as f64 * family.refinement()) as usize;
            if config.verbose {
                println!(
                    "Sampling {} family surface ({} x {} cells)",
                    family, n_chord, n_span
                );
            }
            let family_mesh = loft.surface_mesh(n_chord, n_span, SpanSpacing::Cosine)?;

            for level in levels {
                let mut mesh = family_mesh.clone();
                for _ in 0..level.coarsening_applications() {
                    mesh = mesh.coarsen()?;
                }

                let surface_name = level.surface_file_name();
                if config.verbose {
                    println!(
                        "Writing {} ({} x {} points)",
                        surface_name, mesh.ni, mesh.nj
                    );
                }
                let surface_path = self.path(&surface_name);
                write_plot3d(&surface_path, &[mesh.to_plot3d()])?;
                artifacts.push(Artifact {
                    kind: ArtifactKind::CfdSurface,
                    path: surface_path,
                });

                let options = ExtrusionOptions::for_level(level, &surface_name);
                let options_path = self.path(&ExtrusionOptions::file_name(level));
                serde_json::to_writer_pretty(BufWriter::new(File::create(&options_path)?), &options)?;
                artifacts.push(Artifact {
                    kind: ArtifactKind::ExtrusionOptions,
                    path: options_path,
                });
            }
        }
        Ok(artifacts)
    }

    /// Wingbox shell meshes for every level/order pair.
    fn write_wingbox_sweep(
        &self,
        geometry: &AircraftGeometry,
        loft: &WingLoft,
    ) -> Result<Vec<Artifact>, PipelineError> {
        let config = &self.config;
        let grid = WingboxGrid::new(&geometry.wing, &geometry.wingbox);
        let combos: Vec<(WingboxLevel, ElementOrder)> = config
            .wingbox_levels
            .iter()
            .flat_map(|&level| config.element_orders.iter().map(move |&order| (level, order)))
            .collect();

        let member = |&(level, order): &(WingboxLevel, ElementOrder)| {
            let stem = level.artifact_name(order);
            if config.verbose {
                println!("Meshing wingbox {}", stem);
            }
            let mesh = WingboxMesher::default()
                .with_level(level)
                .with_order(order)
                .mesh(&grid, loft)?;
            if config.verbose {
                print!("{}", MeshQualityReport::compute(&mesh).summary());
            }

            let bdf_path = self.path(&format!("{}.bdf", stem));
            write_bdf(&bdf_path, &mesh.to_nastran())?;
            let tecplot_path = self.path(&format!("{}.dat", stem));
            write_fe_zones(&tecplot_path, &stem, &mesh.to_fe_zones())?;

            Ok(vec![
                Artifact {
                    kind: ArtifactKind::WingboxBdf,
                    path: bdf_path,
                },
                Artifact {
                    kind: ArtifactKind::WingboxTecplot,
                    path: tecplot_path,
                },
            ])
        };

        #[cfg(feature = "parallel")]
        let nested = combos
            .par_iter()
            .map(member)
            .collect::<Result<Vec<_>, PipelineError>>()?;
        #[cfg(not(feature = "parallel"))]
        let nested = combos
            .iter()
            .map(member)
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(nested.into_iter().flatten().collect())
    }

    /// Specification and flight point tables.
    fn write_tables(&self, geometry: &AircraftGeometry) -> Result<Vec<Artifact>, PipelineError> {
        if self.config.verbose {
            println!("Writing specification tables");
        }
        let specs = AircraftSpecs::boeing_717(geometry);
        let specs_path = self.path("aircraft-specs.json");
        serde_json::to_writer_pretty(BufWriter::new(File::create(&specs_path)?), &specs)?;

        let mut sets = serde_json::Map::new();
        for set in FlightPointSet::all() {
            sets.insert(set.key().to_string(), serde_json::to_value(set.points())?);
        }
        let points_path = self.path("flight-points.json");
        serde_json::to_writer_pretty(
            BufWriter::new(File::create(&points_path)?),
            &serde_json::Value::Object(sets),
        )?;

        Ok(vec![
            Artifact {
                kind: ArtifactKind::SpecsTable,
                path: specs_path,
            },
            Artifact {
                kind: ArtifactKind::FlightPoints,
                path: points_path,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::naca4;
    use crate::geometry::simple_transonic_wing;

    fn small_config(dir: &std::path::Path) -> PipelineConfig {
        PipelineConfig::default()
            .with_output_dir(dir)
            .with_oml_sizing(16, 8)
            .with_surface_sizing(16, 8)
            .with_ffd(vec![FfdLayout::Basic], vec![FfdResolution::Coarse])
            .with_mesh_levels(vec![MeshLevel::L3])
            .with_wingbox(vec![WingboxLevel::L3], vec![ElementOrder::Order2])
    }

    #[test]
    fn test_small_run_writes_expected_files() {
        let dir = tempfile::tempdir().unwrap();
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 101).unwrap();
        let report = Pipeline::new(small_config(dir.path()))
            .run(&geometry, &foil)
            .unwrap();

        for name in [
            "wing.dat",
            "wing.stl",
            "wing-ffd-coarse.xyz",
            "wing_surf_S1_L3.xyz",
            "wing_vol_L3.json",
            "wingbox-L3-Order2.bdf",
            "wingbox-L3-Order2.dat",
            "aircraft-specs.json",
            "flight-points.json",
        ] {
            assert!(dir.path().join(name).exists(), "missing {}", name);
        }
        assert_eq!(report.artifacts.len(), 9);
        // The report lists exactly the files on disk
        for artifact in &report.artifacts {
            assert!(artifact.path.exists());
        }
    }

    #[test]
    fn test_surface_sizing_validated() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path()).with_surface_sizing(10, 8);
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 101).unwrap();
        assert!(matches!(
            Pipeline::new(config).run(&geometry, &foil),
            Err(PipelineError::SurfaceSizing { n_chord: 10, .. })
        ));
    }

    #[test]
    fn test_report_counts() {
        let dir = tempfile::tempdir().unwrap();
        let geometry = simple_transonic_wing();
        let foil = naca4("0012", 101).unwrap();
        let config = small_config(dir.path())
            .with_ffd(
                vec![FfdLayout::Basic, FfdLayout::Advanced],
                vec![FfdResolution::Coarse],
            );
        let report = Pipeline::new(config).run(&geometry, &foil).unwrap();
        assert_eq!(report.count(ArtifactKind::FfdLattice), 2);
        assert_eq!(report.count(ArtifactKind::CfdSurface), 1);
        assert_eq!(report.count(ArtifactKind::ExtrusionOptions), 1);
        assert_eq!(report.count(ArtifactKind::WingboxBdf), 1);
    }
}
