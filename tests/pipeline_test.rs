//! Archive generation end to end.
//!
//! Runs the pipeline over the full FFD and CFD level matrices (at
//! reduced surface sizing) and checks the archive layout: file names,
//! artifact counts, and the contents of the JSON tables.

use std::fs;

use stw_gen::ffd::{FfdLayout, FfdResolution};
use stw_gen::meshing::MeshLevel;
use stw_gen::pipeline::ArtifactKind;
use stw_gen::structures::{ElementOrder, WingboxLevel};
use stw_gen::{Pipeline, PipelineConfig, naca4, simple_transonic_wing};

fn archive_config(dir: &std::path::Path) -> PipelineConfig {
    PipelineConfig::default()
        .with_output_dir(dir)
        .with_oml_sizing(32, 16)
        .with_surface_sizing(32, 16)
        .with_wingbox(vec![WingboxLevel::L3], ElementOrder::all().to_vec())
}

#[test]
fn test_archive_layout() {
    let dir = tempfile::tempdir().unwrap();
    let geometry = simple_transonic_wing();
    let foil = naca4("0012", 101).unwrap();
    let report = Pipeline::new(archive_config(dir.path()))
        .run(&geometry, &foil)
        .unwrap();

    // 2 OML + 6 FFD + 5 surfaces + 5 option sets + 3 wingbox pairs + 2 tables
    assert_eq!(report.count(ArtifactKind::FfdLattice), 6);
    assert_eq!(report.count(ArtifactKind::CfdSurface), 5);
    assert_eq!(report.count(ArtifactKind::ExtrusionOptions), 5);
    assert_eq!(report.count(ArtifactKind::WingboxBdf), 3);
    assert_eq!(report.count(ArtifactKind::WingboxTecplot), 3);
    assert_eq!(report.artifacts.len(), 2 + 6 + 10 + 6 + 2);

    for name in [
        "wing.dat",
        "wing.stl",
        "wing-ffd-coarse.xyz",
        "wing-ffd-advanced-fine.xyz",
        "wing_surf_S1_L3.xyz",
        "wing_surf_S1_L1.xyz",
        "wing_surf_S0.7_L1.4.xyz",
        "wing_surf_S0.7_L0.7.xyz",
        "wing_vol_L3.json",
        "wing_vol_L1.4.json",
        "wingbox-L3-Order2.bdf",
        "wingbox-L3-Order4.dat",
        "aircraft-specs.json",
        "flight-points.json",
    ] {
        assert!(dir.path().join(name).exists(), "missing {}", name);
    }
}

#[test]
fn test_extrusion_option_files_carry_the_level_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let geometry = simple_transonic_wing();
    let foil = naca4("0012", 101).unwrap();
    let config = archive_config(dir.path())
        .with_ffd(vec![FfdLayout::Basic], vec![FfdResolution::Coarse])
        .with_mesh_levels(vec![MeshLevel::L1, MeshLevel::L3]);
    Pipeline::new(config).run(&geometry, &foil).unwrap();

    let l1: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("wing_vol_L1.json")).unwrap())
            .unwrap();
    assert_eq!(l1["inputFile"], "wing_surf_S1_L1.xyz");
    assert_eq!(l1["N"], 129);
    assert_eq!(l1["marchDist"], 305.0);
    assert_eq!(l1["nConstantStart"], 3);
    assert!((l1["s0"].as_f64().unwrap() - 1.8e-6).abs() < 1e-12);
    assert_eq!(l1["outerFaceBC"], "farfield");
    assert_eq!(l1["families"], "wall");

    let l3: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("wing_vol_L3.json")).unwrap())
            .unwrap();
    assert_eq!(l3["N"], 49);
    assert_eq!(l3["coarsen"], 3);
    assert!((l3["s0"].as_f64().unwrap() - 7.2e-6).abs() < 1e-12);
}

#[test]
fn test_flight_point_table_has_every_set() {
    let dir = tempfile::tempdir().unwrap();
    let geometry = simple_transonic_wing();
    let foil = naca4("0012", 101).unwrap();
    let config = archive_config(dir.path())
        .with_ffd(vec![FfdLayout::Basic], vec![FfdResolution::Coarse])
        .with_mesh_levels(vec![MeshLevel::L3])
        .with_wingbox(vec![WingboxLevel::L3], vec![ElementOrder::Order2]);
    Pipeline::new(config).run(&geometry, &foil).unwrap();

    let table: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("flight-points.json")).unwrap())
            .unwrap();
    let sets = table.as_object().unwrap();
    assert_eq!(sets.len(), 6);
    for key in [
        "cruise",
        "mnver_sealevel_va_pullup",
        "mnver_sealevel_va_pushdown",
        "3pt",
        "2pt",
        "maneuverOnly",
    ] {
        assert!(sets.contains_key(key), "missing set {}", key);
    }
    assert_eq!(sets["3pt"].as_array().unwrap().len(), 3);
    assert_eq!(sets["cruise"][0]["mach"], 0.77);
    assert_eq!(sets["3pt"][1]["loadFactor"], 2.5);

    let specs: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("aircraft-specs.json")).unwrap())
            .unwrap();
    assert_eq!(specs["refMTOW"], 55000.0);
    assert_eq!(specs["refArea"], 45.5);
}
