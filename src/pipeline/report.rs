//! Pipeline run report.

use std::fmt::Write as _;
use std::path::PathBuf;

/// What kind of artifact a file is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// OML surface in Tecplot form.
    OmlTecplot,
    /// OML surface in STL form.
    OmlStl,
    /// Fitted FFD lattice (Plot3D).
    FfdLattice,
    /// Per-level CFD surface mesh (Plot3D).
    CfdSurface,
    /// Per-level extrusion option set (JSON).
    ExtrusionOptions,
    /// Wingbox shell mesh (Nastran bulk data).
    WingboxBdf,
    /// Wingbox shell mesh (Tecplot mirror).
    WingboxTecplot,
    /// Aircraft specification table (JSON).
    SpecsTable,
    /// Flight point set table (JSON).
    FlightPoints,
}

impl ArtifactKind {
    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::OmlTecplot => "OML surface (Tecplot)",
            ArtifactKind::OmlStl => "OML surface (STL)",
            ArtifactKind::FfdLattice => "FFD lattice",
            ArtifactKind::CfdSurface => "CFD surface mesh",
            ArtifactKind::ExtrusionOptions => "extrusion options",
            ArtifactKind::WingboxBdf => "wingbox mesh (BDF)",
            ArtifactKind::WingboxTecplot => "wingbox mesh (Tecplot)",
            ArtifactKind::SpecsTable => "aircraft specs",
            ArtifactKind::FlightPoints => "flight points",
        }
    }
}

/// One file the pipeline wrote.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// Everything a pipeline run produced.
#[derive(Clone, Debug, Default)]
pub struct PipelineReport {
    pub artifacts: Vec<Artifact>,
}

impl PipelineReport {
    /// Number of artifacts of one kind.
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind == kind).count()
    }

    /// Paths of every artifact of one kind.
    pub fn paths(&self, kind: ArtifactKind) -> Vec<&PathBuf> {
        self.artifacts
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| &a.path)
            .collect()
    }

    /// Multi-line summary: total then one line per kind present.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Wrote {} artifacts:", self.artifacts.len());
        let kinds = [
            ArtifactKind::OmlTecplot,
            ArtifactKind::OmlStl,
            ArtifactKind::FfdLattice,
            ArtifactKind::CfdSurface,
            ArtifactKind::ExtrusionOptions,
            ArtifactKind::WingboxBdf,
            ArtifactKind::WingboxTecplot,
            ArtifactKind::SpecsTable,
            ArtifactKind::FlightPoints,
        ];
        for kind in kinds {
            let count = self.count(kind);
            if count > 0 {
                let _ = writeln!(out, "  {:<24} {}", kind.label(), count);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_only_present_kinds() {
        let report = PipelineReport {
            artifacts: vec![
                Artifact {
                    kind: ArtifactKind::FfdLattice,
                    path: PathBuf::from("wing-ffd-coarse.xyz"),
                },
                Artifact {
                    kind: ArtifactKind::FfdLattice,
                    path: PathBuf::from("wing-ffd-med.xyz"),
                },
            ],
        };
        assert_eq!(report.count(ArtifactKind::FfdLattice), 2);
        assert_eq!(report.count(ArtifactKind::OmlStl), 0);
        let summary = report.summary();
        assert!(summary.contains("Wrote 2 artifacts"));
        assert!(summary.contains("FFD lattice"));
        assert!(!summary.contains("STL"));
    }
}
