//! The CFD mesh level schedule.

use std::fmt;
use std::str::FromStr;

/// Surface mesh family a volume level extrudes from.
///
/// The three coarse levels share the S1 family surface; the two finest
/// extrude from the 1.5x finer S0.7 family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceFamily {
    S1,
    S0_7,
}

impl SurfaceFamily {
    /// File-name label.
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceFamily::S1 => "S1",
            SurfaceFamily::S0_7 => "S0.7",
        }
    }

    /// Surface cell refinement relative to the S1 family.
    pub fn refinement(&self) -> f64 {
        match self {
            SurfaceFamily::S1 => 1.0,
            SurfaceFamily::S0_7 => 1.5,
        }
    }

    /// Both families.
    pub fn all() -> [SurfaceFamily; 2] {
        [SurfaceFamily::S1, SurfaceFamily::S0_7]
    }
}

impl fmt::Display for SurfaceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One level of the volume-mesh schedule, L3 (coarsest) to L0.7 (finest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshLevel {
    L3,
    L2,
    L1_4,
    L1,
    L0_7,
}

impl MeshLevel {
    /// Spacing factor relative to the L2 baseline.
    pub fn factor(&self) -> f64 {
        match self {
            MeshLevel::L3 => 0.5,
            MeshLevel::L2 => 1.0,
            MeshLevel::L1_4 => 1.4,
            MeshLevel::L1 => 2.0,
            MeshLevel::L0_7 => 2.8,
        }
    }

    /// First off-wall spacing in metres.
    pub fn s0(&self) -> f64 {
        3.6e-6 / self.factor()
    }

    /// Farfield march distance, adjusted per level so the farfield sits
    /// at a comparable physical distance after coarsening.
    pub fn march_dist(&self) -> f64 {
        match self {
            MeshLevel::L3 => 350.0,
            MeshLevel::L2 => 325.0,
            MeshLevel::L1_4 => 310.0,
            MeshLevel::L1 => 305.0,
            MeshLevel::L0_7 => 300.0,
        }
    }

    /// Coarsening level of the family surface (1 means use it as-is).
    pub fn coarsen(&self) -> usize {
        match self {
            MeshLevel::L3 => 3,
            MeshLevel::L2 => 2,
            MeshLevel::L1_4 => 2,
            MeshLevel::L1 => 1,
            MeshLevel::L0_7 => 1,
        }
    }

    /// How many times `coarsen()` is actually applied to the family surface.
    pub fn coarsening_applications(&self) -> usize {
        self.coarsen() - 1
    }

    /// Off-wall grid point count.
    pub fn n_grid(&self) -> usize {
        match self {
            MeshLevel::L3 => 49,
            MeshLevel::L2 => 65,
            MeshLevel::L1_4 => 97,
            MeshLevel::L1 => 129,
            MeshLevel::L0_7 => 193,
        }
    }

    /// Layers of constant spacing at the wall before stretching starts.
    pub fn n_constant_start(&self) -> usize {
        match self {
            MeshLevel::L3 => 1,
            MeshLevel::L2 => 2,
            MeshLevel::L1_4 => 2,
            MeshLevel::L1 => 3,
            MeshLevel::L0_7 => 3,
        }
    }

    /// Surface family the level extrudes from.
    pub fn family(&self) -> SurfaceFamily {
        match self {
            MeshLevel::L3 | MeshLevel::L2 | MeshLevel::L1 => SurfaceFamily::S1,
            MeshLevel::L1_4 | MeshLevel::L0_7 => SurfaceFamily::S0_7,
        }
    }

    /// Level label, e.g. `L1.4`.
    pub fn label(&self) -> &'static str {
        match self {
            MeshLevel::L3 => "L3",
            MeshLevel::L2 => "L2",
            MeshLevel::L1_4 => "L1.4",
            MeshLevel::L1 => "L1",
            MeshLevel::L0_7 => "L0.7",
        }
    }

    /// Volume mesh name stem, e.g. `wing_vol_L2`.
    pub fn mesh_name(&self) -> String {
        format!("wing_vol_{}", self.label())
    }

    /// Surface mesh file name, e.g. `wing_surf_S1_L2.xyz`.
    pub fn surface_file_name(&self) -> String {
        format!("wing_surf_{}_{}.xyz", self.family().label(), self.label())
    }

    /// All levels, coarsest first.
    pub fn all() -> [MeshLevel; 5] {
        [
            MeshLevel::L3,
            MeshLevel::L2,
            MeshLevel::L1_4,
            MeshLevel::L1,
            MeshLevel::L0_7,
        ]
    }
}

impl fmt::Display for MeshLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeshLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L3" => Ok(MeshLevel::L3),
            "L2" => Ok(MeshLevel::L2),
            "L1.4" => Ok(MeshLevel::L1_4),
            "L1" => Ok(MeshLevel::L1),
            "L0.7" => Ok(MeshLevel::L0_7),
            other => Err(format!("unknown mesh level '{}'", other)),
        }
    }
}
