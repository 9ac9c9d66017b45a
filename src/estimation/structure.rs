use crate::utils::group_thousands;
use serde::Serialize;
use std::fmt::Display;

pub const RECHARGE_PIT_MIN_OPEN_SPACE: u64 = 400;
pub const RECHARGE_WELL_MIN_OPEN_SPACE: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StructureKind {
    RechargePit,
    RechargeWell,
    PercolationPit,
}

impl Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StructureKind::RechargePit => "Recharge Pit",
            StructureKind::RechargeWell => "Recharge Well",
            StructureKind::PercolationPit => "Percolation Pit",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeStructure {
    pub kind: StructureKind,
    pub dimensions: &'static str,
    pub capacity_liters: u32,
}

impl RechargeStructure {
    /// Step function of the available open space (sq ft).
    pub fn for_open_space(open_space: u64) -> Self {
        if open_space >= RECHARGE_PIT_MIN_OPEN_SPACE {
            Self { kind: StructureKind::RechargePit, dimensions: "3m x 3m x 3m", capacity_liters: 27_000 }
        } else if open_space >= RECHARGE_WELL_MIN_OPEN_SPACE {
            Self { kind: StructureKind::RechargeWell, dimensions: "1m diameter x 10m depth", capacity_liters: 7_850 }
        } else {
            Self { kind: StructureKind::PercolationPit, dimensions: "1.5m x 1.5m x 2m", capacity_liters: 4_500 }
        }
    }

    /// "27,000L"
    pub fn capacity_label(&self) -> String {
        format!("{}L", group_thousands(self.capacity_liters as u64))
    }
}
