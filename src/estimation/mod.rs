pub mod input;
pub mod model;
pub mod structure;

pub use input::{FallbackReason, NumericField, PropertyInfo, PropertyInput, PropertyType, RoofType, ValueSource};
pub use model::{estimate, ClimateConstants, CostEstimate, EstimationResult, FeasibilityStatus, LocalConditions};
pub use structure::{RechargeStructure, StructureKind};

pub const ANNUAL_RAINFALL_MM: f64 = 850.;
pub const CATCHMENT_EFFICIENCY: f64 = 0.85;

pub const LITERS_DIVISOR: f64 = 1000.;
pub const LITERS_PER_PERSON_PER_DAY: u64 = 150;
pub const DAYS_PER_MONTH: u64 = 30;

pub const DEFAULT_ROOF_AREA: u64 = 2000;
pub const DEFAULT_DWELLERS: u64 = 4;
pub const DEFAULT_OPEN_SPACE: u64 = 500;

pub const BASIC_COST_PER_SQFT: f64 = 15.;
pub const BASIC_COST_BASE: f64 = 25_000.;
pub const ADVANCED_COST_PER_SQFT: f64 = 25.;
pub const ADVANCED_COST_BASE: f64 = 50_000.;

// Fixed regional figures shown alongside every result.
pub const GROUNDWATER_LEVEL_M: f64 = 12.5;
pub const AQUIFER_TYPE: &str = "Alluvial";
pub const ANNUAL_SAVINGS_RANGE: (u64, u64) = (18_000, 35_000);
