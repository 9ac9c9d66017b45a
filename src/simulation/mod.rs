//! Decorative month-by-month replay of the harvesting formulas.
//!
//! Nothing in here feeds back into [`crate::estimation`]; the figures are for display only.

pub mod flow;
pub mod panel;
pub mod phase;
pub mod rain;
pub mod runner;
pub mod stats;
pub mod ticker;

pub use flow::WaterFlow;
pub use panel::{DimensionKey, DimensionPanel};
pub use phase::{Dimensions, PropertyKind, SimPhase, SimSignal, Simulation, SimulationData, SimulationSnapshot};
pub use runner::{run_simulation, LogObserver, MonthObserver};
pub use stats::SimulationStats;
pub use ticker::MonthTicker;

pub const MONTHS: u8 = 12;

/// mm per month, Jan..Dec (monsoon pattern)
pub const MONTHLY_RAINFALL_MM: [f64; 12] = [40., 30., 20., 35., 60., 120., 180., 160., 140., 80., 20., 15.];

/// Relative rain intensity per month, Jan..Dec
pub const MONTHLY_INTENSITY: [f64; 12] = [0.1, 0.1, 0.2, 0.3, 0.6, 0.9, 1.0, 0.9, 0.8, 0.4, 0.1, 0.1];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const SQFT_TO_SQM: f64 = 0.092903;

// used when a dimension is left at 0
pub const FALLBACK_LENGTH: f64 = 10.;
pub const FALLBACK_WIDTH: f64 = 8.;

/// Rainfall for a 1-based month; 0 outside 1..=12.
pub fn rainfall_for_month(month: u8) -> f64 {
    month.checked_sub(1).and_then(|i| MONTHLY_RAINFALL_MM.get(i as usize)).copied().unwrap_or(0.)
}

/// Liters collected from `area_sqft` for `rainfall_mm`, rounded to the nearest 1000 L.
pub fn collection_liters(area_sqft: f64, rainfall_mm: f64, efficiency: f64) -> u64 {
    ((area_sqft * SQFT_TO_SQM * rainfall_mm * efficiency / 1000.).round() * 1000.).max(0.) as u64
}

pub fn month_name(month: u8) -> &'static str {
    month.checked_sub(1).and_then(|i| MONTH_NAMES.get(i as usize)).copied().unwrap_or("")
}
