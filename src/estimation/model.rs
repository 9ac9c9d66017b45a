use super::{
    input::PropertyInput, structure::RechargeStructure, ADVANCED_COST_BASE, ADVANCED_COST_PER_SQFT,
    ANNUAL_RAINFALL_MM, ANNUAL_SAVINGS_RANGE, AQUIFER_TYPE, BASIC_COST_BASE, BASIC_COST_PER_SQFT,
    CATCHMENT_EFFICIENCY, DAYS_PER_MONTH, GROUNDWATER_LEVEL_M, LITERS_DIVISOR, LITERS_PER_PERSON_PER_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConstants {
    /// mm
    pub annual_rainfall_mm: f64,
    /// fraction of the theoretical volume actually collected
    pub catchment_efficiency: f64,
}

impl Default for ClimateConstants {
    fn default() -> Self {
        Self { annual_rainfall_mm: ANNUAL_RAINFALL_MM, catchment_efficiency: CATCHMENT_EFFICIENCY }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FeasibilityStatus {
    Excellent,
    Good,
    Fair,
}

impl FeasibilityStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => FeasibilityStatus::Excellent,
            60..=79 => FeasibilityStatus::Good,
            _ => FeasibilityStatus::Fair,
        }
    }
}

impl Display for FeasibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FeasibilityStatus::Excellent => "Excellent",
            FeasibilityStatus::Good => "Good",
            FeasibilityStatus::Fair => "Fair",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub basic: u64,
    pub advanced: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalConditions {
    pub annual_rainfall_mm: f64,
    pub catchment_efficiency_pct: f64,
    pub groundwater_level_m: f64,
    pub aquifer_type: &'static str,
    pub annual_savings_range: (u64, u64),
}

impl LocalConditions {
    pub fn new(climate: &ClimateConstants) -> Self {
        Self {
            annual_rainfall_mm: climate.annual_rainfall_mm,
            catchment_efficiency_pct: (climate.catchment_efficiency * 100.).round(),
            groundwater_level_m: GROUNDWATER_LEVEL_M,
            aquifer_type: AQUIFER_TYPE,
            annual_savings_range: ANNUAL_SAVINGS_RANGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// liters
    pub annual_harvest_potential: u64,
    /// liters
    pub monthly_demand: u64,
    pub months_of_supply: Option<u64>,
    pub feasibility_score: u8,
    pub feasibility_status: FeasibilityStatus,
    pub cost_estimate: CostEstimate,
    pub recharge_structure: RechargeStructure,
}

/// Divide by 1000 first, then round.
pub fn annual_harvest_potential(roof_area: f64, climate: &ClimateConstants) -> u64 {
    (roof_area * climate.annual_rainfall_mm * climate.catchment_efficiency / LITERS_DIVISOR).round().max(0.) as u64
}

pub fn monthly_demand(dwellers: u64) -> u64 {
    dwellers.saturating_mul(LITERS_PER_PERSON_PER_DAY * DAYS_PER_MONTH)
}

pub fn feasibility_score(roof_area: u64) -> u8 {
    match roof_area {
        500.. => 85,
        200..=499 => 65,
        _ => 35,
    }
}

pub fn cost_estimate(roof_area: u64) -> CostEstimate {
    let area = roof_area as f64;
    CostEstimate {
        basic: (area * BASIC_COST_PER_SQFT + BASIC_COST_BASE).round() as u64,
        advanced: (area * ADVANCED_COST_PER_SQFT + ADVANCED_COST_BASE).round() as u64,
    }
}

pub fn months_of_supply(annual_harvest: u64, monthly_demand: u64) -> Option<u64> {
    (monthly_demand > 0).then(|| (annual_harvest as f64 / monthly_demand as f64).round() as u64)
}

/// Pure function of roof area, dwellers and open space plus the climate constants.
pub fn estimate(input: &PropertyInput, climate: &ClimateConstants) -> EstimationResult {
    let roof_area = input.roof_area.value;
    let annual_harvest_potential = annual_harvest_potential(roof_area as f64, climate);
    let monthly_demand = monthly_demand(input.dwellers.value);
    let feasibility_score = feasibility_score(roof_area);
    let result = EstimationResult {
        annual_harvest_potential,
        monthly_demand,
        months_of_supply: months_of_supply(annual_harvest_potential, monthly_demand),
        feasibility_score,
        feasibility_status: FeasibilityStatus::from_score(feasibility_score),
        cost_estimate: cost_estimate(roof_area),
        recharge_structure: RechargeStructure::for_open_space(input.open_space.value),
    };
    debug!(
        roof_area,
        dwellers = input.dwellers.value,
        open_space = input.open_space.value,
        harvest = result.annual_harvest_potential,
        score = result.feasibility_score,
        "Estimation computed."
    );
    result
}
