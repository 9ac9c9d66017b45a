use super::{
    collection_liters, flow::roof_area, month_name, phase::PropertyKind, phase::SimulationData, rainfall_for_month,
    MONTHLY_RAINFALL_MM, MONTHS,
};
use crate::estimation::CATCHMENT_EFFICIENCY;
use serde::Serialize;

pub const SAVINGS_PER_LITER: f64 = 0.03;
pub const CO2_KG_PER_LITER: f64 = 0.0002;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStats {
    pub roof_area: f64,
    pub month_name: &'static str,
    pub current_rainfall_mm: f64,
    pub yearly_rainfall_mm: f64,
    pub potential_collection: u64,
    pub current_collection: u64,
    pub estimated_cost: u64,
    pub annual_savings: u64,
    pub co2_saved_kg: u64,
    pub payback_years: Option<u64>,
    pub roi_pct: Option<u64>,
    pub year_progress_pct: u64,
}

impl SimulationStats {
    pub fn compute(data: &SimulationData) -> Self {
        let area = roof_area(data.dimensions);
        let current_rainfall_mm = rainfall_for_month(data.current_month);
        let yearly_rainfall_mm: f64 = MONTHLY_RAINFALL_MM.iter().sum();
        let potential_collection = collection_liters(area, yearly_rainfall_mm, CATCHMENT_EFFICIENCY);
        let estimated_cost = match data.property_kind {
            Some(PropertyKind::Township) => (area * 25. + 100_000.).round() as u64,
            _ => (area * 15. + 25_000.).round() as u64,
        };
        let annual_savings = (potential_collection as f64 * SAVINGS_PER_LITER).round() as u64;
        let (payback_years, roi_pct) = if annual_savings == 0 || estimated_cost == 0 {
            (None, None)
        } else {
            (
                Some((estimated_cost as f64 / annual_savings as f64).round() as u64),
                Some((annual_savings as f64 / estimated_cost as f64 * 100.).round() as u64),
            )
        };
        Self {
            roof_area: area,
            month_name: month_name(data.current_month),
            current_rainfall_mm,
            yearly_rainfall_mm,
            potential_collection,
            current_collection: collection_liters(area, current_rainfall_mm, CATCHMENT_EFFICIENCY),
            estimated_cost,
            annual_savings,
            co2_saved_kg: (potential_collection as f64 * CO2_KG_PER_LITER).round() as u64,
            payback_years,
            roi_pct,
            year_progress_pct: (data.current_month as f64 / MONTHS as f64 * 100.).round() as u64,
        }
    }
}
