use super::{collection_liters, phase::Dimensions, FALLBACK_LENGTH, FALLBACK_WIDTH, MONTHLY_RAINFALL_MM};
use crate::estimation::CATCHMENT_EFFICIENCY;
use serde::Serialize;

/// sq ft, with zero sides replaced by the 10 x 8 placeholder footprint
pub fn roof_area(dimensions: Dimensions) -> f64 {
    let length = if dimensions.length == 0. { FALLBACK_LENGTH } else { dimensions.length };
    let width = if dimensions.width == 0. { FALLBACK_WIDTH } else { dimensions.width };
    length * width
}

/// Storage tank state after `current_month` months of collection.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterFlow {
    pub monthly_collection: [u64; 12],
    pub this_month: u64,
    pub cumulative: u64,
    pub tank_capacity: u64,
    pub level: u64,
    pub overflow: u64,
    pub fill_fraction: f64,
}

impl WaterFlow {
    pub fn compute(dimensions: Dimensions, current_month: u8, tank_capacity: u64) -> Self {
        let area = roof_area(dimensions);
        let monthly_collection = MONTHLY_RAINFALL_MM.map(|rain| collection_liters(area, rain, CATCHMENT_EFFICIENCY));
        let months = (current_month as usize).min(monthly_collection.len());
        let cumulative: u64 = monthly_collection[..months].iter().sum();
        let level = cumulative.min(tank_capacity);
        Self {
            monthly_collection,
            this_month: months.checked_sub(1).map_or(0, |i| monthly_collection[i]),
            cumulative,
            tank_capacity,
            level,
            overflow: cumulative.saturating_sub(tank_capacity),
            fill_fraction: if tank_capacity == 0 { 0. } else { level as f64 / tank_capacity as f64 },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TOWNSHIP: Dimensions = Dimensions { length: 30., width: 25., height: 4. };

    #[test]
    fn zero_sides_use_placeholder() {
        assert_eq!(roof_area(Dimensions::default()), 80.);
        assert_eq!(roof_area(Dimensions { length: 20., width: 0., height: 1. }), 160.);
    }

    #[test]
    fn township_monthly_collection() {
        let flow = WaterFlow::compute(TOWNSHIP, 1, 50_000);
        assert_eq!(
            flow.monthly_collection,
            [2000, 2000, 1000, 2000, 4000, 7000, 11000, 9000, 8000, 5000, 1000, 1000]
        );
        assert_eq!(flow.this_month, 2000);
        assert_eq!(flow.cumulative, 2000);
        assert_eq!(flow.overflow, 0);
    }

    #[test]
    fn overflow_at_year_end() {
        let flow = WaterFlow::compute(TOWNSHIP, 12, 50_000);
        assert_eq!(flow.cumulative, 53_000);
        assert_eq!(flow.level, 50_000);
        assert_eq!(flow.overflow, 3_000);
        assert_eq!(flow.fill_fraction, 1.);
    }

    #[test]
    fn level_tracks_cumulative_below_capacity() {
        let flow = WaterFlow::compute(TOWNSHIP, 7, 50_000);
        assert_eq!(flow.cumulative, 29_000);
        assert_eq!(flow.level, 29_000);
        assert_eq!(flow.fill_fraction, 0.58);
    }
}
