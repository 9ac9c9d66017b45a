use super::form::AssessmentData;
use crate::estimation::{estimate, ClimateConstants, EstimationResult, FallbackReason, LocalConditions, PropertyInput};
use serde::Serialize;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFallback {
    pub field: &'static str,
    pub reason: FallbackReason,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub applicant: String,
    pub city: String,
    pub state: String,
    pub estimation: EstimationResult,
    pub local_conditions: LocalConditions,
    pub fallbacks: Vec<FieldFallback>,
}

impl AssessmentReport {
    pub fn build(data: &AssessmentData, climate: &ClimateConstants) -> Self {
        let input = PropertyInput::from_raw(&data.property_info);
        let estimation = estimate(&input, climate);
        let fallbacks: Vec<FieldFallback> =
            input.fallbacks().into_iter().map(|(field, reason)| FieldFallback { field, reason }).collect();
        info!(
            harvest = estimation.annual_harvest_potential,
            status = %estimation.feasibility_status,
            fallbacks = fallbacks.len(),
            "Assessment report generated."
        );
        Self {
            applicant: data.personal_info.name.clone(),
            city: data.location_info.city.clone(),
            state: data.location_info.state.clone(),
            estimation,
            local_conditions: LocalConditions::new(climate),
            fallbacks,
        }
    }

    /// "For Name - City, State"
    pub fn headline(&self) -> String {
        format!("For {} - {}, {}", self.applicant, self.city, self.state)
    }
}
