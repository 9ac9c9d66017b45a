use super::phase::{Dimensions, PropertyKind};
use crate::{
    error::{AppError, FieldError},
    estimation::{model::annual_harvest_potential, ClimateConstants},
};
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionKey {
    Length,
    Width,
    Height,
}

impl DimensionKey {
    pub fn field(self) -> &'static str {
        match self {
            DimensionKey::Length => "length",
            DimensionKey::Width => "width",
            DimensionKey::Height => "height",
        }
    }
}

impl std::str::FromStr for DimensionKey {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "length" => Ok(DimensionKey::Length),
            "width" => Ok(DimensionKey::Width),
            "height" => Ok(DimensionKey::Height),
            _ => Err("Invalid dimension"),
        }
    }
}

/// Leading-float parse: the longest numeric prefix, ignoring trailing text ("12.5m" -> 12.5).
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    (1..=candidate_len).rev().find_map(|len| trimmed[..len].parse::<f64>().ok()).filter(|v| v.is_finite())
}

/// Dimension entry for the simulated property, with inline errors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DimensionPanel {
    pub kind: PropertyKind,
    pub dimensions: Dimensions,
    pub location: String,
    pub errors: Vec<FieldError>,
}

impl DimensionPanel {
    pub fn new(kind: PropertyKind) -> Self {
        Self { kind, dimensions: kind.default_dimensions(), location: String::new(), errors: vec![] }
    }

    /// Unparseable text counts as 0, which `validate` then rejects.
    pub fn update_dimension(&mut self, key: DimensionKey, text: &str) {
        let value = parse_leading_float(text).unwrap_or(0.);
        match key {
            DimensionKey::Length => self.dimensions.length = value,
            DimensionKey::Width => self.dimensions.width = value,
            DimensionKey::Height => self.dimensions.height = value,
        }
        debug!(field = key.field(), value, "Dimension updated.");
        self.clear_error(key.field());
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_owned();
        self.clear_error("location");
    }

    fn clear_error(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }

    pub fn validate(&mut self) -> Result<(), AppError> {
        let mut errors = vec![];
        if self.dimensions.length <= 0. {
            errors.push(FieldError::new("length", "Length must be greater than 0"));
        }
        if self.dimensions.width <= 0. {
            errors.push(FieldError::new("width", "Width must be greater than 0"));
        }
        if self.dimensions.height <= 0. {
            errors.push(FieldError::new("height", "Height must be greater than 0"));
        }
        if self.location.trim().is_empty() {
            errors.push(FieldError::new("location", "Location is required"));
        }
        self.errors = errors.clone();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(errors))
        }
    }

    /// sq ft
    pub fn catchment_area(&self) -> f64 {
        self.dimensions.length * self.dimensions.width
    }

    /// liters, same formula as the assessment
    pub fn estimated_annual_harvest(&self, climate: &ClimateConstants) -> u64 {
        annual_harvest_potential(self.catchment_area(), climate)
    }
}
