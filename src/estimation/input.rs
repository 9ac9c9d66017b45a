use super::{DEFAULT_DWELLERS, DEFAULT_OPEN_SPACE, DEFAULT_ROOF_AREA};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackReason {
    Missing,
    NotNumeric,
    Zero,
    Negative,
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "reason")]
pub enum ValueSource {
    Provided,
    Fallback(FallbackReason),
}

/// A numeric form value together with where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NumericField<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T: Copy + Display> NumericField<T> {
    pub fn provided(value: T) -> Self {
        Self { value, source: ValueSource::Provided }
    }

    pub fn fallback(value: T, reason: FallbackReason) -> Self {
        Self { value, source: ValueSource::Fallback(reason) }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ValueSource::Fallback(_))
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self.source {
            ValueSource::Fallback(reason) => Some(reason),
            ValueSource::Provided => None,
        }
    }
}

/// Optional sign and the longest run of ASCII digits after leading whitespace;
/// whatever follows is ignored ("  -12abc" -> "-12", "2000.75" -> "2000").
fn leading_int_token(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(matches!(trimmed.as_bytes().first(), Some(b'-' | b'+')));
    let digits_len = trimmed[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    (digits_len > 0).then(|| &trimmed[..sign_len + digits_len])
}

/// Parses a non-negative count, falling back to `default` when the text is blank,
/// not numeric, zero, negative or too large to represent.
pub fn parse_with_fallback(field: &str, text: &str, default: u64) -> NumericField<u64> {
    let reason = match leading_int_token(text) {
        None if text.trim().is_empty() => FallbackReason::Missing,
        None => FallbackReason::NotNumeric,
        Some(token) if token.starts_with('-') => match token.parse::<i64>() {
            Ok(0) => FallbackReason::Zero,
            _ => FallbackReason::Negative,
        },
        Some(token) => match token.trim_start_matches('+').parse::<u64>() {
            Ok(0) => FallbackReason::Zero,
            Ok(value) => {
                debug!(field, value, "Parsed numeric field.");
                return NumericField::provided(value);
            }
            Err(_) => FallbackReason::OutOfRange,
        },
    };
    warn!(field, input = text, reason = ?reason, fallback = default, "Numeric field fell back to default.");
    NumericField::fallback(default, reason)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyType {
    ResidentialHouse,
    Apartment,
    Commercial,
    Industrial,
    Institutional,
    Other(String),
}

impl std::str::FromStr for PropertyType {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "" => Err("Missing property type"),
            "residential-house" => Ok(PropertyType::ResidentialHouse),
            "apartment" => Ok(PropertyType::Apartment),
            "commercial" => Ok(PropertyType::Commercial),
            "industrial" => Ok(PropertyType::Industrial),
            "institutional" => Ok(PropertyType::Institutional),
            other => Ok(PropertyType::Other(other.to_owned())),
        }
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PropertyType::ResidentialHouse => "Residential House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Commercial => "Commercial Building",
            PropertyType::Industrial => "Industrial Facility",
            PropertyType::Institutional => "Institutional",
            PropertyType::Other(name) => name,
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoofType {
    ConcreteSlab,
    TileRoof,
    MetalSheet,
    Asbestos,
    Other,
}

impl std::str::FromStr for RoofType {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "concrete-slab" => Ok(RoofType::ConcreteSlab),
            "tile-roof" => Ok(RoofType::TileRoof),
            "metal-sheet" => Ok(RoofType::MetalSheet),
            "asbestos" => Ok(RoofType::Asbestos),
            "other" => Ok(RoofType::Other),
            _ => Err("Invalid roof type"),
        }
    }
}

impl Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoofType::ConcreteSlab => "Concrete Slab",
            RoofType::TileRoof => "Tile Roof",
            RoofType::MetalSheet => "Metal Sheet",
            RoofType::Asbestos => "Asbestos Sheet",
            RoofType::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Property section of the assessment form, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyInfo {
    pub property_type: String,
    pub roof_area: String,
    pub roof_type: String,
    pub dwellers: String,
    pub open_space: String,
    pub existing_structures: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyInput {
    /// sq ft
    pub roof_area: NumericField<u64>,
    pub dwellers: NumericField<u64>,
    /// sq ft
    pub open_space: NumericField<u64>,
    // advisory only
    pub property_type: Option<PropertyType>,
    pub roof_type: Option<RoofType>,
}

impl PropertyInput {
    pub fn new(roof_area: u64, dwellers: u64, open_space: u64) -> Self {
        Self {
            roof_area: NumericField::provided(roof_area),
            dwellers: NumericField::provided(dwellers),
            open_space: NumericField::provided(open_space),
            property_type: None,
            roof_type: None,
        }
    }

    pub fn from_raw(info: &PropertyInfo) -> Self {
        Self {
            roof_area: parse_with_fallback("roofArea", &info.roof_area, DEFAULT_ROOF_AREA),
            dwellers: parse_with_fallback("dwellers", &info.dwellers, DEFAULT_DWELLERS),
            open_space: parse_with_fallback("openSpace", &info.open_space, DEFAULT_OPEN_SPACE),
            property_type: info.property_type.parse().ok(),
            roof_type: info.roof_type.parse().ok(),
        }
    }

    /// Names and reasons of the fields that did not come from the user.
    pub fn fallbacks(&self) -> Vec<(&'static str, FallbackReason)> {
        [("roofArea", &self.roof_area), ("dwellers", &self.dwellers), ("openSpace", &self.open_space)]
            .into_iter()
            .filter_map(|(name, field)| field.fallback_reason().map(|reason| (name, reason)))
            .collect()
    }
}
