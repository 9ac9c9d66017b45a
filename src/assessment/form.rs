use crate::estimation::PropertyInfo;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationInfo {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub coordinates: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInfo {
    pub budget: String,
    pub purpose: String,
    pub notes: String,
}

/// Everything the four wizard steps collect. Lives only for the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentData {
    pub personal_info: PersonalInfo,
    pub location_info: LocationInfo,
    pub property_info: PropertyInfo,
    pub additional_info: AdditionalInfo,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_defaults() {
        let data: AssessmentData = serde_json::from_str(
            r#"{"personalInfo":{"name":"Asha"},"propertyInfo":{"roofArea":"1500","openSpace":"250"}}"#,
        )
        .unwrap();
        assert_eq!(data.personal_info.name, "Asha");
        assert_eq!(data.personal_info.email, "");
        assert_eq!(data.property_info.roof_area, "1500");
        assert_eq!(data.property_info.dwellers, "");
        assert_eq!(data.location_info.coordinates, None);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(AssessmentData::default()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["propertyInfo"].get("roofArea").is_some());
        assert!(json["propertyInfo"].get("existingStructures").is_some());
    }
}
