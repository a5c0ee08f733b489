use serde::{Deserialize, Serialize};

use crate::api_client;

/// A census record as returned by the backend. Field defaults keep the
/// table tolerant of sparse or partially filled rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_vaccinated: bool,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub gender: String,
}

/// Gender choices offered by the entry form. Fetched records keep gender as
/// a raw string instead so unrecognized server values still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Others => "others",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
        }
    }
}

/// Payload for creating a record. The birthdate is an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub is_vaccinated: bool,
    pub birthdate: String,
    pub gender: Gender,
}

pub async fn get_records() -> Result<Vec<CensusRecord>, String> {
    log::trace!("Fetching all census records");
    let result = api_client::get::<Vec<CensusRecord>>("/records").await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch records: {}", e);
    } else {
        log::info!("Successfully fetched census records");
    }

    result
}

pub async fn create_record(record: &NewRecord) -> Result<(), String> {
    log::trace!("Creating census record for '{}'", record.name);
    let result = api_client::post("/records", record).await;

    if let Err(ref e) = result {
        log::error!("Failed to create record: {}", e);
    } else {
        log::info!("Successfully created census record");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_serializes_gender_lowercase() {
        let record = NewRecord {
            name: "Larry Page".to_string(),
            is_vaccinated: true,
            birthdate: "1998-09-03T00:00:00.000Z".to_string(),
            gender: Gender::Male,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["gender"], "male");
        assert_eq!(json["is_vaccinated"], true);
        assert_eq!(json["birthdate"], "1998-09-03T00:00:00.000Z");
    }

    #[test]
    fn census_record_tolerates_missing_fields() {
        let record: CensusRecord = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(record.name, "Ada");
        assert!(!record.is_vaccinated);
        assert_eq!(record.birthdate, None);
        assert_eq!(record.gender, "");
    }
}
