use serde::Deserialize;
use serde_json::Value;

use crate::api_client;

/// One age bucket of the vaccination line series. The backend keys the age
/// by `_id` and emits numbers or numeric strings interchangeably, so both
/// fields stay raw `Value`s until chart preprocessing parses them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgeCountRow {
    #[serde(rename = "_id", default)]
    pub age: Value,
    #[serde(
        default,
        alias = "number_vaccinated",
        alias = "number_not_vaccinated"
    )]
    pub count: Value,
}

/// One age bucket of a gender series (`/number-gender-*` endpoints).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenderAgeRow {
    #[serde(default)]
    pub age: Value,
    #[serde(
        default,
        alias = "number_male",
        alias = "number_female",
        alias = "number_others"
    )]
    pub count: Value,
}

async fn get_age_counts(endpoint: &str) -> Result<Vec<AgeCountRow>, String> {
    log::trace!("Fetching age counts from {}", endpoint);
    api_client::get::<Vec<AgeCountRow>>(endpoint).await
}

async fn get_gender_counts(endpoint: &str) -> Result<Vec<GenderAgeRow>, String> {
    log::trace!("Fetching gender counts from {}", endpoint);
    api_client::get::<Vec<GenderAgeRow>>(endpoint).await
}

pub async fn get_vaccinated_by_age() -> Result<Vec<AgeCountRow>, String> {
    get_age_counts("/number-vaccinated").await
}

pub async fn get_not_vaccinated_by_age() -> Result<Vec<AgeCountRow>, String> {
    get_age_counts("/number-not-vaccinated").await
}

pub async fn get_male_by_age() -> Result<Vec<GenderAgeRow>, String> {
    get_gender_counts("/number-gender-male").await
}

pub async fn get_female_by_age() -> Result<Vec<GenderAgeRow>, String> {
    get_gender_counts("/number-gender-female").await
}

pub async fn get_others_by_age() -> Result<Vec<GenderAgeRow>, String> {
    get_gender_counts("/number-gender-others").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn age_count_row_reads_either_line_series_field() {
        let vaccinated: AgeCountRow =
            serde_json::from_value(json!({"_id": 30, "number_vaccinated": 4})).unwrap();
        assert_eq!(vaccinated.age, json!(30));
        assert_eq!(vaccinated.count, json!(4));

        let not_vaccinated: AgeCountRow =
            serde_json::from_value(json!({"_id": "30", "number_not_vaccinated": "7"})).unwrap();
        assert_eq!(not_vaccinated.count, json!("7"));
    }

    #[test]
    fn gender_row_reads_any_gender_field() {
        for field in ["number_male", "number_female", "number_others"] {
            let row: GenderAgeRow =
                serde_json::from_value(json!({"age": 12, field: 3})).unwrap();
            assert_eq!(row.age, json!(12));
            assert_eq!(row.count, json!(3));
        }
    }

    #[test]
    fn missing_fields_default_to_null() {
        let row: GenderAgeRow = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.age, Value::Null);
        assert_eq!(row.count, Value::Null);
    }
}
