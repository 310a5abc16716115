//! Tests for covid19-model types.

use chrono::NaiveDate;
use covid19_model::{
    DataType, LocationType, StandardizedType, TidyRecord, split_location,
};

#[test]
fn tidy_record_serializes_with_wire_tags() {
    let record = TidyRecord {
        date: NaiveDate::from_ymd_opt(2020, 3, 1).expect("valid date"),
        location: "Alabama".to_string(),
        location_type: LocationType::State,
        location_standardized: "01".to_string(),
        location_standardized_type: StandardizedType::FipsCode,
        data_type: DataType::CasesTotal,
        value: Some(5.0),
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains("\"2020-03-01\""));
    assert!(json.contains("\"fips_code\""));
    assert!(json.contains("\"cases_total\""));

    let round: TidyRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn null_value_round_trips() {
    let record = TidyRecord {
        date: NaiveDate::from_ymd_opt(2020, 4, 15).expect("valid date"),
        location: "Unknown,Rhode Island".to_string(),
        location_type: LocationType::CountyState,
        location_standardized: String::new(),
        location_standardized_type: StandardizedType::FipsCode,
        data_type: DataType::DeathsTotal,
        value: None,
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains("\"value\":null"));
    let round: TidyRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round.value, None);
}

#[test]
fn compound_location_splits_on_the_delimiter() {
    let parts = split_location("Autauga,Alabama");
    assert_eq!(parts, vec!["Autauga", "Alabama"]);
}

#[test]
fn vocabulary_display_matches_as_str() {
    assert_eq!(DataType::DeathsTotal.to_string(), "deaths_total");
    assert_eq!(LocationType::CountyState.to_string(), "county_state");
    assert_eq!(StandardizedType::FipsCode.to_string(), "fips_code");
}
