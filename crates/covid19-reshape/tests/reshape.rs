//! Integration tests for the wide-to-long melt.

use chrono::NaiveDate;
use covid19_model::{DataType, LocationType, StandardizedType, split_location};
use covid19_reshape::{
    Column, ColumnKind, ReshapeError, WideTable, county_config, reshape, reshape_counties,
    reshape_states, state_config,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn state_table() -> WideTable {
    WideTable::new(vec![
        Column::date("date", vec![date(2020, 3, 1), date(2020, 3, 2)]),
        Column::text(
            "state",
            vec!["Alabama".to_string(), "Alaska".to_string()],
        ),
        Column::text("fips", vec!["01".to_string(), "02".to_string()]),
        Column::number("cases", vec![Some(5.0), Some(1.0)]),
        Column::number("deaths", vec![Some(0.0), None]),
    ])
}

fn county_table() -> WideTable {
    WideTable::new(vec![
        Column::date("date", vec![date(2020, 3, 24)]),
        Column::text("county", vec!["Autauga".to_string()]),
        Column::text("state", vec!["Alabama".to_string()]),
        Column::text("fips", vec!["01001".to_string()]),
        Column::number("cases", vec![Some(1.0)]),
        Column::number("deaths", vec![Some(0.0)]),
    ])
}

#[test]
fn output_length_is_rows_times_metrics() {
    let records = reshape_states(&state_table()).expect("reshape states");
    assert_eq!(records.len(), 2 * 2);
}

#[test]
fn records_from_one_row_share_everything_but_the_metric() {
    let records = reshape_states(&state_table()).expect("reshape states");
    let (first, second) = (&records[0], &records[1]);
    assert_eq!(first.date, second.date);
    assert_eq!(first.location, second.location);
    assert_eq!(first.location_type, second.location_type);
    assert_eq!(first.location_standardized, second.location_standardized);
    assert_eq!(
        first.location_standardized_type,
        second.location_standardized_type
    );
    assert_ne!(first.data_type, second.data_type);
}

#[test]
fn state_end_to_end_example() {
    let records = reshape_states(&state_table()).expect("reshape states");
    assert_eq!(records[0].date, date(2020, 3, 1));
    assert_eq!(records[0].location, "Alabama");
    assert_eq!(records[0].location_type, LocationType::State);
    assert_eq!(records[0].location_standardized, "01");
    assert_eq!(
        records[0].location_standardized_type,
        StandardizedType::FipsCode
    );
    assert_eq!(records[0].data_type, DataType::CasesTotal);
    assert_eq!(records[0].value, Some(5.0));

    assert_eq!(records[1].data_type, DataType::DeathsTotal);
    assert_eq!(records[1].value, Some(0.0));
}

#[test]
fn county_location_is_comma_joined() {
    let records = reshape_counties(&county_table()).expect("reshape counties");
    assert_eq!(records[0].location, "Autauga,Alabama");
    assert_eq!(records[0].location_type, LocationType::CountyState);
}

#[test]
fn county_location_round_trips_through_split() {
    let records = reshape_counties(&county_table()).expect("reshape counties");
    assert_eq!(
        split_location(&records[0].location),
        vec!["Autauga", "Alabama"]
    );
}

#[test]
fn fips_codes_keep_leading_zeros() {
    let records = reshape_counties(&county_table()).expect("reshape counties");
    assert_eq!(records[0].location_standardized, "01001");

    let records = reshape_states(&state_table()).expect("reshape states");
    assert_eq!(records[2].location_standardized, "02");
}

#[test]
fn null_metric_values_pass_through() {
    let records = reshape_states(&state_table()).expect("reshape states");
    // Second row's deaths cell is null; the record is still emitted.
    assert_eq!(records[3].data_type, DataType::DeathsTotal);
    assert_eq!(records[3].value, None);
}

#[test]
fn output_order_follows_rows_then_declared_metrics() {
    let records = reshape_states(&state_table()).expect("reshape states");
    let order: Vec<(&str, DataType)> = records
        .iter()
        .map(|record| (record.location.as_str(), record.data_type))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Alabama", DataType::CasesTotal),
            ("Alabama", DataType::DeathsTotal),
            ("Alaska", DataType::CasesTotal),
            ("Alaska", DataType::DeathsTotal),
        ]
    );
}

#[test]
fn missing_column_fails_with_zero_records() {
    // No `fips` column.
    let table = WideTable::new(vec![
        Column::date("date", vec![date(2020, 3, 1)]),
        Column::text("state", vec!["Alabama".to_string()]),
        Column::number("cases", vec![Some(5.0)]),
        Column::number("deaths", vec![Some(0.0)]),
    ]);
    let result = reshape_states(&table);
    assert_eq!(
        result,
        Err(ReshapeError::SchemaMismatch {
            column: "fips".to_string(),
            kind: ColumnKind::Text,
        })
    );
}

#[test]
fn state_config_applied_to_county_table_still_reshapes_states_only() {
    // The county table has a `state` column, so the state configuration
    // resolves against it; the county column is simply ignored.
    let records = reshape(&county_table(), &state_config()).expect("reshape");
    assert_eq!(records[0].location, "Alabama");
    assert_eq!(records[0].location_type, LocationType::State);
}

#[test]
fn county_config_requires_the_county_column() {
    let result = reshape(&state_table(), &county_config());
    assert_eq!(
        result,
        Err(ReshapeError::SchemaMismatch {
            column: "county".to_string(),
            kind: ColumnKind::Text,
        })
    );
}

#[test]
fn empty_table_produces_empty_output() {
    let table = WideTable::new(vec![
        Column::date("date", vec![]),
        Column::text("state", vec![]),
        Column::text("fips", vec![]),
        Column::number("cases", vec![]),
        Column::number("deaths", vec![]),
    ]);
    let records = reshape_states(&table).expect("reshape states");
    assert!(records.is_empty());
}
