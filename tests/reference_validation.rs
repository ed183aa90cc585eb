//! Validate event timestamps against precomputed reference data.

#![cfg(feature = "chrono")]

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use solar_twilight::{event, HalfDay, SunAltitudeThreshold};
use std::error::Error;
use std::fs::File;

/// Allowed deviation, covering truncation to whole seconds.
const TOLERANCE_SECONDS: i64 = 1;

#[derive(Debug)]
struct ReferenceRecord {
    location: String,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    date: NaiveDate,
    threshold: SunAltitudeThreshold,
    half_day: HalfDay,
    expected: Option<NaiveDateTime>,
}

impl ReferenceRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        let threshold = match &record[5] {
            "official" => SunAltitudeThreshold::Official,
            "civil" => SunAltitudeThreshold::Civil,
            "nautical" => SunAltitudeThreshold::Nautical,
            "astronomical" => SunAltitudeThreshold::Astronomical,
            "golden_hour_above" => SunAltitudeThreshold::GoldenHourAbove,
            "golden_hour_below" => SunAltitudeThreshold::GoldenHourBelow,
            other => return Err(format!("unknown threshold {other}").into()),
        };
        let half_day = match &record[6] {
            "morning" => HalfDay::Morning,
            "evening" => HalfDay::Evening,
            other => return Err(format!("unknown half day {other}").into()),
        };
        let expected = match &record[7] {
            "none" => None,
            value => Some(value.parse()?),
        };

        Ok(Self {
            location: record[0].to_string(),
            latitude: record[1].parse()?,
            longitude: record[2].parse()?,
            utc_offset_hours: record[3].parse()?,
            date: record[4].parse()?,
            threshold,
            half_day,
            expected,
        })
    }
}

fn load_records() -> Result<Vec<ReferenceRecord>, Box<dyn Error>> {
    let file = File::open("tests/data/reference_times.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(ReferenceRecord::from_csv_record(&result?)?);
    }
    Ok(records)
}

#[test]
fn test_event_timestamps_against_reference_data() -> Result<(), Box<dyn Error>> {
    let records = load_records()?;
    assert!(records.len() > 500, "loaded {} records", records.len());

    let mut max_error = 0_i64;
    for record in &records {
        let offset = FixedOffset::east_opt((record.utc_offset_hours * 3600.0) as i32)
            .ok_or("invalid offset")?;
        let actual = event::event_timestamp(
            record.latitude,
            record.longitude,
            record.date,
            record.threshold,
            record.half_day,
            &offset,
        )?;

        match (record.expected, actual) {
            (None, None) => {}
            (Some(expected), Some(actual)) => {
                let error = actual.signed_duration_since(expected).num_seconds().abs();
                max_error = max_error.max(error);
                assert!(
                    error <= TOLERANCE_SECONDS,
                    "{} {} {:?} {:?}: expected {expected}, got {actual}",
                    record.location,
                    record.date,
                    record.threshold,
                    record.half_day
                );
            }
            (expected, actual) => panic!(
                "{} {} {:?} {:?}: expected {expected:?}, got {actual:?}",
                record.location, record.date, record.threshold, record.half_day
            ),
        }
    }

    println!(
        "Validated {} reference crossings, max error {max_error}s",
        records.len()
    );
    Ok(())
}

#[test]
fn test_reference_data_covers_polar_cases() -> Result<(), Box<dyn Error>> {
    let records = load_records()?;
    let absent = records.iter().filter(|r| r.expected.is_none()).count();
    assert!(absent > 0);
    assert!(records
        .iter()
        .filter(|r| r.location == "Greenland" && r.date.to_string() == "2024-06-21")
        .all(|r| r.expected.is_none()));
    Ok(())
}
