//! Shared fixtures for the wiremap integration tests.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use wiremap::mapping::profile;
use wiremap::mapping::ValidatedRegistry;
use wiremap::{BaseModel, DetailModel, InnerModel};

/// Builds the frozen default registry; panics if the shipped profile is
/// broken, which should fail every dependent test loudly.
pub fn build_registry() -> ValidatedRegistry {
    profile::build().expect("default profile must validate")
}

pub fn unix_epoch() -> DateTime<FixedOffset> {
    Utc.timestamp_opt(0, 0)
        .unwrap()
        .with_timezone(&FixedOffset::east_opt(0).unwrap())
}

/// Inner value object with every scalar at its zero point, matching the
/// golden wire strings.
pub fn zeroed_inner() -> InnerModel {
    InnerModel {
        guid_property: Uuid::nil(),
        string_property: "inner".to_string(),
        date_only_property: NaiveDate::from_ymd_opt(1, 1, 1).expect("valid date"),
        date_time_offset_property: unix_epoch(),
    }
}

pub fn sample_inner() -> InnerModel {
    InnerModel {
        guid_property: Uuid::new_v4(),
        string_property: "inner".to_string(),
        date_only_property: NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date"),
        date_time_offset_property: unix_epoch(),
    }
}

pub fn sample_base(detail: DetailModel) -> BaseModel {
    BaseModel {
        int_property: 1,
        string_property: "base".to_string(),
        inner_property: Some(sample_inner()),
        derived_property: Some(detail),
    }
}

/// Outer object populated exactly like the golden-file scenarios: all
/// identifiers nil, dates at their zero points.
pub fn golden_base(detail: DetailModel) -> BaseModel {
    BaseModel {
        int_property: 1,
        string_property: "base".to_string(),
        inner_property: Some(zeroed_inner()),
        derived_property: Some(detail),
    }
}
