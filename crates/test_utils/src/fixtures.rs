//! Common test fixtures
//!
//! Canonical values used across the test suite so individual tests only
//! spell out what they are actually about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Geometry fixtures
pub struct GeoFixtures;

impl GeoFixtures {
    /// A unit-square GeoJSON Polygon Feature
    pub fn square_field() -> Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]
                ]]
            }
        })
    }

    /// A second, distinct field polygon
    pub fn triangle_field() -> Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [10.0, 10.0], [12.0, 10.0], [11.0, 12.0], [10.0, 10.0]
                ]]
            }
        })
    }

    /// A GeoJSON value that is not a Polygon Feature
    pub fn point_feature() -> Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        })
    }
}

/// Monetary fixtures
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical field premium
    pub fn premium() -> Decimal {
        dec!(1200)
    }

    /// A typical claim amount
    pub fn claim_amount() -> Decimal {
        dec!(500)
    }
}

/// Temporal fixtures
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A loss date within the current season
    pub fn loss_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }
}
