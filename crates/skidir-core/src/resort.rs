//! Canonical ski resort record.
//!
//! Records are built once (by the normalizer or the embedded fallback list)
//! and never mutated afterwards. The serialized form is the camelCase shape
//! the directory has always exchanged (`skiableAcres`, `liftTicketPrice`, ...).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResortRecord {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub elevation: Elevation,
    pub lifts: Lifts,
    pub trails: Trails,
    pub skiable_acres: i64,
    pub snowmaking: Snowmaking,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_dates: Option<SeasonDates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift_ticket_price: Option<LiftTicketPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Elevations in feet.
///
/// `vertical` is carried as reported by the source; it is usually
/// `summit - base` but is never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elevation {
    pub base: i64,
    pub summit: i64,
    pub vertical: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifts {
    pub total: i64,
    pub chairlifts: i64,
    pub surface_lifts: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gondolas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funiculars: Option<i64>,
}

/// Trail counts by difficulty. The buckets are expected to sum to `total`
/// but source data is not validated against that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trails {
    pub total: i64,
    pub beginner: i64,
    pub intermediate: i64,
    pub advanced: i64,
    pub expert: i64,
}

impl Trails {
    /// Percentage of `total` represented by `count`, or `0.0` when the
    /// resort reports no trails.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, count: i64) -> f64 {
        if self.total <= 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snowmaking {
    /// Share of terrain covered by snowmaking, 0-100.
    pub percentage: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acres: Option<i64>,
}

/// Free-text season window ("November", "2025-11-07"); never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftTicketPrice {
    pub adult: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senior: Option<f64>,
}

impl ResortRecord {
    /// `"City, State"` when a city is known, otherwise just the state.
    #[must_use]
    pub fn display_location(&self) -> String {
        match self.location.city.as_deref().filter(|c| !c.is_empty()) {
            Some(city) => format!("{city}, {}", self.location.state),
            None => self.location.state.clone(),
        }
    }
}
