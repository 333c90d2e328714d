//! Normalization of loosely shaped API payloads into [`ResortRecord`]s.
//!
//! Upstream sources disagree on naming: some send flat snake_case keys
//! (`base_elevation`), others nest values (`elevation.base`). Every canonical
//! field is resolved independently from an ordered list of candidate paths;
//! the first candidate holding a value of the expected JSON type wins, and a
//! field with no usable candidate takes its zero value. Nothing here fails.
//!
//! Numbers are only taken from JSON numbers. `"100"` is a string and falls
//! through to the next candidate (and eventually to `0`).

use std::collections::HashSet;

use serde_json::Value;
use skidir_core::{
    Coordinates, Elevation, LiftTicketPrice, Lifts, Location, ResortRecord, SeasonDates,
    Snowmaking, Trails,
};

/// Candidate key paths for one canonical field, in priority order.
type Candidates<'a> = &'a [&'a [&'a str]];

/// Normalizes an API response body into a list of resorts.
///
/// Accepts a bare array of resort objects or an object carrying that array
/// under `resorts`. Anything else yields an empty list. Records that resolve
/// to an empty `id` are given a positional `resort-<n>` id; when that id is
/// already used by another record, `n` is bumped until it is free.
#[must_use]
pub fn normalize_payload(payload: &Value) -> Vec<ResortRecord> {
    let list = payload.get("resorts").unwrap_or(payload);
    let Some(items) = list.as_array() else {
        return Vec::new();
    };

    let mut resorts: Vec<ResortRecord> = items.iter().map(normalize_resort).collect();
    let mut taken: HashSet<String> = resorts
        .iter()
        .filter(|r| !r.id.is_empty())
        .map(|r| r.id.clone())
        .collect();

    for (idx, resort) in resorts.iter_mut().enumerate() {
        if !resort.id.is_empty() {
            continue;
        }
        let mut n = idx + 1;
        while taken.contains(&format!("resort-{n}")) {
            n += 1;
        }
        resort.id = format!("resort-{n}");
        taken.insert(resort.id.clone());
    }
    resorts
}

/// Normalizes a single resort object. Non-object input produces a record
/// made entirely of defaults.
#[must_use]
pub fn normalize_resort(raw: &Value) -> ResortRecord {
    ResortRecord {
        id: string_or_empty(raw, &[&["id"], &["resort_id"]]),
        name: string_or_empty(raw, &[&["name"]]),
        location: normalize_location(raw),
        elevation: Elevation {
            base: int_or_zero(raw, &[&["base_elevation"], &["elevation", "base"]]),
            summit: int_or_zero(raw, &[&["summit_elevation"], &["elevation", "summit"]]),
            vertical: int_or_zero(raw, &[&["vertical_drop"], &["elevation", "vertical"]]),
        },
        lifts: Lifts {
            total: int_or_zero(raw, &[&["total_lifts"], &["lifts", "total"]]),
            chairlifts: int_or_zero(raw, &[&["chairlifts"], &["lifts", "chairlifts"]]),
            surface_lifts: int_or_zero(
                raw,
                &[
                    &["surface_lifts"],
                    &["lifts", "surface"],
                    &["lifts", "surfaceLifts"],
                ],
            ),
            gondolas: first_int(raw, &[&["gondolas"], &["lifts", "gondolas"]]),
            funiculars: first_int(raw, &[&["funiculars"], &["lifts", "funiculars"]]),
        },
        trails: Trails {
            total: int_or_zero(raw, &[&["total_trails"], &["trails", "total"]]),
            beginner: int_or_zero(raw, &[&["beginner_trails"], &["trails", "beginner"]]),
            intermediate: int_or_zero(
                raw,
                &[&["intermediate_trails"], &["trails", "intermediate"]],
            ),
            advanced: int_or_zero(raw, &[&["advanced_trails"], &["trails", "advanced"]]),
            expert: int_or_zero(raw, &[&["expert_trails"], &["trails", "expert"]]),
        },
        skiable_acres: int_or_zero(raw, &[&["skiable_acres"], &["acres"], &["skiableAcres"]]),
        snowmaking: Snowmaking {
            percentage: int_or_zero(
                raw,
                &[&["snowmaking_percentage"], &["snowmaking", "percentage"]],
            ),
            acres: first_int(raw, &[&["snowmaking_acres"], &["snowmaking", "acres"]]),
        },
        season_dates: normalize_season(raw),
        website: first_string(raw, &[&["website"], &["url"]]),
        phone_number: first_string(raw, &[&["phone"], &["phone_number"], &["phoneNumber"]]),
        description: first_string(raw, &[&["description"]]),
        amenities: string_array(raw, "amenities"),
        lift_ticket_price: normalize_ticket_price(raw),
    }
}

fn normalize_location(raw: &Value) -> Location {
    let latitude = first_float(
        raw,
        &[
            &["latitude"],
            &["coordinates", "latitude"],
            &["location", "coordinates", "latitude"],
        ],
    );
    let longitude = first_float(
        raw,
        &[
            &["longitude"],
            &["coordinates", "longitude"],
            &["location", "coordinates", "longitude"],
        ],
    );

    let coordinates = if latitude.is_some() || longitude.is_some() {
        Some(Coordinates {
            latitude: latitude.unwrap_or_default(),
            longitude: longitude.unwrap_or_default(),
        })
    } else {
        None
    };

    Location {
        state: string_or_empty(raw, &[&["state"], &["location", "state"]]),
        city: first_string(raw, &[&["city"], &["location", "city"]]),
        coordinates,
    }
}

fn normalize_season(raw: &Value) -> Option<SeasonDates> {
    let opening = first_string(
        raw,
        &[
            &["season_start"],
            &["season", "opening"],
            &["seasonDates", "opening"],
        ],
    );
    let closing = first_string(
        raw,
        &[
            &["season_end"],
            &["season", "closing"],
            &["seasonDates", "closing"],
        ],
    );

    if opening.is_none() && closing.is_none() {
        return None;
    }
    Some(SeasonDates { opening, closing })
}

fn normalize_ticket_price(raw: &Value) -> Option<LiftTicketPrice> {
    let adult = first_float(
        raw,
        &[
            &["adult_ticket_price"],
            &["pricing", "adult"],
            &["liftTicketPrice", "adult"],
        ],
    );
    let child = first_float(
        raw,
        &[
            &["child_ticket_price"],
            &["pricing", "child"],
            &["liftTicketPrice", "child"],
        ],
    );
    let senior = first_float(
        raw,
        &[
            &["senior_ticket_price"],
            &["pricing", "senior"],
            &["liftTicketPrice", "senior"],
        ],
    );

    if adult.is_none() && child.is_none() && senior.is_none() {
        return None;
    }
    Some(LiftTicketPrice {
        adult: adult.unwrap_or_default(),
        child,
        senior,
    })
}

// ---------------------------------------------------------------------------
// Field resolution helpers
// ---------------------------------------------------------------------------

/// Walks `path` through nested objects. Any non-object along the way ends
/// the walk with `None`.
fn lookup<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(raw, |current, key| current.as_object()?.get(*key))
}

fn first_match<'a, T>(
    raw: &'a Value,
    candidates: Candidates<'_>,
    accept: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    candidates
        .iter()
        .find_map(|path| lookup(raw, path).and_then(&accept))
}

/// Integral JSON numbers are taken as-is; fractional ones are truncated
/// toward zero.
#[allow(clippy::cast_possible_truncation)]
fn as_int(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
}

fn first_int(raw: &Value, candidates: Candidates<'_>) -> Option<i64> {
    first_match(raw, candidates, as_int)
}

fn int_or_zero(raw: &Value, candidates: Candidates<'_>) -> i64 {
    first_int(raw, candidates).unwrap_or(0)
}

fn first_float(raw: &Value, candidates: Candidates<'_>) -> Option<f64> {
    first_match(raw, candidates, Value::as_f64)
}

fn first_string(raw: &Value, candidates: Candidates<'_>) -> Option<String> {
    first_match(raw, candidates, |v| v.as_str().map(str::to_owned))
}

fn string_or_empty(raw: &Value, candidates: Candidates<'_>) -> String {
    first_string(raw, candidates).unwrap_or_default()
}

fn string_array(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
