//! Search term and filter evaluation over resort records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resort::ResortRecord;

/// Optional narrowing criteria. Every `None` field is "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_elevation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_elevation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lifts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_trails: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_skiable_acres: Option<i64>,
}

impl SearchFilters {
    /// `true` when no field constrains the result set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().is_none()
            && self.min_elevation.is_none()
            && self.max_elevation.is_none()
            && self.min_lifts.is_none()
            && self.min_trails.is_none()
            && self.min_skiable_acres.is_none()
    }

    /// The state constraint, treating an empty string as absent.
    fn state(&self) -> Option<&str> {
        self.state.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `true` if `resort` satisfies the search term and every
    /// present filter.
    ///
    /// The search term matches case-insensitively as a substring of the
    /// name, city, or state. An empty term matches everything.
    #[must_use]
    pub fn matches(&self, resort: &ResortRecord, search_term: &str) -> bool {
        matches_term(resort, search_term)
            && self
                .state()
                .is_none_or(|s| resort.location.state.to_lowercase() == s.to_lowercase())
            && self
                .min_elevation
                .is_none_or(|min| resort.elevation.summit >= min)
            && self
                .max_elevation
                .is_none_or(|max| resort.elevation.summit <= max)
            && self.min_lifts.is_none_or(|min| resort.lifts.total >= min)
            && self.min_trails.is_none_or(|min| resort.trails.total >= min)
            && self
                .min_skiable_acres
                .is_none_or(|min| resort.skiable_acres >= min)
    }
}

fn matches_term(resort: &ResortRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    resort.name.to_lowercase().contains(&needle)
        || resort
            .location
            .city
            .as_deref()
            .is_some_and(|city| city.to_lowercase().contains(&needle))
        || resort.location.state.to_lowercase().contains(&needle)
}

/// Keeps the resorts that match, preserving their relative order.
#[must_use]
pub fn filter_resorts(
    resorts: &[ResortRecord],
    search_term: &str,
    filters: &SearchFilters,
) -> Vec<ResortRecord> {
    resorts
        .iter()
        .filter(|r| filters.matches(r, search_term))
        .cloned()
        .collect()
}

/// Distinct non-empty states with the number of resorts in each, sorted by
/// state name.
#[must_use]
pub fn distinct_states(resorts: &[ResortRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for resort in resorts {
        let state = resort.location.state.as_str();
        if !state.is_empty() {
            *counts.entry(state).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(state, n)| (state.to_string(), n))
        .collect()
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
