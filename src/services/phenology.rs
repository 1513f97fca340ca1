//! Bloom calendar and gap analysis over the plant catalog.
//!
//! Pure functions; the routes stamp timestamps on the results.

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::Plant;

/// A month needs at least this many blooming plants to not count as a gap.
pub const GAP_THRESHOLD: usize = 3;
const BEST_MONTHS: usize = 3;

const GAP_ADVICE: &str = "Consider adding early spring or late autumn plants";
const NO_GAP_ADVICE: &str = "Good coverage!";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: &'static str,
    pub common_name: &'static str,
    pub scientific_name: &'static str,
    pub color: &'static str,
    pub pollinators: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestMonth {
    pub month: u8,
    pub plant_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub monthly_coverage: BTreeMap<u8, usize>,
    pub gaps: Vec<u8>,
    pub best_months: Vec<BestMonth>,
    pub recommendations: &'static str,
}

/// Plants grouped under each month they bloom in. All twelve months are present.
#[must_use]
pub fn bloom_calendar(plants: &[Plant]) -> BTreeMap<u8, Vec<CalendarEntry>> {
    let mut calendar: BTreeMap<u8, Vec<CalendarEntry>> = (1..=12).map(|m| (m, Vec::new())).collect();
    for plant in plants {
        for month in plant.bloom_months {
            if let Some(entries) = calendar.get_mut(month) {
                entries.push(CalendarEntry {
                    id: plant.id,
                    common_name: plant.common_name,
                    scientific_name: plant.scientific_name,
                    color: plant.color,
                    pollinators: plant.pollinators,
                });
            }
        }
    }
    calendar
}

#[must_use]
pub fn monthly_coverage(plants: &[Plant]) -> BTreeMap<u8, usize> {
    (1..=12)
        .map(|month| (month, plants.iter().filter(|p| p.blooms_in(month)).count()))
        .collect()
}

#[must_use]
pub fn analyze_gaps(plants: &[Plant]) -> GapAnalysis {
    let monthly_coverage = monthly_coverage(plants);

    let gaps: Vec<u8> = monthly_coverage
        .iter()
        .filter(|&(_, &count)| count < GAP_THRESHOLD)
        .map(|(&month, _)| month)
        .collect();

    // Stable sort keeps earlier months first on ties.
    let mut ranked: Vec<BestMonth> = monthly_coverage
        .iter()
        .map(|(&month, &plant_count)| BestMonth { month, plant_count })
        .collect();
    ranked.sort_by(|a, b| b.plant_count.cmp(&a.plant_count));
    ranked.truncate(BEST_MONTHS);

    let recommendations = if gaps.is_empty() { NO_GAP_ADVICE } else { GAP_ADVICE };

    GapAnalysis { monthly_coverage, gaps, best_months: ranked, recommendations }
}

#[cfg(test)]
#[path = "phenology_test.rs"]
mod tests;
