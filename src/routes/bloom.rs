//! Bloom data routes: plant catalog with live occurrence counts, calendar, gaps.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use futures::future::join_all;
use serde::Serialize;
use serde_json::json;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::services::catalog::{self, Plant};
use crate::services::occurrence::{Location, OccurrenceSource};
use crate::services::phenology;
use crate::state::AppState;

const REGION: &str = "Sweden";
const DATA_SOURCE: &str = "GBIF + iNaturalist APIs (real-time)";
const SAMPLE_LOCATIONS: usize = 10;

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSummary {
    #[serde(flatten)]
    pub plant: Plant,
    pub id: &'static str,
    pub bloom_start: u8,
    pub bloom_end: u8,
    pub gbif_occurrences: u64,
    #[serde(rename = "iNaturalistObs")]
    pub inaturalist_obs: u64,
    pub sample_locations: Vec<Location>,
    pub data_freshness: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantsMetadata {
    pub timestamp: String,
    pub region: &'static str,
    pub plant_count: usize,
    pub data_source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlantsResponse {
    pub metadata: PlantsMetadata,
    pub plants: Vec<PlantSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetail {
    #[serde(flatten)]
    pub plant: Plant,
    pub id: &'static str,
    pub gbif_occurrences: u64,
    #[serde(rename = "iNaturalistObs")]
    pub inaturalist_obs: u64,
    pub locations: Vec<Location>,
    pub data_freshness: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/plants`: every catalog plant with live occurrence data.
pub async fn list_plants(State(state): State<AppState>) -> Json<PlantsResponse> {
    let plants = join_all(
        catalog::plants()
            .iter()
            .map(|plant| summarize(state.occurrences.as_ref(), plant)),
    )
    .await;

    Json(PlantsResponse {
        metadata: PlantsMetadata {
            timestamp: now_rfc3339(),
            region: REGION,
            plant_count: plants.len(),
            data_source: DATA_SOURCE,
        },
        plants,
    })
}

/// `GET /api/plant/{id}`: one plant with all sampled locations.
pub async fn get_plant(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(plant) = catalog::find(&id) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Plant not found" }))).into_response();
    };

    let (gbif, inat) = futures::join!(
        state.occurrences.gbif(plant.scientific_name),
        state.occurrences.inaturalist(plant.scientific_name)
    );

    Json(PlantDetail {
        plant: *plant,
        id: plant.id,
        gbif_occurrences: gbif.count,
        inaturalist_obs: inat.count,
        locations: gbif.locations,
        data_freshness: now_rfc3339(),
    })
    .into_response()
}

/// `GET /api/calendar`: plants grouped by bloom month.
pub async fn calendar() -> Json<serde_json::Value> {
    Json(json!({
        "calendar": phenology::bloom_calendar(catalog::plants()),
        "timestamp": now_rfc3339(),
    }))
}

/// `GET /api/gaps`: months with thin bloom coverage.
pub async fn gaps() -> Json<serde_json::Value> {
    let analysis = phenology::analyze_gaps(catalog::plants());
    Json(json!({
        "monthlyCoverage": analysis.monthly_coverage,
        "gaps": analysis.gaps,
        "bestMonths": analysis.best_months,
        "recommendations": analysis.recommendations,
        "timestamp": now_rfc3339(),
    }))
}

// =============================================================================
// HELPERS
// =============================================================================

async fn summarize(occurrences: &dyn OccurrenceSource, plant: &'static Plant) -> PlantSummary {
    let (gbif, inat) = futures::join!(
        occurrences.gbif(plant.scientific_name),
        occurrences.inaturalist(plant.scientific_name)
    );

    let mut sample_locations = gbif.locations;
    sample_locations.truncate(SAMPLE_LOCATIONS);

    PlantSummary {
        plant: *plant,
        id: plant.id,
        bloom_start: plant.bloom_start(),
        bloom_end: plant.bloom_end(),
        gbif_occurrences: gbif.count,
        inaturalist_obs: inat.count,
        sample_locations,
        data_freshness: now_rfc3339(),
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "bloom_test.rs"]
mod tests;
