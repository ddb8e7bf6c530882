//! Data transfer objects for web requests and responses.
//!
//! Numeric analysis results are rounded to one decimal place here, and only
//! here.

use serde::{Deserialize, Serialize};

use crate::competitiveness::{CompetitivenessSummary, Corridor, TopEconomyEntry};
use crate::domain::RouteRecord;
use crate::store::RouteMatch;

/// Request for an exact route lookup.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin city name, exactly as listed by `/cities`
    pub origin: String,

    /// Destination city name, exactly as listed by `/cities`
    pub destination: String,
}

/// A route record with coordinates of both ends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    #[serde(flatten)]
    pub route: RouteRecord,
    pub origin_lat: Option<f64>,
    pub origin_lon: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lon: Option<f64>,
}

/// Response for a route lookup.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether the route was found
    pub success: bool,

    /// Explanation when not found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The route, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<RouteInfo>,
}

/// Response listing all cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// Request for competitiveness analysis.
#[derive(Debug, Deserialize)]
pub struct CompetitivenessRequest {
    /// Origin city; case-insensitive, partial names allowed
    #[serde(default)]
    pub origin: String,
}

/// Competitiveness summary for an origin.
#[derive(Debug, Serialize)]
pub struct CompetitivenessResponse {
    /// Share of destinations where an alternative carrier is competitive (%)
    pub abrangencia: f64,

    /// Mean economy over competitive destinations (%)
    pub economia_media: f64,

    /// Mean CO₂ reduction over competitive destinations (kg)
    pub co2_media: f64,

    /// Mean transit time difference over competitive destinations (hours)
    pub tempo_medio: f64,

    pub total_destinos: usize,
    pub destinos_competitivos: usize,
    pub top_economia: Vec<TopEconomiaResult>,
    pub corredores: Vec<CorredorResult>,
    pub alerta_br319_count: usize,
    pub alerta_br319_exemplos: Vec<String>,

    /// Rows behind each mean
    pub amostras: AmostrasResult,
}

/// Entry of the top-economy ranking.
#[derive(Debug, Serialize)]
pub struct TopEconomiaResult {
    #[serde(rename = "destinationName")]
    pub destination_name: String,
    #[serde(rename = "destinationUf")]
    pub destination_uf: Option<String>,
    pub economia_pct: f64,
}

/// A strategic corridor.
#[derive(Debug, Serialize)]
pub struct CorredorResult {
    #[serde(rename = "destinationName")]
    pub destination_name: String,
    #[serde(rename = "destinationUf")]
    pub destination_uf: Option<String>,
    pub economia_pct: f64,

    #[serde(rename = "pathTransitTimeWithoutBR319")]
    pub transit_baseline: Option<f64>,
    #[serde(rename = "pathTransitTimeAL")]
    pub transit_al: Option<f64>,
    #[serde(rename = "pathTransitTimeLG")]
    pub transit_lg: Option<f64>,
    #[serde(rename = "pathTransitTimeML")]
    pub transit_ml: Option<f64>,
    #[serde(rename = "pathTransitTimeNC")]
    pub transit_nc: Option<f64>,

    #[serde(rename = "pathEmissionWithoutBR319")]
    pub emission_baseline: Option<f64>,
    #[serde(rename = "pathEmissionAL")]
    pub emission_al: Option<f64>,
    #[serde(rename = "pathEmissionLG")]
    pub emission_lg: Option<f64>,
    #[serde(rename = "pathEmissionML")]
    pub emission_ml: Option<f64>,
    #[serde(rename = "pathEmissionNC")]
    pub emission_nc: Option<f64>,
}

/// Sample counts behind the means.
#[derive(Debug, Serialize)]
pub struct AmostrasResult {
    pub economia: usize,
    pub co2: usize,
    pub tempo: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error kind
    pub code: &'static str,
}

// Conversion implementations

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round1_opt(value: Option<f64>) -> Option<f64> {
    value.map(round1)
}

impl RouteInfo {
    /// Create from an enriched route.
    pub fn from_match(m: &RouteMatch<'_>) -> Self {
        Self {
            route: m.record.clone(),
            origin_lat: m.origin.map(|c| c.latitude),
            origin_lon: m.origin.map(|c| c.longitude),
            destination_lat: m.destination.map(|c| c.latitude),
            destination_lon: m.destination.map(|c| c.longitude),
        }
    }
}

impl RouteResponse {
    pub fn found(info: RouteInfo) -> Self {
        Self {
            success: true,
            message: None,
            info: Some(info),
        }
    }

    pub fn not_found(origin: &str, destination: &str) -> Self {
        Self {
            success: false,
            message: Some(format!("Route not found: {origin} → {destination}")),
            info: None,
        }
    }
}

impl CompetitivenessResponse {
    /// Create from a domain summary, rounding at this boundary.
    pub fn from_summary(summary: &CompetitivenessSummary) -> Self {
        Self {
            abrangencia: round1(summary.coverage_pct),
            economia_media: round1(summary.mean_economy_pct),
            co2_media: round1(summary.mean_co2_delta),
            tempo_medio: round1(summary.mean_time_delta),
            total_destinos: summary.total_destinations,
            destinos_competitivos: summary.competitive_destinations,
            top_economia: summary
                .top_economy
                .iter()
                .map(TopEconomiaResult::from_entry)
                .collect(),
            corredores: summary
                .corridors
                .iter()
                .map(CorredorResult::from_corridor)
                .collect(),
            alerta_br319_count: summary.br319_alert_count,
            alerta_br319_exemplos: summary.br319_alert_examples.clone(),
            amostras: AmostrasResult {
                economia: summary.samples.economy,
                co2: summary.samples.co2,
                tempo: summary.samples.time,
            },
        }
    }
}

impl TopEconomiaResult {
    pub fn from_entry(entry: &TopEconomyEntry) -> Self {
        Self {
            destination_name: entry.destination_name.clone(),
            destination_uf: entry.destination_uf.clone(),
            economia_pct: round1(entry.economy_pct),
        }
    }
}

impl CorredorResult {
    pub fn from_corridor(c: &Corridor) -> Self {
        Self {
            destination_name: c.destination_name.clone(),
            destination_uf: c.destination_uf.clone(),
            economia_pct: round1(c.economy_pct),
            transit_baseline: round1_opt(c.transit_times.baseline),
            transit_al: round1_opt(c.transit_times.al),
            transit_lg: round1_opt(c.transit_times.lg),
            transit_ml: round1_opt(c.transit_times.ml),
            transit_nc: round1_opt(c.transit_times.nc),
            emission_baseline: round1_opt(c.emissions.baseline),
            emission_al: round1_opt(c.emissions.al),
            emission_lg: round1_opt(c.emissions.lg),
            emission_ml: round1_opt(c.emissions.ml),
            emission_nc: round1_opt(c.emissions.nc),
        }
    }
}
