//! Competitiveness aggregation over an origin's outbound routes.
//!
//! Given an origin, the engine compares each destination's road baseline cost
//! against the cheapest of the four alternative carriers, classifies
//! destinations whose economy reaches the competitive threshold, and
//! summarises coverage, means, a ranking, strategic corridors, and BR-319
//! cost alerts.

use tracing::{debug, trace};

use crate::domain::{Carrier, RouteRecord, columns};
use crate::store::RowStore;

use super::config::EngineConfig;
use super::summary::{
    CarrierValues, CompetitivenessSummary, Corridor, Mean, SampleCounts, TopEconomyEntry,
    min_present,
};

/// Error from competitiveness analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompetitivenessError {
    /// No origin matched exactly or by substring
    #[error("origin not found: {origin}")]
    OriginNotFound { origin: String },

    /// The dataset lacks a column the analysis depends on
    #[error("required column missing from dataset: {column}")]
    MissingColumn { column: &'static str },
}

/// Derived metrics for one row with a usable baseline cost.
#[derive(Debug)]
struct RowMetrics<'a> {
    record: &'a RouteRecord,
    economy_pct: Option<f64>,
    co2_delta: Option<f64>,
    time_delta: Option<f64>,
    br319_pct: Option<f64>,
    transit_times: CarrierValues,
    emissions: CarrierValues,
}

/// Map non-finite values to missing.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Rows whose origin matches the query.
///
/// Exact (normalized) match first; if nothing matches, substring containment.
/// Dataset order is preserved and there is no ranking among matches.
pub fn resolve_origin<'a>(store: &'a RowStore, origin: &str) -> Vec<&'a RouteRecord> {
    let needle = normalize(origin);

    let exact: Vec<_> = store
        .rows()
        .iter()
        .filter(|r| normalize(&r.origin_name) == needle)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    store
        .rows()
        .iter()
        .filter(|r| normalize(&r.origin_name).contains(&needle))
        .collect()
}

/// Compute derived metrics, or `None` when the baseline cost is unusable.
fn row_metrics(record: &RouteRecord) -> Option<RowMetrics<'_>> {
    let baseline_cost = finite(record.cost_baseline).filter(|c| *c > 0.0)?;

    let best_cost = min_present(
        Carrier::ALL
            .iter()
            .map(|c| finite(record.carrier_cost(*c))),
    );
    let economy_pct = best_cost.map(|alt| (baseline_cost - alt) / baseline_cost * 100.0);

    let emissions = CarrierValues::collect(
        record.emission_baseline,
        record,
        RouteRecord::carrier_emission,
        finite,
    );
    let transit_times = CarrierValues::collect(
        record.transit_baseline,
        record,
        RouteRecord::carrier_transit_time,
        finite,
    );

    let co2_delta = match (emissions.baseline, emissions.best_carrier()) {
        (Some(base), Some(best)) => Some(base - best),
        _ => None,
    };
    let time_delta = match (transit_times.best_carrier(), transit_times.baseline) {
        (Some(best), Some(base)) => Some(best - base),
        _ => None,
    };

    let br319_pct = match (finite(record.original_cost), finite(record.with_br319_cost)) {
        (Some(original), Some(with)) if original > 0.0 => Some((original - with) / original * 100.0),
        _ => None,
    };

    Some(RowMetrics {
        record,
        economy_pct,
        co2_delta,
        time_delta,
        br319_pct,
        transit_times,
        emissions,
    })
}

/// Analyse how competitive alternative carriers are from `origin`.
///
/// Fails if the origin matches nothing, or if the dataset is missing a column
/// the analysis needs. An origin whose rows all lack a usable baseline cost
/// yields [`CompetitivenessSummary::empty`].
pub fn compute_competitiveness(
    store: &RowStore,
    origin: &str,
    config: &EngineConfig,
) -> Result<CompetitivenessSummary, CompetitivenessError> {
    let matched = resolve_origin(store, origin);
    if matched.is_empty() {
        return Err(CompetitivenessError::OriginNotFound {
            origin: origin.to_string(),
        });
    }
    let matched_count = matched.len();

    if let Some(column) = store.schema().first_missing(&columns::ENGINE_REQUIRED) {
        return Err(CompetitivenessError::MissingColumn { column });
    }

    let valid: Vec<RowMetrics<'_>> = matched
        .into_iter()
        .take(config.max_rows)
        .filter_map(row_metrics)
        .collect();

    debug!(
        origin,
        matched = matched_count,
        valid = valid.len(),
        "competitiveness rows selected"
    );

    if valid.is_empty() {
        return Ok(CompetitivenessSummary::empty());
    }

    let is_competitive = |m: &RowMetrics<'_>| {
        m.economy_pct
            .is_some_and(|e| e >= config.competitive_threshold_pct)
    };

    let mut economy = Mean::default();
    let mut co2 = Mean::default();
    let mut time = Mean::default();
    let mut competitive = 0usize;
    let mut corridors = Vec::new();

    for m in valid.iter().filter(|m| is_competitive(*m)) {
        competitive += 1;
        economy.push(m.economy_pct);
        co2.push(m.co2_delta);
        time.push(m.time_delta);

        if m.co2_delta.is_some_and(|d| d >= config.corridor_min_co2_kg) {
            trace!(destination = %m.record.destination_name, "strategic corridor");
            corridors.push(Corridor {
                destination_name: m.record.destination_name.clone(),
                destination_uf: m.record.destination_uf.clone(),
                economy_pct: m.economy_pct.unwrap_or_default(),
                transit_times: m.transit_times,
                emissions: m.emissions,
            });
        }
    }

    let total = valid.len();
    let coverage_pct = competitive as f64 / total as f64 * 100.0;

    let (alert_count, alert_examples) = br319_alerts(&valid, config);

    Ok(CompetitivenessSummary {
        coverage_pct,
        mean_economy_pct: economy.or_zero(),
        mean_co2_delta: co2.or_zero(),
        mean_time_delta: time.or_zero(),
        total_destinations: total,
        competitive_destinations: competitive,
        top_economy: top_economy(&valid, config.top_n),
        corridors,
        br319_alert_count: alert_count,
        br319_alert_examples: alert_examples,
        samples: SampleCounts {
            economy: economy.count(),
            co2: co2.count(),
            time: time.count(),
        },
    })
}

/// The `n` highest-economy rows, descending, ties in dataset order.
fn top_economy(valid: &[RowMetrics<'_>], n: usize) -> Vec<TopEconomyEntry> {
    let mut ranked: Vec<(&RowMetrics<'_>, f64)> = valid
        .iter()
        .filter_map(|m| m.economy_pct.map(|e| (m, e)))
        .collect();

    // Stable sort keeps dataset order among equal economies.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(m, economy_pct)| TopEconomyEntry {
            destination_name: m.record.destination_name.clone(),
            destination_uf: m.record.destination_uf.clone(),
            economy_pct,
        })
        .collect()
}

/// Count BR-319 alerts over all valid rows and name the first few.
fn br319_alerts(valid: &[RowMetrics<'_>], config: &EngineConfig) -> (usize, Vec<String>) {
    let alerts: Vec<&RowMetrics<'_>> = valid
        .iter()
        .filter(|m| m.br319_pct.is_some_and(|p| p > config.alert_threshold_pct))
        .collect();

    let examples = alerts
        .iter()
        .take(config.alert_examples)
        .map(|m| m.record.destination_name.clone())
        .collect();

    (alerts.len(), examples)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
