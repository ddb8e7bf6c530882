//! Output of competitiveness analysis.
//!
//! Values here are unrounded. Rounding to one decimal happens in the web DTOs.

use crate::domain::{Carrier, RouteRecord};

/// Aggregate view of how alternative carriers compare to road from one origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompetitivenessSummary {
    /// Share of valid destinations that are competitive (percent).
    pub coverage_pct: f64,

    /// Mean economy over competitive destinations (percent).
    pub mean_economy_pct: f64,

    /// Mean CO₂ reduction over competitive destinations (kg).
    /// Positive means the best carrier emits less than road.
    pub mean_co2_delta: f64,

    /// Mean transit time difference over competitive destinations (hours).
    /// Positive means the best carrier is slower than road.
    pub mean_time_delta: f64,

    /// Destinations with a usable baseline cost.
    pub total_destinations: usize,

    /// Destinations classified as competitive.
    pub competitive_destinations: usize,

    /// Highest-economy destinations, best first.
    pub top_economy: Vec<TopEconomyEntry>,

    /// Competitive destinations with a large CO₂ reduction.
    pub corridors: Vec<Corridor>,

    /// Routes where using BR-319 changes cost beyond the alert threshold.
    pub br319_alert_count: usize,

    /// First few alert destinations, in dataset order.
    pub br319_alert_examples: Vec<String>,

    /// How many rows each mean was computed over.
    pub samples: SampleCounts,
}

impl CompetitivenessSummary {
    /// The summary for an origin with no usable rows.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Sample counts behind each mean, so a zero mean from no data can be told
/// apart from a computed zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleCounts {
    pub economy: usize,
    pub co2: usize,
    pub time: usize,
}

/// An entry of the top-economy ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct TopEconomyEntry {
    pub destination_name: String,
    pub destination_uf: Option<String>,
    pub economy_pct: f64,
}

/// A strategic corridor.
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    pub destination_name: String,
    pub destination_uf: Option<String>,
    pub economy_pct: f64,
    /// Transit times (hours).
    pub transit_times: CarrierValues,
    /// CO₂ emissions (kg).
    pub emissions: CarrierValues,
}

/// One metric for the road baseline and each carrier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CarrierValues {
    pub baseline: Option<f64>,
    pub al: Option<f64>,
    pub lg: Option<f64>,
    pub ml: Option<f64>,
    pub nc: Option<f64>,
}

impl CarrierValues {
    /// Collect a metric from a record, passing each value through `clean`.
    pub(super) fn collect(
        baseline: Option<f64>,
        record: &RouteRecord,
        per_carrier: impl Fn(&RouteRecord, Carrier) -> Option<f64>,
        clean: impl Fn(Option<f64>) -> Option<f64>,
    ) -> Self {
        Self {
            baseline: clean(baseline),
            al: clean(per_carrier(record, Carrier::Al)),
            lg: clean(per_carrier(record, Carrier::Lg)),
            ml: clean(per_carrier(record, Carrier::Ml)),
            nc: clean(per_carrier(record, Carrier::Nc)),
        }
    }

    /// Value for one carrier.
    pub fn carrier(&self, carrier: Carrier) -> Option<f64> {
        match carrier {
            Carrier::Al => self.al,
            Carrier::Lg => self.lg,
            Carrier::Ml => self.ml,
            Carrier::Nc => self.nc,
        }
    }

    /// Smallest carrier value, ignoring gaps.
    pub fn best_carrier(&self) -> Option<f64> {
        min_present(Carrier::ALL.iter().map(|c| self.carrier(*c)))
    }
}

/// Minimum of the present values, or `None` if all are missing.
pub(super) fn min_present(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    values.into_iter().flatten().reduce(f64::min)
}

/// Running mean that skips missing samples.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub(super) fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    pub(super) fn count(&self) -> usize {
        self.count
    }

    /// The mean, or 0 when there were no samples.
    pub(super) fn or_zero(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}
