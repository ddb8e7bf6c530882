//! Thresholds and limits for the competitiveness engine.

/// Configuration parameters for competitiveness analysis.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of matched rows analysed per origin.
    /// Rows beyond this are dropped in dataset order.
    pub max_rows: usize,

    /// Minimum economy (percent) for a destination to count as competitive.
    pub competitive_threshold_pct: f64,

    /// Minimum CO₂ reduction (kg) for a competitive destination to be a
    /// strategic corridor.
    pub corridor_min_co2_kg: f64,

    /// BR-319 cost difference (percent) above which a route raises an alert.
    pub alert_threshold_pct: f64,

    /// Length of the top-economy ranking.
    pub top_n: usize,

    /// Number of alert destinations reported by name.
    pub alert_examples: usize,
}

impl EngineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_rows: usize,
        competitive_threshold_pct: f64,
        corridor_min_co2_kg: f64,
        alert_threshold_pct: f64,
        top_n: usize,
        alert_examples: usize,
    ) -> Self {
        Self {
            max_rows,
            competitive_threshold_pct,
            corridor_min_co2_kg,
            alert_threshold_pct,
            top_n,
            alert_examples,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rows: 50,
            competitive_threshold_pct: 10.0,
            corridor_min_co2_kg: 50.0,
            alert_threshold_pct: 15.0,
            top_n: 10,
            alert_examples: 3,
        }
    }
}
