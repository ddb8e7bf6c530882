//! Route records and carriers.

use serde::Serialize;

/// One of the four alternative carriers compared against the road baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    Al,
    Lg,
    Ml,
    Nc,
}

impl Carrier {
    /// All carriers, in dataset column order.
    pub const ALL: [Carrier; 4] = [Carrier::Al, Carrier::Lg, Carrier::Ml, Carrier::Nc];
}

/// One row of the route dataset.
///
/// Names are trimmed on ingestion. Every metric is optional: the source
/// spreadsheet has gaps, and a gap is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteRecord {
    #[serde(rename = "originName")]
    pub origin_name: String,
    #[serde(rename = "destinationName")]
    pub destination_name: String,
    #[serde(rename = "originUf")]
    pub origin_uf: Option<String>,
    #[serde(rename = "destinationUf")]
    pub destination_uf: Option<String>,

    /// Road baseline distance (km).
    #[serde(rename = "pathDistanceWithoutBR319")]
    pub distance_baseline: Option<f64>,

    /// Road baseline transit time (hours).
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

    /// Road baseline CO₂ emission (kg).
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

    /// Road baseline total cost.
    #[serde(rename = "pathTotalCostWithoutBR319")]
    pub cost_baseline: Option<f64>,
    #[serde(rename = "pathTotalCost2")]
    pub cost_al: Option<f64>,
    #[serde(rename = "pathTotalCostLG")]
    pub cost_lg: Option<f64>,
    #[serde(rename = "pathTotalCostML")]
    pub cost_ml: Option<f64>,
    #[serde(rename = "pathTotalCostNC")]
    pub cost_nc: Option<f64>,

    /// Road cost avoiding BR-319.
    #[serde(rename = "originalCost")]
    pub original_cost: Option<f64>,
    /// Road cost when BR-319 is usable.
    #[serde(rename = "withBR319Cost")]
    pub with_br319_cost: Option<f64>,

    #[serde(rename = "isAL10")]
    pub is_al10: bool,
    #[serde(rename = "isLG10")]
    pub is_lg10: bool,
    #[serde(rename = "isML10")]
    pub is_ml10: bool,
    #[serde(rename = "isNC10")]
    pub is_nc10: bool,
}

impl RouteRecord {
    /// Create a record with the given names and no metrics.
    pub fn new(origin_name: impl Into<String>, destination_name: impl Into<String>) -> Self {
        Self {
            origin_name: origin_name.into(),
            destination_name: destination_name.into(),
            ..Self::default()
        }
    }

    /// Total cost for a carrier.
    pub fn carrier_cost(&self, carrier: Carrier) -> Option<f64> {
        match carrier {
            Carrier::Al => self.cost_al,
            Carrier::Lg => self.cost_lg,
            Carrier::Ml => self.cost_ml,
            Carrier::Nc => self.cost_nc,
        }
    }

    /// CO₂ emission for a carrier.
    pub fn carrier_emission(&self, carrier: Carrier) -> Option<f64> {
        match carrier {
            Carrier::Al => self.emission_al,
            Carrier::Lg => self.emission_lg,
            Carrier::Ml => self.emission_ml,
            Carrier::Nc => self.emission_nc,
        }
    }

    /// Transit time for a carrier.
    pub fn carrier_transit_time(&self, carrier: Carrier) -> Option<f64> {
        match carrier {
            Carrier::Al => self.transit_al,
            Carrier::Lg => self.transit_lg,
            Carrier::Ml => self.transit_ml,
            Carrier::Nc => self.transit_nc,
        }
    }
}

/// Parse a number written with either a decimal comma or a decimal point.
///
/// Returns `None` for anything that isn't a number. NaN and infinities are
/// returned as-is; callers decide what they mean.
pub fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains(',') {
        trimmed.replace(',', ".").parse().ok()
    } else {
        trimmed.parse().ok()
    }
}
