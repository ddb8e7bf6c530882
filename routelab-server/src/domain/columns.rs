//! Column names of the route dataset header.

pub const ORIGIN_NAME: &str = "originName";
pub const DESTINATION_NAME: &str = "destinationName";
pub const ORIGIN_UF: &str = "originUf";
pub const DESTINATION_UF: &str = "destinationUf";

pub const DISTANCE_BASELINE: &str = "pathDistanceWithoutBR319";
pub const TRANSIT_BASELINE: &str = "pathTransitTimeWithoutBR319";
pub const TRANSIT_AL: &str = "pathTransitTimeAL";
pub const TRANSIT_LG: &str = "pathTransitTimeLG";
pub const TRANSIT_ML: &str = "pathTransitTimeML";
pub const TRANSIT_NC: &str = "pathTransitTimeNC";

pub const EMISSION_BASELINE: &str = "pathEmissionWithoutBR319";
pub const EMISSION_AL: &str = "pathEmissionAL";
pub const EMISSION_LG: &str = "pathEmissionLG";
pub const EMISSION_ML: &str = "pathEmissionML";
pub const EMISSION_NC: &str = "pathEmissionNC";

pub const COST_BASELINE: &str = "pathTotalCostWithoutBR319";
/// Carrier AL's cost column predates the per-carrier naming.
pub const COST_AL: &str = "pathTotalCost2";
pub const COST_LG: &str = "pathTotalCostLG";
pub const COST_ML: &str = "pathTotalCostML";
pub const COST_NC: &str = "pathTotalCostNC";

pub const ORIGINAL_COST: &str = "originalCost";
pub const WITH_BR319_COST: &str = "withBR319Cost";

pub const FLAG_AL: &str = "isAL10%";
pub const FLAG_LG: &str = "isLG10%";
pub const FLAG_ML: &str = "isML10%";
pub const FLAG_NC: &str = "isNC10%";

/// Columns the competitiveness engine cannot work without.
pub const ENGINE_REQUIRED: [&str; 9] = [
    COST_BASELINE,
    COST_AL,
    COST_LG,
    COST_ML,
    COST_NC,
    ORIGINAL_COST,
    WITH_BR319_COST,
    EMISSION_BASELINE,
    TRANSIT_BASELINE,
];

/// Columns of the city coordinate table.
pub mod city {
    pub const NAME: &str = "nodeName";
    pub const LAT: &str = "nodeLat";
    pub const LON: &str = "nodeLon";
    pub const UF: &str = "nodeUf";
}
