//! Competitiveness analysis of alternative carriers against road freight.
//!
//! This module answers: "from this origin, where does an alternative
//! carrier beat the road route on cost, and what does that buy in CO₂ and
//! transit time?"
//!
//! Each call is a pure scan over the row store; nothing is cached.

mod config;
mod engine;
mod summary;

pub use config::EngineConfig;
pub use engine::{CompetitivenessError, compute_competitiveness, resolve_origin};
pub use summary::{
    CarrierValues, CompetitivenessSummary, Corridor, SampleCounts, TopEconomyEntry,
};
