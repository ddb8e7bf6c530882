//! RouteLab freight analytics server.
//!
//! Serves a precomputed dataset of multimodal freight routes across
//! Brazil and answers: "from this origin, where do alternative carriers beat
//! road freight, and by how much?"
//!
//! Configuration, including optional download URLs for the dataset files,
//! is read from `ROUTELAB_*` environment variables; see [`config`].

pub mod competitiveness;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod provision;
pub mod store;
pub mod web;
