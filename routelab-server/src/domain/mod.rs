//! Core domain types for the route dataset.
//!
//! Route records, carriers, city coordinates, and the sustainability flag
//! parser. Nothing here knows about files or HTTP.

mod city;
pub mod columns;
mod flag;
mod route;

pub use city::CityCoord;
pub use flag::{FlagValue, parse_flag};
pub use route::{Carrier, RouteRecord, parse_decimal};
