//! Network layer: wire types and REST calls against the lead API.

pub mod api;
pub mod types;
