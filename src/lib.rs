//! # leadgen-ui
//!
//! Leptos + WASM front end for the lead generation system. Replaces the
//! legacy `script.js` DOM wiring with a Rust-native UI layer: a lead capture
//! form, summary stats, and a CRUD table over the REST API the backend
//! serves under `/api/leads`.
//!
//! The backend itself is an external collaborator; this crate only issues
//! requests and renders the JSON it gets back.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
