//! # Launch Dashboard Backend
//!
//! Interactive analytics over historical SpaceX launch records.
//!
//! The crate loads a launch record CSV once, then answers two questions for
//! whatever the user has selected on the dashboard: how successes split
//! across sites (or outcomes at one site), and how outcome correlates with
//! payload mass inside a payload window.
//!
//! ## Features
//!
//! - **Data Loading**: Polars-backed CSV ingestion with schema validation
//! - **Queries**: Site and payload filters, outcome counts
//! - **Charts**: Proportion (pie) and payload/outcome scatter specifications
//! - **Reactive Control**: Control-change dispatch to dependent charts
//! - **HTTP API**: Layout, chart and callback endpoints via Axum
//!
//! ## Architecture
//!
//! - [`models`]: Launch records, sites and the user's selection
//! - [`store`]: Record loading and read-only queries
//! - [`services`]: Chart, layout and summary derivation
//! - [`routes`]: Chart and layout data types with their component ids
//! - [`controller`]: Session state and control-to-chart dispatch
//! - [`api`]: Consolidated DTO exports
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod controller;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
