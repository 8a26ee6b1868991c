//! HTTP server module for the launch dashboard.
//!
//! Exposes the dashboard layout, the two charts and the callback dispatcher
//! as a small REST API. Handlers stay thin: they resolve the request into a
//! [`SelectionState`](crate::models::SelectionState) and hand it to the
//! service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query / body parsing and selection validation          │
//! │  - CORS, compression, error mapping                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Controller / Services                                    │
//! │  - Dispatch table, chart derivation, summaries            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  RecordStore (store/)                                     │
//! │  - Immutable launch records loaded at startup             │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
