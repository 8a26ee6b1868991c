//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout payloads are re-exported from the api module since they
//! already derive Serialize/Deserialize; this file only adds the request and
//! envelope types specific to HTTP.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::api::{ChartFigure, DashboardLayout, PayloadSummary, PieChart, ScatterChart};
use crate::controller::ControlId;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}

/// Query parameters for the chart endpoints.
///
/// `site` is a dropdown selector (`ALL`, `KSC`, ...). `low`/`high` only apply
/// to the scatter chart and default to the slider's initial value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartQuery {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}

/// Current values of every dashboard control.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CallbackInputs {
    /// Dropdown selector
    #[serde(default)]
    pub site: Option<String>,
    /// Slider value as `[low, high]`
    #[serde(default)]
    pub payload_range: Option<[f64; 2]>,
}

/// A control change reported by the client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CallbackRequest {
    /// Control that fired, or `None` for the first page load
    #[serde(default)]
    pub changed: Option<ControlId>,
    #[serde(default)]
    pub inputs: CallbackInputs,
}

/// Re-rendered outputs keyed by graph id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub changed: Option<ControlId>,
    pub outputs: BTreeMap<String, ChartFigure>,
}
