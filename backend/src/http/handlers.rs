//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer or the view controller.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::Uri,
    Json,
};

use super::dto::{
    CallbackRequest, CallbackResponse, ChartQuery, DashboardLayout, HealthResponse,
    PayloadSummary, PieChart, ScatterChart,
};
use super::error::AppError;
use super::state::AppState;
use crate::controller::{CollectingRenderer, ControlEvent, ViewController};
use crate::services::{proportion_chart, scatter_chart, summarize};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.store.len(),
    }))
}

// =============================================================================
// Layout
// =============================================================================

/// GET /v1/layout
///
/// Controls and graphs the dashboard is made of, with their initial values.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(state.layout.as_ref().clone()))
}

// =============================================================================
// Charts
// =============================================================================

/// GET /v1/charts/success-pie?site=KSC
pub async fn get_success_pie(
    State(state): State<AppState>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> HandlerResult<PieChart> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let selection = state.resolve_selection(query.site.as_deref(), None, None)?;
    Ok(Json(proportion_chart(state.store.records(), &selection.site)))
}

/// GET /v1/charts/payload-scatter?site=ALL&low=1000&high=6000
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> HandlerResult<ScatterChart> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let selection = state.resolve_selection(query.site.as_deref(), query.low, query.high)?;
    Ok(Json(scatter_chart(
        state.store.records(),
        &selection.site,
        &selection.payload_range,
    )))
}

/// GET /v1/summary
pub async fn get_summary(State(state): State<AppState>) -> HandlerResult<PayloadSummary> {
    Ok(Json(summarize(state.store.records())))
}

// =============================================================================
// Callbacks
// =============================================================================

/// POST /v1/callbacks
///
/// The client posts every control's current value plus the one that changed;
/// the response carries the outputs bound to that control. With no changed
/// control every output is rendered, as on first load.
pub async fn dispatch_callback(
    State(state): State<AppState>,
    payload: Result<Json<CallbackRequest>, JsonRejection>,
) -> HandlerResult<CallbackResponse> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let (low, high) = match request.inputs.payload_range {
        Some([low, high]) => (Some(low), Some(high)),
        None => (None, None),
    };
    let selection = state.resolve_selection(request.inputs.site.as_deref(), low, high)?;

    let mut controller =
        ViewController::new(state.store.clone(), CollectingRenderer::new()).with_selection(selection);
    let rendered = match request.changed {
        Some(control) => controller.handle(ControlEvent::from_selection(control, &selection)),
        None => controller.initial_render(),
    };

    let mut figures = controller.into_renderer().into_figures();
    let outputs = rendered
        .into_iter()
        .filter_map(|chart| {
            figures
                .remove(&chart)
                .map(|figure| (chart.id().to_string(), figure))
        })
        .collect();

    Ok(Json(CallbackResponse {
        changed: request.changed,
        outputs,
    }))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
