//! Application state for the HTTP server.

use std::sync::Arc;

use crate::api::DashboardLayout;
use crate::config::{ConfigError, SliderSettings};
use crate::models::{PayloadRange, SelectionError, SelectionState, SiteSelection, SliderDomain};
use crate::services::dashboard_layout;
use crate::store::RecordStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch records loaded at startup
    pub store: RecordStore,
    /// Bounds every requested payload range must lie within
    pub domain: SliderDomain,
    /// Range used when a request leaves one or both ends out
    pub default_range: PayloadRange,
    /// Layout description, built once since it only depends on the above
    pub layout: Arc<DashboardLayout>,
}

impl AppState {
    /// Build state from the records and the configured slider.
    pub fn new(store: RecordStore, slider: &SliderSettings) -> Result<Self, ConfigError> {
        let domain = slider.domain()?;
        let default_range = slider.default_range()?;
        let layout = dashboard_layout(&domain, slider.step, &default_range, store.payload_bounds());
        Ok(Self {
            store,
            domain,
            default_range,
            layout: Arc::new(layout),
        })
    }

    /// State with the stock slider (0..10000 kg, default 1000..6000).
    pub fn with_defaults(store: RecordStore) -> Self {
        let domain = SliderDomain::default();
        let default_range = PayloadRange::default();
        let layout = dashboard_layout(
            &domain,
            SliderSettings::default().step,
            &default_range,
            store.payload_bounds(),
        );
        Self {
            store,
            domain,
            default_range,
            layout: Arc::new(layout),
        }
    }

    /// Turn raw control values into a validated selection.
    ///
    /// A missing site means all sites; a missing range end takes the default
    /// slider value for that end.
    pub fn resolve_selection(
        &self,
        site: Option<&str>,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<SelectionState, SelectionError> {
        let site = match site {
            Some(selector) => SiteSelection::from_selector(selector)?,
            None => SiteSelection::AllSites,
        };
        let range = PayloadRange::new(
            low.unwrap_or(self.default_range.low()),
            high.unwrap_or(self.default_range.high()),
        )?
        .within(&self.domain)?;
        Ok(SelectionState::new(site, range))
    }
}
