//! Reactive view controller.
//!
//! Holds the current [`SelectionState`] for one dashboard session and turns
//! control changes into chart recomputations:
//!
//! ```text
//! ControlEvent ──▶ DispatchTable ──▶ derive_chart(ChartId, records, selection)
//!                                          │
//!                                          ▼
//!                                  ChartRenderer::render
//! ```
//!
//! Everything runs synchronously on the caller's thread; a recompute finishes
//! before the next event is handled.

pub mod dispatch;


pub use dispatch::{ChartId, ControlEvent, ControlId, DispatchTable};

use log::debug;
use std::collections::HashMap;

use crate::api::ChartFigure;
use crate::models::{LaunchRecord, SelectionState};
use crate::services::{proportion_chart, scatter_chart};
use crate::store::RecordStore;

/// Per-output recompute state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RecomputeState {
    #[default]
    Idle,
    Recomputing,
}

/// Receives freshly derived charts. Implemented by whatever draws them.
pub trait ChartRenderer {
    fn render(&mut self, chart: ChartId, figure: &ChartFigure);
}

/// Keeps the latest figure of each output and counts renders.
#[derive(Debug, Clone, Default)]
pub struct CollectingRenderer {
    figures: HashMap<ChartId, ChartFigure>,
    renders: HashMap<ChartId, usize>,
}

impl CollectingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figure(&self, chart: ChartId) -> Option<&ChartFigure> {
        self.figures.get(&chart)
    }

    pub fn render_count(&self, chart: ChartId) -> usize {
        self.renders.get(&chart).copied().unwrap_or(0)
    }

    pub fn into_figures(self) -> HashMap<ChartId, ChartFigure> {
        self.figures
    }
}

impl ChartRenderer for CollectingRenderer {
    fn render(&mut self, chart: ChartId, figure: &ChartFigure) {
        self.figures.insert(chart, figure.clone());
        *self.renders.entry(chart).or_insert(0) += 1;
    }
}

/// Derive one chart from the records and the current selection.
///
/// Pure and total: the same inputs always give the same figure, and empty
/// selections give empty charts.
pub fn derive_chart(
    chart: ChartId,
    records: &[LaunchRecord],
    selection: &SelectionState,
) -> ChartFigure {
    match chart {
        ChartId::SuccessPie => proportion_chart(records, &selection.site).into(),
        ChartId::PayloadScatter => {
            scatter_chart(records, &selection.site, &selection.payload_range).into()
        }
    }
}

/// One dashboard session.
pub struct ViewController<R: ChartRenderer> {
    store: RecordStore,
    selection: SelectionState,
    dispatch: DispatchTable,
    states: HashMap<ChartId, RecomputeState>,
    renderer: R,
}

impl<R: ChartRenderer> ViewController<R> {
    /// Session with the default selection and the standard dispatch table.
    /// Nothing is rendered until [`initial_render`](Self::initial_render) or
    /// the first event.
    pub fn new(store: RecordStore, renderer: R) -> Self {
        Self {
            store,
            selection: SelectionState::default(),
            dispatch: DispatchTable::standard(),
            states: HashMap::new(),
            renderer,
        }
    }

    /// Resume a session whose controls already hold `selection`.
    pub fn with_selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchTable) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self, chart: ChartId) -> RecomputeState {
        self.states.get(&chart).copied().unwrap_or_default()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Draw every bound output for the current selection, as the dashboard
    /// does on first load.
    pub fn initial_render(&mut self) -> Vec<ChartId> {
        let outputs = self.dispatch.outputs();
        for chart in &outputs {
            self.recompute(*chart);
        }
        outputs
    }

    /// Apply a control change and recompute the outputs bound to that control.
    /// Returns the recomputed outputs in dispatch order.
    pub fn handle(&mut self, event: ControlEvent) -> Vec<ChartId> {
        match event {
            ControlEvent::SiteChanged(site) => self.selection.site = site,
            ControlEvent::PayloadRangeChanged(range) => self.selection.payload_range = range,
        }

        let control = event.control();
        let outputs = self.dispatch.outputs_for(control).to_vec();
        debug!(
            "{} changed (site={}, range=[{}, {}]), recomputing {} output(s)",
            control,
            self.selection.site,
            self.selection.payload_range.low(),
            self.selection.payload_range.high(),
            outputs.len()
        );

        for chart in &outputs {
            self.recompute(*chart);
        }
        outputs
    }

    fn recompute(&mut self, chart: ChartId) {
        self.states.insert(chart, RecomputeState::Recomputing);
        let figure = derive_chart(chart, self.store.records(), &self.selection);
        debug!("{} recomputed with {} element(s)", chart, figure.len());
        self.renderer.render(chart, &figure);
        self.states.insert(chart, RecomputeState::Idle);
    }
}
