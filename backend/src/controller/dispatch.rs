//! Control and chart identifiers and the table that links them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::{PayloadRange, SelectionState, SiteSelection};
use crate::routes::layout::{PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID};
use crate::routes::proportion::SUCCESS_PIE_CHART_ID;
use crate::routes::scatter::PAYLOAD_SCATTER_CHART_ID;

/// Input controls of the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ControlId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl ControlId {
    pub const ALL: [ControlId; 2] = [ControlId::SiteDropdown, ControlId::PayloadSlider];

    pub fn id(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => SITE_DROPDOWN_ID,
            ControlId::PayloadSlider => PAYLOAD_SLIDER_ID,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Chart outputs of the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChartId {
    #[serde(rename = "success-pie-chart")]
    SuccessPie,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatter,
}

impl ChartId {
    /// Display order.
    pub const ALL: [ChartId; 2] = [ChartId::SuccessPie, ChartId::PayloadScatter];

    pub fn id(self) -> &'static str {
        match self {
            ChartId::SuccessPie => SUCCESS_PIE_CHART_ID,
            ChartId::PayloadScatter => PAYLOAD_SCATTER_CHART_ID,
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A user changed one control to a new value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlEvent {
    SiteChanged(SiteSelection),
    PayloadRangeChanged(PayloadRange),
}

impl ControlEvent {
    /// The event a control emits when it reports its value in `selection`.
    pub fn from_selection(control: ControlId, selection: &SelectionState) -> Self {
        match control {
            ControlId::SiteDropdown => ControlEvent::SiteChanged(selection.site),
            ControlId::PayloadSlider => ControlEvent::PayloadRangeChanged(selection.payload_range),
        }
    }

    pub fn control(&self) -> ControlId {
        match self {
            ControlEvent::SiteChanged(_) => ControlId::SiteDropdown,
            ControlEvent::PayloadRangeChanged(_) => ControlId::PayloadSlider,
        }
    }
}

/// Which charts recompute when a control changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchTable {
    bindings: HashMap<ControlId, Vec<ChartId>>,
}

impl DispatchTable {
    /// An empty table: no control triggers anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard wiring: either control recomputes both charts.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for control in ControlId::ALL {
            for chart in ChartId::ALL {
                table.bind(control, chart);
            }
        }
        table
    }

    /// Subscribe `chart` to changes of `control`. Binding twice is a no-op.
    pub fn bind(&mut self, control: ControlId, chart: ChartId) -> &mut Self {
        let outputs = self.bindings.entry(control).or_default();
        if !outputs.contains(&chart) {
            outputs.push(chart);
        }
        self
    }

    /// Outputs to recompute for `control`, in binding order.
    pub fn outputs_for(&self, control: ControlId) -> &[ChartId] {
        self.bindings
            .get(&control)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every chart bound to at least one control, in display order.
    pub fn outputs(&self) -> Vec<ChartId> {
        ChartId::ALL
            .into_iter()
            .filter(|chart| self.bindings.values().any(|outputs| outputs.contains(chart)))
            .collect()
    }
}
