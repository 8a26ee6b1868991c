//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned by the services and the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    LaunchRecord, LaunchSite, Outcome, PayloadRange, SelectionState, SiteSelection, SliderDomain,
};
pub use crate::routes::layout::DashboardLayout;
pub use crate::routes::layout::DropdownOption;
pub use crate::routes::layout::DropdownSpec;
pub use crate::routes::layout::PayloadBounds;
pub use crate::routes::layout::RangeSliderSpec;
pub use crate::routes::layout::SliderMark;
pub use crate::routes::proportion::PieChart;
pub use crate::routes::proportion::PieSlice;
pub use crate::routes::scatter::ScatterChart;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::routes::summary::PayloadStats;
pub use crate::routes::summary::PayloadSummary;
pub use crate::routes::summary::SiteSummary;

use serde::{Deserialize, Serialize};

/// A rendered chart specification of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartFigure {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartFigure {
    pub fn title(&self) -> &str {
        match self {
            ChartFigure::Pie(chart) => &chart.title,
            ChartFigure::Scatter(chart) => &chart.title,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartFigure::Pie(chart) => Some(chart),
            ChartFigure::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartFigure::Scatter(chart) => Some(chart),
            ChartFigure::Pie(_) => None,
        }
    }

    /// Number of slices or points.
    pub fn len(&self) -> usize {
        match self {
            ChartFigure::Pie(chart) => chart.slices.len(),
            ChartFigure::Scatter(chart) => chart.points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<PieChart> for ChartFigure {
    fn from(chart: PieChart) -> Self {
        ChartFigure::Pie(chart)
    }
}

impl From<ScatterChart> for ChartFigure {
    fn from(chart: ScatterChart) -> Self {
        ChartFigure::Scatter(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_figure_is_tagged() {
        let figure = ChartFigure::from(PieChart {
            title: "Total success launches by site".to_string(),
            slices: vec![PieSlice {
                label: "KSC LC-39A".to_string(),
                value: 10,
            }],
        });
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["title"], "Total success launches by site");
        assert_eq!(figure.len(), 1);
        assert!(figure.as_scatter().is_none());
    }
}
