use serde::{Deserialize, Serialize};

// =========================================================
// Proportion (pie) chart types
// =========================================================

/// Graph component id of the success proportion chart.
pub const SUCCESS_PIE_CHART_ID: &str = "success-pie-chart";

/// One labelled slice of the proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// Proportion chart specification.
///
/// For all sites the slices are sites valued by their success counts; for a
/// single site they are the `Success` / `Failure` outcome counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|slice| slice.label == label)
    }
}
