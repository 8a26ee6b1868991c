use serde::{Deserialize, Serialize};

// =========================================================
// Payload summary types
// =========================================================

/// Descriptive statistics over payload masses (kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Launch and payload figures for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
    pub success_rate: f64,
    pub payload: PayloadStats,
}

/// Summary of the whole record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSummary {
    pub total_launches: usize,
    pub total_successes: usize,
    pub success_rate: f64,
    pub payload: PayloadStats,
    pub sites: Vec<SiteSummary>,
}

impl PayloadSummary {
    pub fn site(&self, name: &str) -> Option<&SiteSummary> {
        self.sites.iter().find(|site| site.site == name)
    }
}
