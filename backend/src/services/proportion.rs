//! Proportion chart derivation.

use crate::models::{LaunchRecord, SiteSelection};
use crate::routes::proportion::{PieChart, PieSlice};
use crate::store::count_by_outcome;

pub const ALL_SITES_PIE_TITLE: &str = "Total success launches by site";

pub fn pie_title(site: &SiteSelection) -> String {
    match site.canonical_name() {
        None => ALL_SITES_PIE_TITLE.to_string(),
        Some(name) => format!("Success launches by {}", name),
    }
}

/// Build the proportion chart for the selected site.
///
/// Total over any input: a site with no records gives a chart with no slices.
pub fn proportion_chart(records: &[LaunchRecord], site: &SiteSelection) -> PieChart {
    let slices = count_by_outcome(records, site)
        .into_iter()
        .map(|(label, value)| PieSlice { label, value })
        .collect();

    PieChart {
        title: pie_title(site),
        slices,
    }
}
