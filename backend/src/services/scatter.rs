//! Payload / outcome scatter chart derivation.

use crate::models::{LaunchRecord, PayloadRange, SiteSelection};
use crate::routes::scatter::{
    ScatterChart, ScatterPoint, SCATTER_COLOR_LABEL, SCATTER_X_LABEL, SCATTER_Y_LABEL,
};
use crate::store::{filter_by_payload_range, filter_by_site};

pub fn scatter_title(site: &SiteSelection) -> String {
    match site.canonical_name() {
        None => "Correlation between Payload and Success for all sites".to_string(),
        Some(name) => format!("Correlation between Payload and Success for {}", name),
    }
}

/// Build the scatter chart: site filter, then the exclusive payload filter,
/// then one point per surviving record.
pub fn scatter_chart(
    records: &[LaunchRecord],
    site: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let at_site = filter_by_site(records, site);
    let points = filter_by_payload_range(at_site, range.low(), range.high())
        .into_iter()
        .map(|record| ScatterPoint {
            x: record.payload_kg(),
            y: record.outcome.class(),
            category: record.booster_version_category.clone(),
        })
        .collect();

    ScatterChart {
        title: scatter_title(site),
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        color_label: SCATTER_COLOR_LABEL.to_string(),
        points,
    }
}
