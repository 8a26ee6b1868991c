//! Dashboard layout description.

use crate::models::{PayloadRange, SliderDomain, ALL_SITES_LABEL, ALL_SITES_SELECTOR, SITE_TABLE};
use crate::routes::layout::{
    DashboardLayout, DropdownOption, DropdownSpec, PayloadBounds, RangeSliderSpec, SliderMark,
    DASHBOARD_TITLE, PAYLOAD_SLIDER_CAPTION, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID,
    SITE_DROPDOWN_PLACEHOLDER,
};
use crate::routes::proportion::SUCCESS_PIE_CHART_ID;
use crate::routes::scatter::PAYLOAD_SCATTER_CHART_ID;

/// Dropdown options: the all-sites sentinel followed by the site table.
pub fn site_options() -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_SELECTOR.to_string(),
    })
    .chain(SITE_TABLE.iter().map(|entry| DropdownOption {
        label: entry.label.to_string(),
        value: entry.selector.to_string(),
    }))
    .collect()
}

fn format_mark(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Describe the dashboard controls and graphs.
///
/// `observed` is the payload `(min, max)` of the loaded records, if any.
pub fn dashboard_layout(
    domain: &SliderDomain,
    step: f64,
    default_range: &PayloadRange,
    observed: Option<(f64, f64)>,
) -> DashboardLayout {
    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: DropdownSpec {
            id: SITE_DROPDOWN_ID.to_string(),
            options: site_options(),
            value: ALL_SITES_SELECTOR.to_string(),
            placeholder: SITE_DROPDOWN_PLACEHOLDER.to_string(),
            searchable: true,
        },
        payload_slider: RangeSliderSpec {
            id: PAYLOAD_SLIDER_ID.to_string(),
            caption: PAYLOAD_SLIDER_CAPTION.to_string(),
            min: domain.min,
            max: domain.max,
            step,
            marks: [domain.min, domain.max]
                .iter()
                .map(|value| SliderMark {
                    value: *value,
                    label: format_mark(*value),
                })
                .collect(),
            value: (*default_range).into(),
        },
        graphs: vec![
            SUCCESS_PIE_CHART_ID.to_string(),
            PAYLOAD_SCATTER_CHART_ID.to_string(),
        ],
        observed_payload: observed.map(|(min, max)| PayloadBounds { min, max }),
    }
}
