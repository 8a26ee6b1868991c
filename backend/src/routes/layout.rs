use serde::{Deserialize, Serialize};

// =========================================================
// Dashboard layout description
// =========================================================
//
// The layout is a description of the controls and graphs, not markup. The
// front end turns it into widgets.

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SITE_DROPDOWN_PLACEHOLDER: &str = "Select Launch site";
pub const PAYLOAD_SLIDER_CAPTION: &str = "Payload range (Kg):";

/// Dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Site selector description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownSpec {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// Labelled tick on the range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Payload range slider description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderSpec {
    pub id: String,
    pub caption: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

/// Observed payload extremes of the loaded record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Complete dashboard description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: DropdownSpec,
    pub payload_slider: RangeSliderSpec,
    /// Graph ids in display order.
    pub graphs: Vec<String>,
    pub observed_payload: Option<PayloadBounds>,
}

impl DashboardLayout {
    pub fn option(&self, value: &str) -> Option<&DropdownOption> {
        self.site_dropdown
            .options
            .iter()
            .find(|option| option.value == value)
    }
}
