//! Launch sites and the site selector lookup table.
//!
//! The dropdown emits short selector values (`ALL`, `KSC`, ...). [`SITE_TABLE`]
//! is the single place that maps a selector value to its display label and to
//! the canonical site name stored in the dataset. Adding a site means adding a
//! variant and a row here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::launch::LaunchRecord;
use super::selection::SelectionError;

/// Selector value of the "all sites" sentinel.
pub const ALL_SITES_SELECTOR: &str = "ALL";

/// Display label of the "all sites" sentinel.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// A known launch pad.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LaunchSite {
    CcafsSlc40,
    CcafsLc40,
    KscLc39a,
    VafbSlc4e,
}

/// One row of the selector lookup table.
#[derive(Debug, Clone, Copy)]
pub struct SiteEntry {
    pub site: LaunchSite,
    /// Value emitted by the dropdown.
    pub selector: &'static str,
    /// Text shown in the dropdown.
    pub label: &'static str,
    /// Site name as it appears in the `Launch Site` column.
    pub canonical: &'static str,
}

/// Dropdown order is table order. Rows follow [`LaunchSite`] variant order.
pub static SITE_TABLE: [SiteEntry; 4] = [
    SiteEntry {
        site: LaunchSite::CcafsSlc40,
        selector: "CCAFS SLC",
        label: "CCAFS SLC 40",
        canonical: "CCAFS SLC-40",
    },
    SiteEntry {
        site: LaunchSite::CcafsLc40,
        selector: "CCAFS LC",
        label: "CCAFS LC 40",
        canonical: "CCAFS LC-40",
    },
    SiteEntry {
        site: LaunchSite::KscLc39a,
        selector: "KSC",
        label: "KSC LC 39A",
        canonical: "KSC LC-39A",
    },
    SiteEntry {
        site: LaunchSite::VafbSlc4e,
        selector: "VAFB",
        label: "VAFB SLC 4E",
        canonical: "VAFB SLC-4E",
    },
];

impl LaunchSite {
    pub fn entry(self) -> &'static SiteEntry {
        &SITE_TABLE[self as usize]
    }

    pub fn from_selector(selector: &str) -> Option<Self> {
        SITE_TABLE
            .iter()
            .find(|entry| entry.selector == selector)
            .map(|entry| entry.site)
    }

    pub fn from_canonical(name: &str) -> Option<Self> {
        SITE_TABLE
            .iter()
            .find(|entry| entry.canonical == name)
            .map(|entry| entry.site)
    }

    pub fn selector(self) -> &'static str {
        self.entry().selector
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn canonical_name(self) -> &'static str {
        self.entry().canonical
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Current value of the site dropdown.
///
/// Serialized as the selector value so it round-trips through query strings
/// and callback payloads unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(LaunchSite),
}

impl SiteSelection {
    /// Resolve a dropdown value. Unknown values are rejected rather than
    /// falling through to some default site.
    pub fn from_selector(selector: &str) -> Result<Self, SelectionError> {
        if selector == ALL_SITES_SELECTOR {
            return Ok(SiteSelection::AllSites);
        }
        LaunchSite::from_selector(selector)
            .map(SiteSelection::Site)
            .ok_or_else(|| SelectionError::UnknownSite(selector.to_string()))
    }

    pub fn selector(&self) -> &'static str {
        match self {
            SiteSelection::AllSites => ALL_SITES_SELECTOR,
            SiteSelection::Site(site) => site.selector(),
        }
    }

    /// Canonical site name, `None` for the all-sites sentinel.
    pub fn canonical_name(&self) -> Option<&'static str> {
        match self {
            SiteSelection::AllSites => None,
            SiteSelection::Site(site) => Some(site.canonical_name()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::AllSites)
    }

    /// Exact match on the canonical site name; the sentinel matches everything.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self.canonical_name() {
            None => true,
            Some(name) => record.launch_site == name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl TryFrom<String> for SiteSelection {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SiteSelection::from_selector(&value)
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        selection.selector().to_string()
    }
}
