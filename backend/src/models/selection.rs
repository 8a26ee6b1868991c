//! UI selection state: the dropdown site and the payload range slider.

use serde::{Deserialize, Serialize};

use super::site::SiteSelection;

/// Default slider value `[low, high]` in kilograms.
pub const DEFAULT_PAYLOAD_RANGE: [f64; 2] = [1000.0, 6000.0];

/// Default slider domain `[min, max]` in kilograms.
pub const DEFAULT_SLIDER_DOMAIN: [f64; 2] = [0.0, 10000.0];

/// Rejected selector or slider input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown site selector '{0}'")]
    UnknownSite(String),

    #[error("Payload range bounds must be finite, got [{low}, {high}]")]
    NonFinite { low: f64, high: f64 },

    #[error("Payload range is inverted: low {low} > high {high}")]
    Inverted { low: f64, high: f64 },

    #[error("Payload range [{low}, {high}] lies outside the slider domain [{min}, {max}]")]
    OutOfDomain {
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },
}

/// Bounds of the payload slider.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderDomain {
    pub min: f64,
    pub max: f64,
}

impl SliderDomain {
    pub fn new(min: f64, max: f64) -> Result<Self, SelectionError> {
        let range = PayloadRange::new(min, max)?;
        Ok(Self {
            min: range.low(),
            max: range.high(),
        })
    }

    pub fn contains(&self, range: &PayloadRange) -> bool {
        range.low() >= self.min && range.high() <= self.max
    }
}

impl Default for SliderDomain {
    fn default() -> Self {
        Self {
            min: DEFAULT_SLIDER_DOMAIN[0],
            max: DEFAULT_SLIDER_DOMAIN[1],
        }
    }
}

/// Payload slider value. Always finite with `low <= high`.
///
/// Serialized as a two element array, the shape a range slider emits.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, SelectionError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(SelectionError::NonFinite { low, high });
        }
        if low > high {
            return Err(SelectionError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    /// Check the range against the slider bounds.
    pub fn within(self, domain: &SliderDomain) -> Result<Self, SelectionError> {
        if domain.contains(&self) {
            Ok(self)
        } else {
            Err(SelectionError::OutOfDomain {
                low: self.low,
                high: self.high,
                min: domain.min,
                max: domain.max,
            })
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Strictly between the bounds. A payload sitting exactly on either
    /// slider handle is excluded.
    pub fn contains_exclusive(&self, payload_kg: f64) -> bool {
        payload_kg > self.low && payload_kg < self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_PAYLOAD_RANGE[0],
            high: DEFAULT_PAYLOAD_RANGE[1],
        }
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = SelectionError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        PayloadRange::new(value[0], value[1])
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// Current values of every dashboard control.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }

    pub fn with_site(mut self, site: SiteSelection) -> Self {
        self.site = site;
        self
    }

    pub fn with_payload_range(mut self, payload_range: PayloadRange) -> Self {
        self.payload_range = payload_range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaunchSite;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = PayloadRange::new(6000.0, 1000.0).unwrap_err();
        assert_eq!(
            err,
            SelectionError::Inverted {
                low: 6000.0,
                high: 1000.0
            }
        );
    }

    #[test]
    fn test_range_rejects_non_finite() {
        assert!(PayloadRange::new(f64::NAN, 1.0).is_err());
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_degenerate_range_is_valid_but_empty() {
        let range = PayloadRange::new(3000.0, 3000.0).unwrap();
        assert!(!range.contains_exclusive(3000.0));
    }

    #[test]
    fn test_contains_is_exclusive_on_both_ends() {
        let range = PayloadRange::default();
        assert!(!range.contains_exclusive(1000.0));
        assert!(!range.contains_exclusive(6000.0));
        assert!(range.contains_exclusive(1000.5));
        assert!(range.contains_exclusive(5999.9));
    }

    #[test]
    fn test_within_domain() {
        let domain = SliderDomain::default();
        assert!(PayloadRange::new(0.0, 10000.0).unwrap().within(&domain).is_ok());
        assert!(matches!(
            PayloadRange::new(-1.0, 500.0).unwrap().within(&domain),
            Err(SelectionError::OutOfDomain { .. })
        ));
        assert!(PayloadRange::new(500.0, 10001.0).unwrap().within(&domain).is_err());
    }

    #[test]
    fn test_range_serde_as_pair() {
        let range: PayloadRange = serde_json::from_str("[2000, 4000]").unwrap();
        assert_eq!(range.low(), 2000.0);
        assert_eq!(range.high(), 4000.0);
        assert_eq!(serde_json::to_string(&range).unwrap(), "[2000.0,4000.0]");
        assert!(serde_json::from_str::<PayloadRange>("[4000, 2000]").is_err());
    }

    #[test]
    fn test_selection_defaults() {
        let selection = SelectionState::default();
        assert!(selection.site.is_all());
        assert_eq!(<[f64; 2]>::from(selection.payload_range), DEFAULT_PAYLOAD_RANGE);

        let updated = selection.with_site(SiteSelection::Site(LaunchSite::VafbSlc4e));
        assert_eq!(updated.site.selector(), "VAFB");
        assert_eq!(updated.payload_range, selection.payload_range);
    }
}
