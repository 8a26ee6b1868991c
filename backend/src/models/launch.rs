//! Launch record domain types.
//!
//! A [`LaunchRecord`] is one row of the launch dataset. Records are built once
//! by the loader and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight number as recorded in the source dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightNumber(pub u32);

impl FlightNumber {
    pub fn new(value: u32) -> Self {
        FlightNumber(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary launch outcome, stored in the dataset as `class` 0 or 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map a dataset `class` value onto an outcome. Anything other than 0 or 1 is rejected.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 1.0 {
            Some(Outcome::Success)
        } else if class == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }

    /// The `class` value of this outcome (the scatter chart's y coordinate).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Slice label used by the per-site proportion chart.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: Option<FlightNumber>,
    /// Canonical launch site name, e.g. `KSC LC-39A`.
    pub launch_site: String,
    pub payload_mass: qtty::Kilograms,
    pub outcome: Outcome,
    /// Full booster version string when the source carries it.
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass: qtty::Kilograms::new(payload_kg),
            outcome,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn with_flight_number(mut self, flight_number: FlightNumber) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    pub fn with_booster_version(mut self, booster_version: impl Into<String>) -> Self {
        self.booster_version = Some(booster_version.into());
        self
    }

    /// Payload mass in kilograms as a raw scalar.
    pub fn payload_kg(&self) -> f64 {
        self.payload_mass.value()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2.0), None);
        assert_eq!(Outcome::from_class(0.5), None);
        assert_eq!(Outcome::from_class(f64::NAN), None);
    }

    #[test]
    fn test_outcome_class_and_label() {
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
    }

    #[test]
    fn test_record_builder() {
        let record = LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT")
            .with_flight_number(FlightNumber::new(42))
            .with_booster_version("F9 FT B1031.1");

        assert_eq!(record.payload_kg(), 5300.0);
        assert!(record.is_success());
        assert_eq!(record.flight_number.map(|f| f.value()), Some(42));
        assert_eq!(record.booster_version.as_deref(), Some("F9 FT B1031.1"));
    }

    #[test]
    fn test_record_serializes_payload_as_scalar() {
        let record = LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Failure, "v1.1");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["payload_mass"], 9600.0);
        assert_eq!(json["outcome"], "failure");
    }
}
