use serde::{Deserialize, Serialize};

// =========================================================
// Payload / outcome scatter chart types
// =========================================================

/// Graph component id of the payload scatter chart.
pub const PAYLOAD_SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";
pub const SCATTER_COLOR_LABEL: &str = "Booster Version Category";

/// One launch plotted as payload against outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass in kilograms.
    pub x: f64,
    /// Outcome class, 0 or 1.
    pub y: u8,
    /// Booster version category, used for colouring.
    pub category: String,
}

/// Scatter chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct colour categories in first appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in &self.points {
            if !categories.contains(&point.category.as_str()) {
                categories.push(&point.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: u8, category: &str) -> ScatterPoint {
        ScatterPoint {
            x,
            y,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_categories_are_distinct() {
        let chart = ScatterChart {
            title: "t".to_string(),
            x_label: SCATTER_X_LABEL.to_string(),
            y_label: SCATTER_Y_LABEL.to_string(),
            color_label: SCATTER_COLOR_LABEL.to_string(),
            points: vec![point(1.0, 1, "FT"), point(2.0, 0, "v1.1"), point(3.0, 1, "FT")],
        };
        assert_eq!(chart.categories(), vec!["FT", "v1.1"]);
        assert!(!chart.is_empty());
    }

    #[test]
    fn test_scatter_point_serialization() {
        let json = serde_json::to_value(point(5300.0, 1, "FT")).unwrap();
        assert_eq!(json["x"], 5300.0);
        assert_eq!(json["y"], 1);
        assert_eq!(json["category"], "FT");
    }
}
