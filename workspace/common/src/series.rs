use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lower/upper band of a single series point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

/// One quarter of the `/predictCHChronic` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChronicSeriesPoint {
    /// Quarter label; the API does not pin its type (usually `"2024-Q1"`, sometimes numeric)
    pub quarter: Value,
    pub prediction: f64,
    pub interval: Bounds,
}

/// One building age of the `/predictCHAgeOfBuilding` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeSeriesPoint {
    #[serde(rename = "ageofbuilding")]
    pub age_of_building: f64,
    pub prediction: f64,
    pub interval: Bounds,
}

/// Envelope of the `/predictCHChronic` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChronicPredictions {
    pub chronical_predictions: Vec<ChronicSeriesPoint>,
}

/// Envelope of the `/predictCHAgeOfBuilding` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeOfBuildingPredictions {
    pub ageofbuilding_predictions: Vec<AgeSeriesPoint>,
}

/// Common view over the points of any prediction series, used by the series renderer.
pub trait SeriesPoint {
    /// Label of the point on the ordinal x axis
    fn x_label(&self) -> String;
    fn prediction(&self) -> f64;
    fn bounds(&self) -> Bounds;
}

impl SeriesPoint for ChronicSeriesPoint {
    fn x_label(&self) -> String {
        match &self.quarter {
            Value::String(label) => label.clone(),
            other => other.to_string(),
        }
    }

    fn prediction(&self) -> f64 {
        self.prediction
    }

    fn bounds(&self) -> Bounds {
        self.interval
    }
}

impl SeriesPoint for AgeSeriesPoint {
    fn x_label(&self) -> String {
        // Whole ages print without a trailing ".0"
        if self.age_of_building.fract() == 0.0 {
            format!("{:.0}", self.age_of_building)
        } else {
            self.age_of_building.to_string()
        }
    }

    fn prediction(&self) -> f64 {
        self.prediction
    }

    fn bounds(&self) -> Bounds {
        self.interval
    }
}
