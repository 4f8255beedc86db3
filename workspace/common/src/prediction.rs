use serde::{Deserialize, Serialize};
use tracing::debug;

/// Confidence interval reported by the model around a point prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
    /// Confidence level, e.g. `0.9`
    pub confidence: f64,
    /// Currency or unit of the values, e.g. `CHF`
    pub unit: String,
}

/// Response of the baseline `/predictCH` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub prediction: f64,
    pub interval: Interval,
}

impl PredictionResult {
    /// Whether the point prediction lies inside its own interval (bounds inclusive).
    ///
    /// A prediction outside the band means the model extrapolated beyond what it was
    /// trained on; such a result must not be displayed.
    pub fn is_within_interval(&self) -> bool {
        let within =
            self.prediction >= self.interval.lower && self.prediction <= self.interval.upper;
        if !within {
            debug!(
                prediction = self.prediction,
                lower = self.interval.lower,
                upper = self.interval.upper,
                "Prediction lies outside its interval"
            );
        }
        within
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(prediction: f64, lower: f64, upper: f64) -> PredictionResult {
        PredictionResult {
            prediction,
            interval: Interval {
                lower,
                upper,
                confidence: 0.9,
                unit: "CHF".to_string(),
            },
        }
    }

    #[test]
    fn test_within_interval_is_inclusive() {
        assert!(result(1800.0, 1500.0, 2100.0).is_within_interval());
        assert!(result(1500.0, 1500.0, 2100.0).is_within_interval());
        assert!(result(2100.0, 1500.0, 2100.0).is_within_interval());
    }

    #[test]
    fn test_outside_interval() {
        assert!(!result(1499.5, 1500.0, 2100.0).is_within_interval());
        assert!(!result(2100.1, 1500.0, 2100.0).is_within_interval());
    }

    #[test]
    fn test_deserialize_baseline_response() {
        let raw = r#"{"prediction": 1834.2, "interval": {"lower": 1620.0, "upper": 2050.5, "confidence": 0.8, "unit": "CHF"}}"#;
        let parsed: PredictionResult = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.prediction, 1834.2);
        assert_eq!(parsed.interval.upper, 2050.5);
        assert_eq!(parsed.interval.unit, "CHF");
    }

    #[test]
    fn test_missing_interval_is_rejected() {
        let raw = r#"{"prediction": 1834.2}"#;
        assert!(serde_json::from_str::<PredictionResult>(raw).is_err());
    }
}
