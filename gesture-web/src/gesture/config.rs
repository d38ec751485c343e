//! Runtime configuration
//!
//! The page can push a JSON object; any missing field keeps its default.

use serde::{Deserialize, Serialize};

use super::error::GestureError;
use super::tracker::DEFAULT_THRESHOLD_MS;

/// Most hands the skeleton overlay has vertex room for
pub const MAX_HANDS: u32 = 4;

/// Main config structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Hold time before a gesture is counted
    pub confirmation_threshold_ms: f64,
    /// How long the page keeps a gesture card highlighted
    pub highlight_duration_ms: f64,
    /// Draw the skeleton overlay
    pub show_landmarks: bool,
    /// Passed through to MediaPipe `Hands.setOptions`
    pub detector: DetectorOptions,
}

/// MediaPipe Hands options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectorOptions {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            confirmation_threshold_ms: DEFAULT_THRESHOLD_MS,
            highlight_duration_ms: 1000.0,
            show_landmarks: true,
            detector: DetectorOptions::default(),
        }
    }
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 2,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
        }
    }
}

impl GestureConfig {
    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        if !self.confirmation_threshold_ms.is_finite() || self.confirmation_threshold_ms <= 0.0 {
            return Err(GestureError::InvalidConfig(
                "Confirmation threshold must be positive".to_string(),
            ));
        }

        if !self.highlight_duration_ms.is_finite() || self.highlight_duration_ms < 0.0 {
            return Err(GestureError::InvalidConfig(
                "Highlight duration must not be negative".to_string(),
            ));
        }

        self.detector.validate()
    }
}

impl DetectorOptions {
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.max_num_hands == 0 || self.max_num_hands > MAX_HANDS {
            return Err(GestureError::InvalidConfig(format!(
                "maxNumHands must be between 1 and {}",
                MAX_HANDS
            )));
        }

        if self.model_complexity > 1 {
            return Err(GestureError::InvalidConfig("modelComplexity must be 0 or 1".to_string()));
        }

        let unit = |v: f32| (0.0..=1.0).contains(&v);
        if !unit(self.min_detection_confidence) || !unit(self.min_tracking_confidence) {
            return Err(GestureError::InvalidConfig("Confidences must be in [0, 1]".to_string()));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, GestureError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GestureConfig::default();
        assert_eq!(config.confirmation_threshold_ms, 1000.0);
        assert!(config.show_landmarks);
        assert_eq!(config.detector.max_num_hands, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GestureConfig::from_json(r#"{"confirmationThresholdMs": 1500}"#).unwrap();
        assert_eq!(config.confirmation_threshold_ms, 1500.0);
        assert_eq!(config.highlight_duration_ms, 1000.0);
        assert_eq!(config.detector, DetectorOptions::default());

        let config = GestureConfig::from_json(r#"{"detector": {"maxNumHands": 1}}"#).unwrap();
        assert_eq!(config.detector.max_num_hands, 1);
        assert_eq!(config.detector.min_detection_confidence, 0.7);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = GestureConfig::from_json(r#"{"confirmationThresholdMs": 0}"#).unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
        let err = GestureConfig::from_json(r#"{"confirmationThresholdMs": -5}"#).unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_hand_count() {
        for json in [r#"{"detector": {"maxNumHands": 0}}"#, r#"{"detector": {"maxNumHands": 5}}"#] {
            let err = GestureConfig::from_json(json).unwrap_err();
            assert!(matches!(err, GestureError::InvalidConfig(_)));
        }
        assert!(GestureConfig::from_json(r#"{"detector": {"maxNumHands": 4}}"#).is_ok());
    }

    #[test]
    fn test_rejects_bad_detector_options() {
        let err = GestureConfig::from_json(r#"{"detector": {"minDetectionConfidence": 1.5}}"#).unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
        let err = GestureConfig::from_json(r#"{"detector": {"minTrackingConfidence": -0.1}}"#).unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
        let err = GestureConfig::from_json(r#"{"detector": {"modelComplexity": 2}}"#).unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_highlight_duration() {
        let err = GestureConfig::from_json(r#"{"highlightDurationMs": -1}"#).unwrap_err();
        assert!(matches!(err, GestureError::InvalidConfig(_)));
        assert!(GestureConfig::from_json(r#"{"highlightDurationMs": 0}"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GestureConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, GestureError::ConfigParse(_)));
    }

    #[test]
    fn test_detector_options_json() {
        let json = DetectorOptions::default().to_json().unwrap();
        assert!(json.contains("\"maxNumHands\":2"));
        assert!(json.contains("\"modelComplexity\":1"));
        assert!(json.contains("\"minDetectionConfidence\":0.7"));
    }
}
