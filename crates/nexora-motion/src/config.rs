//! Tuning shared by the static build and the browser driver.
//!
//! The website serializes [`MotionConfig`] into every page so the client reads the same thresholds and intervals the
//! build rendered with.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::MotionError;
use crate::reveal::{RevealMode, RevealOptions};
use crate::scroll::{FocusConfig, ScrollToggle};
use crate::viewport::Threshold;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionConfig {
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
    pub navbar: NavbarConfig,
    pub scroll_top: ScrollTopConfig,
    pub focus: FocusConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealConfig {
    pub section_threshold: Threshold,
    pub hero_threshold: Threshold,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_threshold: Threshold::SECTION,
            hero_threshold: Threshold::HERO,
        }
    }
}

impl RevealConfig {
    pub fn section(&self, mode: RevealMode) -> RevealOptions {
        RevealOptions::new(self.section_threshold, mode)
    }

    pub fn hero(&self) -> RevealOptions {
        RevealOptions::new(self.hero_threshold, RevealMode::Once)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 6000 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavbarConfig {
    pub scrolled_after_px: u32,
    pub entrance_delay_ms: u64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_after_px: 50,
            entrance_delay_ms: 100,
        }
    }
}

impl NavbarConfig {
    pub fn toggle(&self) -> ScrollToggle {
        ScrollToggle::new(self.scrolled_after_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollTopConfig {
    pub visible_after_px: u32,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self {
            visible_after_px: 300,
        }
    }
}

impl ScrollTopConfig {
    pub fn toggle(&self) -> ScrollToggle {
        ScrollToggle::new(self.visible_after_px)
    }
}

impl MotionConfig {
    /// Parse a (possibly partial) JSON document, missing fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, MotionError> {
        let config: MotionConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, MotionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        // Thresholds validate themselves, the rest only needs to stay meaningful.
        if self.carousel.interval_ms == 0 {
            return Err(MotionError::InvalidConfig(
                "carousel.intervalMs must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.focus.min_scale) || self.focus.falloff < 0.0 {
            return Err(MotionError::InvalidConfig(
                "focus.minScale must be within 0..1 and focus.falloff positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MotionConfig::default();

        assert_eq!(config.reveal.section_threshold.fraction(), 0.2);
        assert_eq!(config.reveal.hero_threshold.fraction(), 0.3);
        assert_eq!(config.carousel.interval(), Duration::from_millis(6000));
        assert_eq!(config.navbar.scrolled_after_px, 50);
        assert_eq!(config.navbar.entrance_delay_ms, 100);
        assert_eq!(config.scroll_top.visible_after_px, 300);
        assert_eq!(config.focus, FocusConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = MotionConfig::from_json(r#"{ "carousel": { "intervalMs": 4000 } }"#).unwrap();

        assert_eq!(config.carousel.interval_ms, 4000);
        assert_eq!(config.reveal, RevealConfig::default());
        assert_eq!(config.scroll_top.visible_after_px, 300);
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let result = MotionConfig::from_json(r#"{ "reveal": { "heroThreshold": 1.2 } }"#);
        assert!(matches!(result, Err(MotionError::Config(_))));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let result = MotionConfig::from_json(r#"{ "carousel": { "intervalMs": 0 } }"#);
        assert!(matches!(result, Err(MotionError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = MotionConfig::default().to_json().unwrap();

        assert!(json.contains(r#""sectionThreshold":0.2"#));
        assert!(json.contains(r#""intervalMs":6000"#));
        assert!(json.contains(r#""scrollTop":{"visibleAfterPx":300}"#));
    }

    #[test]
    fn test_options_helpers() {
        let config = MotionConfig::default();

        assert_eq!(config.reveal.hero().threshold, Threshold::HERO);
        assert_eq!(config.reveal.section(RevealMode::Latched).mode, RevealMode::Latched);
        assert!(!config.navbar.toggle().is_active());
        assert_eq!(config.scroll_top.toggle().after_px(), 300);
    }
}
