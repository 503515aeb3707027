//! Scroll-position driven presentation: reversible toggles and the dining cards' focus scale.
use serde::{Deserialize, Serialize};

/// A flag that is on while the page is scrolled past `after_px`.
///
/// Unlike reveals, toggles switch back off when scrolling up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollToggle {
    after_px: u32,
    active: bool,
}

impl ScrollToggle {
    pub fn new(after_px: u32) -> Self {
        Self {
            after_px,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn after_px(&self) -> u32 {
        self.after_px
    }

    /// Feed the current vertical scroll offset, returning whether the flag flipped.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let active = scroll_y > f64::from(self.after_px);
        let changed = active != self.active;
        self.active = active;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FocusConfig {
    /// Smallest scale a card can shrink to.
    pub min_scale: f64,
    /// How much a card shrinks when its centre sits on the viewport edge.
    pub falloff: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.9,
            falloff: 0.15,
        }
    }
}

/// Scale of an element depending on how far its centre is from the viewport's centre.
pub fn focus_scale(
    element_top: f64,
    element_height: f64,
    viewport_height: f64,
    config: &FocusConfig,
) -> f64 {
    if viewport_height <= 0.0 {
        return 1.0;
    }

    let half_viewport = viewport_height / 2.0;
    let element_centre = element_top + element_height / 2.0;
    let distance = (element_centre - half_viewport).abs();

    (1.0 - (distance / half_viewport) * config.falloff).max(config.min_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_reversible() {
        let mut navbar = ScrollToggle::new(50);

        assert!(!navbar.update(10.0));
        assert!(!navbar.is_active());

        assert!(navbar.update(51.0));
        assert!(navbar.is_active());
        assert!(!navbar.update(400.0));

        assert!(navbar.update(0.0));
        assert!(!navbar.is_active());
    }

    #[test]
    fn test_toggle_boundary_is_exclusive() {
        let mut scroll_top = ScrollToggle::new(300);

        scroll_top.update(300.0);
        assert!(!scroll_top.is_active());

        scroll_top.update(300.5);
        assert!(scroll_top.is_active());
    }

    #[test]
    fn test_focus_scale_centred_is_full_size() {
        let scale = focus_scale(300.0, 200.0, 800.0, &FocusConfig::default());
        assert!((scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_focus_scale_shrinks_with_distance() {
        let config = FocusConfig::default();

        // Centre 200px away from the middle of an 800px viewport: 1 - 0.5 * 0.15.
        let scale = focus_scale(100.0, 200.0, 800.0, &config);
        assert!((scale - 0.925).abs() < 1e-9);

        let far = focus_scale(2000.0, 200.0, 800.0, &config);
        assert_eq!(far, config.min_scale);
    }

    #[test]
    fn test_focus_scale_without_viewport() {
        assert_eq!(focus_scale(10.0, 10.0, 0.0, &FocusConfig::default()), 1.0);
    }
}
