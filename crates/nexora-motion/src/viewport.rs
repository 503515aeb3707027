//! The viewport-intersection capability consumed by [`RevealController`](crate::reveal::RevealController).
//!
//! Browsers provide this through `IntersectionObserver`. Anything that can tell which tracked elements
//! intersect the viewport, and by how much, can implement [`VisibilitySource`].
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MotionError;

/// Stable identity of a tracked element, handed out by [`RevealController::track`](crate::reveal::RevealController::track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fraction of an element's area that must be visible for it to count as entered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Threshold used by every section but the hero.
    pub const SECTION: Threshold = Threshold(0.2);
    /// The hero only reveals once most of it is on screen.
    pub const HERO: Threshold = Threshold(0.3);

    pub fn new(fraction: f64) -> Result<Self, MotionError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(MotionError::InvalidThreshold(fraction))
        }
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Whether an entry reaches this threshold.
    ///
    /// A zero threshold is met by any intersection at all, including an edge-adjacent one.
    pub fn is_met(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::SECTION
    }
}

impl TryFrom<f64> for Threshold {
    type Error = MotionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(value: Threshold) -> Self {
        value.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One notification from the host about `target`'s overlap with the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: ElementId, ratio: f64) -> Self {
        Self {
            target,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    /// An element touching the viewport edge without any visible area.
    pub fn touching(target: ElementId) -> Self {
        Self {
            target,
            ratio: 0.0,
            is_intersecting: true,
        }
    }
}

/// A source of viewport intersection notifications.
///
/// Notifications themselves are pushed by the host into [`RevealController::handle`](crate::reveal::RevealController::handle);
/// the source only needs to know what to watch.
pub trait VisibilitySource {
    /// Whether the environment can report intersections at all.
    fn is_available(&self) -> bool;

    fn observe(&mut self, id: ElementId, threshold: Threshold);

    fn unobserve(&mut self, id: ElementId);

    /// Stop observing everything and release the underlying observer.
    fn disconnect(&mut self);
}

/// Visibility source for environments without a viewport, such as the static build.
///
/// Controllers driven by it fail open and reveal every element immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl VisibilitySource for Headless {
    fn is_available(&self) -> bool {
        false
    }

    fn observe(&mut self, _: ElementId, _: Threshold) {}

    fn unobserve(&mut self, _: ElementId) {}

    fn disconnect(&mut self) {}
}

impl<S: VisibilitySource + ?Sized> VisibilitySource for &mut S {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn observe(&mut self, id: ElementId, threshold: Threshold) {
        (**self).observe(id, threshold)
    }

    fn unobserve(&mut self, id: ElementId) {
        (**self).unobserve(id)
    }

    fn disconnect(&mut self) {
        (**self).disconnect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_rejects_out_of_range() {
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(1.5).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::new(0.3).unwrap(), Threshold::HERO);
    }

    #[test]
    fn test_threshold_is_met_at_or_above_fraction() {
        let threshold = Threshold::SECTION;
        let id = ElementId(0);

        assert!(threshold.is_met(&IntersectionEntry::new(id, 0.2)));
        assert!(threshold.is_met(&IntersectionEntry::new(id, 0.9)));
        assert!(!threshold.is_met(&IntersectionEntry::new(id, 0.19)));
        assert!(!threshold.is_met(&IntersectionEntry::new(id, 0.0)));
    }

    #[test]
    fn test_zero_threshold_counts_touching_edges() {
        let threshold = Threshold::new(0.0).unwrap();
        let id = ElementId(3);

        assert!(threshold.is_met(&IntersectionEntry::touching(id)));
        assert!(!threshold.is_met(&IntersectionEntry::new(id, 0.0)));
    }

    #[test]
    fn test_threshold_deserializes_through_validation() {
        let parsed: Threshold = serde_json::from_str("0.25").unwrap();
        assert_eq!(parsed.fraction(), 0.25);

        assert!(serde_json::from_str::<Threshold>("2.0").is_err());
    }
}
