//! One-way "reveal on first sight" tracking for groups of elements.
//!
//! A [`RevealController`] owns a [`VisibilitySource`], tracks any number of elements and latches a flag for each one the
//! first time it enters the viewport past the configured [`Threshold`]. Flags never go back to `false`.
//!
//! ## Example
//! ```rs
//! use nexora_motion::reveal::{RevealController, RevealOptions};
//! use nexora_motion::viewport::{Headless, IntersectionEntry};
//!
//! let mut controller = RevealController::new(Headless, RevealOptions::default());
//! let header = controller.track();
//! controller.start();
//!
//! // Without a viewport the controller fails open.
//! assert!(controller.is_revealed(header));
//! ```
use log::{debug, trace};

use crate::viewport::{ElementId, IntersectionEntry, Threshold, VisibilitySource};

mod style;
pub use style::{Offset, Presentation, RevealStyle};

/// Whether a revealed element keeps being observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Stop observing an element once it is revealed.
    #[default]
    Once,
    /// Keep observing; later notifications hit an already latched flag.
    Latched,
}

impl RevealMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealMode::Once => "once",
            RevealMode::Latched => "latched",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealOptions {
    pub threshold: Threshold,
    pub mode: RevealMode,
}

impl RevealOptions {
    pub fn new(threshold: Threshold, mode: RevealMode) -> Self {
        Self { threshold, mode }
    }
}

/// Latched visibility flags, indexed by [`ElementId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState {
    flags: Vec<bool>,
}

impl VisibilityState {
    fn push(&mut self) -> ElementId {
        self.flags.push(false);
        ElementId(self.flags.len() - 1)
    }

    /// Latch `id`, returning whether it was hidden until now.
    fn reveal(&mut self, id: ElementId) -> bool {
        match self.flags.get_mut(id.0) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.flags.get(id.0).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, bool)> + '_ {
        self.flags
            .iter()
            .enumerate()
            .map(|(index, flag)| (ElementId(index), *flag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Observing,
    FailedOpen,
    TornDown,
}

pub struct RevealController<S: VisibilitySource> {
    source: S,
    options: RevealOptions,
    state: VisibilityState,
    phase: Phase,
}

impl<S: VisibilitySource> RevealController<S> {
    pub fn new(source: S, options: RevealOptions) -> Self {
        Self {
            source,
            options,
            state: VisibilityState::default(),
            phase: Phase::Idle,
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Start tracking a new element.
    ///
    /// Elements tracked after [`start`](Self::start) are observed right away, or revealed right away if the controller
    /// failed open.
    pub fn track(&mut self) -> ElementId {
        let id = self.state.push();

        match self.phase {
            Phase::Observing => self.source.observe(id, self.options.threshold),
            Phase::FailedOpen => {
                self.state.reveal(id);
            }
            Phase::Idle | Phase::TornDown => {}
        }

        id
    }

    /// Begin observing every tracked element.
    ///
    /// When the source cannot report intersections, every element is revealed instead so content is never left hidden.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }

        if !self.source.is_available() {
            debug!(
                "viewport unavailable, revealing {} element(s) immediately",
                self.state.len()
            );
            for index in 0..self.state.len() {
                self.state.reveal(ElementId(index));
            }
            self.phase = Phase::FailedOpen;
            return;
        }

        for index in 0..self.state.len() {
            self.source.observe(ElementId(index), self.options.threshold);
        }
        self.phase = Phase::Observing;
    }

    /// Apply a batch of intersection notifications, returning the elements revealed by it.
    pub fn handle(&mut self, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        if self.phase != Phase::Observing {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for entry in entries {
            // An unrevealed element has never met the threshold, so meeting it now is an upward crossing.
            if !self.options.threshold.is_met(entry) || !self.state.reveal(entry.target) {
                trace!("ignoring intersection for {} at {}", entry.target, entry.ratio);
                continue;
            }

            debug!("revealed {} at ratio {}", entry.target, entry.ratio);
            if self.options.mode == RevealMode::Once {
                self.source.unobserve(entry.target);
            }
            revealed.push(entry.target);
        }

        revealed
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.state.is_revealed(id)
    }

    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    pub fn revealed_count(&self) -> usize {
        self.state.revealed_count()
    }

    pub fn all_revealed(&self) -> bool {
        self.state.revealed_count() == self.state.len()
    }

    pub fn presentation(&self, id: ElementId) -> Presentation {
        if self.is_revealed(id) {
            Presentation::Visible
        } else {
            Presentation::Hidden
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    /// Stop observing and release the source. Later notifications are ignored.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }

        if self.phase == Phase::Observing {
            self.source.disconnect();
        }
        self.phase = Phase::TornDown;
        trace!("reveal controller torn down");
    }
}

impl<S: VisibilitySource> Drop for RevealController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Headless;

    #[derive(Default)]
    struct RecordingSource {
        available: bool,
        observed: Vec<ElementId>,
        unobserved: Vec<ElementId>,
        disconnects: usize,
    }

    impl RecordingSource {
        fn available() -> Self {
            Self {
                available: true,
                ..Default::default()
            }
        }
    }

    impl VisibilitySource for RecordingSource {
        fn is_available(&self) -> bool {
            self.available
        }

        fn observe(&mut self, id: ElementId, _: Threshold) {
            self.observed.push(id);
        }

        fn unobserve(&mut self, id: ElementId) {
            self.unobserved.push(id);
        }

        fn disconnect(&mut self) {
            self.disconnects += 1;
        }
    }

    fn entry(id: ElementId, ratio: f64) -> IntersectionEntry {
        IntersectionEntry::new(id, ratio)
    }

    #[test]
    fn test_start_observes_tracked_elements() {
        let mut source = RecordingSource::available();
        let mut controller = RevealController::new(&mut source, RevealOptions::default());

        let header = controller.track();
        let card = controller.track();
        controller.start();
        let late = controller.track();
        drop(controller);

        assert_eq!(source.observed, vec![header, card, late]);
    }

    #[test]
    fn test_reveal_on_threshold() {
        let mut controller = RevealController::new(RecordingSource::available(), RevealOptions::default());
        let header = controller.track();
        let cta = controller.track();
        controller.start();

        assert!(controller.handle(&[entry(header, 0.1)]).is_empty());
        assert!(!controller.is_revealed(header));

        assert_eq!(controller.handle(&[entry(header, 0.25), entry(cta, 0.05)]), vec![header]);
        assert!(controller.is_revealed(header));
        assert!(!controller.is_revealed(cta));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut controller = RevealController::new(
            RecordingSource::available(),
            RevealOptions::new(Threshold::SECTION, RevealMode::Latched),
        );
        let ids: Vec<_> = (0..4).map(|_| controller.track()).collect();
        controller.start();

        let ratios = [0.0, 0.5, 0.1, 0.0, 1.0, 0.0, 0.3, 0.0];
        let mut seen = vec![false; ids.len()];

        for (step, ratio) in ratios.iter().enumerate() {
            let id = ids[step % ids.len()];
            controller.handle(&[entry(id, *ratio)]);

            for (index, id) in ids.iter().enumerate() {
                if seen[index] {
                    assert!(controller.is_revealed(*id), "{id} was hidden again");
                }
                seen[index] = controller.is_revealed(*id);
            }
        }

        assert_eq!(controller.revealed_count(), 3);
    }

    #[test]
    fn test_repeated_intersections_reveal_once() {
        let mut controller = RevealController::new(
            RecordingSource::available(),
            RevealOptions::new(Threshold::SECTION, RevealMode::Latched),
        );
        let card = controller.track();
        controller.start();

        assert_eq!(controller.handle(&[entry(card, 0.4)]), vec![card]);
        assert!(controller.handle(&[entry(card, 0.9)]).is_empty());
        assert!(controller.handle(&[entry(card, 0.0), entry(card, 0.6)]).is_empty());
    }

    #[test]
    fn test_once_mode_unobserves_revealed_elements() {
        let mut source = RecordingSource::available();
        let mut controller = RevealController::new(&mut source, RevealOptions::default());
        let section = controller.track();
        let other = controller.track();
        controller.start();
        controller.handle(&[entry(section, 0.5)]);
        drop(controller);

        assert_eq!(source.unobserved, vec![section]);
        assert!(!source.unobserved.contains(&other));
    }

    #[test]
    fn test_latched_mode_keeps_observing() {
        let mut source = RecordingSource::available();
        let mut controller = RevealController::new(
            &mut source,
            RevealOptions::new(Threshold::SECTION, RevealMode::Latched),
        );
        let card = controller.track();
        controller.start();
        controller.handle(&[entry(card, 0.5)]);
        drop(controller);

        assert!(source.unobserved.is_empty());
    }

    #[test]
    fn test_hero_threshold() {
        let mut controller = RevealController::new(
            RecordingSource::available(),
            RevealOptions::new(Threshold::HERO, RevealMode::Once),
        );
        let hero = controller.track();
        controller.start();

        assert!(controller.handle(&[entry(hero, 0.25)]).is_empty());
        assert_eq!(controller.handle(&[entry(hero, 0.3)]), vec![hero]);
    }

    #[test]
    fn test_unavailable_viewport_fails_open() {
        let mut controller = RevealController::new(Headless, RevealOptions::default());
        let first = controller.track();
        let second = controller.track();

        assert!(!controller.is_revealed(first));
        controller.start();

        assert!(controller.is_revealed(first));
        assert!(controller.is_revealed(second));

        let late = controller.track();
        assert!(controller.is_revealed(late));
        assert!(controller.all_revealed());
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let mut controller = RevealController::new(RecordingSource::available(), RevealOptions::default());
        controller.track();
        controller.start();

        assert!(controller.handle(&[entry(ElementId(42), 1.0)]).is_empty());
        assert_eq!(controller.revealed_count(), 0);
    }

    #[test]
    fn test_no_mutation_after_teardown() {
        let mut source = RecordingSource::available();
        let mut controller = RevealController::new(&mut source, RevealOptions::default());
        let card = controller.track();
        controller.start();
        controller.teardown();

        assert!(controller.handle(&[entry(card, 1.0)]).is_empty());
        assert!(!controller.is_revealed(card));
        assert!(controller.is_torn_down());

        controller.teardown();
        drop(controller);

        assert_eq!(source.disconnects, 1);
    }

    #[test]
    fn test_drop_disconnects() {
        let mut source = RecordingSource::available();
        {
            let mut controller = RevealController::new(&mut source, RevealOptions::default());
            controller.track();
            controller.start();
        }

        assert_eq!(source.disconnects, 1);
    }

    #[test]
    fn test_presentation_follows_state() {
        let mut controller = RevealController::new(RecordingSource::available(), RevealOptions::default());
        let card = controller.track();
        controller.start();

        assert_eq!(controller.presentation(card), Presentation::Hidden);

        controller.handle(&[entry(card, 0.2)]);
        assert_eq!(controller.presentation(card), Presentation::Visible);
    }
}
