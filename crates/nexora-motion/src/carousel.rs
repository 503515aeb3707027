//! Cycling through a fixed list of items, by hand or on a timer.
use std::time::Duration;

use log::{debug, trace};

use crate::errors::MotionError;
use crate::timer::{Timer, TimerHandle};

/// A non-empty, fixed list of items with a current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    pub fn new(items: impl Into<Vec<T>>) -> Result<Self, MotionError> {
        let items = items.into();
        if items.is_empty() {
            return Err(MotionError::EmptyCarousel);
        }

        Ok(Self { items, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn retreat(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
    }

    /// Move to `index`. Out of range positions are rejected and leave the carousel untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), MotionError> {
        if index >= self.items.len() {
            return Err(MotionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.index = index;
        Ok(())
    }

    /// Every position paired with whether it is the current one, for rendering dot controls.
    pub fn positions(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.items.len()).map(|index| (index, index == self.index))
    }
}

/// A [`Carousel`] that advances on its own every `interval`.
///
/// Any change of position, automatic or manual, restarts the countdown. Ticks from an interval that has since been
/// replaced are ignored.
pub struct AutoCarousel<T, Tm: Timer> {
    carousel: Carousel<T>,
    timer: Tm,
    interval: Duration,
    armed: Option<TimerHandle>,
    torn_down: bool,
}

impl<T, Tm: Timer> AutoCarousel<T, Tm> {
    pub fn new(carousel: Carousel<T>, timer: Tm, interval: Duration) -> Self {
        Self {
            carousel,
            timer,
            interval,
            armed: None,
            torn_down: false,
        }
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn current(&self) -> &T {
        self.carousel.current()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timer(&self) -> &Tm {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut Tm {
        &mut self.timer
    }

    /// The interval currently driving the carousel, if any.
    pub fn armed(&self) -> Option<TimerHandle> {
        self.armed
    }

    pub fn start(&mut self) {
        if self.torn_down || self.armed.is_some() {
            return;
        }

        self.arm();
    }

    /// Called by the host when an interval fires. Returns the new index if the carousel moved.
    pub fn on_tick(&mut self, handle: TimerHandle) -> Option<usize> {
        if self.torn_down || self.armed != Some(handle) {
            trace!("ignoring stale tick from {handle}");
            return None;
        }

        self.navigate(Carousel::advance);
        Some(self.carousel.index())
    }

    pub fn advance(&mut self) {
        self.navigate(Carousel::advance);
    }

    pub fn retreat(&mut self) {
        self.navigate(Carousel::retreat);
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), MotionError> {
        let len = self.carousel.len();
        if index >= len {
            return Err(MotionError::IndexOutOfRange { index, len });
        }

        if self.torn_down {
            return Ok(());
        }

        let previous = self.carousel.index();
        self.carousel.jump_to(index)?;
        self.restart_if_moved(previous);
        Ok(())
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Cancel the interval. The carousel ignores ticks and navigation from then on.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }

        if let Some(handle) = self.armed.take() {
            self.timer.cancel(handle);
        }
        self.torn_down = true;
        debug!("carousel torn down at index {}", self.carousel.index());
    }

    fn navigate(&mut self, step: fn(&mut Carousel<T>)) {
        if self.torn_down {
            return;
        }

        let previous = self.carousel.index();
        step(&mut self.carousel);
        self.restart_if_moved(previous);
    }

    fn restart_if_moved(&mut self, previous: usize) {
        let index = self.carousel.index();
        if index == previous {
            return;
        }

        debug!("carousel moved from {previous} to {index}");
        // Only a running carousel has a countdown to restart.
        if let Some(handle) = self.armed.take() {
            self.timer.cancel(handle);
            self.arm();
        }
    }

    fn arm(&mut self) {
        self.armed = Some(self.timer.start_interval(self.interval));
    }
}

impl<T, Tm: Timer> Drop for AutoCarousel<T, Tm> {
    fn drop(&mut self) {
        self.teardown();
    }
}
