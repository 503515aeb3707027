use std::fmt;
use std::time::Duration;

/// Identifies one armed interval. Handles are never reused by a well-behaved [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer {}", self.0)
    }
}

/// A repeating timer provided by the host environment.
///
/// The host delivers each tick by calling back into the owner with the handle of the interval that fired, e.g.
/// [`AutoCarousel::on_tick`](crate::carousel::AutoCarousel::on_tick).
pub trait Timer {
    /// Arm an interval firing every `period` until cancelled.
    fn start_interval(&mut self, period: Duration) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn start_interval(&mut self, period: Duration) -> TimerHandle {
        (**self).start_interval(period)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle)
    }
}
