//! Scroll-triggered reveal and auto-advancing carousel behaviours for the NEXORA website.
//!
//! Both behaviours talk to their environment through small capability traits, [`viewport::VisibilitySource`] and
//! [`timer::Timer`], so they run the same in the static build, in tests, and behind a browser binding.

pub mod carousel;
pub mod config;
pub mod errors;
pub mod reveal;
pub mod scroll;
pub mod timer;
pub mod viewport;

pub use carousel::{AutoCarousel, Carousel};
pub use config::MotionConfig;
pub use errors::MotionError;
pub use reveal::{Offset, Presentation, RevealController, RevealMode, RevealOptions, RevealStyle};
pub use viewport::{ElementId, Headless, IntersectionEntry, Threshold, VisibilitySource};
