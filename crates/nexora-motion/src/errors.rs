//! Error types for nexora-motion.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are shown through Debug, keep the thiserror message.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum MotionError {
    #[error("Invalid intersection threshold `{0}`, expected a fraction between 0.0 and 1.0")]
    InvalidThreshold(f64),

    #[error("A carousel needs at least one item")]
    EmptyCarousel,

    #[error("Carousel index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to read motion configuration")]
    Config(#[from] serde_json::Error),

    #[error("Invalid motion configuration: {0}")]
    InvalidConfig(String),
}

impl_debug_for_error!(MotionError);
