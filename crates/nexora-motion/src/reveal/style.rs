use std::fmt::Write;
use std::time::Duration;

/// Where a hidden element rests before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Below its resting place, rising into position.
    Up(u32),
    /// Above its resting place, dropping into position.
    Down(u32),
    /// To the left, sliding right into position.
    Left(u32),
    /// To the right, sliding left into position.
    Right(u32),
    /// Slightly shrunk, growing to full size.
    Scale(f32),
}

impl Offset {
    pub fn transform(&self) -> String {
        match self {
            Offset::Up(px) => format!("translateY({px}px)"),
            Offset::Down(px) => format!("translateY(-{px}px)"),
            Offset::Left(px) => format!("translateX(-{px}px)"),
            Offset::Right(px) => format!("translateX({px}px)"),
            Offset::Scale(factor) => format!("scale({factor})"),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Up(32)
    }
}

/// How a single element transitions from hidden to visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub from: Offset,
    pub delay: Duration,
    pub duration: Duration,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            from: Offset::default(),
            delay: Duration::ZERO,
            duration: Duration::from_millis(700),
        }
    }
}

impl RevealStyle {
    pub fn new(from: Offset) -> Self {
        Self {
            from,
            ..Default::default()
        }
    }

    /// Style for the `index`-th sibling of a grid, each one starting `step` after the previous.
    pub fn staggered(from: Offset, index: usize, step: Duration) -> Self {
        Self::new(from).with_delay(step * index as u32)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Custom properties read by the site's stylesheet, meant for a `style` attribute.
    pub fn css_vars(&self) -> String {
        let mut vars = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            vars,
            "--reveal-from: {}; --reveal-delay: {}ms; --reveal-duration: {}ms;",
            self.from.transform(),
            self.delay.as_millis(),
            self.duration.as_millis()
        );
        vars
    }
}

/// What the rendering layer should show for an element.
///
/// The hidden look itself comes from the element's [`RevealStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Hidden,
    Visible,
}

impl Presentation {
    pub fn is_visible(&self) -> bool {
        matches!(self, Presentation::Visible)
    }

    /// Value for a `data-reveal-state` attribute.
    pub fn state(&self) -> &'static str {
        match self {
            Presentation::Hidden => "hidden",
            Presentation::Visible => "visible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_transforms() {
        assert_eq!(Offset::Up(30).transform(), "translateY(30px)");
        assert_eq!(Offset::Down(30).transform(), "translateY(-30px)");
        assert_eq!(Offset::Left(40).transform(), "translateX(-40px)");
        assert_eq!(Offset::Right(40).transform(), "translateX(40px)");
        assert_eq!(Offset::Scale(0.95).transform(), "scale(0.95)");
    }

    #[test]
    fn test_staggered_delays() {
        let step = Duration::from_millis(150);

        let delays: Vec<_> = (0..3)
            .map(|index| RevealStyle::staggered(Offset::Up(48), index, step).delay)
            .collect();

        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(150),
                Duration::from_millis(300)
            ]
        );
    }

    #[test]
    fn test_css_vars() {
        let style = RevealStyle::new(Offset::Left(40))
            .with_delay(Duration::from_millis(400))
            .with_duration(Duration::from_millis(1000));

        assert_eq!(
            style.css_vars(),
            "--reveal-from: translateX(-40px); --reveal-delay: 400ms; --reveal-duration: 1000ms;"
        );
    }

    #[test]
    fn test_presentation_state() {
        assert_eq!(Presentation::Hidden.state(), "hidden");
        assert_eq!(Presentation::Visible.state(), "visible");
        assert!(!Presentation::Hidden.is_visible());
    }
}
