//! Bridges `nexora_motion` and the page markup.
//!
//! The build has no viewport, so every [`RevealScope`] runs its controller headless and fails open: the generated HTML
//! is fully visible. `assets/motion.ts` then re-arms the `data-reveal-*` hooks in browsers that support
//! `IntersectionObserver`.
use maud::{html, Markup, PreEscaped};
use nexora_motion::reveal::{RevealController, RevealMode, RevealOptions, RevealStyle};
use nexora_motion::viewport::Headless;
use nexora_motion::{ElementId, MotionConfig, MotionError};

/// Id of the `<script>` element holding the serialized [`MotionConfig`].
pub const CONFIG_ELEMENT_ID: &str = "nexora-motion-config";

/// The reveal-on-scroll elements of one page section.
pub struct RevealScope {
    name: &'static str,
    controller: RevealController<Headless>,
}

/// Render data for a tracked element.
pub struct Reveal {
    pub id: ElementId,
    /// Value of `data-reveal-state`.
    pub state: &'static str,
    /// Custom properties for the element's `style` attribute, empty for trigger-only elements.
    pub vars: String,
}

impl RevealScope {
    pub fn new(name: &'static str, options: RevealOptions) -> Self {
        let mut controller = RevealController::new(Headless, options);
        controller.start();

        Self { name, controller }
    }

    pub fn section(name: &'static str, config: &MotionConfig, mode: RevealMode) -> Self {
        Self::new(name, config.reveal.section(mode))
    }

    pub fn hero(config: &MotionConfig) -> Self {
        Self::new("hero", config.reveal.hero())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn threshold(&self) -> String {
        self.controller.options().threshold.to_string()
    }

    pub fn mode(&self) -> &'static str {
        self.controller.options().mode.as_str()
    }

    /// Track an element that animates itself with `style`.
    pub fn track(&mut self, style: RevealStyle) -> Reveal {
        let id = self.controller.track();

        Reveal {
            id,
            state: self.controller.presentation(id).state(),
            vars: style.css_vars(),
        }
    }

    /// Track an element whose `.reveal` children animate when it enters the viewport.
    pub fn trigger(&mut self) -> Reveal {
        let id = self.controller.track();

        Reveal {
            id,
            state: self.controller.presentation(id).state(),
            vars: String::new(),
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.controller.revealed_count()
    }
}

/// The `<script>` element the browser driver reads its configuration from.
pub fn config_script(config: &MotionConfig) -> Result<Markup, MotionError> {
    let json = config.to_json()?;

    Ok(html! {
        script type="application/json" id=(CONFIG_ELEMENT_ID) { (PreEscaped(json)) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexora_motion::reveal::Offset;
    use std::time::Duration;

    #[test]
    fn test_build_renders_everything_visible() {
        let mut scope = RevealScope::section("rooms", &MotionConfig::default(), RevealMode::Latched);

        let header = scope.trigger();
        let cards: Vec<_> = (0..3)
            .map(|index| {
                scope.track(RevealStyle::staggered(
                    Offset::Up(48),
                    index,
                    Duration::from_millis(150),
                ))
            })
            .collect();

        assert_eq!(header.state, "visible");
        assert!(cards.iter().all(|card| card.state == "visible"));
        assert_eq!(scope.revealed_count(), 4);
        assert_eq!(cards[2].id.index(), 3);
        assert!(cards[2].vars.contains("--reveal-delay: 300ms"));
    }

    #[test]
    fn test_scope_attributes() {
        let config = MotionConfig::default();

        let hero = RevealScope::hero(&config);
        assert_eq!(hero.name(), "hero");
        assert_eq!(hero.threshold(), "0.3");
        assert_eq!(hero.mode(), "once");

        let amenities = RevealScope::section("amenities", &config, RevealMode::Latched);
        assert_eq!(amenities.threshold(), "0.2");
        assert_eq!(amenities.mode(), "latched");
    }

    #[test]
    fn test_zero_threshold_is_rendered_as_is() {
        let config = MotionConfig::from_json(r#"{ "reveal": { "heroThreshold": 0.0 } }"#).unwrap();

        assert_eq!(RevealScope::hero(&config).threshold(), "0");
    }

    #[test]
    fn test_config_script() {
        let markup = config_script(&MotionConfig::default()).unwrap().into_string();

        assert!(markup.starts_with(r#"<script type="application/json" id="nexora-motion-config">"#));
        assert!(markup.contains(r#""intervalMs":6000"#));
    }
}
