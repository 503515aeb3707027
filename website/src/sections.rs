//! The sections of the home page, top to bottom.
use maud::{html, Markup};

mod amenities;
mod brand_story;
mod dining;
mod events;
mod gallery;
mod hero;
mod location;
mod offers;
mod rooms;
mod testimonials;

pub use amenities::amenities;
pub use brand_story::brand_story;
pub use dining::dining;
pub use events::meetings_events;
pub use gallery::gallery;
pub use hero::hero;
pub use location::location;
pub use offers::special_offers;
pub use rooms::rooms_preview;
pub use testimonials::testimonials;

/// Small uppercase label framed by two gold rules, shown above section titles.
fn eyebrow(label: &str) -> Markup {
    html! {
        div.flex.items-center.justify-center."gap-2"."md:gap-3"."mb-3"."md:mb-4" {
            div."w-6"."md:w-8".h-px.bg-gold {}
            span.text-gold."tracking-[0.35em]"."text-[10px]"."md:text-xs".uppercase { (label) }
            div."w-6"."md:w-8".h-px.bg-gold {}
        }
    }
}

fn gold_rule_top() -> Markup {
    html! {
        div.absolute."top-0"."left-0"."right-0"."h-[1px]".bg-linear-to-r.from-transparent.via-gold.to-transparent."opacity-30" {}
    }
}

fn gold_rule_bottom() -> Markup {
    html! {
        div.absolute."bottom-0"."left-0"."right-0"."h-[1px]".bg-linear-to-r.from-transparent.via-gold.to-transparent."opacity-30" {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexora_motion::MotionConfig;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_every_section_fails_open() {
        let config = MotionConfig::default();
        let page = [
            hero(&config),
            brand_story(&config),
            rooms_preview(&config),
            meetings_events(&config),
            amenities(&config),
            dining(&config),
            location(&config),
            gallery(&config),
            special_offers(&config),
        ]
        .into_iter()
        .map(Markup::into_string)
        .collect::<String>();

        assert!(count(&page, r#"data-reveal-state="visible""#) > 0);
        assert_eq!(count(&page, r#"data-reveal-state="hidden""#), 0);
    }

    #[test]
    fn test_hero_uses_hero_threshold() {
        let markup = hero(&MotionConfig::default()).into_string();

        assert!(markup.contains(r#"data-reveal-group="hero""#));
        assert!(markup.contains(r#"data-reveal-threshold="0.3""#));
        assert!(markup.contains("--reveal-delay: 700ms"));
    }

    #[test]
    fn test_rooms_cards_are_staggered() {
        let markup = rooms_preview(&MotionConfig::default()).into_string();

        assert!(markup.contains(r#"data-reveal-threshold="0.2""#));
        assert!(markup.contains(r#"data-reveal-mode="latched""#));
        for delay in ["0ms", "150ms", "300ms"] {
            assert!(markup.contains(&format!("--reveal-delay: {delay}")), "{delay}");
        }
        assert!(markup.contains(r#"href="/rooms/2""#));
    }

    #[test]
    fn test_amenities_render_every_card() {
        let markup = amenities(&MotionConfig::default()).into_string();

        assert_eq!(count(&markup, "data-amenity"), crate::content::AMENITIES.len());
        assert!(markup.contains("--reveal-delay: 700ms"));
    }

    #[test]
    fn test_gallery_motions() {
        let markup = gallery(&MotionConfig::default()).into_string();

        assert!(markup.contains("--reveal-from: translateX(-30px)"));
        assert!(markup.contains("--reveal-from: translateY(-30px)"));
        assert!(markup.contains("--reveal-from: scale(0.95)"));
        assert!(markup.contains("--reveal-delay: 600ms"));
    }

    #[test]
    fn test_testimonials_start_on_first_slide() {
        let markup = testimonials(&MotionConfig::default()).into_string();

        assert!(markup.contains(r#"data-carousel-interval="6000""#));
        assert_eq!(count(&markup, "data-carousel-slide"), crate::content::TESTIMONIALS.len());
        assert_eq!(count(&markup, r#"aria-current="true""#), 1);
        assert!(markup.contains("David Chen"));
        assert!(markup.contains(r#"aria-label="Go to testimonial 5""#));
    }

    #[test]
    fn test_testimonials_show_only_the_first_quote() {
        let markup = testimonials(&MotionConfig::default()).into_string();

        assert_eq!(count(&markup, r#"aria-hidden="false""#), 1);
        let shown = markup.find(r#"aria-hidden="false""#).unwrap();
        let first = markup.find(crate::content::TESTIMONIALS[0].name).unwrap();
        let second = markup.find(crate::content::TESTIMONIALS[1].name).unwrap();
        assert!(shown < first && first < second);
    }

    #[test]
    fn test_detail_links() {
        let config = MotionConfig::default();
        let events = meetings_events(&config).into_string();
        let offers = special_offers(&config).into_string();

        for venue in crate::content::VENUES {
            assert!(events.contains(&format!(r#"href="/events/{}""#, venue.id)));
        }
        assert_eq!(count(&offers, r#"href="/booking""#), crate::content::OFFERS.len());
        assert!(!offers.contains("/offers/"));
    }

    #[test]
    fn test_dining_cards_opt_into_focus_scale() {
        let markup = dining(&MotionConfig::default()).into_string();

        assert_eq!(count(&markup, "data-focus-scale"), crate::content::RESTAURANTS.len());
        assert!(markup.contains("--reveal-delay: 400ms"));
    }
}
