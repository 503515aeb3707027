use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::AMENITIES;
use crate::motion::RevealScope;

pub fn amenities(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("amenities", config, RevealMode::Latched);
    let header = scope.trigger();

    html! {
        section.relative.bg-ink."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."mb-12"."md:mb-16" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Amenities")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-white.font-light
                        style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars())
                    {
                        "Everything A Business Stay Needs"
                    }
                }

                div.grid."grid-cols-2"."md:grid-cols-4"."gap-3"."sm:gap-6" {
                    @for (index, amenity) in AMENITIES.iter().enumerate() {
                        @let card = scope.track(RevealStyle::staggered(Offset::Up(32), index, Duration::from_millis(100)));
                        div.reveal.group.relative."p-5"."sm:p-8".border."border-white/10".text-center."hover:border-gold".transition-colors."duration-500"
                            data-amenity
                            data-reveal-state=(card.state)
                            style=(card.vars)
                        {
                            div."w-12"."h-12".mx-auto."mb-4".rounded-full."bg-gold/10".flex.items-center.justify-center."group-hover:bg-gold".transition-colors."duration-500" {
                                (amenity.icon.sized("w-5 h-5 text-gold group-hover:text-white transition-colors duration-500"))
                            }
                            h3.text-white.text-sm."sm:text-base"."mb-1" { (amenity.name) }
                            p."text-white/50".text-xs { (amenity.description) }
                        }
                    }
                }
            }
        }
    }
}
