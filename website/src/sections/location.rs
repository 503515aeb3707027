use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::{DISTANCES, NEARBY_CORPORATES};
use crate::icons::Icon;
use crate::motion::RevealScope;

const FIRST_CARD: Duration = Duration::from_millis(300);

pub fn location(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("location", config, RevealMode::Once);
    let header = scope.trigger();
    let corporates = scope.track(
        RevealStyle::new(Offset::Up(30)).with_delay(FIRST_CARD + Duration::from_millis(200) * DISTANCES.len() as u32),
    );

    html! {
        section.relative.bg-white."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."mb-12"."md:mb-16" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Location")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-ink.font-light."mb-4"
                        style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars())
                    {
                        "At The Center Of Business"
                    }
                }

                div.grid."sm:grid-cols-2"."lg:grid-cols-4"."gap-4"."sm:gap-6"."mb-12" {
                    @for (index, place) in DISTANCES.iter().enumerate() {
                        @let card = scope.track(
                            RevealStyle::new(Offset::Up(30)).with_delay(FIRST_CARD + Duration::from_millis(200) * index as u32)
                        );
                        div.reveal.group.bg-mist."p-6".border-l-2.border-transparent."hover:border-gold".transition-colors
                            data-reveal-state=(card.state)
                            style=(card.vars)
                        {
                            (place.icon.sized("w-6 h-6 text-gold mb-4"))
                            h3.text-ink."mb-1" { (place.label) }
                            p."text-2xl".text-ink.font-light { (place.time) }
                            p.text-gold.text-xs."tracking-[2px]"."mb-3" { (place.distance) }
                            p.text-muted.text-sm { (place.description) }
                        }
                    }
                }

                div.reveal.bg-ink."p-6"."sm:p-10" data-reveal-state=(corporates.state) style=(corporates.vars) {
                    div.flex.items-center."gap-3"."mb-6" {
                        (Icon::Globe.sized("w-5 h-5 text-gold"))
                        p.text-white."tracking-[3px]".text-xs."sm:text-sm" { "CORPORATE NEIGHBOURS" }
                    }
                    ul.grid."grid-cols-2"."md:grid-cols-3"."gap-4" {
                        @for name in NEARBY_CORPORATES {
                            li."text-white/70".text-sm.flex.items-center."gap-2" {
                                span."w-1.5"."h-1.5".rounded-full.bg-gold {}
                                (name)
                            }
                        }
                    }
                }
            }
        }
    }
}
