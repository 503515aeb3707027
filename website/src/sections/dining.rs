use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::RESTAURANTS;
use crate::icons::Icon;
use crate::motion::RevealScope;

/// Restaurant cards; `assets/motion.ts` scales each `data-focus-scale` card by its distance from the viewport centre.
pub fn dining(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("dining", config, RevealMode::Once);
    let header = scope.trigger();

    html! {
        section.relative.bg-mist."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            (super::gold_rule_top())

            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."max-w-2xl".mx-auto."mb-12"."md:mb-16" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Dining")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-ink.font-light."mb-4"
                        style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars())
                    {
                        "Culinary Destinations"
                    }
                    p.reveal.text-muted style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(300)).css_vars()) {
                        "Three venues, each with its own signature, for working breakfasts, client dinners and late conversations."
                    }
                }

                div.grid."md:grid-cols-3"."gap-6"."md:gap-8" {
                    @for (index, restaurant) in RESTAURANTS.iter().enumerate() {
                        @let card = scope.track(RevealStyle::staggered(Offset::Up(60), index, Duration::from_millis(200)));
                        article.reveal data-reveal-state=(card.state) style=(card.vars) {
                            div.group.bg-white.shadow-sm.overflow-hidden.transition-transform."duration-300".ease-out data-focus-scale {
                                div.relative."h-64".overflow-hidden {
                                    img.w-full.h-full.object-cover.transition-transform."duration-700"."group-hover:scale-110"
                                        src=(restaurant.image) alt=(restaurant.name) loading="lazy";
                                    div.absolute.inset-0.bg-linear-to-t."from-ink/70".to-transparent {}
                                    span.absolute."top-4"."left-4".bg-gold.text-white.text-xs."px-3"."py-1"."tracking-[2px]" {
                                        "0" (restaurant.id)
                                    }
                                    p.absolute."bottom-4"."left-4"."right-4".flex.items-center."gap-2".text-white.text-sm {
                                        (Icon::Star.sized("w-4 h-4 text-gold")) (restaurant.signature)
                                    }
                                }
                                div."p-6" {
                                    h3.text-xl.text-ink.font-light."mb-3" { (restaurant.name) }
                                    p.text-muted.text-sm.leading-relaxed."mb-5" { (restaurant.description) }
                                    div.flex.justify-between.text-xs.text-muted.border-t."border-mist"."pt-4" {
                                        span.flex.items-center."gap-1" { (Icon::Clock.sized("w-3 h-3 text-gold")) (restaurant.hours) }
                                        span.flex.items-center."gap-1" { (Icon::MapPin.sized("w-3 h-3 text-gold")) (restaurant.seats) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
