use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealStyle};
use nexora_motion::MotionConfig;

use crate::icons::Icon;
use crate::motion::RevealScope;

pub fn hero(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::hero(config);
    let section = scope.trigger();

    // Label, heading, copy and buttons follow each other in.
    let step = |delay: u64| {
        RevealStyle::new(Offset::Up(32))
            .with_delay(Duration::from_millis(delay))
            .with_duration(Duration::from_millis(1000))
            .css_vars()
    };

    html! {
        section.relative.h-screen.overflow-hidden.bg-ink
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
            data-reveal-state=(section.state)
        {
            div.absolute.inset-0.animate-zoom.bg-cover.bg-center style="background-image: url('/images/hero1.jpg');" {}
            div.absolute.inset-0.bg-linear-to-r.from-ink."via-ink/85"."to-ink/30" {}

            div.relative."z-10"."max-w-7xl".mx-auto."px-4"."sm:px-6".h-full.flex.items-center."pt-20"."sm:pt-32" {
                div."max-w-xl".w-full {
                    div.reveal style=(step(0)) {
                        p.text-gold."tracking-[4px]".text-xs."sm:text-sm"."mb-3"."sm:mb-4" { "NEXORA HOTEL" }
                    }
                    div.reveal style=(step(300)) {
                        h1.text-white."text-4xl"."sm:text-5xl"."md:text-6xl".font-light.leading-tight."mb-4"."sm:mb-6" {
                            "Executive Comfort"
                            span.block { " For Modern Business" }
                        }
                    }
                    div.reveal style=(step(500)) {
                        p."text-white/70".text-base."sm:text-lg"."mb-8"."sm:mb-10" {
                            "Designed for corporate travelers who value precision, comfort, and seamless hospitality experience."
                        }
                    }
                    div.reveal style=(step(700)) {
                        div.flex.flex-col."sm:flex-row"."gap-3"."sm:gap-4" {
                            a.btn-gold.group href="/rooms" {
                                "VIEW ROOMS"
                                (Icon::ArrowRight.sized("w-4 h-4 group-hover:translate-x-2 transition-transform"))
                            }
                            a.btn-outline-light href="/contact" { "BOOK NOW" }
                        }
                    }
                }
            }

            (super::gold_rule_bottom())
        }
    }
}
