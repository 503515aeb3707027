use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::icons::Icon;
use crate::motion::RevealScope;

fn vars(from: Offset, delay_ms: u64) -> String {
    RevealStyle::new(from)
        .with_delay(Duration::from_millis(delay_ms))
        .css_vars()
}

fn value_card(icon: Icon, title: &str, copy: &str, short_copy: &str, from: Offset, delay_ms: u64) -> Markup {
    html! {
        div.reveal.group.relative.bg-white."p-4"."sm:p-6"."md:p-10".flex.flex-col.items-center.justify-center.text-center.shadow-sm.overflow-hidden.cursor-pointer."hover:bg-ink"
            style=(vars(from, delay_ms))
        {
            div.absolute.inset-0.bg-gold."opacity-0"."group-hover:opacity-10".transition-opacity."duration-500" {}
            (icon.sized("text-gold w-6 h-6 sm:w-8 sm:h-8 md:w-10 md:h-10 mb-2 sm:mb-3 md:mb-4 group-hover:text-white transition-colors duration-500 relative z-10"))
            h3.text-sm."sm:text-base"."md:text-xl".text-ink."mb-2"."sm:mb-3".font-light."group-hover:text-white".relative."z-10" { (title) }
            p."text-[10px]"."sm:text-xs"."md:text-sm".text-muted.leading-relaxed."group-hover:text-white/80".relative."z-10".hidden."sm:block" { (copy) }
            p."text-[10px]".text-muted."group-hover:text-white/80".relative."z-10".block."sm:hidden" { (short_copy) }
            span.absolute."bottom-0"."left-0"."w-0"."h-[2px]".bg-gold."group-hover:w-full".transition-all."duration-500" {}
        }
    }
}

fn framed_image(src: &str, alt: &str, from: Offset, delay_ms: u64) -> Markup {
    html! {
        div.reveal.relative."h-[180px]"."md:h-[260px]".overflow-hidden.group style=(vars(from, delay_ms)) {
            img.w-full.h-full.object-cover.transition-transform."duration-700"."group-hover:scale-105" src=(src) alt=(alt);
            div.absolute."inset-0"."bg-gold/0"."group-hover:bg-gold/20".transition-all."duration-500" {}
        }
    }
}

pub fn brand_story(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("brand-story", config, RevealMode::Once);
    let content = scope.trigger();

    html! {
        section.relative.bg-mist."py-16"."md:py-24".overflow-hidden {
            (super::gold_rule_top())

            div.relative."max-w-7xl".mx-auto."px-4"."sm:px-6"
                data-reveal-group=(scope.name())
                data-reveal-threshold=(scope.threshold())
                data-reveal-mode=(scope.mode())
                data-reveal-state=(content.state)
            {
                div.grid."lg:grid-cols-2"."gap-10"."md:gap-16".items-center {
                    div.grid."grid-cols-2"."gap-3"."sm:gap-6" {
                        (value_card(Icon::Coffee, "Executive Comfort", "Designed exclusively for corporate travelers.", "Corporate comfort", Offset::Left(40), 100))
                        (framed_image("/images/lobby.jpg", "NEXORA Lobby", Offset::Right(40), 400))
                        (framed_image("/images/room.jpg", "NEXORA Room", Offset::Left(40), 500))
                        (value_card(Icon::Award, "Corporate Excellence", "Trusted by global business leaders.", "Award-winning hospitality", Offset::Right(40), 200))
                    }

                    div."mt-6"."sm:mt-0" {
                        div.reveal.flex.items-center."gap-2"."sm:gap-3"."mb-4"."sm:mb-6" style=(vars(Offset::Up(30), 100)) {
                            div."w-6"."sm:w-8".h-px.bg-gold {}
                            span.text-gold."tracking-[4px]".text-xs."sm:text-sm" { "ABOUT NEXORA" }
                        }
                        h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-ink.font-light.leading-tight."mb-4"."sm:mb-6" style=(vars(Offset::Up(30), 200)) {
                            "The Future Of" br; "Corporate Hospitality"
                        }
                        p.reveal.text-sm."sm:text-base"."md:text-lg".text-muted.leading-relaxed."mb-6"."sm:mb-8" style=(vars(Offset::Up(30), 300)) {
                            "Located in the heart of the financial district, NEXORA Hotel delivers a seamless blend of executive comfort, modern architecture, and premium service."
                        }
                        div.reveal.flex.flex-wrap."gap-4"."sm:gap-6"."mb-8"."sm:mb-10" style=(vars(Offset::Up(30), 400)) {
                            @for (icon, value, label) in [(Icon::Clock, "24/7", "Concierge"), (Icon::Briefcase, "10k+", "Corporate Clients")] {
                                div.flex.items-center."gap-2"."sm:gap-3" {
                                    div."w-8"."h-8"."sm:w-10"."sm:h-10"."bg-gold/10".rounded-full.flex.items-center.justify-center {
                                        (icon.sized("text-gold w-3 h-3 sm:w-4 sm:h-4"))
                                    }
                                    div {
                                        p.text-ink.text-sm."sm:text-base".font-medium { (value) }
                                        p.text-muted.text-xs { (label) }
                                    }
                                }
                            }
                        }
                        div.reveal style=(vars(Offset::Up(30), 500)) {
                            a.btn-gold.group href="/about" {
                                "Discover More"
                                (Icon::ArrowRight.sized("w-4 h-4 sm:w-5 sm:h-5 group-hover:translate-x-2 transition-transform duration-300"))
                            }
                        }
                    }
                }
            }

            (super::gold_rule_bottom())
        }
    }
}
