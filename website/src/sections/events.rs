use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::{venue_url, VENUES};
use crate::icons::Icon;
use crate::motion::RevealScope;

pub fn meetings_events(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("events", config, RevealMode::Latched);
    let intro = scope.trigger();
    let image = RevealStyle::new(Offset::Left(40)).with_duration(Duration::from_millis(900));
    let copy = |delay: u64| {
        RevealStyle::new(Offset::Right(40))
            .with_delay(Duration::from_millis(delay))
            .css_vars()
    };

    html! {
        section.relative.bg-white."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            (super::gold_rule_top())

            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.grid."lg:grid-cols-2"."gap-10"."md:gap-16".items-center."mb-16" data-reveal-state=(intro.state) {
                    div.reveal.relative."h-[320px]"."md:h-[440px]".overflow-hidden style=(image.css_vars()) {
                        img.w-full.h-full.object-cover src="/images/meeting.jpeg" alt="Meeting room at NEXORA" loading="lazy";
                        div.absolute."bottom-0"."left-0".bg-gold.text-white."px-6"."py-4" {
                            p."text-2xl".font-light { "450" }
                            p.text-xs."tracking-[2px]" { "GUEST CAPACITY" }
                        }
                    }
                    div {
                        div.reveal style=(copy(100)) {
                            p.text-gold."tracking-[4px]".text-xs."sm:text-sm"."mb-4" { "MEETINGS & EVENTS" }
                        }
                        h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-ink.font-light.leading-tight."mb-6" style=(copy(200)) {
                            "Spaces Designed" br; "For Decisions"
                        }
                        p.reveal.text-muted.leading-relaxed."mb-8" style=(copy(300)) {
                            "From intimate board meetings to large-scale conferences, every venue is equipped with integrated technology and supported by a dedicated events team."
                        }
                        div.reveal style=(copy(400)) {
                            a.btn-gold.group href="/contact" {
                                "PLAN YOUR EVENT"
                                (Icon::ArrowRight.sized("w-4 h-4 group-hover:translate-x-2 transition-transform"))
                            }
                        }
                    }
                }

                div.grid."md:grid-cols-3"."gap-6" {
                    @for (index, venue) in VENUES.iter().enumerate() {
                        @let card = scope.track(RevealStyle::staggered(Offset::Up(40), index, Duration::from_millis(150)));
                        a.reveal.group.block.bg-mist.overflow-hidden href=(venue_url(venue))
                            data-reveal-state=(card.state)
                            style=(card.vars)
                        {
                            div.relative."h-52".overflow-hidden {
                                img.w-full.h-full.object-cover.transition-transform."duration-700"."group-hover:scale-110" src=(venue.image) alt=(venue.name) loading="lazy";
                                span.absolute."top-4"."right-4".flex.items-center."gap-1"."bg-ink/80".text-white.text-xs."px-3"."py-1" {
                                    (Icon::Users.sized("w-3 h-3 text-gold")) (venue.capacity)
                                }
                            }
                            div."p-6" {
                                h3.text-xl.text-ink.font-light."mb-4"."group-hover:text-gold".transition-colors { (venue.name) }
                                ul."space-y-2" {
                                    @for feature in venue.features {
                                        li.flex.items-center."gap-2".text-sm.text-muted {
                                            (Icon::CheckCircle.sized("w-4 h-4 text-gold shrink-0")) (feature)
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
}
