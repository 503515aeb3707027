use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::OFFERS;
use crate::icons::Icon;
use crate::motion::RevealScope;

pub fn special_offers(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("offers", config, RevealMode::Once);
    let header = scope.trigger();

    html! {
        section.relative.bg-ink."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."mb-12"."md:mb-16" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Exclusive Privileges")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-white.font-light
                        style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars())
                    {
                        "Signature Offers"
                    }
                }

                div.grid."md:grid-cols-3"."gap-6"."md:gap-8".items-stretch {
                    @for (index, offer) in OFFERS.iter().enumerate() {
                        @let card = scope.track(
                            RevealStyle::staggered(Offset::Up(80), index, Duration::from_millis(200))
                                .with_duration(Duration::from_millis(800))
                        );
                        article.reveal.group.relative.overflow-hidden."min-h-[460px]".flex.flex-col.justify-end
                            .(if offer.featured { "md:-translate-y-4 ring-1 ring-gold" } else { "" })
                            data-reveal-state=(card.state)
                            style=(card.vars)
                        {
                            img.absolute.inset-0.w-full.h-full.object-cover.transition-transform."duration-1000"."group-hover:scale-110"
                                src=(offer.image) alt=(offer.title) loading="lazy";
                            div.absolute.inset-0.bg-linear-to-b.(offer.gradient) {}

                            @if offer.featured {
                                span.absolute."top-5"."right-5".flex.items-center."gap-1".bg-gold.text-white."text-[10px]"."tracking-[2px]"."px-3"."py-1" {
                                    (Icon::Award.sized("w-3 h-3")) "MOST POPULAR"
                                }
                            }

                            div.relative."p-6"."sm:p-8" {
                                div."w-11"."h-11"."mb-5".rounded-full."bg-gold/20".flex.items-center.justify-center {
                                    (offer.icon.sized("w-5 h-5 text-gold"))
                                }
                                p.text-gold."text-2xl".font-light."mb-2" { (offer.benefit) }
                                h3.text-white.text-xl.font-light."mb-2" { (offer.title) }
                                p."text-white/70".text-sm."mb-4" { (offer.description) }
                                p."text-white/50".text-xs."tracking-[2px]"."mb-6" { (offer.validity) }
                                a.btn-gold.group href="/booking" {
                                    "Get Offer"
                                    (Icon::ArrowRight.sized("w-4 h-4 group-hover:translate-x-2 transition-transform"))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
