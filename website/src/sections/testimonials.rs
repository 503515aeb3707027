use std::time::Duration;

use log::warn;
use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::{Carousel, MotionConfig};

use crate::content::{Testimonial, TESTIMONIALS};
use crate::icons::Icon;
use crate::motion::RevealScope;

/// Auto-advancing testimonial slider.
///
/// The build renders the first slide as current; `assets/motion.ts` drives the rotation from the
/// `data-carousel-*` hooks, restarting its interval whenever the slide changes.
pub fn testimonials(config: &MotionConfig) -> Markup {
    let carousel = match Carousel::new(TESTIMONIALS.iter().collect::<Vec<&Testimonial>>()) {
        Ok(carousel) => carousel,
        Err(err) => {
            warn!("Skipping testimonials: {err}");
            return html! {};
        }
    };

    let mut scope = RevealScope::section("testimonials", config, RevealMode::Once);
    let header = scope.trigger();
    let slider = scope.track(RevealStyle::new(Offset::Up(40)).with_delay(Duration::from_millis(300)));

    html! {
        section.relative.bg-mist."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            (super::gold_rule_top())

            div."max-w-4xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."mb-10"."md:mb-14" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Testimonials")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-ink.font-light
                        style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars())
                    {
                        "Trusted By Leaders"
                    }
                }

                div.reveal.relative
                    data-reveal-state=(slider.state)
                    style=(slider.vars)
                    data-carousel
                    data-carousel-interval=(config.carousel.interval_ms)
                {
                    div.relative.bg-white.shadow-sm."px-6"."py-10"."sm:px-14"."sm:py-14"."min-h-[340px]" {
                        div.absolute."-top-6"."left-1/2"."-translate-x-1/2"."w-12"."h-12".bg-gold.rounded-full.flex.items-center.justify-center {
                            (Icon::Quote.sized("w-5 h-5 text-white"))
                        }

                        @for (testimonial, (_, current)) in carousel.items().iter().zip(carousel.positions()) {
                            figure.text-center.transition-opacity."duration-700"
                                data-carousel-slide
                                hidden[!current]
                                aria-hidden=(if current { "false" } else { "true" })
                            {
                                div.flex.justify-center."gap-1"."mb-6" {
                                    @for _ in 0..5 {
                                        (Icon::Star.sized("w-4 h-4 text-gold"))
                                    }
                                }
                                blockquote.text-ink."text-lg"."sm:text-xl".font-light.leading-relaxed.italic."mb-8" {
                                    "\u{201C}" (testimonial.content) "\u{201D}"
                                }
                                figcaption.flex.items-center.justify-center."gap-4" {
                                    img."w-14"."h-14".rounded-full.object-cover.border-2.border-gold src=(testimonial.image) alt=(testimonial.name) loading="lazy";
                                    div.text-left {
                                        p.text-ink.font-medium { (testimonial.name) }
                                        p.text-muted.text-xs { (testimonial.role) ", " (testimonial.company) }
                                    }
                                }
                            }
                        }
                    }

                    div.flex.items-center.justify-center."gap-6"."mt-8" {
                        button.flex.items-center.justify-center."w-10"."h-10".border.border-gold.text-gold."hover:bg-gold"."hover:text-white".transition-colors
                            type="button" aria-label="Previous testimonial" data-carousel-prev
                        {
                            (Icon::ChevronLeft.sized("w-5 h-5"))
                        }
                        div.flex."gap-2" {
                            @for (index, current) in carousel.positions() {
                                button.h-2.rounded-full.transition-all."duration-300"
                                    .(if current { "w-8 bg-gold" } else { "w-2 bg-muted/40" })
                                    type="button"
                                    data-carousel-dot=(index)
                                    aria-label={ "Go to testimonial " (index + 1) }
                                    aria-current=[current.then_some("true")]
                                {}
                            }
                        }
                        button.flex.items-center.justify-center."w-10"."h-10".border.border-gold.text-gold."hover:bg-gold"."hover:text-white".transition-colors
                            type="button" aria-label="Next testimonial" data-carousel-next
                        {
                            (Icon::ChevronRight.sized("w-5 h-5"))
                        }
                    }
                }
            }
        }
    }
}
