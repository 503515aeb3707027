use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::{GalleryImage, GalleryMotion, GALLERY};
use crate::motion::RevealScope;

fn style_for(image: &GalleryImage) -> RevealStyle {
    let from = match image.motion {
        GalleryMotion::Left => Offset::Left(30),
        GalleryMotion::Right => Offset::Right(30),
        GalleryMotion::Up => Offset::Up(30),
        GalleryMotion::Down => Offset::Down(30),
        GalleryMotion::Scale => Offset::Scale(0.95),
    };

    RevealStyle::new(from)
        .with_delay(Duration::from_millis(image.delay_ms))
        .with_duration(Duration::from_millis(800))
}

pub fn gallery(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("gallery", config, RevealMode::Once);
    let header = scope.trigger();

    html! {
        section.relative.bg-ink."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."mb-10"."md:mb-14" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Visual Experience")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-white.font-light
                        style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars())
                    {
                        "Discover Nexora"
                    }
                }

                div.grid."grid-cols-2"."md:grid-cols-4"."auto-rows-[180px]"."md:auto-rows-[220px]"."gap-2"."sm:gap-4" {
                    @for image in GALLERY {
                        @let tile = scope.track(style_for(image));
                        figure.reveal.group.relative.overflow-hidden.(image.span).(image.mobile_span)
                            data-reveal-state=(tile.state)
                            style=(tile.vars)
                        {
                            img.w-full.h-full.object-cover.transition-transform."duration-700"."group-hover:scale-110"
                                src=(image.src) alt=(image.alt) loading="lazy";
                            div.absolute.inset-0.bg-linear-to-t."from-ink/80".via-transparent.to-transparent."opacity-0"."group-hover:opacity-100".transition-opacity."duration-500" {}
                            figcaption.absolute."bottom-4"."left-4".text-white."translate-y-4"."opacity-0"."group-hover:translate-y-0"."group-hover:opacity-100".transition-all."duration-500" {
                                @if image.featured {
                                    span.block.text-gold."text-[10px]"."tracking-[3px]"."mb-1" { "FEATURED" }
                                }
                                span.text-sm."sm:text-base".font-light { (image.title) }
                            }
                        }
                    }
                }
            }
        }
    }
}
