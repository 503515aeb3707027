use std::time::Duration;

use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::{room_url, Room, ROOMS};
use crate::icons::Icon;
use crate::motion::{Reveal, RevealScope};

const CARD_STAGGER: Duration = Duration::from_millis(150);

fn room_card(room: &Room, card: &Reveal) -> Markup {
    // Alternate rows put the image on the right from `md` up.
    let image_order = if room.reverse { "md:order-2" } else { "" };
    let copy_order = if room.reverse { "md:order-1" } else { "" };

    html! {
        article.reveal.group.grid."md:grid-cols-2".bg-white.shadow-sm.overflow-hidden
            data-reveal-state=(card.state)
            style=(card.vars)
        {
            div.relative."h-64"."md:h-auto"."min-h-[320px]".overflow-hidden.(image_order) {
                img.absolute.inset-0.w-full.h-full.object-cover.transition-transform."duration-700"."group-hover:scale-105"
                    src=(room.image) alt=(room.name) loading="lazy";
                div.absolute.inset-0.bg-linear-to-t."from-ink/60".to-transparent {}
                div.absolute."top-4"."left-4".flex."gap-2" {
                    span.flex.items-center."gap-1"."bg-white/90"."px-3"."py-1".text-xs.text-ink {
                        (Icon::Maximize.sized("w-3 h-3 text-gold")) (room.size)
                    }
                    span.flex.items-center."gap-1"."bg-white/90"."px-3"."py-1".text-xs.text-ink {
                        (Icon::Users.sized("w-3 h-3 text-gold")) (room.capacity)
                    }
                }
            }

            div."p-6"."sm:p-10".flex.flex-col.justify-center.(copy_order) {
                span.text-gold."tracking-[3px]".text-xs."mb-3" { "0" (room.id) }
                h3."text-2xl"."sm:text-3xl".text-ink.font-light."mb-4" { (room.name) }
                p.text-muted.leading-relaxed."mb-6" { (room.description) }
                ul.grid."grid-cols-1"."sm:grid-cols-3"."gap-3"."mb-8" {
                    @for feature in room.features {
                        li.flex.items-center."gap-2".text-sm.text-ink {
                            (Icon::Wifi.sized("w-3 h-3 text-gold shrink-0")) (feature)
                        }
                    }
                }
                a.group.inline-flex.items-center."gap-2".text-gold.text-sm."tracking-[2px]" href=(room_url(room)) {
                    "EXPLORE ROOM"
                    (Icon::ArrowRight.sized("w-4 h-4 group-hover:translate-x-2 transition-transform duration-300"))
                }
            }
        }
    }
}

pub fn rooms_preview(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("rooms", config, RevealMode::Latched);
    let header = scope.trigger();
    let cards: Vec<Reveal> = (0..ROOMS.len())
        .map(|index| scope.track(RevealStyle::staggered(Offset::Up(48), index, CARD_STAGGER)))
        .collect();
    let footer = scope.track(RevealStyle::new(Offset::Up(24)).with_delay(CARD_STAGGER * ROOMS.len() as u32));

    html! {
        section.relative.bg-mist."py-16"."md:py-24".overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            div."max-w-7xl".mx-auto."px-4"."sm:px-6" {
                div.text-center."mb-12"."md:mb-16" data-reveal-state=(header.state) {
                    div.reveal { (super::eyebrow("Accommodation")) }
                    h2.reveal."text-3xl"."sm:text-4xl"."md:text-5xl".text-ink.font-light style=(RevealStyle::new(Offset::Up(24)).with_delay(Duration::from_millis(150)).css_vars()) {
                        "Rooms & Suites"
                    }
                }

                div.flex.flex-col."gap-8"."md:gap-12" {
                    @for (room, card) in ROOMS.iter().zip(&cards) {
                        (room_card(room, card))
                    }
                }

                div.reveal.text-center."mt-12"."md:mt-16" data-reveal-state=(footer.state) style=(footer.vars) {
                    a.btn-gold.group href="/booking" {
                        "RESERVE YOUR STAY"
                        (Icon::ArrowRight.sized("w-4 h-4 group-hover:translate-x-2 transition-transform"))
                    }
                }
            }
        }
    }
}
