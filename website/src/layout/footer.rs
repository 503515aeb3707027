use std::time::Duration;

use chrono::Datelike;
use maud::{html, Markup};
use nexora_motion::reveal::{Offset, RevealMode, RevealStyle};
use nexora_motion::MotionConfig;

use crate::content::{CONTACT_LINES, FOOTER_LINKS, PARTNERS, SOCIAL_LINKS};
use crate::icons::Icon;
use crate::motion::RevealScope;

pub fn footer(config: &MotionConfig) -> Markup {
    let mut scope = RevealScope::section("footer", config, RevealMode::Once);
    let partners = scope.trigger();
    let columns = scope.trigger();
    let column = |index: usize| RevealStyle::staggered(Offset::Up(20), index, Duration::from_millis(100)).css_vars();
    let year = chrono::Local::now().year();

    html! {
        footer.relative.bg-ink.text-white.overflow-hidden
            data-reveal-group=(scope.name())
            data-reveal-threshold=(scope.threshold())
            data-reveal-mode=(scope.mode())
        {
            div.border-b."border-white/10" data-reveal-state=(partners.state) {
                div."max-w-7xl".mx-auto."px-4"."sm:px-6"."py-10".grid."grid-cols-2"."md:grid-cols-4"."gap-6" {
                    @for (index, partner) in PARTNERS.iter().enumerate() {
                        div.reveal.text-center style=(column(index)) {
                            p.text-gold."text-[10px]"."tracking-[3px]".uppercase."mb-1" { (partner.role) }
                            p."text-white/80".text-lg.font-light { (partner.name) }
                        }
                    }
                }
            }

            div."max-w-7xl".mx-auto."px-4"."sm:px-6"."py-14".grid."md:grid-cols-2"."lg:grid-cols-4"."gap-10" data-reveal-state=(columns.state) {
                div.reveal style=(column(0)) {
                    p."text-2xl"."tracking-[6px]".font-light { "NEXORA" }
                    p.text-gold."text-[9px]"."tracking-[4px]"."mb-5" { "HOTEL & SUITES" }
                    p."text-white/60".text-sm.leading-relaxed."mb-6" {
                        "Executive comfort for modern business, in the heart of the financial district."
                    }
                    div.flex."gap-4" {
                        @for social in SOCIAL_LINKS {
                            a."text-white/60".transition-colors.(social.hover) href=(social.href) target="_blank" rel="noopener noreferrer" {
                                span.sr-only { (social.label) }
                                (social.icon.sized("w-5 h-5"))
                            }
                        }
                    }
                }

                div.reveal style=(column(1)) {
                    h3.flex.items-center."gap-2".text-gold.text-xs."tracking-[3px]"."mb-5" {
                        (Icon::Compass.sized("w-4 h-4")) "EXPLORE"
                    }
                    ul."space-y-3" {
                        @for link in FOOTER_LINKS {
                            li {
                                a."text-white/60"."hover:text-gold".text-sm.transition-colors href=(link.path) { (link.name) }
                            }
                        }
                    }
                }

                div.reveal."lg:col-span-2" style=(column(2)) {
                    h3.text-gold.text-xs."tracking-[3px]"."mb-5" { "CONTACT" }
                    ul.grid."sm:grid-cols-2"."gap-4" {
                        @for line in CONTACT_LINES {
                            li.flex."gap-3" {
                                (line.icon.sized("w-4 h-4 text-gold mt-1 shrink-0"))
                                div {
                                    p."text-white/40".text-xs { (line.label) }
                                    @if let Some(href) = line.href {
                                        a."text-white/80"."hover:text-gold".text-sm.transition-colors href=(href) { (line.value) }
                                    } @else {
                                        p."text-white/80".text-sm { (line.value) }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div.border-t."border-white/10" {
                div."max-w-7xl".mx-auto."px-4"."sm:px-6"."py-6".flex.flex-col."sm:flex-row".justify-between.items-center."gap-2"."text-white/40".text-xs {
                    p { "© " (year) " NEXORA Hotel. All rights reserved." }
                    p { "Crafted by S.A.I.T Solution Nepal" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_content() {
        let markup = footer(&MotionConfig::default()).into_string();

        assert!(markup.contains(&chrono::Local::now().year().to_string()));
        assert!(markup.contains(r#"href="tel:+977-9800000000""#));
        assert!(markup.contains("Pokhara, Nepal"));
        assert_eq!(markup.matches(r#"rel="noopener noreferrer""#).count(), SOCIAL_LINKS.len());
        assert!(!markup.contains(r#"data-reveal-state="hidden""#));
    }
}
