use maud::{html, Markup};
use nexora_motion::MotionConfig;

use crate::content::NAV_ITEMS;
use crate::icons::Icon;

/// Fixed top navigation. Styled by `data-scrolled`, which the browser flips once the page scrolls past
/// `navbar.scrolledAfterPx`.
pub fn navbar(current_path: &str, config: &MotionConfig) -> Markup {
    let toggle = config.navbar.toggle();
    let is_current = |path: &str| current_path.trim_end_matches('/') == path.trim_end_matches('/');

    html! {
        header.group.fixed."top-0"."left-0"."right-0"."z-50".transition-all."duration-500"
            data-navbar
            data-scrolled=(toggle.is_active())
        {
            nav."max-w-7xl".mx-auto."px-4"."sm:px-6".flex.items-center.justify-between."h-20"."group-data-[scrolled=true]:h-16".transition-all."duration-500" {
                a.flex.flex-col.leading-none href="/" {
                    span.text-white."group-data-[scrolled=true]:text-ink"."text-2xl"."tracking-[6px]".font-light { "NEXORA" }
                    span.text-gold."text-[9px]"."tracking-[4px]" { "HOTEL & SUITES" }
                }

                ul.hidden."lg:flex".items-center."gap-8" {
                    @for item in NAV_ITEMS {
                        @let current = is_current(item.path);
                        li {
                            a.relative.text-sm."tracking-[2px]".transition-colors."hover:text-gold"
                                .(if current { "text-gold" } else { "text-white group-data-[scrolled=true]:text-ink" })
                                href=(item.path)
                                aria-current=[current.then_some("page")]
                            {
                                (item.name)
                            }
                        }
                    }
                }

                div.flex.items-center."gap-4" {
                    a.btn-gold.hidden."sm:inline-flex" href="/booking" { "BOOK NOW" }
                    button.flex.flex-col."gap-1.5"."lg:hidden"."p-2"
                        type="button"
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded="false"
                        data-menu-toggle
                    {
                        @for _ in 0..3 {
                            span.block."w-6"."h-px".bg-white."group-data-[scrolled=true]:bg-ink" {}
                        }
                    }
                }
            }

            div.hidden."lg:hidden"."max-lg:data-[open=true]:block".bg-ink."border-t"."border-white/10" id="mobile-menu" data-menu {
                ul."px-6"."py-6"."space-y-4" {
                    @for item in NAV_ITEMS {
                        li {
                            a.block.text-sm."tracking-[2px]"
                                .(if is_current(item.path) { "text-gold" } else { "text-white" })
                                href=(item.path)
                                data-menu-link
                            {
                                (item.name)
                            }
                        }
                    }
                    li."pt-4" {
                        a.btn-gold.w-full.justify-center href="/booking" data-menu-link {
                            "BOOK NOW"
                            (Icon::ArrowRight.sized("w-4 h-4"))
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_current_page() {
        let markup = navbar("/", &MotionConfig::default()).into_string();

        assert_eq!(markup.matches(r#"aria-current="page""#).count(), 1);
        assert!(markup.contains(r#"data-scrolled="false""#));
        assert!(markup.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_open_menu_stays_below_desktop() {
        let markup = navbar("/", &MotionConfig::default()).into_string();

        assert!(markup.contains(r#"class="hidden lg:hidden max-lg:data-[open=true]:block"#));
    }

    #[test]
    fn test_every_nav_item_is_linked_twice() {
        let markup = navbar("/rooms/", &MotionConfig::default()).into_string();

        for item in NAV_ITEMS {
            // The logo links home as well.
            let expected = if item.path == "/" { 3 } else { 2 };
            assert_eq!(markup.matches(&format!(r#"href="{}""#, item.path)).count(), expected, "{}", item.path);
        }
    }
}
