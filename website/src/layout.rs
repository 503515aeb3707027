use std::error::Error;

use maud::{html, Markup, DOCTYPE};
use maudit::assets::StyleOptions;
use maudit::maud::generator;
use maudit::route::PageContext;
use nexora_motion::MotionConfig;

mod footer;
mod navbar;

pub use footer::footer;
pub use navbar::navbar;

use crate::icons::Icon;
use crate::motion::config_script;

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "NEXORA Hotel".to_string(),
            description: Some(
                "Executive comfort for modern business. Rooms, meetings and dining in the heart of the financial district."
                    .to_string(),
            ),
            canonical_url: None,
        }
    }
}

impl SeoMeta {
    pub fn render(&self, base_url: &Option<String>) -> Markup {
        let formatted_title = if self.title == "NEXORA Hotel" {
            self.title.clone()
        } else {
            format!("{} - NEXORA Hotel", self.title)
        };

        let description = self
            .description
            .clone()
            .or_else(|| SeoMeta::default().description)
            .unwrap_or_default();

        let social_image_url = base_url
            .as_ref()
            .map(|base_url| format!("{}/images/hero1.jpg", base_url.trim_end_matches('/')));

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(social_image_url) = &social_image_url {
                meta property="og:image" content=(social_image_url);
            }
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }

            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(formatted_title);
            meta name="twitter:description" content=(description);
        }
    }
}

fn scroll_top(config: &MotionConfig) -> Markup {
    // Rendered at the top of the page, where the button is never shown.
    let toggle = config.scroll_top.toggle();

    html! {
        button.fixed."bottom-6"."right-6"."z-40"."w-12"."h-12".bg-gold.text-white.rounded-full.shadow-lg.flex.items-center.justify-center."hover:bg-gold-dark".transition-all."duration-300"
            type="button"
            aria-label="Scroll to top"
            data-scroll-top
            data-visible=(toggle.is_active())
        {
            (Icon::ArrowUp.sized("w-5 h-5"))
        }
    }
}

pub fn layout(
    main: Markup,
    ctx: &mut PageContext,
    config: &MotionConfig,
    seo: Option<SeoMeta>,
) -> Result<Markup, Box<dyn Error>> {
    ctx.assets
        .include_style_with_options("assets/nexora.css", StyleOptions { tailwind: true })?;
    ctx.assets.include_script("assets/motion.ts")?;

    let seo_data = seo.unwrap_or_default();
    let config_script = config_script(config)?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                link rel="icon" href="/favicon.svg";
                (seo_data.render(ctx.base_url))
                (config_script)
            }
            body.bg-mist.text-ink.antialiased {
                (navbar(ctx.current_path, config))
                main { (main) }
                (footer(config))
                (scroll_top(config))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_title() {
        let home = SeoMeta::default().render(&None).into_string();
        assert!(home.contains("<title>NEXORA Hotel</title>"));
        assert!(!home.contains("og:image"));

        let rooms = SeoMeta {
            title: "Rooms".to_string(),
            description: None,
            canonical_url: Some("https://nexora.com/rooms".to_string()),
        }
        .render(&Some("https://nexora.com/".to_string()))
        .into_string();

        assert!(rooms.contains("<title>Rooms - NEXORA Hotel</title>"));
        assert!(rooms.contains("https://nexora.com/images/hero1.jpg"));
        assert!(rooms.contains(r#"rel="canonical""#));
        assert!(rooms.contains("Executive comfort for modern business."));
    }

    #[test]
    fn test_scroll_top_starts_hidden() {
        let markup = scroll_top(&MotionConfig::default()).into_string();

        assert!(markup.contains(r#"data-visible="false""#));
        assert!(markup.contains(r#"aria-label="Scroll to top""#));
    }
}
