use maud::html;
use maudit::route::prelude::*;
use nexora_motion::MotionConfig;

use crate::layout::layout;
use crate::sections;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let config = MotionConfig::default();

        layout(
            html! {
                (sections::hero(&config))
                (sections::brand_story(&config))
                (sections::rooms_preview(&config))
                (sections::meetings_events(&config))
                (sections::amenities(&config))
                (sections::dining(&config))
                (sections::location(&config))
                (sections::gallery(&config))
                (sections::testimonials(&config))
                (sections::special_offers(&config))
            },
            ctx,
            &config,
            None,
        )
    }
}
