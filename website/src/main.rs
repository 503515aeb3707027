use maudit::{BuildOptions, BuildOutput, coronate, routes};

mod content;
mod icons;
mod layout;
mod motion;
mod routes;
mod sections;

use routes::*;

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    coronate(
        routes![Index],
        vec![].into(),
        BuildOptions {
            base_url: Some("https://nexora.com".to_string()),
            ..Default::default()
        },
    )
}
