use content::PortfolioConfig;
use dioxus::prelude::*;

use ui::PortfolioPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Site configuration, compiled into the bundle.
const CONFIG_TOML: &str = include_str!("../portfolio.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| PortfolioConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PortfolioPage { config }
    }
}
