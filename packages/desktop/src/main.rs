use std::path::Path;

use content::PortfolioConfig;
use dioxus::prelude::*;

use ui::PortfolioPage;

/// Directory holding the site documents. Shares the web app's sample site;
/// replace the files there (or point this elsewhere) to show your own.
const SITE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../web/public");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(Path::new(SITE_DIR)));

    rsx! {
        PortfolioPage { config }
    }
}

/// Read `portfolio.toml` from the site directory if there is one, and root
/// the content paths at that directory.
fn load_config(site: &Path) -> PortfolioConfig {
    let path = site.join(PortfolioConfig::filename());
    let mut config = match std::fs::read_to_string(&path) {
        Ok(text) => PortfolioConfig::from_toml_or_default(&text),
        Err(e) => {
            tracing::debug!("No {} ({}), using defaults", path.display(), e);
            PortfolioConfig::default()
        }
    };
    config.resources.root = site
        .join(&config.resources.root)
        .to_string_lossy()
        .into_owned();
    config
}
