pub mod config;
pub mod error;
pub mod loader;
pub mod markdown;
pub mod models;
pub mod render;
pub mod reveal;
pub mod source;
pub mod toggle;

pub use config::{PortfolioConfig, ResourceConfig, RevealConfig};
pub use error::PortfolioError;
pub use loader::{load_project, load_site, ProjectView, SiteData};
pub use markdown::{CommonMark, MarkdownRenderer};
pub use models::{Education, Profile, Project};
pub use render::{contact_html, education_html, project_detail_html};
pub use reveal::NameReveal;
pub use source::{ContentSource, HttpSource, MemorySource};
#[cfg(not(target_arch = "wasm32"))]
pub use source::DirSource;
pub use toggle::DetailState;
