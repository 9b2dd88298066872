//! This crate contains the page components shared by the web and desktop apps.

use dioxus::prelude::*;

mod source;
pub use source::{make_renderer, make_source};

pub const PORTFOLIO_CSS: Asset = asset!("/assets/portfolio.css");

mod name_heading;
pub use name_heading::NameHeading;

mod project_list;
pub use project_list::{ProjectEntry, ProjectList};

mod page;
pub use page::PortfolioPage;
