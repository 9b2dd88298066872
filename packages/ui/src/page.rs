//! The portfolio page: loads the site documents once and fills the fixed
//! containers (`name`, `bio`, `about-content`, `education-content`,
//! `projects-content`, `contact-content`).

use content::{
    contact_html, education_html, load_project, load_site, PortfolioConfig, ProjectView, SiteData,
};
use dioxus::prelude::*;

use crate::{make_renderer, make_source, NameHeading, ProjectList, PORTFOLIO_CSS};

#[component]
pub fn PortfolioPage(config: PortfolioConfig) -> Element {
    let mut site = use_signal(|| Option::<SiteData>::None);
    let mut projects = use_signal(Vec::<ProjectView>::new);

    // Load everything on mount. A failure leaves the page empty.
    let resources = config.resources.clone();
    let _loader = use_resource(move || {
        let resources = resources.clone();
        async move {
            let source = match make_source(&resources) {
                Ok(source) => source,
                Err(e) => {
                    tracing::error!("Error loading data: {}", e);
                    return;
                }
            };
            let data = match load_site(&source, &resources).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Error loading data: {}", e);
                    return;
                }
            };

            let list = data.projects.clone();
            site.set(Some(data));

            // One project at a time, each shown once its details are in.
            let renderer = make_renderer();
            for project in &list {
                let view = load_project(&source, &resources, &renderer, project).await;
                projects.write().push(view);
            }
        }
    });

    let data = site();

    rsx! {
        document::Link { rel: "stylesheet", href: PORTFOLIO_CSS }

        header {
            id: "header",
            if let Some(data) = &data {
                NameHeading {
                    name: data.profile.name.clone(),
                    reveal: config.reveal.clone(),
                }
            } else {
                h1 { id: "name" }
            }
            p {
                id: "bio",
                {data.as_ref().map(|d| d.profile.bio.clone()).unwrap_or_default()}
            }
        }

        main {
            section {
                id: "about",
                h2 { "About" }
                div {
                    id: "about-content",
                    {data.as_ref().map(|d| d.profile.about.clone()).unwrap_or_default()}
                }
            }
            section {
                id: "education",
                h2 { "Education" }
                div {
                    id: "education-content",
                    dangerous_inner_html: data.as_ref().map(|d| education_html(&d.education)).unwrap_or_default(),
                }
            }
            section {
                id: "projects",
                h2 { "Projects" }
                div {
                    id: "projects-content",
                    ProjectList { projects: projects() }
                }
            }
            section {
                id: "contact",
                h2 { "Contact" }
                div {
                    id: "contact-content",
                    dangerous_inner_html: data.as_ref().map(|d| contact_html(&d.profile)).unwrap_or_default(),
                }
            }
        }
    }
}
