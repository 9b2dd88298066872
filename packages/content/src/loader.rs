//! # Loader — fetching and decoding the site documents
//!
//! [`load_site`] fetches `data.json`, `education.json` and `projects.json`
//! concurrently and fails as a whole on the first error: a page is either
//! rendered from all three documents or not at all.
//!
//! [`load_project`] is called once per project, in order, while the project
//! list is being rendered. It fetches the project's markdown file (if any) and
//! produces the finished detail block. A markdown file that cannot be fetched
//! is skipped, never an error.

use serde::de::DeserializeOwned;

use crate::config::ResourceConfig;
use crate::error::PortfolioError;
use crate::markdown::MarkdownRenderer;
use crate::models::{Education, Profile, Project};
use crate::render::project_detail_html;
use crate::source::ContentSource;

/// The three decoded site documents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteData {
    pub profile: Profile,
    pub education: Education,
    pub projects: Vec<Project>,
}

/// A project ready to be shown: header text plus detail block HTML.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectView {
    pub title: String,
    pub detail_html: String,
}

/// Fetch `path` and decode it as JSON.
async fn fetch_json<S, T>(source: &S, path: &str) -> Result<T, PortfolioError>
where
    S: ContentSource,
    T: DeserializeOwned,
{
    let text = source.fetch_text(path).await?;
    serde_json::from_str(&text).map_err(|source| PortfolioError::Json {
        path: path.to_string(),
        source,
    })
}

/// Load the profile, education and project documents concurrently.
pub async fn load_site<S: ContentSource>(
    source: &S,
    resources: &ResourceConfig,
) -> Result<SiteData, PortfolioError> {
    let (profile, education, projects) = futures::try_join!(
        fetch_json::<_, Profile>(source, &resources.profile),
        fetch_json::<_, Education>(source, &resources.education),
        fetch_json::<_, Vec<Project>>(source, &resources.projects),
    )?;

    tracing::debug!("Loaded site data with {} projects", projects.len());

    Ok(SiteData {
        profile,
        education,
        projects,
    })
}

/// Build the view of one project, fetching and rendering its markdown file.
pub async fn load_project<S, M>(
    source: &S,
    resources: &ResourceConfig,
    renderer: &M,
    project: &Project,
) -> ProjectView
where
    S: ContentSource,
    M: MarkdownRenderer + ?Sized,
{
    let markdown_html = match &project.file {
        Some(file) => {
            let path = resources.markdown_path(file);
            match source.fetch_text(&path).await {
                Ok(markdown) => Some(renderer.render(&markdown)),
                Err(e) => {
                    tracing::debug!("Skipping project details: {}", e);
                    None
                }
            }
        }
        None => None,
    };

    ProjectView {
        title: project.title.clone(),
        detail_html: project_detail_html(project, markdown_html.as_deref()),
    }
}
