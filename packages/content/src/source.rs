//! # Content sources — where the site documents come from
//!
//! The loader reads every document through the [`ContentSource`] trait, so the
//! same code serves the browser page, the desktop window and the tests.
//!
//! | Source | Platform | Reads from |
//! |--------|----------|-----------|
//! | [`HttpSource`] | all (used on wasm32) | HTTP, paths resolved against a base URL |
//! | [`DirSource`] | native | a directory on the local file system |
//! | [`MemorySource`] | all | an in-memory path → text map |
//!
//! A missing document is [`PortfolioError::NotFound`] (or `Status` for HTTP),
//! never an empty string.

use std::collections::HashMap;
use std::future::Future;

use reqwest::Url;

use crate::error::PortfolioError;

/// Async access to the text of a site document.
pub trait ContentSource {
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String, PortfolioError>>;
}

/// Fetches documents over HTTP relative to a base URL.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    /// Source rooted at `root`, resolved against the current page URL.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window(root: &str) -> Result<Self, PortfolioError> {
        let href = web_sys::window()
            .and_then(|window| window.location().href().ok())
            .ok_or_else(|| PortfolioError::InvalidUrl {
                url: String::new(),
                message: "page location unavailable".to_string(),
            })?;
        Self::from_page(&href, root)
    }

    /// Source rooted at `root`, resolved against `page` the way a browser
    /// resolves a relative link on that page.
    pub fn from_page(page: &str, root: &str) -> Result<Self, PortfolioError> {
        let page = parse_url(page)?;
        let base = join(&page, &directory(root))?;
        Ok(Self::new(base))
    }

    /// Absolute URL of a document path.
    pub fn resolve(&self, path: &str) -> Result<Url, PortfolioError> {
        join(&self.base, path)
    }
}

impl ContentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, PortfolioError> {
        let url = self.resolve(path)?;
        let request_error = |e: reqwest::Error| PortfolioError::Request {
            path: path.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(request_error)
    }
}

fn parse_url(url: &str) -> Result<Url, PortfolioError> {
    Url::parse(url).map_err(|e| PortfolioError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn join(base: &Url, path: &str) -> Result<Url, PortfolioError> {
    base.join(path).map_err(|e| PortfolioError::InvalidUrl {
        url: path.to_string(),
        message: e.to_string(),
    })
}

/// `"site"` → `"site/"`, so that joining keeps the last segment.
fn directory(root: &str) -> String {
    if root.is_empty() || root.ends_with('/') {
        root.to_string()
    } else {
        format!("{root}/")
    }
}

/// Reads documents from a directory on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DirSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ContentSource for DirSource {
    async fn fetch_text(&self, path: &str) -> Result<String, PortfolioError> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PortfolioError::NotFound {
                    path: path.to_string(),
                }
            } else {
                PortfolioError::Io {
                    path: path.to_string(),
                    source: e,
                }
            }
        })
    }
}

/// In-memory documents, keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

impl ContentSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> Result<String, PortfolioError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| PortfolioError::NotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResourceConfig;
    use crate::loader::load_project;
    use crate::markdown::CommonMark;
    use crate::models::{Link, Project};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `files` over plain HTTP on a local port; any other path is a 404.
    /// Returns the server's root URL.
    async fn serve(files: &'static [(&'static str, &'static str)]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut request = Vec::<u8>::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut buf).await {
                            Ok(0) | Err(_) => break,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let path = request.split_whitespace().nth(1).unwrap_or("/");
                    let response = match files.iter().find(|(p, _)| *p == path) {
                        Some((_, body)) => format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        ),
                        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                            .to_string(),
                    };
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        format!("http://{addr}/")
    }

    #[test]
    fn resolves_next_to_page() {
        let source = HttpSource::from_page("https://ada.dev/portfolio/index.html", "").unwrap();
        assert_eq!(
            source.resolve("data.json").unwrap().as_str(),
            "https://ada.dev/portfolio/data.json"
        );
        assert_eq!(
            source.resolve("projects/tool.md").unwrap().as_str(),
            "https://ada.dev/portfolio/projects/tool.md"
        );
    }

    #[test]
    fn resolves_under_root_directory() {
        let source = HttpSource::from_page("https://ada.dev/", "site").unwrap();
        assert_eq!(
            source.resolve("education.json").unwrap().as_str(),
            "https://ada.dev/site/education.json"
        );
    }

    #[test]
    fn rejects_relative_page_url() {
        let err = HttpSource::from_page("index.html", "").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn memory_source_missing_path() {
        let source = MemorySource::new().with("data.json", "{}");
        assert_eq!(source.fetch_text("data.json").await.unwrap(), "{}");

        let err = source.fetch_text("projects.json").await.unwrap_err();
        assert!(matches!(err, PortfolioError::NotFound { path } if path == "projects.json"));
    }

    #[tokio::test]
    async fn dir_source_reads_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("projects")).unwrap();
        std::fs::write(dir.path().join("projects/tool.md"), "# Tool").unwrap();

        let source = DirSource::new(dir.path());
        assert_eq!(source.fetch_text("projects/tool.md").await.unwrap(), "# Tool");

        let err = source.fetch_text("missing.md").await.unwrap_err();
        assert!(matches!(err, PortfolioError::NotFound { .. }));
    }

    #[tokio::test]
    async fn http_source_body_and_status() {
        let root = serve(&[("/data.json", "{\"name\":\"Ada\"}")]).await;
        let source = HttpSource::from_page(&root, "").unwrap();

        assert_eq!(
            source.fetch_text("data.json").await.unwrap(),
            "{\"name\":\"Ada\"}"
        );

        let err = source.fetch_text("education.json").await.unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::Status { ref path, status: 404 } if path == "education.json"
        ));
    }

    #[tokio::test]
    async fn http_source_missing_markdown_keeps_links() {
        let root = serve(&[]).await;
        let source = HttpSource::from_page(&root, "").unwrap();
        let project = Project {
            title: "T".to_string(),
            description: "D".to_string(),
            file: Some("missing.md".to_string()),
            links: Some(vec![Link {
                label: "L".to_string(),
                url: "u".to_string(),
            }]),
        };

        let view = load_project(&source, &ResourceConfig::default(), &CommonMark, &project).await;
        assert_eq!(
            view.detail_html,
            "<p>D</p><div class=\"links\"><a href=\"u\" target=\"_blank\">L</a></div>"
        );
    }
}
