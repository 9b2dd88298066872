use content::{CommonMark, ContentSource, PortfolioError, ResourceConfig};

/// The content source for this platform: HTTP relative to the page in the
/// browser, the local file system elsewhere.
pub fn make_source(resources: &ResourceConfig) -> Result<impl ContentSource, PortfolioError> {
    #[cfg(target_arch = "wasm32")]
    {
        content::HttpSource::from_window(&resources.root)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(content::DirSource::new(&resources.root))
    }
}

pub fn make_renderer() -> CommonMark {
    CommonMark
}
