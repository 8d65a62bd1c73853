#![forbid(unsafe_code)]

//! Static export.
//!
//! Renders every route through [`SiteModel`] in its pre-hydration state and
//! writes the result as a directory tree any static host can serve:
//!
//! ```text
//! <out>/index.html
//! <out>/people/index.html
//! <out>/models/index.html
//! <out>/hosting-comparison/index.html
//! <out>/404.html
//! <out>/sitemap.xml
//! <out>/robots.txt
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use teems_render::Document;
use teems_runtime::Model;
use teems_runtime::state_persistence::UnavailableStorage;
use time::OffsetDateTime;

use crate::app::SiteModel;
use crate::content::site::{CLIENT_SCRIPT, SITE_ICON, STYLESHEET};
use crate::pages::PageId;
use crate::seo::{self, page_url};

/// Errors from exporting the site.
#[derive(Debug)]
pub enum ExportError {
    /// Creating a directory or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// The build time could not be formatted.
    DateFormat(time::error::Format),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::DateFormat(e) => write!(f, "build time format error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::DateFormat(e) => Some(e),
        }
    }
}

impl From<time::error::Format> for ExportError {
    fn from(e: time::error::Format) -> Self {
        Self::DateFormat(e)
    }
}

/// Export settings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory receiving the generated files.
    pub out_dir: PathBuf,
    /// Public origin used for canonical links, the sitemap, and robots.txt.
    pub base_url: String,
    /// Stamped into the sitemap and the footer copyright.
    pub build_time: OffsetDateTime,
}

impl SiteConfig {
    /// Settings with the default base URL.
    pub fn new(out_dir: impl Into<PathBuf>, build_time: OffsetDateTime) -> Self {
        Self {
            out_dir: out_dir.into(),
            base_url: seo::DEFAULT_BASE_URL.to_string(),
            build_time,
        }
    }
}

/// Files written by one export, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

/// Output path of `page`, relative to the export root.
#[must_use]
pub fn page_file(page: PageId) -> PathBuf {
    match page {
        PageId::Home => PathBuf::from("index.html"),
        PageId::NotFound => PathBuf::from("404.html"),
        other => Path::new(other.path().trim_start_matches('/')).join("index.html"),
    }
}

/// Full HTML document for `page`.
#[must_use]
pub fn render_page(page: PageId, config: &SiteConfig) -> String {
    let storage = Rc::new(UnavailableStorage::new("no client storage during export"));
    let model = SiteModel::new(page.path(), storage, config.build_time.year());
    let mut doc = Document::new(page.title(), model.view())
        .description(page.description())
        .icon(SITE_ICON)
        .stylesheet(STYLESHEET)
        .script(CLIENT_SCRIPT);
    if page != PageId::NotFound {
        doc = doc.canonical_url(page_url(&config.base_url, page));
    }
    doc.render()
}

fn write_file(root: &Path, relative: &Path, contents: &str) -> Result<PathBuf, ExportError> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, contents).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(path)
}

/// Render every page plus the SEO files into `config.out_dir`.
pub fn export_site(config: &SiteConfig) -> Result<ExportReport, ExportError> {
    tracing::info!(
        out_dir = %config.out_dir.display(),
        base_url = %config.base_url,
        "exporting site"
    );
    let mut report = ExportReport::default();

    for &page in PageId::ROUTES.iter().chain([&PageId::NotFound]) {
        let html = render_page(page, config);
        report
            .files
            .push(write_file(&config.out_dir, &page_file(page), &html)?);
    }

    let sitemap = seo::sitemap_xml(&config.base_url, config.build_time)?;
    report
        .files
        .push(write_file(&config.out_dir, Path::new("sitemap.xml"), &sitemap)?);
    report.files.push(write_file(
        &config.out_dir,
        Path::new("robots.txt"),
        &seo::robots_txt(&config.base_url),
    )?);

    tracing::info!(files = report.files.len(), "export complete");
    Ok(report)
}
