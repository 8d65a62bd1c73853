//! Static export end-to-end tests.
//!
//! Export into a temp directory and check the files a static host would
//! serve.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use teems_site::export::{SiteConfig, export_site};
use time::OffsetDateTime;
use tracing_subscriber::layer::SubscriberExt;

fn build_time() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("reading {relative}: {e}"))
}

#[test]
fn export_writes_every_route_and_seo_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dist");
    let report = export_site(&SiteConfig::new(&out, build_time())).unwrap();

    let relative: Vec<String> = report
        .files
        .iter()
        .map(|p| {
            p.strip_prefix(&out)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(
        relative,
        vec![
            "index.html",
            "people/index.html",
            "models/index.html",
            "hosting-comparison/index.html",
            "404.html",
            "sitemap.xml",
            "robots.txt",
        ]
    );
    for file in &report.files {
        assert!(file.is_file(), "{} missing", file.display());
    }
}

#[test]
fn pages_are_complete_documents() {
    let dir = tempfile::tempdir().unwrap();
    export_site(&SiteConfig::new(dir.path(), build_time())).unwrap();

    let home = read(dir.path(), "index.html");
    assert!(home.starts_with("<!DOCTYPE html>"));
    assert!(home.contains("<title>NatCap TEEMs | The Earth-Economy Modelers</title>"));
    assert!(home.contains(r#"<script type="module" src="/pkg/teems_web.js"></script>"#));
    assert!(home.contains(r#"data-route="/""#));
    // Server markup never carries the notice or revealed sections.
    assert!(!home.contains("alertdialog"));
    assert!(!home.contains("is-visible"));

    let hosting = read(dir.path(), "hosting-comparison/index.html");
    assert!(hosting.contains(r#"data-action="open-concept:ssg""#));
    assert!(hosting.contains(r#"data-action="toggle-faq:justVercel""#));
    assert!(hosting.contains("Team ($4/mo)"));
    // Escaped once, never twice.
    assert!(!hosting.contains("&amp;amp;"));

    let missing = read(dir.path(), "404.html");
    assert!(missing.contains("This page could not be found."));
    assert!(!missing.contains(r#"rel="canonical""#));
}

#[test]
fn seo_files_use_the_configured_origin() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::new(dir.path(), build_time());
    config.base_url = "https://teems.example.org/".to_string();
    export_site(&config).unwrap();

    assert_eq!(
        read(dir.path(), "robots.txt"),
        "User-Agent: *\nAllow: /\n\nSitemap: https://teems.example.org/sitemap.xml\n"
    );
    let sitemap = read(dir.path(), "sitemap.xml");
    assert!(sitemap.contains("<loc>https://teems.example.org</loc>"));
    assert!(sitemap.contains("<loc>https://teems.example.org/models</loc>"));
    assert_eq!(sitemap.matches("<lastmod>2025-10-09T08:53:20Z</lastmod>").count(), 4);

    let people = read(dir.path(), "people/index.html");
    assert!(people.contains(r#"href="https://teems.example.org/people""#));
}

#[test]
fn export_overwrites_a_previous_export() {
    let dir = tempfile::tempdir().unwrap();
    let stale = dir.path().join("index.html");
    fs::write(&stale, "stale").unwrap();
    export_site(&SiteConfig::new(dir.path(), build_time())).unwrap();
    assert_ne!(fs::read_to_string(&stale).unwrap(), "stale");
}

#[test]
fn unwritable_output_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the output directory should be.
    let blocker = dir.path().join("dist");
    fs::write(&blocker, "").unwrap();
    let err = export_site(&SiteConfig::new(&blocker, build_time())).unwrap_err();
    assert!(err.to_string().contains("dist"), "{err}");
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

struct MessageCapture {
    messages: Arc<Mutex<Vec<(tracing::Level, String)>>>,
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for MessageCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.messages
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}

#[test]
fn export_logs_start_each_file_and_completion() {
    let dir = tempfile::tempdir().unwrap();
    let messages = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(MessageCapture {
        messages: messages.clone(),
    });
    tracing::subscriber::with_default(subscriber, || {
        export_site(&SiteConfig::new(dir.path(), build_time())).unwrap();
    });

    let messages = messages.lock().unwrap();
    let info: Vec<&str> = messages
        .iter()
        .filter(|(level, _)| *level == tracing::Level::INFO)
        .map(|(_, m)| m.as_str())
        .collect();
    assert_eq!(info, vec!["exporting site", "export complete"]);
    let written = messages
        .iter()
        .filter(|(level, m)| *level == tracing::Level::DEBUG && m == "wrote file")
        .count();
    assert_eq!(written, 7);
}
