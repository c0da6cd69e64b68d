//! Integration tests for parser dispatch.

mod common;

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use edocparse::{
    Document, DocumentParser, Error, ExtractError, ExtractorRegistry, Page, PageExtractor,
    ParseOptions, RemoteProbe, ResourceKind,
};

/// Mock extractor for testing.
struct MockExtractor {
    kinds: Vec<ResourceKind>,
    name: &'static str,
}

impl MockExtractor {
    fn new(kinds: Vec<ResourceKind>, name: &'static str) -> Self {
        Self { kinds, name }
    }
}

impl PageExtractor for MockExtractor {
    fn name(&self) -> &str {
        self.name
    }

    fn kinds(&self) -> &[ResourceKind] {
        &self.kinds
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        let text = String::from_utf8_lossy(data).to_uppercase();
        Ok(vec![Page::single(format!("{} by {}", text, self.name))])
    }
}

/// Probe that counts its calls and never finds anything.
#[derive(Default)]
struct CountingProbe {
    calls: AtomicUsize,
}

impl RemoteProbe for CountingProbe {
    fn is_reachable(&self, _uri: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        false
    }
}

fn local_parser() -> DocumentParser {
    DocumentParser::with_options(ParseOptions::new().local_only()).unwrap()
}

#[test]
fn test_registry_new() {
    let registry = ExtractorRegistry::new();
    assert!(registry.kinds().is_empty());
}

#[test]
fn test_registry_register() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::new(
        vec![ResourceKind::Txt, ResourceKind::Xml],
        "Mock",
    )));

    assert!(registry.supports(ResourceKind::Txt));
    assert!(registry.supports(ResourceKind::Xml));
    assert!(!registry.supports(ResourceKind::Pdf));
    assert_eq!(registry.get(ResourceKind::Xml).unwrap().name(), "Mock");
}

#[test]
fn test_custom_extractor_is_dispatched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readme.txt");
    fs::write(&path, "hello").unwrap();

    let mut registry = ExtractorRegistry::with_defaults();
    registry.register(Arc::new(MockExtractor::new(vec![ResourceKind::Txt], "mock")));
    let parser = local_parser().with_registry(registry);

    let doc = parser.parse(path.to_str().unwrap()).unwrap();
    assert_eq!(doc.text(), "HELLO by mock");
}

#[test]
fn test_unsupported_extension_does_no_io() {
    let probe = Arc::new(CountingProbe::default());
    let parser = local_parser().with_probe(probe.clone());

    for uri in [
        "/nonexistent/archive.zip",
        "http://edoc.example.org/files/archive.zip",
        "/nonexistent/README",
    ] {
        let err = parser.parse(uri).unwrap_err();
        assert!(
            matches!(err, Error::NoParserAvailable(ResourceKind::Unsupported)),
            "{uri}: {err}"
        );
    }
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_uppercase_extension_is_unsupported() {
    let err = local_parser().parse("/nonexistent/REPORT.PDF").unwrap_err();
    assert!(matches!(
        err,
        Error::NoParserAvailable(ResourceKind::Unsupported)
    ));
}

#[test]
fn test_image_has_no_parser() {
    for uri in ["/scans/a.jpg", "/scans/b.tiff", "/scans/c.png"] {
        let err = local_parser().parse(uri).unwrap_err();
        assert!(matches!(err, Error::NoParserAvailable(ResourceKind::Image)));
        assert_eq!(
            err.to_string(),
            "There's no parser available for this type of resource: image"
        );
    }
}

#[test]
fn test_pdf_pagination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    fs::write(&path, common::pdf_bytes(&["alpha", "beta", "gamma"])).unwrap();

    let doc = local_parser().parse(path.to_str().unwrap()).unwrap();
    let Document::Paginated(paginated) = &doc else {
        panic!("expected a paginated document");
    };

    assert_eq!(paginated.pages.len(), 3);
    for (page, word) in paginated.pages.iter().zip(["alpha", "beta", "gamma"]) {
        assert!(page.text.contains(word), "page {} lacks {}", page.number, word);
    }
    assert!(!paginated.pages[0].text.contains("beta"));
    assert!(!paginated.pages[1].text.contains("alpha"));
    assert!(!paginated.pages[1].text.contains("gamma"));
    assert!(!paginated.pages[2].text.contains("beta"));

    let text = doc.text();
    assert_eq!(text.matches("[page=").count(), 3);
    let first = text.find("[page=1]\n").unwrap();
    let second = text.find("[page=2]\n").unwrap();
    let third = text.find("[page=3]\n").unwrap();
    assert!(first < second && second < third);
    assert!(text[first..second].contains("alpha"));
    assert!(text[second..third].contains("beta"));
    assert!(text[third..].contains("gamma"));

    // Not an eDoc: metadata is present but empty
    assert!(doc.metadata().unwrap().is_empty());
}

#[test]
fn test_corrupt_pdf_is_extraction_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    fs::write(&path, "this is not a pdf").unwrap();
    let uri = path.to_str().unwrap();

    let err = local_parser().parse(uri).unwrap_err();
    assert_eq!(err.uri(), Some(uri));
    assert!(matches!(
        err,
        Error::ExtractionFailed {
            source: ExtractError::UnknownFormat("PDF"),
            ..
        }
    ));
}

#[test]
fn test_plain_formats() {
    let dir = tempfile::tempdir().unwrap();

    let odt = dir.path().join("bericht.odt");
    fs::write(
        &odt,
        common::odt_bytes("<text:h>Bericht</text:h><text:p>Inhalt</text:p>"),
    )
    .unwrap();

    let html = dir.path().join("seite.html");
    fs::write(
        &html,
        "<html><head><title>t</title><script>var x;</script></head><body><p>Sichtbar</p></body></html>",
    )
    .unwrap();

    let xml = dir.path().join("daten.xml");
    fs::write(&xml, "<root><a>eins</a><b><![CDATA[zwei]]></b></root>").unwrap();

    let parser = local_parser();

    let doc = parser.parse(odt.to_str().unwrap()).unwrap();
    assert_eq!(doc.text(), "Bericht\nInhalt");

    let doc = parser.parse(html.to_str().unwrap()).unwrap();
    assert_eq!(doc.text(), "Sichtbar");

    let doc = parser.parse(xml.to_str().unwrap()).unwrap();
    assert_eq!(doc.text(), "eins\nzwei");
    assert!(!doc.is_paginated());
    assert!(doc.metadata().is_none());
}

#[test]
fn test_file_url_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "via file url").unwrap();
    let url = reqwest::Url::from_file_path(&path).unwrap();

    let doc = local_parser().parse(url.as_str()).unwrap();
    assert_eq!(doc.text(), "via file url");
    assert_eq!(doc.uri(), url.as_str());
}

#[test]
fn test_concurrent_parses_share_one_parser() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<_> = (0..8)
        .map(|i| {
            let path = dir.path().join(format!("doc{i}.txt"));
            fs::write(&path, format!("document {i}")).unwrap();
            path
        })
        .collect();

    let parser = local_parser();
    std::thread::scope(|s| {
        let handles: Vec<_> = paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let parser = &parser;
                s.spawn(move || {
                    let doc = parser.parse(path.to_str().unwrap()).unwrap();
                    assert_eq!(doc.text(), format!("document {i}"));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
