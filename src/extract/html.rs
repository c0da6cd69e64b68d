//! HTML text extraction using scraper.

use scraper::Html;

use super::{decode_text, PageExtractor};
use crate::detect::ResourceKind;
use crate::error::ExtractError;
use crate::model::Page;

/// Elements whose text is never visible.
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// HTML / XHTML extractor. The whole page is one page.
#[derive(Debug, Clone, Default)]
pub struct HtmlExtractor {
    _private: (),
}

impl HtmlExtractor {
    /// Create a new HTML extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PageExtractor for HtmlExtractor {
    fn name(&self) -> &str {
        "html"
    }

    fn kinds(&self) -> &[ResourceKind] {
        &[ResourceKind::Html]
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        Ok(vec![Page::single(visible_text(&decode_text(data)))])
    }
}

/// Visible text of an HTML document, one whitespace-collapsed line per text node.
pub(crate) fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if hidden {
            continue;
        }
        let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines.join("\n")
}
