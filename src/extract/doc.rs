//! Best-effort text recovery from Word 97-2003 (.doc) files.
//!
//! The binary format is not interpreted: the payload is checked for the OLE2
//! compound file signature, then printable runs are collected both as
//! UTF-16LE and as single-byte (Latin-1) text. Word stores body text in one
//! of the two encodings, so the decoding that recovers more characters wins.

use super::PageExtractor;
use crate::detect::{is_cfb_bytes, ResourceKind};
use crate::error::ExtractError;
use crate::model::Page;

/// Runs shorter than this are treated as binary noise.
const MIN_RUN_CHARS: usize = 4;

/// Compound file directory entries that decode as text.
const DIRECTORY_NAMES: &[&str] = &[
    "Root Entry",
    "WordDocument",
    "0Table",
    "1Table",
    "Data",
    "CompObj",
    "ObjectPool",
    "SummaryInformation",
    "DocumentSummaryInformation",
];

/// Word 97-2003 extractor. The whole document is one page.
#[derive(Debug, Clone, Default)]
pub struct DocExtractor {
    _private: (),
}

impl DocExtractor {
    /// Create a new DOC extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PageExtractor for DocExtractor {
    fn name(&self) -> &str {
        "doc"
    }

    fn kinds(&self) -> &[ResourceKind] {
        &[ResourceKind::Doc]
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        if !is_cfb_bytes(data) {
            return Err(ExtractError::UnknownFormat("DOC"));
        }

        let wide = collect_runs(
            data.chunks_exact(2)
                .map(|c| char::from_u32(u16::from_le_bytes([c[0], c[1]]) as u32)),
        );
        let narrow = collect_runs(data.iter().map(|&b| Some(b as char)));

        let text = if char_count(&wide) >= char_count(&narrow) {
            wide
        } else {
            narrow
        };
        Ok(vec![Page::single(text.join("\n"))])
    }
}

/// Characters that may appear in recovered text.
fn is_text_char(c: char) -> bool {
    c.is_ascii_graphic()
        || c == ' '
        || c == '\t'
        || ('\u{00A0}'..='\u{024F}').contains(&c)
        || ('\u{2010}'..='\u{201E}').contains(&c)
}

/// Split a character stream into printable runs. Word's paragraph mark
/// (carriage return) ends a run.
fn collect_runs<I>(chars: I) -> Vec<String>
where
    I: Iterator<Item = Option<char>>,
{
    let mut runs = Vec::new();
    let mut current = String::new();

    for c in chars {
        match c {
            Some(c) if is_text_char(c) => current.push(c),
            _ => {
                push_run(&mut runs, &mut current);
            }
        }
    }
    push_run(&mut runs, &mut current);
    runs
}

fn push_run(runs: &mut Vec<String>, current: &mut String) {
    let run = current.trim();
    if run.chars().count() >= MIN_RUN_CHARS && !DIRECTORY_NAMES.contains(&run) {
        runs.push(run.to_string());
    }
    current.clear();
}

fn char_count(runs: &[String]) -> usize {
    runs.iter().map(|r| r.chars().count()).sum()
}
