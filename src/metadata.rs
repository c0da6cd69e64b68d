//! Dublin Core metadata scraping from eDoc frontdoor pages.
//!
//! Two independent pattern families are run over the page:
//!
//! - `<META NAME="DC.*" CONTENT="...">` tags in the head, and
//! - the human-facing frontdoor table, rows of the shape
//!   `<TD class="frontdoor" valign="top"><B>label</B></TD> ... <TD class="frontdoor" valign="top">value</TD>`.
//!
//! The table patterns follow the markup of the eDoc server's frontdoor
//! template. A change of that template needs a change of the patterns here,
//! nothing else.
//!
//! Missing or malformed fields are left unset; scraping never fails.

use chrono::{NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::MetadataRecord;
use crate::source::ResourceReader;

static META_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<META NAME="(.*?)" CONTENT="(.*?)">"#).expect("valid meta tag pattern")
});

static FRONTDOOR_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<TD class="frontdoor" valign="top"><B>(.*?)</B></TD>.*?<TD class="frontdoor" valign="top">(.*?)</TD><"#,
    )
    .expect("valid frontdoor pattern")
});

static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<a.*?>(.*?)</a>").expect("valid anchor pattern"));

/// Fetch a metadata page and scrape it.
///
/// Only failing to read the page is an error.
pub fn fetch_metadata(uri: &str, reader: &ResourceReader) -> Result<MetadataRecord> {
    let html = reader
        .read_to_string(uri)
        .map_err(|source| Error::MetadataFetchFailed {
            uri: uri.to_string(),
            source,
        })?;
    Ok(extract_metadata(&html))
}

/// Scrape a metadata record from the text of an HTML page.
pub fn extract_metadata(html: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    enrich_metadata(html, &mut record);
    record
}

/// Scrape an HTML page into an existing record, overwriting found fields.
pub fn enrich_metadata(html: &str, record: &mut MetadataRecord) {
    // Lines are concatenated without separator before matching.
    let line: String = html.lines().collect();

    scan_meta_tags(&line, record);
    scan_frontdoor_table(&line, record);
}

fn scan_meta_tags(line: &str, record: &mut MetadataRecord) {
    let mut creators_seen = false;

    for caps in META_TAG.captures_iter(line) {
        let tag = &caps[1];
        let content = &caps[2];
        log::trace!("meta {} = {}", tag, content);

        match tag {
            "DC.Date.Creation_of_intellectual_content" => match parse_year(content) {
                Some(year) => {
                    record.creation_date = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single();
                }
                None => log::debug!("Ignoring malformed creation year {:?}", content),
            },
            "DC.Title" => record.title = Some(content.to_string()),
            "DC.Creator" => {
                // Creators of this page replace any earlier value, then accumulate
                if !creators_seen {
                    record.creator = None;
                    creators_seen = true;
                }
                record.add_creator(content);
            }
            "DC.Subject" => record.swd = Some(content.to_string()),
            "DC.Description" => record.description = Some(content.to_string()),
            "DC.Identifier" => {
                if content.contains("http://") {
                    record.uri = Some(content.to_string());
                } else if content.contains("urn:") {
                    record.urn = Some(content.to_string());
                }
            }
            _ => {}
        }
    }
}

fn scan_frontdoor_table(line: &str, record: &mut MetadataRecord) {
    for caps in FRONTDOOR_ROW.captures_iter(line) {
        let key = &caps[1];
        let value = caps[2].trim();
        log::trace!("frontdoor {} = {}", key, value);

        if key.contains("Freie Schlagwörter") {
            record.subject = Some(value.to_string());
        } else if key.contains("DDC-Sachgruppe") {
            record.ddc = Some(value.to_string());
        } else if key.contains("Sprache") {
            record.language = Some(value.to_string());
        } else if key.contains("Dokumentart") {
            record.document_type = Some(value.to_string());
        } else if key.contains("Publikationsdatum") {
            match parse_publication_date(value) {
                Some(date) => record.publishing_date = Some(date),
                None => log::debug!("Ignoring malformed publication date {:?}", value),
            }
        } else if key.contains("ISBN") {
            record.isbn = Some(value.to_string());
        } else if key.contains("Institut") {
            record.publisher = Some(value.to_string());
        } else if key.contains("Collection") {
            match ANCHOR.captures(value) {
                Some(anchor) => record.collection_names = Some(anchor[1].to_string()),
                None => log::debug!("No collection link in {:?}", value),
            }
        }
    }
}

/// Parse a four digit year.
fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Parse a `DD.MM.YYYY` date. Month is 1-based, as written.
fn parse_publication_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('.');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
