//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;

/// Build a PDF with one page per entry of `texts`.
pub fn pdf_bytes(texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Build an ODT package around a `content.xml` body.
pub fn odt_bytes(body: &str) -> Vec<u8> {
    let content = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"><office:body><office:text>{body}</office:text></office:body></office:document-content>"#
    );
    let mut buf = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buf);
        let options = SimpleFileOptions::default();
        zip.start_file("mimetype", options).unwrap();
        zip.write_all(b"application/vnd.oasis.opendocument.text").unwrap();
        zip.start_file("content.xml", options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    buf.into_inner()
}

/// An eDoc frontdoor page with meta tags and a metadata table.
pub const FRONTDOOR: &str = r#"<HTML>
<HEAD>
<TITLE>eDoc-Server: Sitzungsberichte</TITLE>
<META NAME="DC.Title" CONTENT="Sitzungsberichte der Leibniz-Sozietät">
<META NAME="DC.Creator" CONTENT="Müller, Anna">
<META NAME="DC.Creator" CONTENT="Schmidt, Bernd">
<META NAME="DC.Subject" CONTENT="Akademie ; Wissenschaftsgeschichte">
<META NAME="DC.Date.Creation_of_intellectual_content" CONTENT="2009">
<META NAME="DC.Identifier" CONTENT="urn:nbn:de:kobv:b4-opus-11200">
</HEAD>
<BODY>
<TABLE>
<TR><TD class="frontdoor" valign="top"><B>Freie Schlagwörter (Deutsch):</B></TD>
    <TD class="frontdoor" valign="top">Leibniz, Sozietät</TD></TR>
<TR><TD class="frontdoor" valign="top"><B>DDC-Sachgruppe:</B></TD>
    <TD class="frontdoor" valign="top">Geschichte Europas</TD></TR>
<TR><TD class="frontdoor" valign="top"><B>Sprache:</B></TD>
    <TD class="frontdoor" valign="top">Deutsch</TD></TR>
<TR><TD class="frontdoor" valign="top"><B>Publikationsdatum:</B></TD>
    <TD class="frontdoor" valign="top">05.12.2011</TD></TR>
<TR><TD class="frontdoor" valign="top"><B>Collection:</B></TD>
    <TD class="frontdoor" valign="top"><a href="../../../schriftenreihen.php">Sitzungsberichte</a></TD></TR>
</TABLE>
</BODY>
</HTML>
"#;

/// Lay out `volltexte/2009/1120/pdf/05.pdf` below `root`, optionally with
/// the sibling `index.html`. Returns the payload path.
pub fn edoc_tree(root: &Path, payload: &[u8], index: Option<&str>) -> PathBuf {
    let doc_dir = root.join("volltexte").join("2009").join("1120");
    fs::create_dir_all(doc_dir.join("pdf")).unwrap();
    if let Some(html) = index {
        fs::write(doc_dir.join("index.html"), html).unwrap();
    }
    let pdf = doc_dir.join("pdf").join("05.pdf");
    fs::write(&pdf, payload).unwrap();
    pdf
}
