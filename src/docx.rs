use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::Event;
use tracing::info;

/// One reviewer comment anchored in the document, in document order.
#[derive(Debug, Clone)]
pub struct ReviewerComment {
    pub text: String,
}

/// Extract visible text from DOCX bytes. A paragraph becomes a line; tabs and
/// explicit breaks are preserved. Unreadable packages are hard failures.
pub fn extract_raw_text(data: &[u8]) -> Result<String> {
    let xml = read_package_entry(data, "word/document.xml")?
        .context("DOCX package has no word/document.xml")?;
    parse_document_xml(&xml)
}

/// Extract reviewer comments from DOCX bytes, in document order.
pub fn extract_comments(data: &[u8]) -> Result<Vec<ReviewerComment>> {
    let Some(xml) = read_package_entry(data, "word/comments.xml")? else {
        return Ok(Vec::new());
    };
    let comments = parse_comments_xml(&xml)?;
    info!("Found {} reviewer comment(s)", comments.len());
    Ok(comments)
}

/// Read one entry of the DOCX ZIP package as a string. Returns Ok(None) when
/// the entry does not exist; any other package problem is an error.
fn read_package_entry(data: &[u8], name: &str) -> Result<Option<String>> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).context("Not a valid DOCX package")?;
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Failed to open {} in package", name)),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {} from package", name))?;
    Ok(Some(xml))
}

/// Walk document.xml events: text runs (`w:t`) accumulate, `w:tab` becomes a
/// tab, `w:br` a newline, and each paragraph end (`w:p`) closes a line.
fn parse_document_xml(xml: &str) -> Result<String> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:tab" => text.push('\t'),
                b"w:br" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                text.push_str(&e.unescape()?);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("Malformed word/document.xml"),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Walk comments.xml events and collect one record per `w:comment`, its text
/// runs joined with single spaces.
fn parse_comments_xml(xml: &str) -> Result<Vec<ReviewerComment>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut comments = Vec::new();
    let mut runs: Vec<String> = Vec::new();
    let mut in_comment = false;
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:comment" => {
                    in_comment = true;
                    runs.clear();
                }
                b"w:t" if in_comment => in_text_run = true,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                runs.push(e.unescape()?.to_string());
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:comment" => {
                    in_comment = false;
                    comments.push(ReviewerComment {
                        text: runs.join(" ").trim().to_string(),
                    });
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e).context("Malformed word/comments.xml"),
            _ => {}
        }
        buf.clear();
    }

    Ok(comments)
}

// ── Tests ──
