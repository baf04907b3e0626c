use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::classify::{classify_line, LineClass};
use super::normalize;

static START_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^пункты$").unwrap());
static ENTRY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\)(.*)$").unwrap());

/// One numbered synopsis item. Field declaration order is the JSON field
/// order of the exported records.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub credits: Vec<String>,
    pub links: Vec<String>,
    pub comments: Vec<String>,
    pub script_comments: Vec<String>,
    #[serde(rename = "voiceText")]
    pub voice_text: String,
    #[serde(rename = "voiceTextRu")]
    pub voice_text_ru: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Entry {
            id: id.into(),
            title: title.into(),
            credits: Vec::new(),
            links: Vec::new(),
            comments: Vec::new(),
            script_comments: Vec::new(),
            voice_text: String::new(),
            voice_text_ru: String::new(),
        }
    }
}

/// Segment raw synopsis text into entries.
///
/// Everything before the `ПУНКТЫ` marker is discarded, numbered headers
/// (`N) Title`) open a new entry, and every other line is split into links
/// plus a classified credit/comment remainder. Absent marker means zero
/// entries, not an error.
pub fn parse_synopsis(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;
    let mut started = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if START_MARKER_RE.is_match(line) {
            started = true;
            continue;
        }
        if !started {
            continue;
        }

        if let Some(caps) = ENTRY_HEADER_RE.captures(line) {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            current = Some(Entry::new(caps[1].trim(), caps[2].trim()));
            continue;
        }

        let Some(entry) = current.as_mut() else {
            continue;
        };
        for class in classify_line(line) {
            match class {
                LineClass::Link(url) => {
                    let link = normalize::replace_link_abbreviations(&normalize::clean_link(&url));
                    entry.links.push(link);
                }
                LineClass::Credit(text) => entry.credits.push(text),
                LineClass::Comment(text) => entry.comments.push(text),
            }
        }
    }

    if let Some(done) = current {
        entries.push(done);
    }

    entries
}

// ── Tests ──
