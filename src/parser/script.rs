use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use super::normalize;
use crate::docx::ReviewerComment;

/// Bare numbered line ("7." / "12)") delimiting voice-text segments. Unlike
/// synopsis headers, nothing else may follow the number.
static SCRIPT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\s*[.)]$").unwrap());

/// Key for text preceding the first numbered header.
pub const INTRO_KEY: &str = "0";
/// Key for the body of a script that has no numbered headers at all.
pub const OUTRO_KEY: &str = "999";

/// Per-identifier voice text and reviewer comments from one script document.
#[derive(Debug, Default)]
pub struct ScriptMap {
    voice: HashMap<String, String>,
    comments: HashMap<String, String>,
}

impl ScriptMap {
    pub fn voice(&self, id: &str) -> Option<&str> {
        self.voice.get(id).map(String::as_str)
    }

    pub fn comment(&self, id: &str) -> Option<&str> {
        self.comments.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.voice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voice.is_empty()
    }

    /// Identifiers in numeric order, for display.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.voice.keys().map(String::as_str).collect();
        ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
        ids
    }
}

/// Segment raw script text into a per-number voice map, aligning reviewer
/// comments positionally: the Nth header encountered consumes the Nth
/// comment. Text before the first header becomes the intro; a script with no
/// headers at all becomes the outro.
pub fn parse_script(text: &str, comments: &[ReviewerComment]) -> ScriptMap {
    let mut map = ScriptMap::default();
    let mut buffer: Vec<&str> = Vec::new();
    let mut current: Option<&str> = None;
    let mut comment_index = 0usize;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if SCRIPT_HEADER_RE.is_match(line) {
            match current {
                None => {
                    if !buffer.is_empty() {
                        map.voice.insert(INTRO_KEY.to_string(), buffer.join(" ").trim().to_string());
                        buffer.clear();
                    }
                }
                Some(header) => {
                    flush_segment(&mut map, header, &mut buffer, comments, &mut comment_index);
                }
            }
            current = Some(line);
        } else {
            buffer.push(line);
        }
    }

    match current {
        Some(header) => {
            flush_segment(&mut map, header, &mut buffer, comments, &mut comment_index);
        }
        None => {
            if !buffer.is_empty() {
                map.voice.insert(OUTRO_KEY.to_string(), buffer.join(" ").trim().to_string());
            }
        }
    }

    if comment_index < comments.len() {
        warn!(
            "{} reviewer comment(s) left unmatched (more comments than script headers)",
            comments.len() - comment_index
        );
    }

    map
}

/// Close the segment under `header`: store the joined buffer (empty voice
/// text is dropped, not stored) and consume the next aligned comment if one
/// remains.
fn flush_segment(
    map: &mut ScriptMap,
    header: &str,
    buffer: &mut Vec<&str>,
    comments: &[ReviewerComment],
    comment_index: &mut usize,
) {
    let key = normalize::clean_id(header).trim().to_string();
    let voice = buffer.join(" ").trim().to_string();
    if !voice.is_empty() {
        map.voice.insert(key.clone(), voice);
    }
    if let Some(comment) = comments.get(*comment_index) {
        map.comments.insert(key, comment.text.clone());
        *comment_index += 1;
    }
    buffer.clear();
}

// ── Tests ──
