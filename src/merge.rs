use std::path::{Path, PathBuf};

use crate::parser::normalize;
use crate::parser::script::{INTRO_KEY, OUTRO_KEY};
use crate::parser::{Entry, ScriptMap};

/// Reconcile synopsis entries with the script map into the final ordered
/// record set.
///
/// Synopsis order is preserved; a synthetic INTRO entry is prepended and an
/// OUTRO entry appended when the script carries those segments. Voice text is
/// overwritten per id, aligned reviewer comments are appended, and credits
/// and links get their final normalization pass.
pub fn merge(entries: Vec<Entry>, script: &ScriptMap) -> Vec<Entry> {
    let mut merged = entries;

    if let Some(intro) = script.voice(INTRO_KEY) {
        merged.insert(0, synthetic_entry(INTRO_KEY, "INTRO", intro));
    }
    if let Some(outro) = script.voice(OUTRO_KEY) {
        merged.push(synthetic_entry(OUTRO_KEY, "OUTRO", outro));
    }

    for entry in &mut merged {
        if let Some(voice) = script.voice(&entry.id) {
            entry.voice_text = voice.to_string();
        }
        if let Some(comment) = script.comment(&entry.id) {
            entry.script_comments.push(comment.to_string());
        }
        entry.credits = entry
            .credits
            .iter()
            .map(|c| normalize::replace_platform_abbreviations(&normalize::clean_credit(c)))
            .collect();
        entry.links = entry
            .links
            .iter()
            .map(|l| normalize::replace_link_abbreviations(&normalize::clean_link(l)))
            .collect();
    }

    merged
}

fn synthetic_entry(id: &str, title: &str, voice: &str) -> Entry {
    let mut entry = Entry::new(id, title);
    entry.voice_text = voice.to_string();
    entry
}

/// Output path for a merged export: the synopsis filename with its
/// `.docx`/`.doc` extension replaced by `_merged.json`.
pub fn merged_path(synopsis: &Path) -> PathBuf {
    let name = synopsis
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name
        .strip_suffix(".docx")
        .or_else(|| name.strip_suffix(".doc"))
        .unwrap_or(&name);
    synopsis.with_file_name(format!("{}_merged.json", stem))
}

// ── Tests ──
