use std::sync::LazyLock;

use regex::Regex;

static CREDIT_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:credits?|кредит)\s*[:-]?\s*").unwrap());
static ENCLOSING_PARENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\((.*)\)$").unwrap());
static PIPE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\|\s*").unwrap());
static SUBSCRIBER_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*[\d.,]+\s*(?:к|k|тыс|млн)?\s*подписчик\w*").unwrap());
static BULLET_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"•\s*.*$").unwrap());
static SLASH_SPACING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").unwrap());
static HANDLE_PLATFORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?([^\s/]+)(?:\s*/\s*(\S+))?").unwrap());
static URL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+").unwrap());

/// Local-language platform shorthands seen in credit lines, mapped to the
/// canonical platform names. Matched as whole words, case-insensitively.
const PLATFORM_ABBREVIATIONS: &[(&str, &str)] = &[
    ("тт", "TikTok"),
    ("инста", "Instagram"),
    ("ютуб", "YouTube"),
    ("дизин", "Douyin"),
];

static PLATFORM_ABBREVIATION_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PLATFORM_ABBREVIATIONS
        .iter()
        .map(|(abbr, full)| (Regex::new(&format!(r"(?i)\b{}\b", abbr)).unwrap(), *full))
        .collect()
});

/// Domain substrings whose spelling is pinned; anything matching them
/// case-insensitively is rewritten to the canonical lowercase form.
const KNOWN_DOMAINS: &[&str] = &[
    "youtube.com/",
    "youtu.be/",
    "instagram.com/",
    "tiktok.com/",
    "douyin.com/",
    "vimeo.com/",
];

static KNOWN_DOMAIN_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    KNOWN_DOMAINS
        .iter()
        .map(|domain| {
            let pattern = format!("(?i){}", regex::escape(domain));
            (Regex::new(&pattern).unwrap(), *domain)
        })
        .collect()
});

/// Reduce a raw credit line to canonical `@user` / `@user / platform` form.
///
/// Strips the leading "Credit:"/"кредит -" label, enclosing parentheses,
/// subscriber-count tails and bullet remarks, normalizes the separator, then
/// keeps only the handle and (optional) platform token. Idempotent.
pub fn clean_credit(raw: &str) -> String {
    let mut cleaned = CREDIT_LABEL_RE.replace(raw, "").trim().to_string();
    cleaned = ENCLOSING_PARENS_RE.replace(&cleaned, "$1").trim().to_string();
    cleaned = PIPE_SEPARATOR_RE.replace_all(&cleaned, " / ").into_owned();
    cleaned = SUBSCRIBER_TAIL_RE.replace_all(&cleaned, "").into_owned();
    cleaned = BULLET_TAIL_RE.replace(&cleaned, "").into_owned();
    cleaned = SLASH_SPACING_RE.replace_all(&cleaned, " / ").into_owned();

    let rewritten = HANDLE_PLATFORM_RE.captures(cleaned.trim()).map(|caps| {
        match caps.get(2) {
            Some(platform) => format!("@{} / {}", &caps[1], platform.as_str()),
            None => format!("@{}", &caps[1]),
        }
    });
    if let Some(handle_form) = rewritten {
        cleaned = handle_form;
    }

    cleaned.trim().to_string()
}

/// Expand local-language platform shorthands ("тт" → "TikTok", ...).
pub fn replace_platform_abbreviations(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (re, full) in PLATFORM_ABBREVIATION_RES.iter() {
        cleaned = re.replace_all(&cleaned, *full).into_owned();
    }
    cleaned
}

/// Keep the URL up to the first whitespace; non-URL input is just trimmed.
pub fn clean_link(link: &str) -> String {
    match URL_PREFIX_RE.find(link) {
        Some(m) => m.as_str().to_string(),
        None => link.trim().to_string(),
    }
}

/// Pin the spelling of known video/social domains inside a link.
/// Extension point for future domain rewrites; lowercases matches today.
pub fn replace_link_abbreviations(link: &str) -> String {
    let mut cleaned = link.to_string();
    for (re, canonical) in KNOWN_DOMAIN_RES.iter() {
        cleaned = re.replace_all(&cleaned, *canonical).into_owned();
    }
    cleaned
}

/// Strip a single trailing `.` or `)` from an identifier token.
pub fn clean_id(id: &str) -> &str {
    id.strip_suffix(['.', ')']).unwrap_or(id)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_credit_label() {
        assert_eq!(clean_credit("Credit: @alice / tiktok"), "@alice / tiktok");
        assert_eq!(clean_credit("Credits - @alice"), "@alice");
        assert_eq!(clean_credit("кредит - @alice / тт"), "@alice / тт");
    }

    #[test]
    fn strips_enclosing_parens() {
        assert_eq!(clean_credit("(@alice / tiktok)"), "@alice / tiktok");
    }

    #[test]
    fn pipe_becomes_slash() {
        assert_eq!(clean_credit("@alice | tiktok"), "@alice / tiktok");
    }

    #[test]
    fn drops_subscriber_counts() {
        assert_eq!(clean_credit("@alice / тт 13к подписчиков"), "@alice / тт");
        assert_eq!(clean_credit("@alice / ютуб 1,2 млн подписчиков"), "@alice / ютуб");
    }

    #[test]
    fn drops_bullet_tail() {
        assert_eq!(clean_credit("@alice / tiktok • взять первые 10 секунд"), "@alice / tiktok");
    }

    #[test]
    fn rewrites_to_handle_form() {
        assert_eq!(clean_credit("alice / tiktok - 1400"), "@alice / tiktok");
        assert_eq!(clean_credit("@bob"), "@bob");
    }

    #[test]
    fn clean_credit_is_idempotent() {
        let samples = [
            "Credit: @alice / tiktok",
            "кредит - blogger | инста 500к подписчиков",
            "(@someone / ютуб)",
            "@bob",
            "план по монтажу",
        ];
        for s in samples {
            let once = clean_credit(s);
            assert_eq!(clean_credit(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn platform_abbreviations_whole_word() {
        assert_eq!(replace_platform_abbreviations("@a / тт"), "@a / TikTok");
        assert_eq!(replace_platform_abbreviations("@a / ТТ"), "@a / TikTok");
        assert_eq!(replace_platform_abbreviations("@a / инста"), "@a / Instagram");
        assert_eq!(replace_platform_abbreviations("@a / ютуб"), "@a / YouTube");
        assert_eq!(replace_platform_abbreviations("@a / дизин"), "@a / Douyin");
        // No substitution inside longer words
        assert_eq!(replace_platform_abbreviations("аттракцион"), "аттракцион");
    }

    #[test]
    fn clean_link_keeps_whole_url() {
        let url = "https://youtu.be/abc?t=10";
        assert_eq!(clean_link(url), url);
    }

    #[test]
    fn clean_link_cuts_at_whitespace() {
        assert_eq!(
            clean_link("https://youtu.be/abc взять со звуком"),
            "https://youtu.be/abc"
        );
        assert_eq!(clean_link("  not a url  "), "not a url");
    }

    #[test]
    fn link_domains_lowercased() {
        assert_eq!(
            replace_link_abbreviations("https://www.TikTok.com/@user/video/1"),
            "https://www.tiktok.com/@user/video/1"
        );
        assert_eq!(
            replace_link_abbreviations("https://youtu.be/abc"),
            "https://youtu.be/abc"
        );
    }

    #[test]
    fn clean_id_strips_one_terminator() {
        assert_eq!(clean_id("12."), "12");
        assert_eq!(clean_id("12)"), "12");
        assert_eq!(clean_id("12"), "12");
        assert_eq!(clean_id("12.)"), "12.");
    }
}
