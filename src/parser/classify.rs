use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Credit detection rules, most specific first. Free-text credit lines follow
/// no single grammar, so this is a permissive cascade tuned against observed
/// documents; the bare `handle / platform` fallback must stay last since it
/// matches any slash-separated pair. First match wins.
const CREDIT_PATTERNS: &[&str] = &[
    // Labelled forms
    r"(?i)^(?:credit|кредит):",
    r"(?i)^credit\s+@[^\s/]+$",
    // @handle / platform with optional trailing counter
    r"(?i)^@[^\s/]+\s*/\s*[^\s-]+(?:\s*-?\s*\d+\s*\S*)?$",
    r"(?i)^@[^\s/]+\s*/\s*[^\s]+$",
    r"(?i)^@[^\s/]+\s*/\s*[^\s]+\([^)]+\)$",
    r"(?i)^@[^\s/]+\s*/\s*[^\s]+.*$",
    // Local-language label with handle / platform
    r"(?i)^кредит\s*-\s*@?[^\s/]+\s*/\s*[^\s-]+(?:\s*-?\s*\d+\s*\S*)?$",
    r"(?i)^кредит\s+@?[^\s/]+\s*/\s*[^\s-]+",
    r"(?i)^кредит\s*-\s*[^\s/]+\s*/\s*[^\s-]+",
    r"(?i)^кредит\s+[^\s/]+\s*/\s*[^\s-]+",
    r"(?i)^кредит\s*-\s*@[^\s•]+",
    // Bare pair fallback — risks false positives, evaluated last
    r"(?i)^[^\s/]+\s*/\s*[^\s]+$",
];

static CREDIT_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CREDIT_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Credit(String),
    Link(String),
    Comment(String),
}

/// True if the line looks like a creator credit. Rules are evaluated in
/// declaration order; some inputs match several rules with different implied
/// boundaries, so the order is part of the contract.
pub fn is_credit(line: &str) -> bool {
    CREDIT_RULES.iter().any(|re| re.is_match(line))
}

/// Classify one body line. Every URL substring becomes a `Link` (raw, not yet
/// normalized); whatever text is left after stripping URLs is a `Credit` or a
/// `Comment`. Unclassifiable text always falls through to `Comment`.
pub fn classify_line(line: &str) -> Vec<LineClass> {
    let mut classes = Vec::new();

    if URL_RE.is_match(line) {
        for m in URL_RE.find_iter(line) {
            classes.push(LineClass::Link(m.as_str().to_string()));
        }
        let rest = URL_RE.replace_all(line, "").trim().to_string();
        if !rest.is_empty() {
            classes.push(classify_text(rest));
        }
    } else {
        classes.push(classify_text(line.to_string()));
    }

    classes
}

fn classify_text(text: String) -> LineClass {
    if is_credit(&text) {
        LineClass::Credit(text)
    } else {
        LineClass::Comment(text)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_credits() {
        assert!(is_credit("Credit: @bob"));
        assert!(is_credit("credit: кто-то"));
        assert!(is_credit("кредит: @bob"));
        assert!(is_credit("Credit @bob"));
    }

    #[test]
    fn handle_platform_forms() {
        assert!(is_credit("@alice / tiktok"));
        assert!(is_credit("@alice/tiktok"));
        assert!(is_credit("@alice / tiktok - 1400"));
        assert!(is_credit("@alice / tiktok(архив)"));
        assert!(is_credit("@alice / tiktok взять первое видео"));
    }

    #[test]
    fn local_label_forms() {
        assert!(is_credit("кредит - @alice / тт"));
        assert!(is_credit("кредит @alice / инста"));
        assert!(is_credit("кредит - alice / ютуб"));
        assert!(is_credit("кредит alice / ютуб"));
        assert!(is_credit("Кредит - @alice"));
    }

    #[test]
    fn bare_pair_fallback() {
        assert!(is_credit("alice / tiktok"));
        assert!(!is_credit("просто заметка о видео"));
        assert!(!is_credit("смотреть всё до конца"));
    }

    #[test]
    fn url_is_always_link() {
        let classes = classify_line("https://youtu.be/abc");
        assert_eq!(classes, vec![LineClass::Link("https://youtu.be/abc".into())]);
    }

    #[test]
    fn url_with_credit_remainder() {
        let classes = classify_line("https://youtu.be/abc Credit: @bob");
        assert_eq!(
            classes,
            vec![
                LineClass::Link("https://youtu.be/abc".into()),
                LineClass::Credit("Credit: @bob".into()),
            ]
        );
    }

    #[test]
    fn multiple_urls_on_one_line() {
        let classes = classify_line("https://a.com/1 https://b.com/2");
        assert_eq!(
            classes,
            vec![
                LineClass::Link("https://a.com/1".into()),
                LineClass::Link("https://b.com/2".into()),
            ]
        );
    }

    #[test]
    fn url_with_comment_remainder() {
        let classes = classify_line("https://youtu.be/abc взять момент с 0:15");
        assert_eq!(
            classes,
            vec![
                LineClass::Link("https://youtu.be/abc".into()),
                LineClass::Comment("взять момент с 0:15".into()),
            ]
        );
    }

    #[test]
    fn plain_text_is_comment() {
        assert_eq!(
            classify_line("интересный факт про котов"),
            vec![LineClass::Comment("интересный факт про котов".into())]
        );
    }
}
