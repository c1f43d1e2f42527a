//! Regex field sniffers. Every function here is best-effort: no match means
//! `None` (or an empty list), never an error.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

// Deliberately loose: long course codes or zip+4 runs can match too.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+]?[1-9]?[\d\s\-()]{10,}").expect("valid phone regex"));

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[-–]\s*(\d{4}|present|current)").expect("valid date range regex")
});

static FOUR_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid digit-run regex"));

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://[^\s,;|]+|(?:www\.)?(?:linkedin|github)\.com/[^\s,;|]+")
        .expect("valid link regex")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// A start/end pair as written in the document, e.g. `("2019", "Present")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Returns true if `line` could be the candidate's name.
///
/// A name line is 4–49 characters long and carries no email, URL or year.
pub fn is_name_candidate(line: &str) -> bool {
    let len = line.chars().count();
    len > 3
        && len < 50
        && !line.contains('@')
        && !line.contains("http")
        && !FOUR_DIGITS_RE.is_match(line)
}

/// First line (in document order) that qualifies as a name.
pub fn extract_name<'a, I>(lines: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().find(|line| is_name_candidate(line))
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-like run in `text` that carries a digit, with internal
/// whitespace collapsed. Runs of blank lines also match the loose pattern
/// and are skipped.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find_iter(text).find_map(|m| {
        let collapsed = WHITESPACE_RE.replace_all(m.as_str(), " ");
        let trimmed = collapsed.trim();
        trimmed
            .chars()
            .any(|c| c.is_ascii_digit())
            .then(|| trimmed.to_string())
    })
}

/// First `YYYY - YYYY|present|current` range in `text`.
pub fn extract_date_range(text: &str) -> Option<DateRange> {
    let caps = DATE_RANGE_RE.captures(text)?;
    Some(DateRange {
        start: caps[1].to_string(),
        end: caps[2].to_string(),
    })
}

/// Removes the first date range from `text`, along with any separators left
/// dangling at either end.
pub fn strip_date_range(text: &str) -> String {
    if !DATE_RANGE_RE.is_match(text) {
        return text.to_string();
    }
    DATE_RANGE_RE
        .replace(text, "")
        .trim()
        .trim_matches(&[',', '-', '–', '(', ')', '|'][..])
        .trim()
        .to_string()
}

/// Every distinct web link in order of first appearance.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for m in LINK_RE.find_iter(text) {
        let link = m.as_str().trim_end_matches(&['.', ')'][..]).to_string();
        if !links.contains(&link) {
            links.push(link);
        }
    }
    links
}
