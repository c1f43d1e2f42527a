//! Line classifier — decides whether a line of resume text introduces a new section.

/// Resume sections the accumulator can be in. `Basics` is the implicit
/// section before any header has been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Basics,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Awards,
}

/// Result of classifying a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header(Section),
    Content,
}

/// Header vocabularies, tested in order. Earlier sets win ties.
const HEADER_KEYWORDS: &[(Section, &[&str])] = &[
    (
        Section::Experience,
        &["experience", "employment", "work history"],
    ),
    (Section::Education, &["education", "academic"]),
    (Section::Projects, &["project", "portfolio"]),
    (Section::Skills, &["skill", "technical", "competenc"]),
    (Section::Awards, &["award", "achievement", "honor"]),
    (Section::Summary, &["summary", "objective", "profile"]),
];

/// Classifies a trimmed, non-empty line by case-insensitive substring match.
pub fn classify_line(line: &str) -> LineKind {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(section, _)| LineKind::Header(*section))
        .unwrap_or(LineKind::Content)
}
