//! Section accumulator — a single forward pass over resume lines.
//!
//! The accumulator is threaded by value through a fold. It tracks the
//! current section and at most one open experience/education entry. Entries
//! are flushed lazily: only when the next entry line, a section header, or
//! the end of input closes them.

use crate::resume::classifier::{classify_line, LineKind, Section};
use crate::resume::confidence::{ConfidenceScore, Signal};
use crate::resume::fields::{extract_date_range, strip_date_range, DateRange};
use crate::resume::models::{EducationEntry, ExperienceEntry};

const BULLET_MARKERS: &[char] = &['•', '-'];
const MIN_SUMMARY_LINE_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
enum OpenEntry {
    Experience {
        header: String,
        entry: ExperienceEntry,
    },
    Education {
        header: String,
        entry: EducationEntry,
    },
}

/// Everything the pass collected, ready to be merged into a `Resume`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulated {
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionAccumulator {
    section: Section,
    open: Option<OpenEntry>,
    summary: Option<String>,
    experience: Vec<ExperienceEntry>,
    education: Vec<EducationEntry>,
    score: ConfidenceScore,
}

impl SectionAccumulator {
    /// Starts in `Basics`, carrying whatever score the field extractors produced.
    pub fn new(score: ConfidenceScore) -> Self {
        Self {
            score,
            ..Default::default()
        }
    }

    /// Consumes one trimmed, non-empty line.
    pub fn step(mut self, line: &str) -> Self {
        if let LineKind::Header(section) = classify_line(line) {
            self.flush();
            self.score = self.score.record(Signal::SectionHeader(section));
            self.section = section;
            return self;
        }

        match self.section {
            Section::Experience | Section::Education => self.entry_line(line),
            Section::Summary => self.summary_line(line),
            Section::Basics | Section::Projects | Section::Skills | Section::Awards => {}
        }
        self
    }

    /// Closes the pass, flushing the last open entry.
    pub fn finish(mut self) -> Accumulated {
        self.flush();
        Accumulated {
            summary: self.summary,
            experience: self.experience,
            education: self.education,
            confidence: self.score.finish(),
        }
    }

    fn entry_line(&mut self, line: &str) {
        match strip_bullet(line) {
            Some(text) => self.attach_bullet(text),
            None => {
                self.flush();
                self.open = Some(open_entry(self.section, line));
            }
        }
    }

    /// Bullets with no open entry in the current section are dropped.
    fn attach_bullet(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match (&mut self.open, self.section) {
            (Some(OpenEntry::Experience { entry, .. }), Section::Experience) => {
                entry.bullets.push(text.to_string())
            }
            (Some(OpenEntry::Education { entry, .. }), Section::Education) => {
                entry.details.push(text.to_string())
            }
            _ => {}
        }
    }

    fn summary_line(&mut self, line: &str) {
        if line.chars().count() <= MIN_SUMMARY_LINE_CHARS {
            return;
        }
        match &mut self.summary {
            Some(summary) => {
                summary.push(' ');
                summary.push_str(line);
            }
            None => self.summary = Some(line.to_string()),
        }
    }

    fn flush(&mut self) {
        match self.open.take() {
            Some(OpenEntry::Experience { header, mut entry }) if !entry.company.is_empty() => {
                if let Some(range) = entry_dates(&header, &entry.bullets) {
                    entry.start = range.start;
                    entry.end = Some(range.end);
                }
                strip_header_dates(&mut entry.company, &mut entry.role);
                self.experience.push(entry);
            }
            Some(OpenEntry::Education { header, mut entry }) if !entry.institution.is_empty() => {
                if let Some(range) = entry_dates(&header, &entry.details) {
                    entry.start = range.start;
                    entry.end = range.end;
                }
                strip_header_dates(&mut entry.institution, &mut entry.degree);
                self.education.push(entry);
            }
            _ => {}
        }
    }
}

fn open_entry(section: Section, line: &str) -> OpenEntry {
    let (primary, secondary) = split_header(line);
    match section {
        Section::Education => OpenEntry::Education {
            header: line.to_string(),
            entry: EducationEntry {
                institution: primary,
                degree: secondary,
                ..Default::default()
            },
        },
        _ => OpenEntry::Experience {
            header: line.to_string(),
            entry: ExperienceEntry {
                company: primary,
                role: secondary,
                ..Default::default()
            },
        },
    }
}

/// Splits `"Acme Corp | Engineer"` on the first `|`.
fn split_header(line: &str) -> (String, String) {
    match line.split_once('|') {
        Some((left, right)) => (left.trim().to_string(), right.trim().to_string()),
        None => (line.trim().to_string(), String::new()),
    }
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_MARKERS).map(str::trim)
}

/// Drops a date range written into the header once it has been copied into
/// `start`/`end`. The primary field is never emptied.
fn strip_header_dates(primary: &mut String, secondary: &mut String) {
    *secondary = strip_date_range(secondary);
    let stripped = strip_date_range(primary);
    if !stripped.is_empty() {
        *primary = stripped;
    }
}

/// Dates come from the entry's own lines: the header first, then its bullets.
fn entry_dates(header: &str, lines: &[String]) -> Option<DateRange> {
    std::iter::once(header)
        .chain(lines.iter().map(String::as_str))
        .find_map(extract_date_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Accumulated {
        lines
            .iter()
            .fold(
                SectionAccumulator::new(ConfidenceScore::default()),
                |acc, line| acc.step(line),
            )
            .finish()
    }

    #[test]
    fn test_company_with_two_bullets() {
        let out = run(&["Experience", "Acme Corp | Engineer", "- Built X", "- Shipped Y"]);
        assert_eq!(out.experience.len(), 1);
        let entry = &out.experience[0];
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.role, "Engineer");
        assert_eq!(entry.bullets, vec!["Built X", "Shipped Y"]);
    }

    #[test]
    fn test_back_to_back_companies_yield_two_entries() {
        let out = run(&["Experience", "Acme Corp | Engineer", "Globex | Analyst"]);
        assert_eq!(out.experience.len(), 2);
        assert_eq!(out.experience[0].company, "Acme Corp");
        assert_eq!(out.experience[1].company, "Globex");
        assert!(out.experience.iter().all(|e| e.bullets.is_empty()));
    }

    #[test]
    fn test_orphan_bullet_is_dropped() {
        let out = run(&["Experience", "- did X"]);
        assert!(out.experience.is_empty());
    }

    #[test]
    fn test_bullet_marker_dot_is_stripped() {
        let out = run(&["Experience", "Acme", "• Led migration"]);
        assert_eq!(out.experience[0].bullets, vec!["Led migration"]);
    }

    #[test]
    fn test_missing_pipe_leaves_role_empty() {
        let out = run(&["Experience", "Acme Corp"]);
        assert_eq!(out.experience[0].company, "Acme Corp");
        assert_eq!(out.experience[0].role, "");
    }

    #[test]
    fn test_split_on_first_pipe_only() {
        let out = run(&["Education", "MIT | BSc | Physics"]);
        assert_eq!(out.education[0].institution, "MIT");
        assert_eq!(out.education[0].degree, "BSc | Physics");
    }

    #[test]
    fn test_empty_company_is_never_flushed() {
        let out = run(&["Experience", "| Engineer", "- bullet"]);
        assert!(out.experience.is_empty());
    }

    #[test]
    fn test_education_details_attach() {
        let out = run(&[
            "Education",
            "State University | BSc Computer Science",
            "- GPA 3.9",
            "- Dean's list",
        ]);
        assert_eq!(out.education.len(), 1);
        assert_eq!(out.education[0].details.len(), 2);
    }

    #[test]
    fn test_header_closes_open_entry() {
        let out = run(&[
            "Experience",
            "Acme | Engineer",
            "Education",
            "- stray detail",
            "MIT | BSc",
        ]);
        assert_eq!(out.experience.len(), 1);
        assert!(out.experience[0].bullets.is_empty());
        assert_eq!(out.education.len(), 1);
        assert!(out.education[0].details.is_empty());
    }

    // Each entry reads dates from its own header and bullets only. A
    // document-wide search would stamp the first range on every entry.
    #[test]
    fn test_dates_are_scoped_to_each_entry() {
        let out = run(&[
            "Experience",
            "Acme | Engineer 2019 - 2021",
            "Globex | Analyst",
            "- 2021 – Present on the data team",
        ]);
        assert_eq!(out.experience[0].start, "2019");
        assert_eq!(out.experience[0].end.as_deref(), Some("2021"));
        assert_eq!(out.experience[1].start, "2021");
        assert_eq!(out.experience[1].end.as_deref(), Some("Present"));
    }

    #[test]
    fn test_header_dates_are_removed_from_role_and_degree() {
        let out = run(&[
            "Experience",
            "Acme | Engineer 2019 - 2021",
            "Globex 2016 - 2019",
            "Education",
            "State University | BSc 2012 - 2016",
            "2010 - 2012",
        ]);
        assert_eq!(out.experience[0].role, "Engineer");
        assert_eq!(out.experience[1].company, "Globex");
        assert_eq!(out.experience[1].start, "2016");
        assert_eq!(out.education[0].degree, "BSc");
        assert_eq!(out.education[0].end, "2016");
        assert_eq!(out.education[1].institution, "2010 - 2012");
    }

    #[test]
    fn test_entry_without_dates_keeps_empty_start() {
        let out = run(&["Education", "MIT | BSc"]);
        assert_eq!(out.education[0].start, "");
        assert_eq!(out.education[0].end, "");
    }

    #[test]
    fn test_summary_joins_long_lines_only() {
        let out = run(&[
            "Summary",
            "Backend engineer with a taste for compilers.",
            "Short one",
            "Based in Lisbon, open to relocation.",
        ]);
        assert_eq!(
            out.summary.as_deref(),
            Some("Backend engineer with a taste for compilers. Based in Lisbon, open to relocation.")
        );
    }

    #[test]
    fn test_content_in_basics_and_skills_is_ignored() {
        let out = run(&["Jane Doe", "Skills", "Rust, Go, SQL"]);
        assert!(out.experience.is_empty());
        assert!(out.education.is_empty());
        assert!(out.summary.is_none());
    }

    #[test]
    fn test_headers_change_section_and_score() {
        let out = run(&["Work History", "Acme | Engineer"]);
        assert_eq!(out.experience.len(), 1);
        assert!((out.confidence - 0.15).abs() < 1e-9);
    }
}
