// Resume extraction: free text in, structured resume plus confidence out.
// Pure and synchronous. Callers on the async path wrap it in spawn_blocking.

pub mod accumulator;
pub mod classifier;
pub mod confidence;
pub mod fields;
pub mod models;

use tracing::debug;

use crate::resume::accumulator::SectionAccumulator;
use crate::resume::confidence::{ConfidenceScore, Signal};
use crate::resume::fields::{extract_email, extract_links, extract_name, extract_phone};

pub use models::{ParsedResume, Resume};

/// Extracts a best-effort structured resume from raw document text.
///
/// Never fails: anything not recognised is left empty and reflected in a
/// lower confidence.
pub fn extract_resume(text: &str) -> ParsedResume {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let full_name = extract_name(lines.iter().copied()).map(str::to_string);
    let email = extract_email(text);
    let phone = extract_phone(text);
    let links = extract_links(text);

    let score = [
        (full_name.is_some(), Signal::Name),
        (email.is_some(), Signal::Email),
        (phone.is_some(), Signal::Phone),
    ]
    .into_iter()
    .filter(|(found, _)| *found)
    .fold(ConfidenceScore::default(), |score, (_, signal)| {
        score.record(signal)
    });

    let sections = lines
        .iter()
        .fold(SectionAccumulator::new(score), |acc, line| acc.step(line))
        .finish();

    let mut resume = Resume {
        summary: sections.summary,
        experience: sections.experience,
        education: sections.education,
        ..Default::default()
    };
    resume.basics.full_name = full_name.unwrap_or_default();
    resume.basics.email = email;
    resume.basics.phone = phone;
    resume.basics.links = links;

    debug!(
        lines = lines.len(),
        experience = resume.experience.len(),
        education = resume.education.len(),
        confidence = sections.confidence,
        "Extracted resume from text"
    );

    ParsedResume {
        resume,
        confidence: sections.confidence,
    }
}
