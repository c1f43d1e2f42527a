//! Additive confidence scoring for heuristic resume extraction.

use std::collections::HashSet;

use crate::resume::classifier::Section;

/// A piece of recognisable structure found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Name,
    Email,
    Phone,
    SectionHeader(Section),
}

impl Signal {
    /// Score increment for this signal.
    pub fn weight(self) -> f64 {
        match self {
            Signal::Name => 0.2,
            Signal::Email | Signal::Phone => 0.1,
            Signal::SectionHeader(section) => match section {
                Section::Experience | Section::Education => 0.15,
                Section::Projects | Section::Skills | Section::Awards | Section::Summary => 0.1,
                Section::Basics => 0.0,
            },
        }
    }
}

/// Running score. Only grows while signals are recorded; [`finish`] clamps to `[0, 1]`.
///
/// [`finish`]: ConfidenceScore::finish
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfidenceScore {
    total: f64,
    seen_sections: HashSet<Section>,
}

impl ConfidenceScore {
    /// Records a signal. Section headers only score the first time each
    /// section kind is seen.
    pub fn record(mut self, signal: Signal) -> Self {
        if let Signal::SectionHeader(section) = signal {
            if !self.seen_sections.insert(section) {
                return self;
            }
        }
        self.total += signal.weight();
        self
    }

    pub fn current(&self) -> f64 {
        self.total
    }

    pub fn finish(self) -> f64 {
        self.current().clamp(0.0, 1.0)
    }
}
