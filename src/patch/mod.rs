//! Anchored text insertion over a whole-file buffer.
//!
//! A [`PatchPlan`] is an ordered list of [`Anchor`]s. Each anchor locates a
//! fixed fragment of the project file with a regular expression and inserts
//! literal text right after every match. Anchors that do not match leave the
//! buffer untouched and are reported, never raised.

pub mod firebase_storage;

#[cfg(test)]
pub(crate) mod fixture;

use regex::Regex;
use std::fmt;
use tracing::{debug, warn};

use crate::error::{PatchError, Result};

pub use firebase_storage::firebase_storage_plan;

/// A search pattern and the text inserted after each of its matches
#[derive(Debug, Clone)]
pub struct Anchor {
    name: String,
    pattern: Regex,
    insertion: String,
}

impl Anchor {
    /// Compile a new anchor. The insertion is literal text, `$` is not expanded.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        insertion: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|e| PatchError::invalid_pattern(&name, e))?;

        Ok(Self {
            name,
            pattern,
            insertion: insertion.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insertion(&self) -> &str {
        &self.insertion
    }

    /// Insert after every non-overlapping match, returning the new text and
    /// the number of matches
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;
        let mut matches = 0;

        for m in self.pattern.find_iter(text) {
            output.push_str(&text[last..m.end()]);
            output.push_str(&self.insertion);
            last = m.end();
            matches += 1;
        }

        if matches == 0 {
            return (text.to_string(), 0);
        }

        output.push_str(&text[last..]);
        (output, matches)
    }
}

/// Result of applying a single anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOutcome {
    pub name: String,
    pub matches: usize,
}

impl AnchorOutcome {
    pub fn applied(&self) -> bool {
        self.matches > 0
    }
}

/// Per-anchor outcomes of a plan run, in plan order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub outcomes: Vec<AnchorOutcome>,
    /// Whether the buffer differs from the input
    pub changed: bool,
}

impl PatchReport {
    /// Names of anchors that matched at least once
    pub fn applied(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.applied())
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Names of anchors that did not match
    pub fn unmatched(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.applied())
            .map(|o| o.name.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(AnchorOutcome::applied)
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for outcome in &self.outcomes {
            if outcome.applied() {
                writeln!(f, "{}: {} insertion(s)", outcome.name, outcome.matches)?;
            } else {
                writeln!(f, "{}: not found", outcome.name)?;
            }
        }
        Ok(())
    }
}

/// A named, ordered list of anchors
#[derive(Debug, Clone)]
pub struct PatchPlan {
    name: String,
    anchors: Vec<Anchor>,
}

impl PatchPlan {
    pub fn new(name: impl Into<String>, anchors: Vec<Anchor>) -> Self {
        Self {
            name: name.into(),
            anchors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Thread the buffer through every anchor in order
    pub fn apply(&self, text: &str) -> (String, PatchReport) {
        let mut buffer = text.to_string();
        let mut outcomes = Vec::with_capacity(self.anchors.len());

        for anchor in &self.anchors {
            let (next, matches) = anchor.apply(&buffer);
            if matches == 0 {
                warn!("Anchor '{}' not found, skipping", anchor.name());
            } else {
                debug!("Anchor '{}' matched {} time(s)", anchor.name(), matches);
            }
            buffer = next;
            outcomes.push(AnchorOutcome {
                name: anchor.name().to_string(),
                matches,
            });
        }

        let changed = buffer != text;
        (buffer, PatchReport { outcomes, changed })
    }
}
