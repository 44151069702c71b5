//! Ordered history of symptom-set snapshots.

use super::entered::SymptomSet;
use chrono::{DateTime, Utc};
use std::fmt;

/// An immutable copy of the entered symptoms at one point in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub recorded_at: DateTime<Utc>,
    pub symptoms: SymptomSet,
}

/// `[HH:MM:SS] cough, fever`, with the UTC time the snapshot was taken.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.recorded_at.format("%H:%M:%S"), self.symptoms)
    }
}

/// Append-only log of snapshots, oldest first.
#[derive(Clone, Debug, Default)]
pub struct SymptomLog {
    entries: Vec<Snapshot>,
}

impl SymptomLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `symptoms`.
    pub fn record(&mut self, symptoms: &SymptomSet) {
        tracing::debug!(
            count = symptoms.len(),
            "recording symptom snapshot: {}",
            symptoms
        );
        self.entries.push(Snapshot {
            recorded_at: Utc::now(),
            symptoms: symptoms.clone(),
        });
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per snapshot, each a comma-joined list of its symptoms.
    ///
    /// Returns `None` when nothing has been recorded; the caller decides what to show instead.
    pub fn render(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.symptoms.to_string())
            .collect();
        Some(lines.join("\n"))
    }

    /// Like [`render`](SymptomLog::render), with each line prefixed by its recording time.
    pub fn render_timestamped(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.entries.iter().map(Snapshot::to_string).collect();
        Some(lines.join("\n"))
    }
}
