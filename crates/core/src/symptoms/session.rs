//! One user's symptom-checking session.

use super::entered::SymptomSet;
use super::log::SymptomLog;
use super::matcher::{check_symptoms, MatchOutcome};
use crate::config::CoreConfig;
use casebook_types::Symptom;

/// Entered symptoms plus an optional snapshot log.
///
/// The log wraps the session rather than the matcher: checking is always the plain
/// [`check_symptoms`] function, and a session without a log behaves identically apart from
/// [`render_log`](CheckerSession::render_log) returning `None`.
#[derive(Clone, Debug, Default)]
pub struct CheckerSession {
    entered: SymptomSet,
    log: Option<SymptomLog>,
}

impl CheckerSession {
    /// A session that keeps no log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that records a snapshot after every add.
    pub fn with_log() -> Self {
        Self {
            entered: SymptomSet::new(),
            log: Some(SymptomLog::new()),
        }
    }

    pub fn from_config(cfg: &CoreConfig) -> Self {
        if cfg.symptom_log_enabled() {
            Self::with_log()
        } else {
            Self::new()
        }
    }

    pub fn entered(&self) -> &SymptomSet {
        &self.entered
    }

    pub fn log(&self) -> Option<&SymptomLog> {
        self.log.as_ref()
    }

    /// Adds `symptom` and, when logging, snapshots the resulting set.
    ///
    /// Returns `false` if the symptom was already entered. A snapshot is still taken in that
    /// case so the log mirrors every add the user made.
    pub fn add(&mut self, symptom: Symptom) -> bool {
        let inserted = self.entered.add(symptom);
        self.record_snapshot();
        inserted
    }

    /// Removes the symptom matching `text`; `false` if it was not entered.
    pub fn remove(&mut self, text: &str) -> bool {
        self.entered.remove(text)
    }

    /// Appends a copy of the current set to the log. No-op without a log.
    pub fn record_snapshot(&mut self) {
        if let Some(log) = self.log.as_mut() {
            log.record(&self.entered);
        }
    }

    /// See [`SymptomLog::render`]. `None` when logging is disabled or nothing was recorded.
    pub fn render_log(&self) -> Option<String> {
        self.log.as_ref().and_then(SymptomLog::render)
    }

    pub fn report(&self) -> MatchOutcome {
        check_symptoms(&self.entered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn symptom(text: &str) -> Symptom {
        Symptom::new(text).expect("valid symptom")
    }

    #[test]
    fn test_logged_session_snapshots_each_add() {
        let mut session = CheckerSession::with_log();
        assert_eq!(session.render_log(), None);

        assert!(session.add(symptom("Headache")));
        assert!(session.add(symptom("nausea")));
        assert!(!session.add(symptom("nausea")));

        assert_eq!(session.entered().len(), 2);
        assert_eq!(
            session.render_log().as_deref(),
            Some("headache\nheadache, nausea\nheadache, nausea")
        );
    }

    #[test]
    fn test_remove_does_not_snapshot() {
        let mut session = CheckerSession::with_log();
        session.add(symptom("fever"));

        assert!(session.remove("fever"));
        assert!(!session.remove("fever"));
        assert!(session.entered().is_empty());
        assert_eq!(session.log().map(SymptomLog::len), Some(1));

        session.record_snapshot();
        assert_eq!(session.render_log().as_deref(), Some("fever\n"));
    }

    #[test]
    fn test_unlogged_session_still_reports() {
        let mut session = CheckerSession::new();
        session.add(symptom("sore throat"));
        session.record_snapshot();

        assert_eq!(session.render_log(), None);
        assert!(session.log().is_none());
        let report = session.report();
        assert_eq!(report.matches()[0].name, "Common Cold");
    }

    #[test]
    fn test_from_config_respects_log_flag() {
        let cfg = CoreConfig::new(PathBuf::from("students.json"), false, false)
            .expect("CoreConfig::new should succeed");
        assert!(CheckerSession::from_config(&cfg).log().is_none());

        let cfg = CoreConfig::default();
        assert!(CheckerSession::from_config(&cfg).log().is_some());
    }
}
