//! Ranks condition profiles against a set of reported symptoms.
//!
//! The matcher is a pure function over a read-only table: it performs no I/O and can be
//! called repeatedly (or from several threads) without coordination.

use super::conditions::{ConditionProfile, CONDITIONS};
use super::entered::SymptomSet;
use crate::constants::{NO_MATCH_MESSAGE, REPORT_HEADER};
use std::cmp::Ordering;
use std::fmt;

/// One condition that shares at least one symptom with the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionMatch {
    pub name: &'static str,
    /// Number of the profile's symptoms present in the input. Always `<= total`.
    pub matched: usize,
    /// Size of the profile's symptom set.
    pub total: usize,
}

impl ConditionMatch {
    /// Share of the profile's symptoms present in the input as a whole percentage, rounded
    /// half up.
    pub fn percent(&self) -> usize {
        (200 * self.matched + self.total) / (2 * self.total)
    }

    /// Ranking order: more matched symptoms first, then the higher fraction.
    ///
    /// Fractions are compared by cross-multiplication so equal ratios (such as 1/4 and 1/4)
    /// compare equal exactly.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .matched
            .cmp(&self.matched)
            .then_with(|| (other.matched * self.total).cmp(&(self.matched * other.total)))
    }
}

impl fmt::Display for ConditionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {} matched ({}%)",
            self.name,
            self.matched,
            self.percent()
        )
    }
}

/// Result of checking a symptom set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No condition shares a symptom with the input (including an empty input).
    NoMatch,
    /// Matching conditions, best first. Never empty.
    Ranked(Vec<ConditionMatch>),
}

impl MatchOutcome {
    /// The ranked matches; empty for [`MatchOutcome::NoMatch`].
    pub fn matches(&self) -> &[ConditionMatch] {
        match self {
            MatchOutcome::NoMatch => &[],
            MatchOutcome::Ranked(matches) => matches,
        }
    }

    /// Renders the textual report shown to the user.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::NoMatch => f.write_str(NO_MATCH_MESSAGE),
            MatchOutcome::Ranked(matches) => {
                f.write_str(REPORT_HEADER)?;
                for m in matches {
                    write!(f, "\n{m}")?;
                }
                Ok(())
            }
        }
    }
}

/// Computes the matches of `entered` against `conditions`, best first.
///
/// Conditions without any overlapping symptom are omitted. The sort is stable, so
/// conditions that tie on both count and fraction keep their table order.
pub fn rank_conditions(
    entered: &SymptomSet,
    conditions: &[ConditionProfile],
) -> Vec<ConditionMatch> {
    let mut matches: Vec<ConditionMatch> = conditions
        .iter()
        .filter(|profile| !profile.is_empty())
        .filter_map(|profile| {
            let matched = profile
                .symptoms
                .iter()
                .filter(|symptom| entered.contains(symptom))
                .count();
            (matched > 0).then_some(ConditionMatch {
                name: profile.name,
                matched,
                total: profile.len(),
            })
        })
        .collect();

    matches.sort_by(ConditionMatch::rank_cmp);
    matches
}

/// Checks `entered` against the built-in condition table.
pub fn check_symptoms(entered: &SymptomSet) -> MatchOutcome {
    let matches = rank_conditions(entered, CONDITIONS);
    if matches.is_empty() {
        MatchOutcome::NoMatch
    } else {
        MatchOutcome::Ranked(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casebook_types::Symptom;

    fn entered(symptoms: &[&str]) -> SymptomSet {
        symptoms
            .iter()
            .map(|s| Symptom::new(s).expect("valid symptom"))
            .collect()
    }

    fn assert_ranked_order(matches: &[ConditionMatch]) {
        for pair in matches.windows(2) {
            assert_ne!(
                pair[0].rank_cmp(&pair[1]),
                Ordering::Greater,
                "{:?} should not rank below {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_empty_input_is_no_match() {
        let outcome = check_symptoms(&SymptomSet::new());
        assert_eq!(outcome, MatchOutcome::NoMatch);
        assert_eq!(outcome.render(), NO_MATCH_MESSAGE);
        assert!(outcome.matches().is_empty());
    }

    #[test]
    fn test_unknown_symptoms_are_ignored() {
        let outcome = check_symptoms(&entered(&["itchy elbow", "hiccups"]));
        assert_eq!(outcome, MatchOutcome::NoMatch);

        let outcome = check_symptoms(&entered(&["itchy elbow", "sore throat"]));
        assert_eq!(
            outcome.matches().to_vec(),
            vec![ConditionMatch {
                name: "Common Cold",
                matched: 1,
                total: 3
            }]
        );
    }

    #[test]
    fn test_full_flu_profile_ranks_first() {
        let outcome = check_symptoms(&entered(&[
            "fever",
            "cough",
            "shortness of breath",
            "fatigue",
        ]));
        let matches = outcome.matches();

        assert_eq!(matches[0].name, "Flu");
        assert_eq!(matches[0].matched, 4);
        assert_eq!(matches[0].percent(), 100);
        assert_ranked_order(matches);
    }

    #[test]
    fn test_flu_report_text() {
        let outcome = check_symptoms(&entered(&[
            "fever",
            "cough",
            "shortness of breath",
            "fatigue",
        ]));

        let expected = "Possible conditions based on your symptoms:\n\
                        - Flu: 4 matched (100%)\n\
                        - COVID-19: 4 matched (80%)\n\
                        - Common Cold: 1 matched (33%)\n\
                        - Migraine: 1 matched (25%)";
        assert_eq!(outcome.render(), expected);
    }

    #[test]
    fn test_nausea_ties_keep_table_order() {
        let matches = rank_conditions(&entered(&["nausea"]), CONDITIONS);

        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert_eq!(m.matched, 1);
            assert_eq!(m.percent(), 25);
        }
        let names: Vec<&str> = matches.iter().map(|m| m.name).collect();
        assert!(names.contains(&"Migraine"));
        assert!(names.contains(&"Stomach Bug"));
        assert_eq!(names, vec!["Migraine", "Stomach Bug"]);
    }

    #[test]
    fn test_fraction_breaks_count_ties() {
        // Common Cold (1/3) outranks Flu and COVID-19 (1/4, 1/5) on the shared `cough`.
        let matches = rank_conditions(&entered(&["cough"]), CONDITIONS);
        let names: Vec<&str> = matches.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Common Cold", "Flu", "COVID-19"]);
        assert_ranked_order(&matches);
    }

    #[test]
    fn test_every_known_symptom_subset_ranks_consistently() {
        use crate::symptoms::glossary::KNOWN_SYMPTOMS;

        for mask in 0u32..(1 << KNOWN_SYMPTOMS.len()) {
            let picked: Vec<&str> = KNOWN_SYMPTOMS
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| *s)
                .collect();
            let set = entered(&picked);
            let matches = rank_conditions(&set, CONDITIONS);

            for profile in CONDITIONS {
                let overlaps = profile.symptoms.iter().any(|s| set.contains(s));
                let listed = matches.iter().filter(|m| m.name == profile.name).count();
                assert_eq!(usize::from(overlaps), listed, "{} for {picked:?}", profile.name);
            }
            for m in &matches {
                assert!(m.matched > 0 && m.matched <= m.total, "{m:?}");
                assert!(m.percent() >= 1 && m.percent() <= 100, "{m:?}");
            }
            assert_ranked_order(&matches);
            assert_eq!(check_symptoms(&set).matches(), matches.as_slice());
        }
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        let two_thirds = ConditionMatch {
            name: "x",
            matched: 2,
            total: 3,
        };
        assert_eq!(two_thirds.percent(), 67);

        let one_eighth = ConditionMatch {
            name: "x",
            matched: 1,
            total: 8,
        };
        assert_eq!(one_eighth.percent(), 13);
    }

    #[test]
    fn test_custom_table_skips_empty_profiles() {
        let table = [
            ConditionProfile {
                name: "Empty",
                symptoms: &[],
            },
            ConditionProfile {
                name: "Rash",
                symptoms: &["itching", "redness"],
            },
        ];
        let matches = rank_conditions(&entered(&["redness"]), &table);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Rash");
        assert_eq!(matches[0].percent(), 50);
    }
}
