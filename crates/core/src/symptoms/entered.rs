//! The set of symptoms a user has reported in one session.

use casebook_types::Symptom;
use std::collections::BTreeSet;
use std::fmt;

/// Deduplicated set of reported symptoms.
///
/// Iteration and rendering are in sorted order so that reports and logs are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymptomSet {
    symptoms: BTreeSet<Symptom>,
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `symptom`.
    ///
    /// Re-adding a symptom that is already present is a no-op and returns `false`.
    pub fn add(&mut self, symptom: Symptom) -> bool {
        let inserted = self.symptoms.insert(symptom);
        if !inserted {
            tracing::debug!("symptom already entered, ignoring");
        }
        inserted
    }

    /// Removes the symptom matching `text` after normalisation.
    ///
    /// Returns `false` if nothing was removed; callers use this to warn that the symptom
    /// was not found.
    pub fn remove(&mut self, text: &str) -> bool {
        match Symptom::new(text) {
            Ok(symptom) => self.symptoms.remove(symptom.as_str()),
            Err(_) => false,
        }
    }

    /// Checks membership of an already normalised label.
    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn clear(&mut self) {
        self.symptoms.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        Self {
            symptoms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SymptomSet {
    type Item = &'a Symptom;
    type IntoIter = std::collections::btree_set::Iter<'a, Symptom>;

    fn into_iter(self) -> Self::IntoIter {
        self.symptoms.iter()
    }
}

/// Comma-joined rendering, e.g. `cough, fever`.
impl fmt::Display for SymptomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symptom) in self.symptoms.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(symptom.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptom(text: &str) -> Symptom {
        Symptom::new(text).expect("valid symptom")
    }

    #[test]
    fn test_add_normalises_and_is_idempotent() {
        let mut set = SymptomSet::new();
        assert!(set.add(symptom("  Fever ")));
        assert!(!set.add(symptom("FEVER")));
        assert_eq!(set.len(), 1);
        assert!(set.contains("fever"));
    }

    #[test]
    fn test_remove_reports_whether_anything_was_removed() {
        let mut set: SymptomSet = [symptom("cough"), symptom("fever")].into_iter().collect();

        assert!(set.remove(" Cough"));
        assert!(!set.contains("cough"));
        assert_eq!(set.len(), 1);

        assert!(!set.remove("headache"), "absent symptom should not be removed");
        assert!(!set.remove("   "), "blank text should not be removed");
        assert_eq!(set.len(), 1, "failed removals leave the set unchanged");
    }

    #[test]
    fn test_display_is_sorted_and_comma_joined() {
        let set: SymptomSet = [symptom("nausea"), symptom("fever"), symptom("cough")]
            .into_iter()
            .collect();
        assert_eq!(set.to_string(), "cough, fever, nausea");
        assert_eq!(SymptomSet::new().to_string(), "");
    }
}
