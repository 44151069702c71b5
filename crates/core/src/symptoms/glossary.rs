//! Plain-language definitions of the symptoms the condition table knows about.

/// `(symptom, definition)` pairs, sorted by symptom.
const DEFINITIONS: &[(&str, &str)] = &[
    (
        "cough",
        "A sudden, forceful expulsion of air from the lungs.",
    ),
    ("diarrhea", "Frequent, loose, or watery bowel movements."),
    ("fatigue", "A feeling of tiredness or lack of energy."),
    (
        "fever",
        "A rise in body temperature above the normal range.",
    ),
    (
        "headache",
        "Pain or discomfort in the head, face, or neck area.",
    ),
    ("loss of taste", "The inability to perceive flavors."),
    (
        "nausea",
        "The feeling of wanting to vomit, usually associated with an upset stomach.",
    ),
    (
        "runny nose",
        "Excess mucus production in the nasal passages.",
    ),
    (
        "sensitivity to light",
        "Discomfort or pain in the eyes when exposed to light.",
    ),
    (
        "shortness of breath",
        "A feeling of being unable to take a full breath or a sense of breathlessness.",
    ),
    ("sore throat", "Pain or irritation in the throat."),
    ("stomach pain", "Discomfort or pain in the stomach area."),
    (
        "vomiting",
        "The involuntary, forceful expulsion of stomach contents through the mouth.",
    ),
];

/// Every symptom that appears in a condition profile, alphabetically.
pub const KNOWN_SYMPTOMS: &[&str] = &[
    "cough",
    "diarrhea",
    "fatigue",
    "fever",
    "headache",
    "loss of taste",
    "nausea",
    "runny nose",
    "sensitivity to light",
    "shortness of breath",
    "sore throat",
    "stomach pain",
    "vomiting",
];

/// Looks up the definition of a normalised symptom label.
pub fn definition(symptom: &str) -> Option<&'static str> {
    DEFINITIONS
        .binary_search_by(|(name, _)| (*name).cmp(symptom))
        .ok()
        .map(|idx| DEFINITIONS[idx].1)
}

pub fn is_known(symptom: &str) -> bool {
    KNOWN_SYMPTOMS.binary_search(&symptom).is_ok()
}

/// Iterates over all `(symptom, definition)` pairs in alphabetical order.
pub fn definitions() -> impl Iterator<Item = (&'static str, &'static str)> {
    DEFINITIONS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symptoms::CONDITIONS;

    #[test]
    fn test_tables_are_sorted() {
        assert!(KNOWN_SYMPTOMS.windows(2).all(|w| w[0] < w[1]));
        assert!(DEFINITIONS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_known_symptoms_are_exactly_the_profile_symptoms() {
        let mut from_profiles: Vec<&str> = CONDITIONS
            .iter()
            .flat_map(|c| c.symptoms.iter().copied())
            .collect();
        from_profiles.sort_unstable();
        from_profiles.dedup();

        assert_eq!(from_profiles, KNOWN_SYMPTOMS);
    }

    #[test]
    fn test_every_known_symptom_has_a_definition() {
        for symptom in KNOWN_SYMPTOMS {
            assert!(definition(symptom).is_some(), "missing: {symptom}");
        }
        let defined: Vec<&str> = definitions().map(|(name, _)| name).collect();
        assert_eq!(defined, KNOWN_SYMPTOMS);
    }

    #[test]
    fn test_unknown_symptom_lookup() {
        assert_eq!(definition("hiccups"), None);
        assert!(!is_known("hiccups"));
        assert!(is_known("sore throat"));
        assert_eq!(
            definition("fever"),
            Some("A rise in body temperature above the normal range.")
        );
    }
}
