//! Built-in condition profiles.

/// A named condition and the symptoms that characterise it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionProfile {
    pub name: &'static str,
    /// Normalised, unique symptom labels.
    pub symptoms: &'static [&'static str],
}

impl ConditionProfile {
    /// Number of symptoms in the profile.
    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.contains(&symptom)
    }
}

/// The condition table, in discovery order. Ties in a ranking keep this order.
pub const CONDITIONS: &[ConditionProfile] = &[
    ConditionProfile {
        name: "Flu",
        symptoms: &["fever", "cough", "shortness of breath", "fatigue"],
    },
    ConditionProfile {
        name: "Migraine",
        symptoms: &["headache", "fatigue", "nausea", "sensitivity to light"],
    },
    ConditionProfile {
        name: "Common Cold",
        symptoms: &["sore throat", "runny nose", "cough"],
    },
    ConditionProfile {
        name: "Stomach Bug",
        symptoms: &["nausea", "vomiting", "diarrhea", "stomach pain"],
    },
    ConditionProfile {
        name: "COVID-19",
        symptoms: &[
            "fever",
            "cough",
            "loss of taste",
            "shortness of breath",
            "fatigue",
        ],
    },
];
