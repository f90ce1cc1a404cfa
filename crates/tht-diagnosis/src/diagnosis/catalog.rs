use super::domain::{DiseaseCatalog, DiseaseProfile};

/// Recognised symptoms, in the order presented to users.
pub const SYMPTOM_VOCABULARY: [&str; 22] = [
    "Badan panas",
    "Bersin",
    "Telinga berdengung",
    "Hidung buntu",
    "Ingus darah",
    "Iritasi hidung",
    "Tenggorokan kering",
    "Leher kaku",
    "Mata juling",
    "Nyeri kepala",
    "Nyeri leher",
    "Nyeri waktu menelan",
    "Tenggorokan panas",
    "Leher bengkak",
    "Penciuman terganggu",
    "Pendengaran menurun",
    "Pusing",
    "Pilek menahun",
    "Sakit kepala",
    "Sesak nafas",
    "Sulit buka mulut",
    "Telinga terasa penuh cairan",
];

struct DiseaseEntry {
    name: &'static str,
    total_cases: u32,
    symptoms: &'static [(&'static str, u32)],
}

const STANDARD_ENTRIES: [DiseaseEntry; 6] = [
    DiseaseEntry {
        name: "Otitis Media Serosa",
        total_cases: 7,
        symptoms: &[
            ("Telinga berdengung", 3),
            ("Telinga terasa penuh cairan", 4),
            ("Pendengaran menurun", 5),
        ],
    },
    DiseaseEntry {
        name: "Polip Hidung",
        total_cases: 13,
        symptoms: &[
            ("Hidung buntu", 7),
            ("Iritasi hidung", 8),
            ("Penciuman terganggu", 7),
        ],
    },
    DiseaseEntry {
        name: "Faringitis Akut",
        total_cases: 14,
        symptoms: &[
            ("Tenggorokan kering", 6),
            ("Nyeri kepala", 5),
            ("Nyeri waktu menelan", 7),
            ("Tenggorokan panas", 6),
        ],
    },
    DiseaseEntry {
        name: "Infeksi Leher Dalam",
        total_cases: 30,
        symptoms: &[
            ("Badan panas", 10),
            ("Sesak nafas", 8),
            ("Nyeri leher", 7),
            ("Leher bengkak", 9),
            ("Sulit buka mulut", 6),
        ],
    },
    DiseaseEntry {
        name: "Abses Retrofaring",
        total_cases: 30,
        symptoms: &[
            ("Badan panas", 8),
            ("Leher kaku", 7),
            ("Nyeri waktu menelan", 6),
            ("Pusing", 5),
            ("Sesak nafas", 4),
        ],
    },
    DiseaseEntry {
        name: "Karsinoma Nafosaring",
        total_cases: 28,
        symptoms: &[
            ("Hidung buntu", 14),
            ("Ingus darah", 8),
            ("Mata juling", 6),
            ("Pusing", 7),
            ("Pilek menahun", 5),
        ],
    },
];

impl DiseaseCatalog {
    /// The fixed clinical sample the screening tool ships with.
    pub fn standard() -> Self {
        let diseases = STANDARD_ENTRIES
            .iter()
            .map(|entry| {
                entry.symptoms.iter().fold(
                    DiseaseProfile::new(entry.name, entry.total_cases),
                    |profile, (symptom, count)| profile.with_symptom(*symptom, *count),
                )
            })
            .collect();

        Self::new(diseases)
    }
}

/// The symptom vocabulary offered to callers.
pub fn list_symptoms() -> &'static [&'static str] {
    &SYMPTOM_VOCABULARY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_matches_recorded_sample() {
        let catalog = DiseaseCatalog::standard();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.total_cases(), 122);

        let karsinoma = catalog
            .get("Karsinoma Nafosaring")
            .expect("karsinoma present");
        assert_eq!(karsinoma.total_cases, 28);
        assert_eq!(karsinoma.symptom_count("Hidung buntu"), 14);
        assert_eq!(karsinoma.symptom_counts.len(), 5);
        assert_eq!(karsinoma.symptom_counts[0].0, "Hidung buntu");
        assert_eq!(karsinoma.symptom_counts[4].0, "Pilek menahun");
    }

    #[test]
    fn every_profile_symptom_belongs_to_vocabulary() {
        let catalog = DiseaseCatalog::standard();
        for disease in catalog.diseases() {
            for (symptom, _) in &disease.symptom_counts {
                assert!(
                    SYMPTOM_VOCABULARY.contains(&symptom.as_str()),
                    "{} lists unknown symptom {}",
                    disease.name,
                    symptom
                );
            }
        }
    }

    #[test]
    fn list_symptoms_is_stable() {
        let first = list_symptoms();
        let second = list_symptoms();
        assert_eq!(first.len(), 22);
        assert_eq!(first, second);
        assert_eq!(first[0], "Badan panas");
        assert_eq!(first[21], "Telinga terasa penuh cairan");
    }
}
