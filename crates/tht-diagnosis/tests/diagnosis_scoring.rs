use tht_diagnosis::diagnosis::{
    DiseaseCatalog, DiseaseProfile, NaiveBayesEngine, Observation, SYMPTOM_VOCABULARY,
};
use tht_diagnosis::{describe, diagnose, list_symptoms, recommendations};

fn ranked_names(symptoms: &[&str], min_required: usize) -> Vec<String> {
    diagnose(symptoms.iter().copied(), min_required)
        .expect("diagnosis passes the gate")
        .entries()
        .iter()
        .map(|entry| entry.disease.clone())
        .collect()
}

fn names_by_total_cases(catalog: &DiseaseCatalog) -> Vec<String> {
    let mut diseases: Vec<&DiseaseProfile> = catalog.diseases().iter().collect();
    diseases.sort_by(|left, right| right.total_cases.cmp(&left.total_cases));
    diseases
        .into_iter()
        .map(|disease| disease.name.clone())
        .collect()
}

#[test]
fn every_score_is_positive_for_every_selection() {
    let catalog = DiseaseCatalog::standard();
    let engine = NaiveBayesEngine::standard();

    for symptom in SYMPTOM_VOCABULARY {
        let scores = engine.score(&catalog, &Observation::new([symptom]));
        assert!(scores.entries().iter().all(|entry| entry.score > 0.0));
    }

    let everything = engine.score(&catalog, &Observation::new(SYMPTOM_VOCABULARY));
    assert!(everything.entries().iter().all(|entry| entry.score > 0.0));
}

#[test]
fn repeated_diagnoses_are_identical() {
    let symptoms = ["Badan panas", "Nyeri waktu menelan", "Pusing"];
    let first = diagnose(symptoms, 1).expect("first diagnosis");
    let second = diagnose(symptoms, 1).expect("second diagnosis");

    assert_eq!(first, second);
    let first_json = serde_json::to_string(&first).expect("serialize");
    let second_json = serde_json::to_string(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn empty_selection_ranks_by_prior() {
    let catalog = DiseaseCatalog::standard();
    assert_eq!(ranked_names(&[], 0), names_by_total_cases(&catalog));
}

#[test]
fn single_undiscriminating_symptom_ranks_by_prior() {
    let catalog = DiseaseCatalog::standard();
    let expected = names_by_total_cases(&catalog);

    assert_eq!(ranked_names(&["Bersin"], 1), expected);
    assert_eq!(ranked_names(&["Sakit kepala"], 1), expected);
}

#[test]
fn gate_rejects_only_below_threshold() {
    let symptoms = ["Hidung buntu", "Ingus darah", "Mata juling"];
    for min_required in 0..=5 {
        let outcome = diagnose(symptoms, min_required);
        assert_eq!(
            outcome.is_err(),
            symptoms.len() < min_required,
            "threshold {min_required}"
        );
    }

    let rejected = diagnose(symptoms, 4).expect_err("three of four");
    assert_eq!(rejected.required, 4);
    assert_eq!(rejected.selected, 3);
}

#[test]
fn nasopharyngeal_symptoms_favour_karsinoma() {
    let catalog = DiseaseCatalog::standard();
    assert_eq!(catalog.total_cases(), 122);
    assert_eq!(SYMPTOM_VOCABULARY.len(), 22);

    let selected = ["Hidung buntu", "Ingus darah", "Mata juling"];
    let ranking = diagnose(selected, 3).expect("diagnosis passes");
    let karsinoma = ranking
        .entries()
        .iter()
        .find(|entry| entry.disease == "Karsinoma Nafosaring")
        .expect("karsinoma ranked");

    for entry in ranking.entries() {
        let disease = catalog.get(&entry.disease).expect("ranked disease in catalog");
        let shares_none = selected
            .iter()
            .all(|symptom| disease.symptom_count(symptom) == 0);
        if shares_none {
            assert!(
                karsinoma.score > entry.score,
                "{} scored {} against {}",
                entry.disease,
                entry.score,
                karsinoma.score
            );
        }
    }
    assert_eq!(ranking.top_disease(), Some("Karsinoma Nafosaring"));
}

#[test]
fn every_disease_has_description_and_recommendations() {
    for disease in DiseaseCatalog::standard().diseases() {
        assert!(describe(&disease.name).is_some_and(|text| !text.is_empty()));
        assert!(!recommendations(&disease.name).is_empty());
    }
}

#[test]
fn symptom_listing_is_idempotent() {
    let first: Vec<&str> = list_symptoms().to_vec();
    let second: Vec<&str> = list_symptoms().to_vec();
    assert_eq!(first.len(), 22);
    assert_eq!(first, second);
}

#[test]
fn synthetic_catalogs_score_without_the_standard_data() {
    let catalog = DiseaseCatalog::new(vec![
        DiseaseProfile::new("Common", 90).with_symptom("itch", 1),
        DiseaseProfile::new("Rare", 10).with_symptom("itch", 9),
    ]);
    let observation = Observation::new(["itch"]);

    let ranking = NaiveBayesEngine::new(3).score(&catalog, &observation).rank();
    // Common: 0.9 * 2/93, Rare: 0.1 * 10/13
    assert_eq!(ranking.top_disease(), Some("Rare"));
}
