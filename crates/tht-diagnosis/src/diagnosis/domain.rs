use serde::{Deserialize, Serialize};

/// Empirical case statistics recorded for a single disease.
///
/// Symptom counts keep the order in which they were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub name: String,
    pub total_cases: u32,
    pub symptom_counts: Vec<(String, u32)>,
}

impl DiseaseProfile {
    pub fn new(name: impl Into<String>, total_cases: u32) -> Self {
        Self {
            name: name.into(),
            total_cases,
            symptom_counts: Vec::new(),
        }
    }

    pub fn with_symptom(mut self, symptom: impl Into<String>, count: u32) -> Self {
        let symptom = symptom.into();
        match self
            .symptom_counts
            .iter_mut()
            .find(|(recorded, _)| *recorded == symptom)
        {
            Some((_, existing)) => *existing = count,
            None => self.symptom_counts.push((symptom, count)),
        }
        self
    }

    /// Observed co-occurrence count, zero for symptoms outside the profile.
    pub fn symptom_count(&self, symptom: &str) -> u32 {
        self.symptom_counts
            .iter()
            .find(|(recorded, _)| recorded == symptom)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Ordered, read-only collection of disease profiles.
///
/// Iteration order is declaration order and doubles as the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseCatalog {
    diseases: Vec<DiseaseProfile>,
}

impl DiseaseCatalog {
    pub fn new(diseases: Vec<DiseaseProfile>) -> Self {
        Self { diseases }
    }

    pub fn diseases(&self) -> &[DiseaseProfile] {
        &self.diseases
    }

    pub fn get(&self, name: &str) -> Option<&DiseaseProfile> {
        self.diseases.iter().find(|disease| disease.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.diseases.iter().map(|disease| disease.name.as_str())
    }

    pub fn total_cases(&self) -> u64 {
        self.diseases
            .iter()
            .map(|disease| u64::from(disease.total_cases))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

/// Symptoms reported by the caller, with duplicates collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Observation {
    symptoms: Vec<String>,
}

impl Observation {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for symptom in symptoms {
            let symptom = symptom.into();
            if !collected.contains(&symptom) {
                collected.push(symptom);
            }
        }
        Self {
            symptoms: collected,
        }
    }

    /// Build an observation, rejecting names outside `vocabulary`.
    pub fn from_vocabulary<I, S>(symptoms: I, vocabulary: &[&str]) -> Result<Self, UnknownSymptom>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let observation = Self::new(symptoms);
        if let Some(unknown) = observation
            .symptoms
            .iter()
            .find(|symptom| !vocabulary.contains(&symptom.as_str()))
        {
            return Err(UnknownSymptom(unknown.clone()));
        }
        Ok(observation)
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

/// A symptom name that is not part of the recognised vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symptom '{0}'")]
pub struct UnknownSymptom(pub String);
