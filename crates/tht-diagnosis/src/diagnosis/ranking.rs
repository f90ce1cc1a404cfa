use super::engine::PosteriorScores;
use serde::Serialize;

/// One disease in a ranked diagnosis.
///
/// `score` is the raw posterior weight; `share` divides it by the sum of all
/// scores so that callers wanting a probability-like figure have one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub disease: String,
    pub score: f64,
    pub share: f64,
}

/// Diseases ordered from most to least likely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedDiagnosis {
    entries: Vec<RankedEntry>,
}

impl RankedDiagnosis {
    pub fn from_scores(scores: &PosteriorScores) -> Self {
        let evidence = scores.evidence();
        let mut entries: Vec<RankedEntry> = scores
            .entries()
            .iter()
            .map(|entry| RankedEntry {
                disease: entry.disease.clone(),
                score: entry.score,
                share: if evidence > 0.0 {
                    entry.score / evidence
                } else {
                    0.0
                },
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order.
        entries.sort_by(|left, right| right.score.total_cmp(&left.score));

        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn top(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn top_disease(&self) -> Option<&str> {
        self.top().map(|entry| entry.disease.as_str())
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}
