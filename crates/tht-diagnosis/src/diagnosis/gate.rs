use super::domain::Observation;

/// Lowest threshold a caller may configure.
pub const MIN_SYMPTOMS_FLOOR: usize = 1;
/// Highest threshold a caller may configure.
pub const MIN_SYMPTOMS_CEILING: usize = 5;
pub const DEFAULT_MIN_SYMPTOMS: usize = 1;

/// Precondition applied before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomGate {
    min_required: usize,
}

impl SymptomGate {
    /// Gate with an arbitrary threshold, including zero.
    pub fn new(min_required: usize) -> Self {
        Self { min_required }
    }

    /// Gate restricted to the user-adjustable range.
    pub fn bounded(min_required: usize) -> Result<Self, ThresholdOutOfRange> {
        if (MIN_SYMPTOMS_FLOOR..=MIN_SYMPTOMS_CEILING).contains(&min_required) {
            Ok(Self::new(min_required))
        } else {
            Err(ThresholdOutOfRange {
                value: min_required,
            })
        }
    }

    pub fn min_required(&self) -> usize {
        self.min_required
    }

    pub fn check(&self, observation: &Observation) -> Result<(), GateRejected> {
        if observation.len() < self.min_required {
            return Err(GateRejected {
                required: self.min_required,
                selected: observation.len(),
            });
        }
        Ok(())
    }
}

impl Default for SymptomGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SYMPTOMS)
    }
}

/// Fewer symptoms were selected than the gate requires.
///
/// The message is the user-facing warning shown in place of a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Silakan pilih minimal {required} gejala.")]
pub struct GateRejected {
    pub required: usize,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "minimum symptom threshold must be between {} and {}, got {}",
    MIN_SYMPTOMS_FLOOR,
    MIN_SYMPTOMS_CEILING,
    .value
)]
pub struct ThresholdOutOfRange {
    pub value: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_iff_fewer_than_required() {
        let gate = SymptomGate::new(2);

        let err = gate
            .check(&Observation::new(["Pusing"]))
            .expect_err("one symptom is below threshold");
        assert_eq!(
            err,
            GateRejected {
                required: 2,
                selected: 1
            }
        );
        assert_eq!(err.to_string(), "Silakan pilih minimal 2 gejala.");

        assert!(gate.check(&Observation::new(["Pusing", "Bersin"])).is_ok());
        assert!(gate
            .check(&Observation::new(["Pusing", "Bersin", "Sesak nafas"]))
            .is_ok());
    }

    #[test]
    fn duplicate_symptoms_do_not_satisfy_the_gate() {
        let gate = SymptomGate::new(2);
        assert!(gate.check(&Observation::new(["Pusing", "Pusing"])).is_err());
    }

    #[test]
    fn bounded_accepts_slider_range_only() {
        assert!(SymptomGate::bounded(0).is_err());
        assert_eq!(SymptomGate::bounded(1).map(|gate| gate.min_required()), Ok(1));
        assert_eq!(SymptomGate::bounded(5).map(|gate| gate.min_required()), Ok(5));
        let err = SymptomGate::bounded(6).expect_err("six is above the ceiling");
        assert_eq!(
            err.to_string(),
            "minimum symptom threshold must be between 1 and 5, got 6"
        );
    }
}
