//! Stateless report aggregation over the patient registry.
//!
//! A [`Report`] is recomputed from scratch on every request: one pass over the
//! records, fixed-size tallies zero-initialised for every enumeration member,
//! no memory of prior computations.

use crate::patient::{Condition, Gender, Patient};
use serde::Serialize;

/// Occurrence count per health condition.
///
/// Every enumeration member is always present, so conditions with zero
/// occurrences still render as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConditionTally {
    pub diabetes: u64,
    pub thyroid: u64,
    pub high_blood_pressure: u64,
}

impl ConditionTally {
    /// Returns the count for a single condition.
    pub fn get(&self, condition: Condition) -> u64 {
        match condition {
            Condition::Diabetes => self.diabetes,
            Condition::Thyroid => self.thyroid,
            Condition::HighBloodPressure => self.high_blood_pressure,
        }
    }

    /// Sum of all counts in this tally.
    pub fn total(&self) -> u64 {
        Condition::ALL.iter().map(|c| self.get(*c)).sum()
    }

    fn increment(&mut self, condition: Condition) {
        match condition {
            Condition::Diabetes => self.diabetes += 1,
            Condition::Thyroid => self.thyroid += 1,
            Condition::HighBloodPressure => self.high_blood_pressure += 1,
        }
    }
}

/// Condition counts partitioned by gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderConditionTally {
    pub male: ConditionTally,
    pub female: ConditionTally,
}

impl GenderConditionTally {
    /// Returns the condition tally for a single gender.
    pub fn get(&self, gender: Gender) -> &ConditionTally {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    fn get_mut(&mut self, gender: Gender) -> &mut ConditionTally {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }
}

/// A full statistical summary of the registry at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of records aggregated.
    pub total: u64,
    /// Occurrences per condition across all records.
    pub conditions: ConditionTally,
    /// Occurrences per condition, partitioned by gender.
    pub gender_conditions: GenderConditionTally,
}

impl Report {
    /// Computes a report over the full record sequence.
    ///
    /// Single pass, O(n) time, O(1) space beyond the fixed-size tallies.
    /// An empty sequence yields a report of all zeros. The result depends only
    /// on the multiset of records, not their order.
    pub fn compute(records: &[Patient]) -> Self {
        let mut report = Report {
            total: records.len() as u64,
            ..Report::default()
        };

        for patient in records {
            report.conditions.increment(patient.condition);
            report
                .gender_conditions
                .get_mut(patient.gender)
                .increment(patient.condition);
        }

        report
    }
}

impl std::fmt::Display for Report {
    /// Renders the textual summary: total, per-condition counts, then
    /// per-gender-per-condition counts.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total patients: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "Medical conditions:")?;
        for condition in Condition::ALL {
            writeln!(f, "{}: {}", condition, self.conditions.get(condition))?;
        }
        writeln!(f)?;
        writeln!(f, "Gender-based conditions:")?;
        for gender in Gender::ALL {
            writeln!(f, "{}:", gender)?;
            let tally = self.gender_conditions.get(gender);
            for condition in Condition::ALL {
                writeln!(f, "  {}: {}", condition, tally.get(condition))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_types::NonEmptyText;

    fn patient(name: &str, gender: Gender, age: &str, condition: Condition) -> Patient {
        Patient {
            name: NonEmptyText::new(name).unwrap(),
            gender,
            age: NonEmptyText::new(age).unwrap(),
            condition,
        }
    }

    fn sample_records() -> Vec<Patient> {
        vec![
            patient("Ana", Gender::Female, "30", Condition::Diabetes),
            patient("Luis", Gender::Male, "45", Condition::Diabetes),
            patient("Mara", Gender::Female, "52", Condition::Thyroid),
            patient("Omar", Gender::Male, "61", Condition::HighBloodPressure),
            patient("Iris", Gender::Female, "39", Condition::HighBloodPressure),
        ]
    }

    #[test]
    fn test_empty_sequence_yields_all_zeros() {
        let report = Report::compute(&[]);
        assert_eq!(report.total, 0);
        for condition in Condition::ALL {
            assert_eq!(report.conditions.get(condition), 0);
            for gender in Gender::ALL {
                assert_eq!(report.gender_conditions.get(gender).get(condition), 0);
            }
        }
    }

    #[test]
    fn test_total_equals_sequence_length() {
        let records = sample_records();
        let report = Report::compute(&records);
        assert_eq!(report.total, records.len() as u64);
    }

    #[test]
    fn test_condition_counts_sum_to_total() {
        let report = Report::compute(&sample_records());
        assert_eq!(report.conditions.total(), report.total);
    }

    #[test]
    fn test_gender_partitions_sum_to_condition_counts() {
        let report = Report::compute(&sample_records());
        for condition in Condition::ALL {
            let by_gender: u64 = Gender::ALL
                .iter()
                .map(|g| report.gender_conditions.get(*g).get(condition))
                .sum();
            assert_eq!(by_gender, report.conditions.get(condition));
        }
    }

    #[test]
    fn test_compute_is_order_independent() {
        let records = sample_records();
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(Report::compute(&records), Report::compute(&reversed));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let records = sample_records();
        assert_eq!(Report::compute(&records), Report::compute(&records));
    }

    #[test]
    fn test_two_diabetes_records_split_by_gender() {
        let records = vec![
            patient("Ana", Gender::Female, "30", Condition::Diabetes),
            patient("Luis", Gender::Male, "45", Condition::Diabetes),
        ];
        let report = Report::compute(&records);

        assert_eq!(report.total, 2);
        assert_eq!(report.conditions.diabetes, 2);
        assert_eq!(report.conditions.thyroid, 0);
        assert_eq!(report.conditions.high_blood_pressure, 0);
        assert_eq!(report.gender_conditions.female.diabetes, 1);
        assert_eq!(report.gender_conditions.male.diabetes, 1);
    }

    #[test]
    fn test_display_lists_every_enumeration_member() {
        let rendered = Report::compute(&sample_records()).to_string();
        assert!(rendered.contains("Total patients: 5"));
        assert!(rendered.contains("Diabetes: 2"));
        assert!(rendered.contains("Thyroid: 1"));
        assert!(rendered.contains("High Blood Pressure: 2"));
        assert!(rendered.contains("Male:"));
        assert!(rendered.contains("Female:"));
    }

    #[test]
    fn test_display_shows_zero_counts() {
        let rendered = Report::compute(&[]).to_string();
        assert!(rendered.contains("Diabetes: 0"));
        assert!(rendered.contains("High Blood Pressure: 0"));
    }
}
