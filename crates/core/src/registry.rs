//! The append-only patient registry.
//!
//! The registry is the single owner of the record sequence. It lives for the
//! duration of the process (the page-session equivalent) and is passed by
//! reference wherever a report is needed; nothing reads it ambiently.

use crate::error::ValidationResult;
use crate::patient::{Patient, PatientForm};
use crate::report::Report;

/// Append-only, in-memory ordered sequence of patient records.
///
/// Insertion order is preserved for display and fixture reproducibility; it
/// does not affect aggregation. There is no delete or update operation.
#[derive(Debug, Default)]
pub struct Registry {
    patients: Vec<Patient>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated patient to the end of the sequence.
    ///
    /// Validation is the caller's responsibility; once a [`Patient`] exists it
    /// is always accepted, so this operation cannot fail.
    pub fn append(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    /// Validates a form submission, appends the record, and recomputes the
    /// report over the full sequence.
    ///
    /// On validation failure nothing is appended and no report is produced,
    /// so the registry length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::ValidationError`] for the first missing or
    /// unrecognised field.
    pub fn submit(&mut self, form: PatientForm) -> ValidationResult<Report> {
        let patient = form.validate().inspect_err(|e| {
            tracing::debug!("rejected submission: {e}");
        })?;
        self.append(patient);
        Ok(self.report())
    }

    /// Recomputes the report over the current record sequence.
    pub fn report(&self) -> Report {
        Report::compute(&self.patients)
    }

    /// The stored records, in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// True when no record has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn form(name: &str, gender: &str, age: &str, condition: &str) -> PatientForm {
        PatientForm {
            name: Some(name.into()),
            gender: Some(gender.into()),
            age: Some(age.into()),
            condition: Some(condition.into()),
        }
    }

    #[test]
    fn test_submit_appends_and_reports() {
        let mut registry = Registry::new();
        let report = registry
            .submit(form("Ana", "Female", "30", "Diabetes"))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(report.total, 1);
        assert_eq!(report.conditions.diabetes, 1);
    }

    #[test]
    fn test_rejected_submission_leaves_length_unchanged() {
        let mut registry = Registry::new();
        registry
            .submit(form("Ana", "Female", "30", "Diabetes"))
            .unwrap();

        let incomplete = PatientForm {
            name: Some("Luis".into()),
            gender: None,
            age: Some("45".into()),
            condition: Some("Thyroid".into()),
        };
        assert_eq!(
            registry.submit(incomplete),
            Err(ValidationError::MissingGender)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_out_of_enumeration_value_is_rejected_at_insertion() {
        let mut registry = Registry::new();
        let result = registry.submit(form("Ana", "Female", "30", "Migraine"));
        assert_eq!(
            result,
            Err(ValidationError::UnknownCondition("Migraine".into()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut registry = Registry::new();
        registry
            .submit(form("Ana", "Female", "30", "Diabetes"))
            .unwrap();
        registry.submit(form("Luis", "Male", "45", "Thyroid")).unwrap();
        registry
            .submit(form("Mara", "Female", "52", "High Blood Pressure"))
            .unwrap();

        let names: Vec<&str> = registry
            .patients()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana", "Luis", "Mara"]);
    }

    #[test]
    fn test_report_invariants_hold_after_every_insertion() {
        let mut registry = Registry::new();
        let submissions = [
            form("Ana", "Female", "30", "Diabetes"),
            form("Luis", "Male", "45", "Diabetes"),
            form("Mara", "Female", "52", "Thyroid"),
            form("Omar", "Male", "61", "High Blood Pressure"),
        ];

        for submission in submissions {
            let report = registry.submit(submission).unwrap();
            assert_eq!(report.total, registry.len() as u64);
            assert_eq!(report.conditions.total(), report.total);
        }
    }
}
