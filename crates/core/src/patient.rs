//! The patient model and form validation.
//!
//! Raw form input arrives as optional strings; [`PatientForm::validate`] turns
//! it into a [`Patient`] whose `gender` and `condition` are real enums, so a
//! stored record can never carry a value outside the fixed enumerations.

use crate::error::{ValidationError, ValidationResult};
use health_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed gender enumeration offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All enumeration members, in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The display label, identical to the serialised form.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(ValidationError::UnknownGender(other.to_owned())),
        }
    }
}

/// The fixed health condition enumeration offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    Thyroid,
    #[serde(rename = "High Blood Pressure")]
    HighBloodPressure,
}

impl Condition {
    /// All enumeration members, in display order.
    pub const ALL: [Condition; 3] = [
        Condition::Diabetes,
        Condition::Thyroid,
        Condition::HighBloodPressure,
    ];

    /// The display label, identical to the serialised form.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::Thyroid => "Thyroid",
            Condition::HighBloodPressure => "High Blood Pressure",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Diabetes" => Ok(Condition::Diabetes),
            "Thyroid" => Ok(Condition::Thyroid),
            "High Blood Pressure" => Ok(Condition::HighBloodPressure),
            other => Err(ValidationError::UnknownCondition(other.to_owned())),
        }
    }
}

/// A single validated patient record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    /// The patient's name as entered on the form.
    pub name: NonEmptyText,
    /// One of the two gender choices.
    pub gender: Gender,
    /// Age as entered; only presence is checked.
    pub age: NonEmptyText,
    /// One of the three condition choices.
    pub condition: Condition,
}

/// Raw intake form values, all optional.
///
/// This is the submission contract: every field is carried as entered (or not
/// entered), and nothing is interpreted until [`PatientForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatientForm {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub condition: Option<String>,
}

impl PatientForm {
    /// Validates the form and produces a [`Patient`].
    ///
    /// Checks are presence (non-empty after trimming) for all four fields plus
    /// enumeration membership for `gender` and `condition`. The first failing
    /// check wins; nothing is partially constructed.
    ///
    /// # Errors
    ///
    /// Returns the matching [`ValidationError`] variant for the first missing
    /// or unrecognised field.
    pub fn validate(self) -> ValidationResult<Patient> {
        let name = required_text(self.name, ValidationError::MissingName)?;
        let gender = self
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingGender)?
            .parse::<Gender>()?;
        let age = required_text(self.age, ValidationError::MissingAge)?;
        let condition = self
            .condition
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingCondition)?
            .parse::<Condition>()?;

        Ok(Patient {
            name,
            gender,
            age,
            condition,
        })
    }
}

fn required_text(
    value: Option<String>,
    missing: ValidationError,
) -> ValidationResult<NonEmptyText> {
    match value {
        Some(s) => NonEmptyText::new(&s).map_err(|_| missing),
        None => Err(missing),
    }
}
