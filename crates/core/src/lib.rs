//! # Health Core
//!
//! Core business logic for the health analysis registry.
//!
//! This crate contains pure data operations and in-memory state:
//! - Patient form validation and the typed patient model
//! - The append-only patient registry
//! - Stateless report aggregation and textual rendering
//!
//! **No API concerns**: HTTP servers, OpenAPI documentation, or CLI surfaces
//! belong in `api-rest`, `api-shared`, or `health-cli`.

pub mod error;
pub mod patient;
pub mod registry;
pub mod report;

pub use error::{ValidationError, ValidationResult};
pub use patient::{Condition, Gender, Patient, PatientForm};
pub use registry::Registry;
pub use report::{ConditionTally, GenderConditionTally, Report};
