//! # API Shared
//!
//! Request and response types shared by the REST API and its consumers.
//!
//! These are wire-level DTOs: plain strings in, plain strings out. Parsing
//! into the typed core model happens in the handlers, never here.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::{
    AddPatientReq, AddPatientRes, ConditionCountRes, ConditionRes, GenderTallyRes, HealthRes,
    ListPatientsRes, PatientRes, ReportRes,
};
