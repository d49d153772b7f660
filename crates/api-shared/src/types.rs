//! Wire types for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Intake form submission. Fields mirror the four form inputs; an absent or
/// empty field is treated as not filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddPatientReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub condition: String,
}

/// One stored patient record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientRes {
    pub name: String,
    pub gender: String,
    pub age: String,
    pub condition: String,
}

/// Successful submission: the stored record plus the freshly recomputed
/// report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddPatientRes {
    pub patient: PatientRes,
    pub report: ReportRes,
}

/// All stored patients, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListPatientsRes {
    pub patients: Vec<PatientRes>,
}

/// Count for a single condition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConditionCountRes {
    pub condition: String,
    pub count: u64,
}

/// Condition counts for a single gender.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenderTallyRes {
    pub gender: String,
    pub conditions: Vec<ConditionCountRes>,
}

/// The statistical report: total, per-condition counts, and per-gender
/// partitioned counts. Every enumeration member appears even at count 0.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportRes {
    pub total: u64,
    pub conditions: Vec<ConditionCountRes>,
    pub gender_conditions: Vec<GenderTallyRes>,
}

/// One condition-catalogue record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConditionRes {
    pub name: String,
    pub symptoms: Vec<String>,
    pub prevention: Vec<String>,
    pub treatment: String,
    pub imagesrc: String,
}
