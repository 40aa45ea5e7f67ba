use serde::Serialize;

use tipul_core::models::patient::{Patient, PatientId};
use tipul_core::models::therapist::{Therapist, TherapistId};
use tipul_core::models::user::{Role, User};
use tipul_data::directory::Directory;
use tipul_data::error::DataError;

use crate::badge::{Badge, payment_badge, treatment_badge};

/// The patients table plus the therapist roster for the reassignment
/// dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct PatientsData {
    pub rows: Vec<PatientRow>,
    pub therapists: Vec<Therapist>,
    /// Only admins may move a patient between therapists.
    pub can_reassign: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientRow {
    pub patient: Patient,
    pub therapist_name: Option<String>,
    pub treatment_badge: Badge,
    pub payment_badge: Badge,
}

pub async fn load(directory: &dyn Directory, user: &User) -> Result<PatientsData, DataError> {
    let patients = directory.patients(Some(user)).await?;
    let therapists = directory.therapists().await?;

    let rows = patients
        .into_iter()
        .map(|patient| {
            let therapist_name = patient
                .therapist_id
                .and_then(|id| therapists.iter().find(|t| t.id == id))
                .map(|t| t.name.clone());
            PatientRow {
                therapist_name,
                treatment_badge: treatment_badge(patient.treatment_status),
                payment_badge: payment_badge(patient.payment_status),
                patient,
            }
        })
        .collect();

    Ok(PatientsData {
        rows,
        therapists,
        can_reassign: user.role == Role::Admin,
    })
}

/// Move a patient to another therapist, or off the roster with `None`.
/// Returns the updated record; callers refetch the table afterwards.
pub async fn reassign(
    directory: &dyn Directory,
    patient: PatientId,
    therapist: Option<TherapistId>,
) -> Result<Patient, DataError> {
    directory.assign_therapist(patient, therapist).await
}
