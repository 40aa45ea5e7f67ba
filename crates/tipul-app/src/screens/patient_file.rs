use serde::Serialize;

use tipul_core::models::patient::{Patient, PatientId};
use tipul_core::models::payment_client::PaymentClient;
use tipul_data::directory::Directory;
use tipul_data::error::DataError;

/// Shared loader for the patient profile and billing screens, which
/// present the same record: the patient plus their payment-client rows.
/// A missing patient propagates `NotFound`, which both screens render as
/// an inline "not found" state rather than a crash.
#[derive(Debug, Clone, Serialize)]
pub struct PatientFile {
    pub patient: Patient,
    pub payment_clients: Vec<PaymentClient>,
}

pub async fn load(directory: &dyn Directory, patient_id: PatientId) -> Result<PatientFile, DataError> {
    let patient = directory.patient(patient_id).await?;
    let payment_clients = directory.payment_clients(patient_id).await?;
    Ok(PatientFile {
        patient,
        payment_clients,
    })
}
