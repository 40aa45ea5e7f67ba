use serde::Serialize;

use tipul_core::models::appointment::Appointment;
use tipul_core::models::patient::{Patient, PatientId, PaymentStatus, TreatmentStatus};
use tipul_core::models::user::User;
use tipul_data::directory::Directory;
use tipul_data::error::DataError;

/// How many pending-payment rows the dashboard card previews.
const PENDING_PREVIEW_ROWS: usize = 2;

/// Summary widgets and cards for the dashboard screen.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub active_patients: usize,
    /// Placeholder widgets, zero until scheduling and billing land.
    pub appointments_today: usize,
    pub monthly_income: u64,
    pub upcoming: Vec<Appointment>,
    pub pending_payments: PendingPayments,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingPayments {
    pub total: usize,
    pub preview: Vec<PendingPayment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingPayment {
    pub patient_id: PatientId,
    pub name: String,
    pub since: Option<jiff::civil::Date>,
}

/// Load the dashboard for `user`. The patient-derived numbers follow the
/// role-scoped roster, so a therapist's dashboard counts only their own
/// patients.
pub async fn load(directory: &dyn Directory, user: &User) -> Result<DashboardData, DataError> {
    let patients = directory.patients(Some(user)).await?;
    let upcoming = directory.upcoming_appointments().await?;

    let active_patients = patients
        .iter()
        .filter(|p| p.treatment_status == TreatmentStatus::InTreatment)
        .count();

    let pending: Vec<&Patient> = patients
        .iter()
        .filter(|p| matches!(p.payment_status, PaymentStatus::Overdue | PaymentStatus::Pending))
        .collect();
    let preview = pending
        .iter()
        .take(PENDING_PREVIEW_ROWS)
        .map(|p| PendingPayment {
            patient_id: p.id,
            name: p.full_name(),
            since: p.start_date,
        })
        .collect();

    Ok(DashboardData {
        active_patients,
        appointments_today: 0,
        monthly_income: 0,
        upcoming,
        pending_payments: PendingPayments {
            total: pending.len(),
            preview,
        },
    })
}
