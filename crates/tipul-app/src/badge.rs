use serde::Serialize;

use tipul_core::models::patient::{PaymentStatus, TreatmentStatus};

/// Visual badge classes the client styles. Payment and treatment statuses
/// map through two separate total functions, so a payment that is pending
/// and a treatment that is waiting stay distinct badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Paid,
    Pending,
    Overdue,
    Exempt,
    Waiting,
    InTreatment,
    Completed,
}

pub fn payment_badge(status: PaymentStatus) -> Badge {
    match status {
        PaymentStatus::Paid => Badge::Paid,
        PaymentStatus::Pending => Badge::Pending,
        PaymentStatus::Overdue => Badge::Overdue,
        PaymentStatus::Exempt => Badge::Exempt,
    }
}

pub fn treatment_badge(status: TreatmentStatus) -> Badge {
    match status {
        TreatmentStatus::Waiting => Badge::Waiting,
        TreatmentStatus::InTreatment => Badge::InTreatment,
        TreatmentStatus::Completed => Badge::Completed,
    }
}
