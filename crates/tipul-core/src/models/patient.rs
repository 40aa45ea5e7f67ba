use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::therapist::TherapistId;

pub type PatientId = u32;

/// Where a patient stands in their course of treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentStatus {
    Waiting,
    InTreatment,
    Completed,
}

impl TreatmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TreatmentStatus::Waiting => "Waiting",
            TreatmentStatus::InTreatment => "In treatment",
            TreatmentStatus::Completed => "Treatment completed",
        }
    }
}

/// Billing standing, tracked separately from treatment standing so the two
/// pending-like states cannot be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Exempt,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Exempt => "Exempt",
        }
    }
}

/// Standing of the referral that opened the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReferralStatus {
    Active,
    InTreatment,
    Waiting,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub phone: String,
    pub email: String,
    pub treatment_status: TreatmentStatus,
    pub payment_status: PaymentStatus,
    pub start_date: Option<jiff::civil::Date>,
    pub end_date: Option<jiff::civil::Date>,
    /// Assigned therapist, if any. Drives row-level visibility for
    /// therapist users.
    pub therapist_id: Option<TherapistId>,
    pub case_number: String,
    pub status: ReferralStatus,
    pub treatment_type: String,
    pub parents_involvement: String,
    pub is_identified: bool,
    pub waiting_since: Option<jiff::civil::Date>,
    pub waiting_reason: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
