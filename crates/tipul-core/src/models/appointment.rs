use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::PatientId;

pub type AppointmentId = u32;

/// A scheduled session. The patient name is denormalized so the dashboard
/// card renders without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub date: jiff::Timestamp,
    pub kind: String,
}

impl Appointment {
    pub fn patient_name(&self) -> String {
        format!("{} {}", self.patient_first_name, self.patient_last_name)
    }
}
