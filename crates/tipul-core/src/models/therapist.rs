use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub type TherapistId = u32;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Therapist {
    pub id: TherapistId,
    pub name: String,
    pub email: String,
}
