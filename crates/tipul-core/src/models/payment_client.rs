use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A billing entity established for a patient. Keyed by a composite
/// human-readable id (payer number / year). Read-only in this system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentClient {
    pub id: String,
    pub payment_year: i16,
    pub full_name: String,
    pub rank: u32,
    pub tariff: String,
    pub treatment_type: String,
    pub active: bool,
}
