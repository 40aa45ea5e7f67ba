use jiff::civil::Date;
use serde::Serialize;

use tipul_core::models::patient::{Patient, TreatmentStatus};
use tipul_core::models::user::User;
use tipul_data::directory::Directory;
use tipul_data::error::DataError;

/// Bucket label for waiting patients with no recorded reason.
pub const UNSPECIFIED_REASON: &str = "Not specified";

#[derive(Debug, Clone, Serialize)]
pub struct WaitingListData {
    pub total: usize,
    pub average_wait_days: i64,
    pub reasons: Vec<ReasonCount>,
    pub waiting: Vec<Patient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Load the waiting list for `user`: the role-scoped patients whose
/// treatment status is Waiting. `today` is supplied by the caller so the
/// average is reproducible.
pub async fn load(
    directory: &dyn Directory,
    user: &User,
    today: Date,
) -> Result<WaitingListData, DataError> {
    let patients = directory.patients(Some(user)).await?;
    let waiting: Vec<Patient> = patients
        .into_iter()
        .filter(|p| p.treatment_status == TreatmentStatus::Waiting)
        .collect();

    Ok(WaitingListData {
        total: waiting.len(),
        average_wait_days: average_wait(&waiting, today),
        reasons: reason_counts(&waiting),
        waiting,
    })
}

/// Mean days since `waiting_since`, rounded to the nearest whole day.
/// Patients with no recorded date contribute zero days but still count
/// toward the denominator.
fn average_wait(waiting: &[Patient], today: Date) -> i64 {
    if waiting.is_empty() {
        return 0;
    }
    let total: i64 = waiting
        .iter()
        .filter_map(|p| p.waiting_since)
        .map(|since| days_between(since, today))
        .sum();
    let count = waiting.len() as i64;
    (total + count / 2) / count
}

fn days_between(since: Date, today: Date) -> i64 {
    since
        .until(today)
        .map(|span| span.get_days())
        .unwrap_or(0)
        .max(0)
        .into()
}

/// Reason histogram in first-seen order.
fn reason_counts(waiting: &[Patient]) -> Vec<ReasonCount> {
    let mut counts: Vec<ReasonCount> = Vec::new();
    for patient in waiting {
        let reason = patient
            .waiting_reason
            .as_deref()
            .unwrap_or(UNSPECIFIED_REASON);
        match counts.iter_mut().find(|c| c.reason == reason) {
            Some(c) => c.count += 1,
            None => counts.push(ReasonCount {
                reason: reason.to_string(),
                count: 1,
            }),
        }
    }
    counts
}
