use std::time::Duration;

use jiff::Timestamp;
use tokio::sync::Mutex;
use tracing::{debug, info};

use tipul_core::models::appointment::Appointment;
use tipul_core::models::patient::{Patient, PatientId};
use tipul_core::models::payment_client::PaymentClient;
use tipul_core::models::therapist::{Therapist, TherapistId};
use tipul_core::models::user::{NewUser, Role, User, UserId};

use crate::directory::{BoxFuture, Directory};
use crate::error::DataError;
use crate::seed::Seed;

/// Per-operation delays in milliseconds, matching the latency profile of
/// the backend this layer stands in for.
mod delay {
    pub const FIND_USER: u64 = 500;
    pub const GET_USERS: u64 = 600;
    pub const ADD_USER: u64 = 400;
    pub const UPDATE_USER: u64 = 400;
    pub const GET_PATIENTS: u64 = 800;
    pub const GET_PATIENT: u64 = 300;
    pub const GET_THERAPISTS: u64 = 200;
    pub const ASSIGN_THERAPIST: u64 = 400;
    pub const PAYMENT_CLIENTS: u64 = 600;
    pub const APPOINTMENTS: u64 = 300;
}

/// Whether the directory sleeps before answering. Tests run with
/// `Latency::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Simulated,
    None,
}

/// In-memory [`Directory`]. State lives only in process memory and resets
/// on restart. There is one logical writer; each operation holds the
/// collection lock for its duration, so overlapping mutations of the same
/// record are last-write-wins with no conflict detection.
pub struct MemoryDirectory {
    state: Mutex<State>,
    latency: Latency,
}

struct State {
    therapists: Vec<Therapist>,
    patients: Vec<Patient>,
    users: Vec<User>,
    payment_clients: Vec<PaymentClient>,
    appointments: Vec<Appointment>,
    next_user_id: UserId,
}

impl MemoryDirectory {
    /// Directory pre-populated with the demo dataset.
    pub fn seeded(latency: Latency) -> Self {
        Self::with_seed(Seed::demo(), latency)
    }

    pub fn with_seed(seed: Seed, latency: Latency) -> Self {
        let next_user_id = seed.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        MemoryDirectory {
            state: Mutex::new(State {
                therapists: seed.therapists,
                patients: seed.patients,
                users: seed.users,
                payment_clients: seed.payment_clients,
                appointments: seed.appointments,
                next_user_id,
            }),
            latency,
        }
    }

    async fn simulate(&self, ms: u64) {
        if self.latency == Latency::Simulated {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Directory for MemoryDirectory {
    fn patients<'a>(&'a self, user: Option<&'a User>) -> BoxFuture<'a, Result<Vec<Patient>, DataError>> {
        Box::pin(async move {
            self.simulate(delay::GET_PATIENTS).await;
            let state = self.state.lock().await;
            let Some(user) = user else {
                return Ok(Vec::new());
            };
            let visible = match user.role {
                Role::Admin | Role::Secretary | Role::Accountant => state.patients.clone(),
                Role::Therapist => match user.therapist_id {
                    Some(tid) => state
                        .patients
                        .iter()
                        .filter(|p| p.therapist_id == Some(tid))
                        .cloned()
                        .collect(),
                    // A therapist account with no therapist record sees
                    // nothing, not the unassigned rows.
                    None => Vec::new(),
                },
            };
            debug!(user = user.id, rows = visible.len(), "patients fetched");
            Ok(visible)
        })
    }

    fn patient(&self, id: PatientId) -> BoxFuture<'_, Result<Patient, DataError>> {
        Box::pin(async move {
            self.simulate(delay::GET_PATIENT).await;
            let state = self.state.lock().await;
            state
                .patients
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(DataError::PatientNotFound(id))
        })
    }

    fn therapists(&self) -> BoxFuture<'_, Result<Vec<Therapist>, DataError>> {
        Box::pin(async move {
            self.simulate(delay::GET_THERAPISTS).await;
            Ok(self.state.lock().await.therapists.clone())
        })
    }

    fn users(&self) -> BoxFuture<'_, Result<Vec<User>, DataError>> {
        Box::pin(async move {
            self.simulate(delay::GET_USERS).await;
            Ok(self.state.lock().await.users.clone())
        })
    }

    fn find_user_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Result<Option<User>, DataError>> {
        Box::pin(async move {
            self.simulate(delay::FIND_USER).await;
            let state = self.state.lock().await;
            Ok(state
                .users
                .iter()
                .find(|u| u.email.eq_ignore_ascii_case(email))
                .cloned())
        })
    }

    fn add_user(&self, new_user: NewUser) -> BoxFuture<'_, Result<User, DataError>> {
        Box::pin(async move {
            self.simulate(delay::ADD_USER).await;
            if new_user.password.trim().is_empty() {
                return Err(DataError::Validation(
                    "a password is required for a new user".to_string(),
                ));
            }
            let mut state = self.state.lock().await;
            let user = User {
                id: state.next_user_id,
                email: new_user.email,
                name: new_user.name,
                role: new_user.role,
                therapist_id: new_user.therapist_id,
            };
            state.next_user_id += 1;
            state.users.push(user.clone());
            info!(user = user.id, role = ?user.role, "user created");
            Ok(user)
        })
    }

    fn update_user(&self, user: User) -> BoxFuture<'_, Result<User, DataError>> {
        Box::pin(async move {
            self.simulate(delay::UPDATE_USER).await;
            let mut state = self.state.lock().await;
            let slot = state
                .users
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or(DataError::UserNotFound(user.id))?;
            *slot = user;
            info!(user = slot.id, "user updated");
            Ok(slot.clone())
        })
    }

    fn assign_therapist(
        &self,
        patient: PatientId,
        therapist: Option<TherapistId>,
    ) -> BoxFuture<'_, Result<Patient, DataError>> {
        Box::pin(async move {
            self.simulate(delay::ASSIGN_THERAPIST).await;
            let mut state = self.state.lock().await;
            let slot = state
                .patients
                .iter_mut()
                .find(|p| p.id == patient)
                .ok_or(DataError::PatientNotFound(patient))?;
            slot.therapist_id = therapist;
            info!(patient, therapist = ?therapist, "therapist reassigned");
            Ok(slot.clone())
        })
    }

    fn payment_clients(&self, patient: PatientId) -> BoxFuture<'_, Result<Vec<PaymentClient>, DataError>> {
        Box::pin(async move {
            self.simulate(delay::PAYMENT_CLIENTS).await;
            let state = self.state.lock().await;
            // The sample rows are not keyed by patient yet; every patient
            // gets the same ones until the billing backend exists.
            debug!(patient, rows = state.payment_clients.len(), "payment clients fetched");
            Ok(state.payment_clients.clone())
        })
    }

    fn upcoming_appointments(&self) -> BoxFuture<'_, Result<Vec<Appointment>, DataError>> {
        Box::pin(async move {
            self.simulate(delay::APPOINTMENTS).await;
            let state = self.state.lock().await;
            let now = Timestamp::now();
            let mut upcoming: Vec<Appointment> = state
                .appointments
                .iter()
                .filter(|a| a.date > now)
                .cloned()
                .collect();
            upcoming.sort_by_key(|a| a.date);
            upcoming.truncate(3);
            Ok(upcoming)
        })
    }
}
