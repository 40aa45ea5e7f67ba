use std::future::Future;
use std::pin::Pin;

use tipul_core::models::appointment::Appointment;
use tipul_core::models::patient::{Patient, PatientId};
use tipul_core::models::payment_client::PaymentClient;
use tipul_core::models::therapist::{Therapist, TherapistId};
use tipul_core::models::user::{NewUser, User};

use crate::error::DataError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The sole gateway to patient, user, therapist, payment-client, and
/// appointment records. Screens hold `&dyn Directory` and never touch the
/// underlying collections.
///
/// Every operation may fail, mirroring the backend contract a real server
/// will eventually satisfy. Failures are never retried here; the calling
/// screen renders them as an inline error state.
///
/// Methods return boxed futures for dyn compatibility.
pub trait Directory: Send + Sync {
    /// Patients visible to `user`: the full roster for Admin, Secretary,
    /// and Accountant; only rows with a matching `therapist_id` for a
    /// Therapist; nothing when no user is signed in.
    ///
    /// This is the single row-level visibility enforcement point. It is
    /// re-evaluated on every call and its result must not be cached across
    /// role changes.
    fn patients<'a>(&'a self, user: Option<&'a User>) -> BoxFuture<'a, Result<Vec<Patient>, DataError>>;

    /// Single patient lookup. `DataError::PatientNotFound` on a miss.
    fn patient(&self, id: PatientId) -> BoxFuture<'_, Result<Patient, DataError>>;

    fn therapists(&self) -> BoxFuture<'_, Result<Vec<Therapist>, DataError>>;

    fn users(&self) -> BoxFuture<'_, Result<Vec<User>, DataError>>;

    /// Case-insensitive email lookup, used by the session store to
    /// authenticate.
    fn find_user_by_email<'a>(&'a self, email: &'a str) -> BoxFuture<'a, Result<Option<User>, DataError>>;

    /// Create a user. Rejects an empty password with
    /// `DataError::Validation`; the mock layer discards the password after
    /// validating it.
    fn add_user(&self, new_user: NewUser) -> BoxFuture<'_, Result<User, DataError>>;

    /// Replace a user record by id. `DataError::UserNotFound` on a miss.
    fn update_user(&self, user: User) -> BoxFuture<'_, Result<User, DataError>>;

    /// Set or clear a patient's assigned therapist and return the updated
    /// record.
    fn assign_therapist(
        &self,
        patient: PatientId,
        therapist: Option<TherapistId>,
    ) -> BoxFuture<'_, Result<Patient, DataError>>;

    /// Billing rows for a patient. The mock returns the same sample rows
    /// for any patient, as the backend it stands in for is not built yet.
    fn payment_clients(&self, patient: PatientId) -> BoxFuture<'_, Result<Vec<PaymentClient>, DataError>>;

    /// The 3 soonest strictly-future appointments in ascending date order.
    /// The cap and the ordering are contract.
    fn upcoming_appointments(&self) -> BoxFuture<'_, Result<Vec<Appointment>, DataError>>;
}
