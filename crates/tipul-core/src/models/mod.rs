pub mod appointment;
pub mod patient;
pub mod payment_client;
pub mod therapist;
pub mod user;
