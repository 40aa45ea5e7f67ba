use jiff::civil::date;
use jiff::{Timestamp, ToSpan};

use tipul_core::models::appointment::Appointment;
use tipul_core::models::patient::{Patient, PaymentStatus, ReferralStatus, TreatmentStatus};
use tipul_core::models::payment_client::PaymentClient;
use tipul_core::models::therapist::Therapist;
use tipul_core::models::user::{Role, User};

/// The demo dataset the in-memory directory boots with.
pub struct Seed {
    pub therapists: Vec<Therapist>,
    pub patients: Vec<Patient>,
    pub users: Vec<User>,
    pub payment_clients: Vec<PaymentClient>,
    pub appointments: Vec<Appointment>,
}

impl Seed {
    /// Sample clinic: 3 therapists; 5 patients, 3 of them assigned to
    /// therapist 1; one account per back-office role plus one per
    /// therapist; a single payment client; and appointments on both sides
    /// of the current instant so the upcoming-appointments filter has
    /// something to drop.
    pub fn demo() -> Self {
        let now = Timestamp::now();

        Seed {
            therapists: vec![
                therapist(1, "Amit Eyal", "amit@clinic.com"),
                therapist(2, "Dr. Moshe Cohen", "moshe@clinic.com"),
                therapist(3, "Avigail Levy", "avigail@clinic.com"),
            ],
            patients: vec![
                Patient {
                    id: 1,
                    first_name: "Avraham".to_string(),
                    last_name: "Yosef".to_string(),
                    id_number: "123456789".to_string(),
                    phone: "050-1234567".to_string(),
                    email: "avi@email.com".to_string(),
                    treatment_status: TreatmentStatus::InTreatment,
                    payment_status: PaymentStatus::Paid,
                    start_date: Some(date(2023, 1, 15)),
                    end_date: None,
                    therapist_id: Some(1),
                    case_number: "0121".to_string(),
                    status: ReferralStatus::Active,
                    treatment_type: "Parent guidance".to_string(),
                    parents_involvement: "Co-payment, treatment".to_string(),
                    is_identified: true,
                    waiting_since: None,
                    waiting_reason: None,
                },
                Patient {
                    id: 2,
                    first_name: "Sara".to_string(),
                    last_name: "Cohen".to_string(),
                    id_number: "234567890".to_string(),
                    phone: "052-2345678".to_string(),
                    email: "sara.c@email.com".to_string(),
                    treatment_status: TreatmentStatus::InTreatment,
                    payment_status: PaymentStatus::Pending,
                    start_date: Some(date(2023, 2, 20)),
                    end_date: None,
                    therapist_id: Some(1),
                    case_number: "0122".to_string(),
                    status: ReferralStatus::InTreatment,
                    treatment_type: "Couples therapy".to_string(),
                    parents_involvement: "Co-payment, assessment".to_string(),
                    is_identified: false,
                    waiting_since: None,
                    waiting_reason: None,
                },
                Patient {
                    id: 3,
                    first_name: "Moshe".to_string(),
                    last_name: "Levy".to_string(),
                    id_number: "345678901".to_string(),
                    phone: "053-3456789".to_string(),
                    email: "moshe.l@email.com".to_string(),
                    treatment_status: TreatmentStatus::Waiting,
                    payment_status: PaymentStatus::Exempt,
                    start_date: None,
                    end_date: None,
                    therapist_id: Some(1),
                    case_number: "0123".to_string(),
                    status: ReferralStatus::Waiting,
                    treatment_type: "Individual therapy".to_string(),
                    parents_involvement: "None".to_string(),
                    is_identified: true,
                    waiting_since: Some(date(2024, 5, 10)),
                    waiting_reason: Some("No available slot".to_string()),
                },
                Patient {
                    id: 4,
                    first_name: "Rivka".to_string(),
                    last_name: "Israel".to_string(),
                    id_number: "456789012".to_string(),
                    phone: "054-4567890".to_string(),
                    email: "rivka@email.com".to_string(),
                    treatment_status: TreatmentStatus::Completed,
                    payment_status: PaymentStatus::Paid,
                    start_date: Some(date(2022, 11, 1)),
                    end_date: Some(date(2023, 11, 1)),
                    therapist_id: Some(3),
                    case_number: "0124".to_string(),
                    status: ReferralStatus::Closed,
                    treatment_type: "Parent guidance".to_string(),
                    parents_involvement: "Co-payment, treatment".to_string(),
                    is_identified: true,
                    waiting_since: None,
                    waiting_reason: None,
                },
                Patient {
                    id: 5,
                    first_name: "Daniel".to_string(),
                    last_name: "Biton".to_string(),
                    id_number: "567890123".to_string(),
                    phone: "058-1234567".to_string(),
                    email: "daniel@email.com".to_string(),
                    treatment_status: TreatmentStatus::Waiting,
                    payment_status: PaymentStatus::Exempt,
                    start_date: None,
                    end_date: None,
                    therapist_id: None,
                    case_number: "0125".to_string(),
                    status: ReferralStatus::Waiting,
                    treatment_type: "Family therapy".to_string(),
                    parents_involvement: "None".to_string(),
                    is_identified: false,
                    waiting_since: Some(date(2024, 6, 22)),
                    waiting_reason: Some("Eligibility check".to_string()),
                },
            ],
            users: vec![
                user(101, "admin@clinic.com", "Head Administrator", Role::Admin, None),
                user(102, "secretary@clinic.com", "Front Desk", Role::Secretary, None),
                user(103, "accountant@clinic.com", "Bookkeeping", Role::Accountant, None),
                user(1, "amit@clinic.com", "Amit Eyal", Role::Therapist, Some(1)),
                user(2, "moshe@clinic.com", "Dr. Moshe Cohen", Role::Therapist, Some(2)),
                user(3, "avigail@clinic.com", "Avigail Levy", Role::Therapist, Some(3)),
            ],
            payment_clients: vec![PaymentClient {
                id: "2025-1224L2D9".to_string(),
                payment_year: 2025,
                full_name: "Bloch, Mor".to_string(),
                rank: 1,
                tariff: "53.00".to_string(),
                treatment_type: "Family treatment center".to_string(),
                active: true,
            }],
            appointments: vec![
                appointment(1, 1, "Avraham", "Yosef", now + 2.hours(), "Parent guidance"),
                appointment(2, 2, "Sara", "Cohen", now + 26.hours(), "Couples therapy"),
                appointment(3, 4, "Rivka", "Israel", now + 50.hours(), "Follow-up"),
                appointment(4, 1, "Avraham", "Yosef", now + 74.hours(), "Parent guidance"),
                appointment(5, 4, "Rivka", "Israel", now - 24.hours(), "Closing session"),
            ],
        }
    }
}

fn therapist(id: u32, name: &str, email: &str) -> Therapist {
    Therapist {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn user(id: u32, email: &str, name: &str, role: Role, therapist_id: Option<u32>) -> User {
    User {
        id,
        email: email.to_string(),
        name: name.to_string(),
        role,
        therapist_id,
    }
}

fn appointment(
    id: u32,
    patient_id: u32,
    first_name: &str,
    last_name: &str,
    at: Timestamp,
    kind: &str,
) -> Appointment {
    Appointment {
        id,
        patient_id,
        patient_first_name: first_name.to_string(),
        patient_last_name: last_name.to_string(),
        date: at,
        kind: kind.to_string(),
    }
}
