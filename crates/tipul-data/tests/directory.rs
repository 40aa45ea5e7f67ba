use jiff::Timestamp;

use tipul_core::models::user::{NewUser, Role, User};
use tipul_data::directory::Directory;
use tipul_data::error::DataError;
use tipul_data::memory::{Latency, MemoryDirectory};

fn directory() -> MemoryDirectory {
    MemoryDirectory::seeded(Latency::None)
}

fn staff(role: Role) -> User {
    User {
        id: 900,
        email: "staff@clinic.com".to_string(),
        name: "Staff".to_string(),
        role,
        therapist_id: None,
    }
}

fn therapist_account(therapist_id: Option<u32>) -> User {
    User {
        id: 1,
        email: "amit@clinic.com".to_string(),
        name: "Amit Eyal".to_string(),
        role: Role::Therapist,
        therapist_id,
    }
}

#[tokio::test]
async fn therapist_sees_only_their_own_patients() {
    let dir = directory();
    let rows = dir.patients(Some(&therapist_account(Some(1)))).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|p| p.therapist_id == Some(1)));
}

#[tokio::test]
async fn back_office_roles_see_the_full_roster() {
    let dir = directory();
    for role in [Role::Admin, Role::Secretary, Role::Accountant] {
        let rows = dir.patients(Some(&staff(role))).await.unwrap();
        assert_eq!(rows.len(), 5, "{role:?} should see every patient");
    }
}

#[tokio::test]
async fn no_user_sees_nothing() {
    let dir = directory();
    assert!(dir.patients(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn unlinked_therapist_account_sees_nothing() {
    // The unassigned patient must not leak to a therapist account that has
    // no therapist record of its own.
    let dir = directory();
    assert!(dir.patients(Some(&therapist_account(None))).await.unwrap().is_empty());
}

#[tokio::test]
async fn patient_lookup_miss_is_not_found() {
    let dir = directory();
    let err = dir.patient(999).await.unwrap_err();
    assert!(matches!(err, DataError::PatientNotFound(999)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn therapist_reassignment_round_trips() {
    let dir = directory();

    let updated = dir.assign_therapist(5, Some(2)).await.unwrap();
    assert_eq!(updated.therapist_id, Some(2));
    assert_eq!(dir.patient(5).await.unwrap().therapist_id, Some(2));

    let cleared = dir.assign_therapist(5, None).await.unwrap();
    assert_eq!(cleared.therapist_id, None);
    assert_eq!(dir.patient(5).await.unwrap().therapist_id, None);
}

#[tokio::test]
async fn visibility_follows_reassignment() {
    let dir = directory();
    let moshe = User {
        id: 2,
        email: "moshe@clinic.com".to_string(),
        name: "Dr. Moshe Cohen".to_string(),
        role: Role::Therapist,
        therapist_id: Some(2),
    };

    assert!(dir.patients(Some(&moshe)).await.unwrap().is_empty());

    dir.assign_therapist(5, Some(2)).await.unwrap();

    let rows = dir.patients(Some(&moshe)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 5);
}

#[tokio::test]
async fn add_user_requires_a_password() {
    let dir = directory();
    let err = dir
        .add_user(NewUser {
            email: "new@clinic.com".to_string(),
            name: "New Employee".to_string(),
            role: Role::Secretary,
            therapist_id: None,
            password: "  ".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::Validation(_)));
    assert_eq!(dir.users().await.unwrap().len(), 6);
}

#[tokio::test]
async fn add_user_assigns_the_next_id() {
    let dir = directory();
    let user = dir
        .add_user(NewUser {
            email: "new@clinic.com".to_string(),
            name: "New Employee".to_string(),
            role: Role::Secretary,
            therapist_id: None,
            password: "changeme".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 104);
    assert_eq!(dir.users().await.unwrap().len(), 7);

    let found = dir.find_user_by_email("new@clinic.com").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(104));
}

#[tokio::test]
async fn update_user_replaces_the_record() {
    let dir = directory();
    let mut admin = dir
        .find_user_by_email("admin@clinic.com")
        .await
        .unwrap()
        .expect("seeded admin");

    admin.name = "Renamed Administrator".to_string();
    let updated = dir.update_user(admin).await.unwrap();
    assert_eq!(updated.name, "Renamed Administrator");

    let reread = dir.find_user_by_email("admin@clinic.com").await.unwrap();
    assert_eq!(reread.map(|u| u.name), Some("Renamed Administrator".to_string()));
}

#[tokio::test]
async fn update_unknown_user_is_not_found() {
    let dir = directory();
    let err = dir.update_user(staff(Role::Admin)).await.unwrap_err();
    assert!(matches!(err, DataError::UserNotFound(900)));
}

#[tokio::test]
async fn email_lookup_is_case_insensitive() {
    let dir = directory();
    let found = dir.find_user_by_email("ADMIN@Clinic.COM").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(101));
}

#[tokio::test]
async fn payment_clients_returned_for_any_patient() {
    let dir = directory();
    let rows = dir.payment_clients(3).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "2025-1224L2D9");
}

#[tokio::test]
async fn upcoming_appointments_are_the_soonest_three_ascending() {
    let dir = directory();
    let upcoming = dir.upcoming_appointments().await.unwrap();

    let now = Timestamp::now();
    assert_eq!(upcoming.len(), 3);
    assert!(upcoming.iter().all(|a| a.date > now));
    assert!(upcoming.windows(2).all(|w| w[0].date <= w[1].date));

    // Seed has four future appointments and one past one: the fourth
    // future row falls to the cap, the past one to the filter.
    let ids: Vec<u32> = upcoming.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
