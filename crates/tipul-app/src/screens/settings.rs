use serde::{Deserialize, Serialize};

use tipul_core::models::therapist::TherapistId;
use tipul_core::models::user::{NewUser, Role, User};
use tipul_data::directory::Directory;
use tipul_data::error::DataError;

/// The settings screen: the signed-in user's own details plus the
/// employee-management table.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsData {
    pub me: MyDetails,
    pub employees: Vec<EmployeeRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyDetails {
    pub name: String,
    pub email: String,
    pub role_title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRow {
    pub user: User,
    pub role_title: &'static str,
}

/// Form payload for creating or editing an employee. A blank password
/// means "required" on create and "unchanged" on edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub therapist_id: Option<TherapistId>,
    #[serde(default)]
    pub password: String,
}

pub async fn load(directory: &dyn Directory, user: &User) -> Result<SettingsData, DataError> {
    let users = directory.users().await?;
    let employees = users
        .into_iter()
        .map(|user| EmployeeRow {
            role_title: user.role.title(),
            user,
        })
        .collect();

    Ok(SettingsData {
        me: MyDetails {
            name: user.name.clone(),
            email: user.email.clone(),
            role_title: user.role.title(),
        },
        employees,
    })
}

/// Create an employee. An empty password aborts here, before the data
/// layer is reached, and surfaces inline on the form.
pub async fn add_employee(directory: &dyn Directory, form: EmployeeForm) -> Result<User, DataError> {
    if form.password.trim().is_empty() {
        return Err(DataError::Validation(
            "a password is required for a new user".to_string(),
        ));
    }
    directory
        .add_user(NewUser {
            email: form.email,
            name: form.name,
            role: form.role,
            therapist_id: form.therapist_id,
            password: form.password,
        })
        .await
}

/// Apply form edits to an existing employee. The password field is
/// ignored on edit; the mock layer stores no credentials either way.
pub async fn update_employee(
    directory: &dyn Directory,
    existing: &User,
    form: EmployeeForm,
) -> Result<User, DataError> {
    directory
        .update_user(User {
            id: existing.id,
            email: form.email,
            name: form.name,
            role: form.role,
            therapist_id: form.therapist_id.or(existing.therapist_id),
        })
        .await
}
