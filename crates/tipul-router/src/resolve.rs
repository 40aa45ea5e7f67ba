use tipul_core::models::patient::PatientId;
use tipul_core::models::user::{Role, User};

use crate::path::RoutePath;

pub const LOGIN_PATH: &str = "/login";

/// The dashboard fallback every malformed or foreign path lands on.
pub fn dashboard_path(role: Role) -> String {
    format!("/{}/dashboard", role.path_segment())
}

/// A screen the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Patients,
    PatientProfile { patient_id: PatientId },
    Billing { patient_id: PatientId },
    Settings,
    WaitingList,
}

/// Outcome of one resolve pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    Redirect(String),
}

/// Decide what the current identity may see at the current path.
///
/// Anonymous visitors belong on `/login` and are sent there from anywhere
/// else. An authenticated user is never left on a path whose first segment
/// disagrees with their role: `/login`, the root, and foreign role
/// prefixes all redirect to the role's dashboard, as do unknown screen
/// selectors and malformed record ids. Redirection always targets the
/// dashboard fallback, never an error page.
///
/// Pure function; callers re-run it on every path or identity change.
pub fn resolve(user: Option<&User>, route: &RoutePath) -> Resolution {
    let Some(user) = user else {
        if route.path() == LOGIN_PATH {
            return Resolution::Render(Screen::Login);
        }
        return Resolution::Redirect(LOGIN_PATH.to_string());
    };

    let role_path = user.role.path_segment();
    if route.path() == LOGIN_PATH || route.is_root() || route.segment(0) != Some(role_path) {
        return Resolution::Redirect(dashboard_path(user.role));
    }

    match route.segment(1) {
        Some("dashboard") => Resolution::Render(Screen::Dashboard),
        Some("patients") => Resolution::Render(Screen::Patients),
        Some("patient") => match record_id(route.segment(2)) {
            Some(patient_id) => Resolution::Render(Screen::PatientProfile { patient_id }),
            None => Resolution::Redirect(dashboard_path(user.role)),
        },
        Some("billing") => match record_id(route.segment(2)) {
            Some(patient_id) => Resolution::Render(Screen::Billing { patient_id }),
            None => Resolution::Redirect(dashboard_path(user.role)),
        },
        Some("settings") => Resolution::Render(Screen::Settings),
        Some("waiting-list") => Resolution::Render(Screen::WaitingList),
        _ => Resolution::Redirect(dashboard_path(user.role)),
    }
}

fn record_id(segment: Option<&str>) -> Option<PatientId> {
    segment?.parse().ok()
}
