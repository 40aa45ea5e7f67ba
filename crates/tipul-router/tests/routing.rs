use tipul_core::models::user::{Role, User};
use tipul_router::path::RoutePath;
use tipul_router::resolve::{LOGIN_PATH, Resolution, Screen, dashboard_path, resolve};
use tipul_router::router::HashRouter;

fn user(role: Role) -> User {
    User {
        id: 1,
        email: "someone@clinic.com".to_string(),
        name: "Someone".to_string(),
        role,
        therapist_id: (role == Role::Therapist).then_some(1),
    }
}

#[test]
fn parse_discards_empty_segments() {
    let route = RoutePath::parse("/a//b/");
    assert_eq!(route.path(), "/a/b");
    assert_eq!(route.segments(), ["a", "b"]);
}

#[test]
fn parse_empty_fragment_is_root() {
    let route = RoutePath::parse("");
    assert_eq!(route.path(), "/");
    assert!(route.is_root());
}

#[test]
fn segments_are_positional() {
    let route = RoutePath::parse("/admin/patient/42");
    assert_eq!(route.segment(0), Some("admin"));
    assert_eq!(route.segment(1), Some("patient"));
    assert_eq!(route.segment(2), Some("42"));
    assert_eq!(route.segment(3), None);
}

#[test]
fn anonymous_login_path_renders_login() {
    let res = resolve(None, &RoutePath::parse("/login"));
    assert_eq!(res, Resolution::Render(Screen::Login));
}

#[test]
fn anonymous_anywhere_else_redirects_to_login() {
    for path in ["/", "/admin/dashboard", "/therapist/settings", "/nonsense"] {
        let res = resolve(None, &RoutePath::parse(path));
        assert_eq!(res, Resolution::Redirect(LOGIN_PATH.to_string()), "at {path}");
    }
}

#[test]
fn foreign_role_prefix_redirects_to_own_dashboard() {
    // Every role, parked on any other role's prefix, goes home.
    for role in Role::ALL {
        let u = user(role);
        for other in Role::ALL {
            if other == role {
                continue;
            }
            let path = format!("/{}/dashboard", other.path_segment());
            let res = resolve(Some(&u), &RoutePath::parse(&path));
            assert_eq!(res, Resolution::Redirect(dashboard_path(role)), "{role:?} at {path}");
        }
    }
}

#[test]
fn login_and_root_redirect_to_dashboard_when_authenticated() {
    let u = user(Role::Admin);
    for path in ["/login", "/"] {
        let res = resolve(Some(&u), &RoutePath::parse(path));
        assert_eq!(res, Resolution::Redirect("/admin/dashboard".to_string()), "at {path}");
    }
}

#[test]
fn known_selectors_render_their_screens() {
    let u = user(Role::Secretary);
    let cases = [
        ("/secretary/dashboard", Screen::Dashboard),
        ("/secretary/patients", Screen::Patients),
        ("/secretary/patient/3", Screen::PatientProfile { patient_id: 3 }),
        ("/secretary/billing/3", Screen::Billing { patient_id: 3 }),
        ("/secretary/settings", Screen::Settings),
        ("/secretary/waiting-list", Screen::WaitingList),
    ];
    for (path, screen) in cases {
        let res = resolve(Some(&u), &RoutePath::parse(path));
        assert_eq!(res, Resolution::Render(screen), "at {path}");
    }
}

#[test]
fn unknown_selector_redirects_to_dashboard() {
    let u = user(Role::Admin);
    for path in ["/admin/schedule", "/admin", "/admin/patients2"] {
        let res = resolve(Some(&u), &RoutePath::parse(path));
        assert_eq!(res, Resolution::Redirect("/admin/dashboard".to_string()), "at {path}");
    }
}

#[test]
fn malformed_record_ids_redirect_to_dashboard() {
    let u = user(Role::Admin);
    for path in ["/admin/patient", "/admin/patient/abc", "/admin/billing/-1"] {
        let res = resolve(Some(&u), &RoutePath::parse(path));
        assert_eq!(res, Resolution::Redirect("/admin/dashboard".to_string()), "at {path}");
    }
}

#[test]
fn resolver_never_redirects_to_the_path_it_was_given() {
    // Termination property for the shell's redirect loop.
    let paths = [
        "/", "/login", "/admin/dashboard", "/therapist/dashboard", "/admin/junk",
        "/secretary/patient/9", "/accountant/waiting-list",
    ];
    for maybe_user in [None, Some(user(Role::Admin)), Some(user(Role::Therapist))] {
        for path in paths {
            let route = RoutePath::parse(path);
            if let Resolution::Redirect(target) = resolve(maybe_user.as_ref(), &route) {
                assert_ne!(target, route.path(), "{maybe_user:?} at {path}");
            }
        }
    }
}

#[test]
fn navigate_updates_the_current_route() {
    let router = HashRouter::new();
    assert!(router.current().is_root());

    router.navigate("/admin/dashboard");
    assert_eq!(router.current().path(), "/admin/dashboard");
}

#[test]
fn every_navigate_notifies_subscribers_even_without_a_change() {
    let router = HashRouter::new();
    let mut rx = router.subscribe();
    rx.borrow_and_update();

    router.navigate("/admin/dashboard");
    assert!(rx.has_changed().unwrap());
    rx.borrow_and_update();

    // Same target again: still a distinct notification, no debouncing.
    router.navigate("/admin/dashboard");
    assert!(rx.has_changed().unwrap());
}
