use super::*;

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_maps_empty_and_root_to_slash() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("//"), "/");
}

#[test]
fn normalize_strips_trailing_slash_query_and_fragment() {
    assert_eq!(normalize_path("/dashboard/"), "/dashboard");
    assert_eq!(normalize_path("/dashboard?tab=1"), "/dashboard");
    assert_eq!(normalize_path("/dashboard#top"), "/dashboard");
    assert_eq!(normalize_path("/?next=/dashboard"), "/");
}

#[test]
fn normalize_adds_missing_leading_slash() {
    assert_eq!(normalize_path("dashboard"), "/dashboard");
}

// =============================================================
// RouteTable::bookkee
// =============================================================

#[test]
fn bookkee_table_resolves_login_unguarded() {
    let table = RouteTable::bookkee();
    let Resolved::Route(entry) = table.resolve("/") else {
        panic!("login route missing");
    };
    assert_eq!(entry.view_id(), Some(ViewId::LoginPage));
    assert_eq!(entry.guard, None);
}

#[test]
fn bookkee_table_guards_dashboard_and_entry_form() {
    let table = RouteTable::bookkee();
    for (path, view) in [(DASHBOARD_PATH, ViewId::DashboardPage), (ADD_ENTRY_PATH, ViewId::AddAccounting)] {
        let Resolved::Route(entry) = table.resolve(path) else {
            panic!("{path} missing");
        };
        assert_eq!(entry.view_id(), Some(view));
        assert_eq!(entry.guard, Some(Guard::RequireSession));
    }
}

#[test]
fn bookkee_table_logout_redirects_to_login() {
    let table = RouteTable::bookkee();
    let Resolved::Route(entry) = table.resolve("/logout") else {
        panic!("logout route missing");
    };
    assert_eq!(entry.target, RouteTarget::Logout { redirect_to: LOGIN_PATH });
    assert_eq!(entry.view_id(), None);
}

#[test]
fn unknown_path_resolves_to_fallback() {
    let table = RouteTable::bookkee();
    assert_eq!(table.resolve("/nope"), Resolved::Fallback { redirect_to: "/" });
    assert_eq!(table.resolve("/dashboard/extra"), Resolved::Fallback { redirect_to: "/" });
}

#[test]
fn bookkee_table_passes_its_own_validation() {
    let entries: Vec<RouteEntry> = RouteTable::bookkee().entries().copied().collect();
    assert!(RouteTable::new(entries, LOGIN_PATH).is_ok());
}

// =============================================================
// RouteTable::new validation
// =============================================================

#[test]
fn new_rejects_path_without_leading_slash() {
    let err = RouteTable::new(vec![RouteEntry::view("login", ViewId::LoginPage)], "/").unwrap_err();
    assert_eq!(err, GateError::InvalidPath("login".to_owned()));
}

#[test]
fn new_rejects_duplicate_after_normalization() {
    let err = RouteTable::new(
        vec![
            RouteEntry::view("/", ViewId::LoginPage),
            RouteEntry::view("/dashboard", ViewId::DashboardPage),
            RouteEntry::guarded("/dashboard/", ViewId::DashboardPage, Guard::RequireSession),
        ],
        "/",
    )
    .unwrap_err();
    assert_eq!(err, GateError::DuplicateRoute("/dashboard".to_owned()));
}

#[test]
fn new_rejects_guarded_fallback() {
    let err = RouteTable::new(
        vec![RouteEntry::guarded("/", ViewId::LoginPage, Guard::RequireSession)],
        "/",
    )
    .unwrap_err();
    assert_eq!(err, GateError::FallbackUnroutable("/".to_owned()));
}

#[test]
fn new_rejects_missing_fallback() {
    let err = RouteTable::new(vec![RouteEntry::view("/home", ViewId::LoginPage)], "/").unwrap_err();
    assert!(err.to_string().contains("fallback path /"));
}

#[test]
fn new_rejects_logout_as_fallback() {
    let err = RouteTable::new(
        vec![RouteEntry::view("/", ViewId::LoginPage), RouteEntry::logout("/logout", "/")],
        "/logout",
    )
    .unwrap_err();
    assert_eq!(err, GateError::FallbackUnroutable("/logout".to_owned()));
}

#[test]
fn view_ids_have_stable_names() {
    assert_eq!(ViewId::DashboardPage.as_str(), "DashboardPage");
    assert_eq!(ViewId::AddAccounting.as_str(), "AddAccounting");
}

#[test]
fn is_logout_only_for_logout_route() {
    let table = RouteTable::bookkee();
    assert!(table.is_logout("/logout"));
    assert!(table.is_logout("/logout/"));
    assert!(!table.is_logout("/dashboard"));
    assert!(!table.is_logout("/missing"));
}
