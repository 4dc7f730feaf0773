use super::*;

#[test]
fn normalize_base_variants() {
    assert_eq!(normalize_base(""), "");
    assert_eq!(normalize_base("/"), "");
    assert_eq!(normalize_base("bookkee"), "/bookkee");
    assert_eq!(normalize_base("/bookkee/"), "/bookkee");
    assert_eq!(normalize_base("  /apps/bookkee// "), "/apps/bookkee");
}

#[test]
fn join_base_at_root_and_prefix() {
    assert_eq!(join_base("", "/"), "/");
    assert_eq!(join_base("", "/dashboard"), "/dashboard");
    assert_eq!(join_base("/bookkee", "/"), "/bookkee/");
    assert_eq!(join_base("/bookkee", "/dashboard"), "/bookkee/dashboard");
}

#[test]
fn strip_base_inside_mount() {
    assert_eq!(strip_base("/bookkee", "/bookkee"), Some("/"));
    assert_eq!(strip_base("/bookkee", "/bookkee/"), Some("/"));
    assert_eq!(strip_base("/bookkee", "/bookkee/dashboard"), Some("/dashboard"));
    assert_eq!(strip_base("", "/dashboard"), Some("/dashboard"));
}

#[test]
fn strip_base_outside_mount() {
    assert_eq!(strip_base("/bookkee", "/bookkeeper"), None);
    assert_eq!(strip_base("/bookkee", "/other/dashboard"), None);
}
