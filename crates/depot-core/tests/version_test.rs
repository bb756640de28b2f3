use depot_core::version::{bump, BumpKind, VersionError};

#[test]
fn patch_bump_increments_last_component() {
    assert_eq!(bump("0.1.0", BumpKind::Patch).unwrap(), "0.1.1");
}

#[test]
fn minor_bump_leaves_patch_untouched() {
    assert_eq!(bump("0.1.1", BumpKind::Minor).unwrap(), "0.2.1");
}

#[test]
fn major_bump_leaves_lower_components_untouched() {
    assert_eq!(bump("0.2.1", BumpKind::Major).unwrap(), "1.2.1");
}

#[test]
fn non_semver_version_is_rejected() {
    assert_eq!(
        bump("x", BumpKind::Patch).unwrap_err(),
        VersionError::NotSemver("x".to_owned())
    );
}

#[test]
fn two_component_version_is_rejected() {
    assert!(matches!(
        bump("1.2", BumpKind::Minor),
        Err(VersionError::NotSemver(_))
    ));
}
