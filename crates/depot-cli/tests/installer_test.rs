use std::cell::RefCell;

use depot_cli::installer::{
    index_url_with_credentials, InstallSync, PackageManager, PackageManagerError,
    DEPENDENCIES_KEY,
};
use depot_cli::mutator::ManifestMutator;
use depot_core::credentials::Credentials;
use depot_core::manifest::{Manifest, Value};
use depot_core::store::ManifestStore;
use tempfile::tempdir;

#[derive(Default)]
struct FakeManager {
    calls: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl FakeManager {
    fn failing_on(package: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(package.to_owned()),
        }
    }

    fn run(&self, package: &str) -> Result<(), PackageManagerError> {
        self.calls.borrow_mut().push(package.to_owned());
        if self.fail_on.as_deref() == Some(package) {
            Err(PackageManagerError::Failed { status: 1 })
        } else {
            Ok(())
        }
    }
}

impl PackageManager for FakeManager {
    fn install(&self, package: &str, _index_url: &str) -> Result<(), PackageManagerError> {
        self.run(package)
    }

    fn uninstall(&self, package: &str, _skip_prompts: bool) -> Result<(), PackageManagerError> {
        self.run(package)
    }
}

fn credentials() -> Credentials {
    Credentials {
        account_id: "1234".to_owned(),
        email: "me@test.com".to_owned(),
        password: "password".to_owned(),
        registry_url: "https://api.depot.dev".to_owned(),
    }
}

fn seeded_store(dir: &std::path::Path) -> ManifestStore {
    let store = ManifestStore::in_dir(dir);
    store.save(&Manifest::new("test")).unwrap();
    store
}

fn dependencies(store: &ManifestStore) -> Vec<String> {
    match store.load().unwrap().get(DEPENDENCIES_KEY) {
        Some(Value::Array(items)) => items.clone(),
        None => Vec::new(),
        other => panic!("unexpected dependencies value: {other:?}"),
    }
}

fn names(packages: &[&str]) -> Vec<String> {
    packages.iter().map(|p| (*p).to_owned()).collect()
}

#[test]
fn successful_installs_are_recorded_in_order() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    let manager = FakeManager::default();

    let sync = InstallSync::new(&manager, &mutator);
    let outcomes = sync
        .install(&names(&["foo", "bar"]), &credentials(), false)
        .unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
    assert_eq!(dependencies(&store), vec!["foo", "bar"]);
}

#[test]
fn install_fails_fast_by_default() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    let manager = FakeManager::failing_on("bar");

    let sync = InstallSync::new(&manager, &mutator);
    let outcomes = sync
        .install(&names(&["foo", "bar", "baz"]), &credentials(), false)
        .unwrap();

    // baz is never attempted
    assert_eq!(*manager.calls.borrow(), vec!["foo", "bar"]);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[1].result.is_err());
    assert_eq!(dependencies(&store), vec!["foo"]);
}

#[test]
fn ignore_errors_continues_past_failures() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    let manager = FakeManager::failing_on("bar");

    let sync = InstallSync::new(&manager, &mutator);
    let outcomes = sync
        .install(&names(&["foo", "bar", "baz"]), &credentials(), true)
        .unwrap();

    assert_eq!(*manager.calls.borrow(), vec!["foo", "bar", "baz"]);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(dependencies(&store), vec!["foo", "baz"]);
}

#[test]
fn reinstalling_does_not_duplicate_the_dependency() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    let manager = FakeManager::default();

    let sync = InstallSync::new(&manager, &mutator);
    sync.install(&names(&["foo"]), &credentials(), false).unwrap();
    sync.install(&names(&["foo"]), &credentials(), false).unwrap();

    assert_eq!(dependencies(&store), vec!["foo"]);
}

#[test]
fn uninstall_removes_the_dependency() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    mutator.append(DEPENDENCIES_KEY, "foo").unwrap();
    let manager = FakeManager::default();

    let sync = InstallSync::new(&manager, &mutator);
    let outcomes = sync.uninstall(&names(&["foo"]), false, true).unwrap();

    assert!(outcomes[0].result.is_ok());
    assert_eq!(dependencies(&store), Vec::<String>::new());
}

#[test]
fn uninstalling_an_unrecorded_package_still_succeeds() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    let manager = FakeManager::default();

    let sync = InstallSync::new(&manager, &mutator);
    let outcomes = sync.uninstall(&names(&["foo"]), false, false).unwrap();

    assert!(outcomes[0].result.is_ok());
}

#[test]
fn index_url_embeds_credentials_after_the_scheme() {
    let url = index_url_with_credentials("https://api.depot.dev/simple", "me@test.com", "secret");
    assert_eq!(url, "https://me@test.com:secret@api.depot.dev/simple");
}
