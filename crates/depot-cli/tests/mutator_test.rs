use depot_cli::mutator::{ManifestMutator, MutateError, SetOutcome};
use depot_cli::prompt::Confirm;
use depot_core::manifest::{Manifest, ManifestError, Value};
use depot_core::store::ManifestStore;
use tempfile::tempdir;

struct Always(bool);

impl Confirm for Always {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

fn seeded_store(dir: &std::path::Path) -> ManifestStore {
    let store = ManifestStore::in_dir(dir);
    let mut manifest = Manifest::new("test");
    manifest.append("array", "grr").unwrap();
    store.save(&manifest).unwrap();
    store
}

#[test]
fn set_writes_and_persists() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);

    let outcome = mutator
        .set("foo", Value::String("bar".to_owned()), &Always(false))
        .unwrap();
    assert_eq!(outcome, SetOutcome::Applied);
    assert_eq!(
        store.load().unwrap().get("foo"),
        Some(&Value::String("bar".to_owned()))
    );
}

#[test]
fn declining_the_array_overwrite_changes_nothing() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let before = store.load().unwrap();
    let mutator = ManifestMutator::new(&store);

    let outcome = mutator
        .set("array", Value::String("scalar".to_owned()), &Always(false))
        .unwrap();
    assert_eq!(outcome, SetOutcome::Cancelled);
    assert_eq!(store.load().unwrap(), before);
}

#[test]
fn accepting_the_array_overwrite_replaces_it() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);

    let outcome = mutator
        .set("array", Value::String("scalar".to_owned()), &Always(true))
        .unwrap();
    assert_eq!(outcome, SetOutcome::Applied);
    assert_eq!(
        store.load().unwrap().get("array"),
        Some(&Value::String("scalar".to_owned()))
    );
}

#[test]
fn scalar_set_does_not_prompt() {
    struct Panics;
    impl Confirm for Panics {
        fn confirm(&self, _prompt: &str) -> bool {
            panic!("no confirmation expected")
        }
    }

    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);
    mutator
        .set("version", Value::String("1.0.0".to_owned()), &Panics)
        .unwrap();
}

#[test]
fn append_persists_each_call() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);

    mutator.append("array", "bar").unwrap();
    mutator.append("array", "bar").unwrap();
    assert_eq!(
        store.load().unwrap().get("array"),
        Some(&Value::Array(vec!["grr".to_owned(), "bar".to_owned()]))
    );
}

#[test]
fn remove_of_absent_value_leaves_the_file_untouched() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let before = store.load().unwrap();
    let mutator = ManifestMutator::new(&store);

    let err = mutator.remove("array", "missing").unwrap_err();
    assert!(matches!(
        err,
        MutateError::Manifest(ManifestError::ValueNotFound { .. })
    ));
    assert_eq!(store.load().unwrap(), before);
}

#[test]
fn append_to_scalar_key_is_rejected() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let mutator = ManifestMutator::new(&store);

    let err = mutator.append("name", "bar").unwrap_err();
    assert!(matches!(
        err,
        MutateError::Manifest(ManifestError::NotAnArray { .. })
    ));
}
