use depot_core::entities::{find_package, find_token, find_user, Package, Token, User};

fn packages() -> Vec<Package> {
    serde_json::from_value(serde_json::json!([
        {"name": "foo", "uuid": "pkg-1"},
        {"name": "bar", "uuid": "pkg-2"},
    ]))
    .unwrap()
}

fn users() -> Vec<User> {
    serde_json::from_value(serde_json::json!([
        {"email": "dev@example.com", "hash_id": "user-1"},
    ]))
    .unwrap()
}

#[test]
fn find_package_matches_exact_name() {
    let packages = packages();
    let found = find_package(&packages, "foo").unwrap();
    assert_eq!(found.uuid, "pkg-1");
    assert_eq!(found.to_string(), "foo");
}

#[test]
fn find_package_over_empty_list_misses() {
    assert!(find_package(&[], "foo").is_none());
}

#[test]
fn find_user_matches_exact_email() {
    let users = users();
    assert_eq!(find_user(&users, "dev@example.com").unwrap().hash_id, "user-1");
    assert!(find_user(&users, "other@example.com").is_none());
}

#[test]
fn find_token_requires_both_refs_to_match() {
    let packages = packages();
    let users = users();
    let tokens: Vec<Token> = serde_json::from_value(serde_json::json!([
        {"uuid": "tok-1", "package": "pkg-2", "user": "user-1"},
        {"uuid": "tok-2", "package": "pkg-1", "user": "user-1"},
    ]))
    .unwrap();

    let package = find_package(&packages, "foo").unwrap();
    let user = find_user(&users, "dev@example.com").unwrap();
    assert_eq!(find_token(&tokens, package, user).unwrap().uuid, "tok-2");

    let other_tokens: Vec<Token> = Vec::new();
    assert!(find_token(&other_tokens, package, user).is_none());
}

#[test]
fn token_ownership_compares_user_ref() {
    let token = Token {
        uuid: "tok-1".to_owned(),
        package: "pkg-1".to_owned(),
        user: "owner-1".to_owned(),
    };
    assert!(token.is_owned_by("owner-1"));
    assert!(!token.is_owned_by("user-2"));
}
