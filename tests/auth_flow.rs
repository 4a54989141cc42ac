//! End-to-end auth flow over in-memory storage.
//!
//! Drives the same pure pieces the pages use: access check, login form,
//! response parsing, session persistence, welcome text and logout.

use portal::net::api::{ApiError, parse_login_response};
use portal::net::types::Credentials;
use portal::pages::home::welcome_message;
use portal::pages::login::{LOGIN_FAILED, apply_login_result};
use portal::routes::Route;
use portal::state::form::{FormPhase, FormState};
use portal::state::session::{Access, SessionStore, check_access, logout};
use portal::util::storage::{KeyValueStore, MemoryStorage};
use portal::validation::login::LoginField;

fn filled_login_form() -> FormState<Credentials> {
    let mut form = FormState::<Credentials>::default();
    form.set_field(LoginField::Email, "ann@example.com".to_owned());
    form.set_field(LoginField::Password, "hunter2".to_owned());
    form
}

#[test]
fn login_welcome_logout_round_trip() {
    let store = SessionStore::new(MemoryStorage::new());

    // Fresh visitor is bounced from the landing page.
    assert_eq!(check_access(&store), Access::Redirect(Route::Login));

    let mut form = filled_login_form();
    let sent = form.begin_submit().expect("valid credentials submit");
    assert_eq!(sent.email, "ann@example.com");
    assert!(form.is_busy());

    let reply = parse_login_response(200, r#"{"token":"t1","userName":"Ann"}"#);
    let next = apply_login_result(&mut form, reply, &store);
    assert_eq!(next, Some(Route::Home));
    assert_eq!(form.phase(), FormPhase::Succeeded);

    let snapshot = store.storage().snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get("token").map(String::as_str), Some("t1"));
    assert_eq!(snapshot.get("userName").map(String::as_str), Some("Ann"));

    let Access::Granted(session) = check_access(&store) else {
        panic!("session should be granted after login");
    };
    assert_eq!(welcome_message(&session), "Welcome, Ann!");

    assert_eq!(logout(&store), Route::Login);
    assert!(store.storage().snapshot().is_empty());
    assert_eq!(check_access(&store), Access::Redirect(Route::Login));
}

#[test]
fn rejected_login_shows_server_message_and_stores_nothing() {
    let store = SessionStore::new(MemoryStorage::new());
    let mut form = filled_login_form();
    form.begin_submit().expect("valid credentials submit");

    let reply = parse_login_response(401, r#"{"message":"Invalid credentials"}"#);
    assert!(matches!(reply, Err(ApiError::Rejected { status: 401, .. })));

    assert_eq!(apply_login_result(&mut form, reply, &store), None);
    assert_eq!(form.submit_error(), Some("Invalid credentials"));
    assert_eq!(form.value(LoginField::Email), "ann@example.com");
    assert!(store.storage().snapshot().is_empty());
}

#[test]
fn rejected_login_without_message_uses_default() {
    let store = SessionStore::new(MemoryStorage::new());
    let mut form = filled_login_form();
    form.begin_submit().expect("valid credentials submit");

    let reply = parse_login_response(500, "<html>oops</html>");
    apply_login_result(&mut form, reply, &store);

    assert_eq!(form.submit_error(), Some(LOGIN_FAILED));
    assert!(!form.is_busy());
}

#[test]
fn editing_after_failure_clears_the_banner() {
    let store = SessionStore::new(MemoryStorage::new());
    let mut form = filled_login_form();
    form.begin_submit().expect("valid credentials submit");
    apply_login_result(&mut form, parse_login_response(401, "{}"), &store);
    assert_eq!(form.submit_error(), Some(LOGIN_FAILED));

    form.set_field(LoginField::Password, "hunter3".to_owned());
    assert_eq!(form.submit_error(), None);
}

#[test]
fn partial_storage_reads_as_signed_out() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage);
    store
        .storage()
        .set_item("token", "t1")
        .expect("memory storage accepts writes");
    assert_eq!(check_access(&store), Access::Redirect(Route::Login));
}
