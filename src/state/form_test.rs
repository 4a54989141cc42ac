use super::*;
use crate::net::types::{Credentials, Registration};
use crate::validation::login::LoginField;
use crate::validation::signup::SignupField;

fn filled_login() -> FormState<Credentials> {
    let mut form = FormState::<Credentials>::default();
    form.set_field(LoginField::Email, "a@b.com".to_owned());
    form.set_field(LoginField::Password, "x".to_owned());
    form
}

// =============================================================
// Touched / visible errors
// =============================================================

#[test]
fn new_form_is_idle_with_hidden_errors() {
    let form = FormState::<Credentials>::default();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.error(LoginField::Email), Some("Email is required"));
    assert_eq!(form.visible_error(LoginField::Email), None);
}

#[test]
fn blur_reveals_field_error() {
    let mut form = FormState::<Credentials>::default();
    form.blur(LoginField::Email);
    assert_eq!(form.visible_error(LoginField::Email), Some("Email is required"));
    assert_eq!(form.visible_error(LoginField::Password), None);
}

#[test]
fn typing_revalidates_every_change() {
    let mut form = FormState::<Credentials>::default();
    form.blur(LoginField::Email);
    form.set_field(LoginField::Email, "ab".to_owned());
    assert_eq!(form.visible_error(LoginField::Email), Some("Invalid email"));
    form.set_field(LoginField::Email, "a@b.com".to_owned());
    assert_eq!(form.visible_error(LoginField::Email), None);
}

#[test]
fn confirm_password_revalidates_when_password_changes() {
    let mut form = FormState::<Registration>::default();
    form.set_field(SignupField::Password, "password1".to_owned());
    form.set_field(SignupField::ConfirmPassword, "password1".to_owned());
    assert_eq!(form.error(SignupField::ConfirmPassword), None);

    form.set_field(SignupField::Password, "password2".to_owned());
    assert_eq!(form.error(SignupField::ConfirmPassword), Some("Passwords must match"));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn invalid_submit_is_blocked_and_touches_all_fields() {
    let mut form = FormState::<Credentials>::default();
    form.set_field(LoginField::Email, "ab.com".to_owned());
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.visible_error(LoginField::Email), Some("Invalid email"));
    assert_eq!(form.visible_error(LoginField::Password), Some("Password is required"));
}

#[test]
fn valid_submit_enters_submitting_with_values() {
    let mut form = filled_login();
    let sent = form.begin_submit().unwrap();
    assert_eq!(sent, Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() });
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(form.is_busy());
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut form = filled_login();
    assert!(form.begin_submit().is_some());
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn edits_are_accepted_while_submitting() {
    let mut form = filled_login();
    let sent = form.begin_submit().unwrap();
    form.set_field(LoginField::Email, "changed@b.com".to_owned());
    assert_eq!(form.value(LoginField::Email), "changed@b.com");
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(sent.email, "a@b.com");

    form.fail("Login failed");
    assert_eq!(form.value(LoginField::Email), "changed@b.com");
}

#[test]
fn blur_while_submitting_revalidates_edited_value() {
    let mut form = filled_login();
    form.begin_submit();
    form.set_field(LoginField::Email, "nope".to_owned());
    form.blur(LoginField::Email);
    assert_eq!(form.visible_error(LoginField::Email), Some("Invalid email"));
}

#[test]
fn failure_returns_to_idle_keeping_values() {
    let mut form = filled_login();
    form.begin_submit();
    form.fail("Invalid credentials");
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.submit_error(), Some("Invalid credentials"));
    assert_eq!(form.value(LoginField::Email), "a@b.com");
    assert_eq!(form.value(LoginField::Password), "x");
}

#[test]
fn resubmit_clears_previous_submit_error() {
    let mut form = filled_login();
    form.begin_submit();
    form.fail("Login failed");
    assert!(form.begin_submit().is_some());
    assert_eq!(form.submit_error(), None);
}

#[test]
fn editing_clears_submit_error() {
    let mut form = filled_login();
    form.begin_submit();
    form.fail("Login failed");
    form.set_field(LoginField::Password, "y".to_owned());
    assert_eq!(form.submit_error(), None);
}

#[test]
fn success_keeps_form_busy() {
    let mut form = filled_login();
    form.begin_submit();
    form.succeed();
    assert_eq!(form.phase(), FormPhase::Succeeded);
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn complete_returns_to_idle_without_error() {
    let mut form = filled_login();
    form.begin_submit();
    form.complete();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.submit_error(), None);
}
