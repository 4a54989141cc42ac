use super::*;
use crate::state::form::FormPhase;

fn submitting_form() -> FormState<Registration> {
    let mut form = FormState::new(Registration {
        full_name: "Ann Lee".to_owned(),
        email: "ann@example.com".to_owned(),
        date_of_birth: "04/23/91".to_owned(),
        phone_number: "+1 1234567890".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
    });
    assert!(form.begin_submit().is_some());
    form
}

#[test]
fn created_goes_to_login() {
    let mut form = submitting_form();
    assert_eq!(apply_signup_result(&mut form, Ok(SignupReply { status: 201 })), Some(Route::Login));
    assert_eq!(form.phase(), FormPhase::Succeeded);
}

#[test]
fn other_success_status_stays_on_form() {
    let mut form = submitting_form();
    assert_eq!(apply_signup_result(&mut form, Ok(SignupReply { status: 200 })), None);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.submit_error(), None);
}

#[test]
fn rejection_shows_server_message() {
    let mut form = submitting_form();
    let err = ApiError::Rejected { status: 409, message: Some("Email already registered".to_owned()) };
    assert_eq!(apply_signup_result(&mut form, Err(err)), None);
    assert_eq!(form.submit_error(), Some("Email already registered"));
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn timeout_uses_default_message_and_keeps_values() {
    let mut form = submitting_form();
    apply_signup_result(&mut form, Err(ApiError::Timeout));
    assert_eq!(form.submit_error(), Some(SIGNUP_FAILED));
    assert_eq!(form.value(SignupField::FullName), "Ann Lee");
}

#[test]
fn mismatched_passwords_never_reach_the_network() {
    let mut form = FormState::new(Registration {
        full_name: "Ann Lee".to_owned(),
        email: "ann@example.com".to_owned(),
        date_of_birth: "04/23/91".to_owned(),
        phone_number: "+1 1234567890".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "wrong-horse".to_owned(),
    });
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.visible_error(SignupField::ConfirmPassword), Some("Passwords must match"));
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Create Account");
    assert_eq!(submit_label(true), "Creating Account...");
}
