use super::*;
use crate::net::types::{Credentials, Registration};
use crate::validation::login::LoginField;
use crate::validation::signup::SignupField;

#[test]
fn validate_returns_empty_map_for_valid_record() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert!(creds.validate().is_empty());
}

#[test]
fn validate_reports_every_failing_field() {
    let errors = Credentials::default().validate();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key(&LoginField::Email));
    assert!(errors.contains_key(&LoginField::Password));
}

#[test]
fn first_failing_rule_wins() {
    let creds = Credentials { email: String::new(), password: "x".to_owned() };
    assert_eq!(creds.validate_field(LoginField::Email), Some("Email is required"));
}

#[test]
fn same_as_rule_reads_the_other_field() {
    let mut reg = Registration { password: "password1".to_owned(), ..Registration::default() };
    reg.set_value(SignupField::ConfirmPassword, "password1".to_owned());
    assert_eq!(reg.validate_field(SignupField::ConfirmPassword), None);

    reg.set_value(SignupField::Password, "password2".to_owned());
    assert_eq!(reg.validate_field(SignupField::ConfirmPassword), Some("Passwords must match"));
}

#[test]
fn min_chars_counts_characters_not_bytes() {
    let seven = Registration { password: "pässwö!".to_owned(), ..Registration::default() };
    assert_eq!(
        seven.validate_field(SignupField::Password),
        Some("Password must be at least 8 characters")
    );

    let eight = Registration { password: "pässwörd".to_owned(), ..Registration::default() };
    assert_eq!(eight.validate_field(SignupField::Password), None);
}

#[test]
fn field_names_match_wire_keys() {
    let names: Vec<_> = Registration::FIELDS.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        ["fullName", "email", "dateOfBirth", "phoneNumber", "password", "confirmPassword"]
    );
}
