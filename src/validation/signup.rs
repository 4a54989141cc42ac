//! Signup form rules.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use once_cell::sync::Lazy;
use regex::Regex;

use super::login::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED};
use super::{Field, Rule, Schema};
use crate::net::types::Registration;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required";
pub const DATE_OF_BIRTH_INVALID: &str = "Invalid date format (MM/DD/YY)";
pub const PHONE_NUMBER_REQUIRED: &str = "Phone number is required";
pub const PHONE_NUMBER_INVALID: &str = "Invalid phone number format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm password is required";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";

/// Minimum signup password length, in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    FullName,
    Email,
    DateOfBirth,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

impl Field for SignupField {
    fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::DateOfBirth => "dateOfBirth",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// `MM/DD/YY` with month 01-12 and day 01-31.
fn date_of_birth_regex() -> &'static Regex {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{2}$").expect("valid regex"));
    &RE
}

/// `+` country code (1-3 digits), optional whitespace, 6-14 digit number.
fn phone_number_regex() -> &'static Regex {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]{1,3}\s?[0-9]{6,14}$").expect("valid regex"));
    &RE
}

const FULL_NAME_RULES: &[Rule<SignupField>] = &[Rule::Required(FULL_NAME_REQUIRED)];
const EMAIL_RULES: &[Rule<SignupField>] = &[Rule::Required(EMAIL_REQUIRED), Rule::Email(EMAIL_INVALID)];
const DATE_OF_BIRTH_RULES: &[Rule<SignupField>] = &[
    Rule::Required(DATE_OF_BIRTH_REQUIRED),
    Rule::Pattern(date_of_birth_regex, DATE_OF_BIRTH_INVALID),
];
// Format checks lead for these three, so an empty phone or password reports
// the format message and an empty confirmation only reads as "required" when
// the password is empty too.
const PHONE_NUMBER_RULES: &[Rule<SignupField>] = &[
    Rule::Pattern(phone_number_regex, PHONE_NUMBER_INVALID),
    Rule::Required(PHONE_NUMBER_REQUIRED),
];
const PASSWORD_RULES: &[Rule<SignupField>] = &[
    Rule::MinChars(PASSWORD_MIN_CHARS, PASSWORD_TOO_SHORT),
    Rule::Required(PASSWORD_REQUIRED),
];
const CONFIRM_PASSWORD_RULES: &[Rule<SignupField>] = &[
    Rule::SameAs(SignupField::Password, PASSWORDS_MUST_MATCH),
    Rule::Required(CONFIRM_PASSWORD_REQUIRED),
];

impl Schema for Registration {
    type Field = SignupField;

    const FIELDS: &'static [SignupField] = &[
        SignupField::FullName,
        SignupField::Email,
        SignupField::DateOfBirth,
        SignupField::PhoneNumber,
        SignupField::Password,
        SignupField::ConfirmPassword,
    ];

    fn rules(field: SignupField) -> &'static [Rule<SignupField>] {
        match field {
            SignupField::FullName => FULL_NAME_RULES,
            SignupField::Email => EMAIL_RULES,
            SignupField::DateOfBirth => DATE_OF_BIRTH_RULES,
            SignupField::PhoneNumber => PHONE_NUMBER_RULES,
            SignupField::Password => PASSWORD_RULES,
            SignupField::ConfirmPassword => CONFIRM_PASSWORD_RULES,
        }
    }

    fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::FullName => &self.full_name,
            SignupField::Email => &self.email,
            SignupField::DateOfBirth => &self.date_of_birth,
            SignupField::PhoneNumber => &self.phone_number,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set_value(&mut self, field: SignupField, value: String) {
        let slot = match field {
            SignupField::FullName => &mut self.full_name,
            SignupField::Email => &mut self.email,
            SignupField::DateOfBirth => &mut self.date_of_birth,
            SignupField::PhoneNumber => &mut self.phone_number,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}
