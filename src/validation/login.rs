//! Login form rules.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{Field, Rule, Schema};
use crate::net::types::Credentials;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl Field for LoginField {
    fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

const EMAIL_RULES: &[Rule<LoginField>] = &[Rule::Required(EMAIL_REQUIRED), Rule::Email(EMAIL_INVALID)];
const PASSWORD_RULES: &[Rule<LoginField>] = &[Rule::Required(PASSWORD_REQUIRED)];

impl Schema for Credentials {
    type Field = LoginField;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password];

    fn rules(field: LoginField) -> &'static [Rule<LoginField>] {
        match field {
            LoginField::Email => EMAIL_RULES,
            LoginField::Password => PASSWORD_RULES,
        }
    }

    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn set_value(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}
