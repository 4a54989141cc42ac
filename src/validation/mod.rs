//! Declarative per-field validation rules.
//!
//! DESIGN
//! ======
//! A form record implements [`Schema`]: it names its fields, exposes their
//! current values and lists an ordered rule set per field. Validation walks
//! every field and records the first failing rule's message. Rule order is
//! significant: format rules also run on empty input (an empty string never
//! matches a pattern or meets a minimum length), so a field whose format
//! rule comes before `Required` reports the format message when blank.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod login;
pub mod signup;

use std::collections::BTreeMap;
use std::fmt::Debug;

use regex::Regex;

/// Field-name to message mapping produced by a failed validation.
pub type FieldErrors<F> = BTreeMap<F, &'static str>;

/// A form field identifier.
pub trait Field: Copy + Ord + Debug + Send + Sync + 'static {
    /// Wire/DOM name of the field (`fullName`, `email`, ...).
    fn name(self) -> &'static str;
}

/// One validation rule. Rules carry their own user-facing message.
#[derive(Clone, Copy)]
pub enum Rule<F: 'static> {
    Required(&'static str),
    Email(&'static str),
    Pattern(fn() -> &'static Regex, &'static str),
    MinChars(usize, &'static str),
    SameAs(F, &'static str),
}

impl<F: Field> Rule<F> {
    fn check<S: Schema<Field = F> + ?Sized>(&self, value: &str, record: &S) -> Result<(), &'static str> {
        let ok = match *self {
            Self::Required(_) => !value.is_empty(),
            Self::Email(_) => validator::validate_email(value),
            Self::Pattern(regex, _) => regex().is_match(value),
            Self::MinChars(min, _) => value.chars().count() >= min,
            Self::SameAs(other, _) => record.value(other) == value,
        };
        if ok { Ok(()) } else { Err(self.message()) }
    }

    fn message(&self) -> &'static str {
        match *self {
            Self::Required(msg)
            | Self::Email(msg)
            | Self::Pattern(_, msg)
            | Self::MinChars(_, msg)
            | Self::SameAs(_, msg) => msg,
        }
    }
}

/// A form record with declarative per-field rules.
pub trait Schema {
    type Field: Field;

    /// Every field, in display order.
    const FIELDS: &'static [Self::Field];

    /// Ordered rules for `field`; the first failure wins.
    fn rules(field: Self::Field) -> &'static [Rule<Self::Field>];

    fn value(&self, field: Self::Field) -> &str;

    fn set_value(&mut self, field: Self::Field, value: String);

    /// Validate a single field against the whole record.
    fn validate_field(&self, field: Self::Field) -> Option<&'static str> {
        let value = self.value(field);
        Self::rules(field).iter().find_map(|rule| rule.check(value, self).err())
    }

    /// Validate the whole record. An empty map means the record is valid.
    fn validate(&self) -> FieldErrors<Self::Field> {
        Self::FIELDS
            .iter()
            .filter_map(|&field| self.validate_field(field).map(|msg| (field, msg)))
            .collect()
    }
}
