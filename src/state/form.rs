//! Per-form field state and submission lifecycle.
//!
//! DESIGN
//! ======
//! `FormState` owns the values of one form instance, which fields the user
//! has visited, the current validation errors and a submit-level error slot
//! for request failures. Validation is synchronous: every edit, blur and
//! submit re-runs the record's schema, and any of them clears a stale
//! submit-level error. Errors are only surfaced for touched fields.
//!
//! Lifecycle:
//!
//! ```text
//! Idle --begin_submit (valid)--> Submitting --succeed--> Succeeded
//!   ^                               |
//!   +-------- fail / complete ------+
//! ```
//!
//! `Succeeded` keeps the submit control disabled while the page navigates
//! away.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeSet;

use crate::validation::{FieldErrors, Schema};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug)]
pub struct FormState<R: Schema> {
    values: R,
    touched: BTreeSet<R::Field>,
    errors: FieldErrors<R::Field>,
    submit_error: Option<String>,
    phase: FormPhase,
}

impl<R: Schema + Default> Default for FormState<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Schema> FormState<R> {
    pub fn new(values: R) -> Self {
        let errors = values.validate();
        Self { values, touched: BTreeSet::new(), errors, submit_error: None, phase: FormPhase::Idle }
    }

    pub fn values(&self) -> &R {
        &self.values
    }

    pub fn value(&self, field: R::Field) -> &str {
        self.values.value(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True while a request is in flight or after success; the submit
    /// control is disabled in both.
    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    pub fn is_touched(&self, field: R::Field) -> bool {
        self.touched.contains(&field)
    }

    /// Current validation error for `field`, touched or not.
    pub fn error(&self, field: R::Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Error to display for `field`: only once the field has been touched.
    pub fn visible_error(&self, field: R::Field) -> Option<&'static str> {
        if self.is_touched(field) { self.error(field) } else { None }
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Apply a keystroke. Fields stay editable while a request is in flight;
    /// the request keeps the values captured by `begin_submit`.
    pub fn set_field(&mut self, field: R::Field, value: String) {
        self.values.set_value(field, value);
        self.revalidate();
    }

    /// The user left `field`.
    pub fn blur(&mut self, field: R::Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Try to start a submission. Touches every field and validates; returns
    /// the values to send only if the form is idle and valid.
    pub fn begin_submit(&mut self) -> Option<R>
    where
        R: Clone,
    {
        if self.is_busy() {
            return None;
        }
        self.touched.extend(R::FIELDS.iter().copied());
        self.revalidate();
        if !self.is_valid() {
            log::debug!("submit blocked by {} field error(s)", self.errors.len());
            return None;
        }
        self.phase = FormPhase::Submitting;
        Some(self.values.clone())
    }

    /// The request finished and the page is navigating away.
    pub fn succeed(&mut self) {
        self.phase = FormPhase::Succeeded;
    }

    /// The request finished without an error and without leaving the page.
    pub fn complete(&mut self) {
        self.phase = FormPhase::Idle;
    }

    /// The request failed; show `message` and hand control back to the user.
    /// Field values are kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submit_error = Some(message.into());
        self.phase = FormPhase::Idle;
    }

    fn revalidate(&mut self) {
        self.errors = self.values.validate();
        self.submit_error = None;
    }
}
