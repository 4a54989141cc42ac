//! Wire types for the external auth API.
//!
//! Form records double as request payloads, so their serde names are the
//! exact JSON keys the API expects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form values, posted to `/api/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup form values, posted to `/api/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Successful `/api/login` body. Both fields are optional on the wire; the
/// login page decides what a partial reply means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Outcome of a 2xx `/api/signup` call. Only the status code is consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignupReply {
    pub status: u16,
}

impl SignupReply {
    pub const CREATED: u16 = 201;

    #[must_use]
    pub fn created(self) -> bool {
        self.status == Self::CREATED
    }
}

/// Body of a non-2xx reply from either endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
