//! REST helpers for the external auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls resolve to
//! [`ApiError::Unavailable`] since these endpoints are only reached from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`]. Pages turn it into a banner message via
//! [`ApiError::user_message`], so a rejected request shows the server's own
//! `message` and everything else shows the page's default text.
//!
//! CANCELLATION
//! ============
//! Requests run inside a [`RequestScope`] owned by the page that issued them.
//! When the page unmounts it cancels the scope; the in-flight request then
//! resolves to [`ApiError::Cancelled`] and the page leaves its state alone.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::pin::pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::future::{Either, select};
use serde::Serialize;

use super::types::{Credentials, ErrorBody, LoginReply, Registration, SignupReply};
use crate::config::ClientConfig;

pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    #[error("request cancelled")]
    Cancelled,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Banner text for this failure: the server's non-empty `message` for a
    /// rejection, `default` otherwise.
    #[must_use]
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            _ => default.to_owned(),
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build a rejection from a non-2xx reply, keeping the body's `message` if any.
pub(crate) fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());
    ApiError::Rejected { status, message }
}

/// Interpret a `/api/login` reply.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for non-2xx statuses and
/// [`ApiError::Decode`] when a 2xx body is not a JSON object.
pub fn parse_login_response(status: u16, body: &str) -> Result<LoginReply, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    if body.trim().is_empty() {
        return Ok(LoginReply::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `/api/signup` reply. Only the status is consumed.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for non-2xx statuses.
pub fn parse_signup_response(status: u16, body: &str) -> Result<SignupReply, ApiError> {
    if is_success(status) { Ok(SignupReply { status }) } else { Err(rejection(status, body)) }
}

// =============================================================================
// REQUEST SCOPE
// =============================================================================

/// Cancellation handle tying requests to the lifetime of the page that sent
/// them. Cheap to clone; all clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    inner: Arc<ScopeInner>,
}

#[derive(Debug, Default)]
struct ScopeInner {
    cancelled: AtomicBool,
    pending: Mutex<Option<oneshot::Sender<()>>>,
}

impl RequestScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the in-flight request (if any) and refuse future ones.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(tx) = pending.take() {
                let _ = tx.send(());
            }
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Register a new request, returning a future that resolves on cancel.
    /// A previous registration is dropped, which resolves its future too.
    fn begin(&self) -> Option<oneshot::Receiver<()>> {
        if self.is_cancelled() {
            return None;
        }
        let (tx, rx) = oneshot::channel();
        let mut pending = self.inner.pending.lock().ok()?;
        *pending = Some(tx);
        Some(rx)
    }

    /// Run `request` unless the scope is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] if the scope was cancelled before or
    /// while `request` ran, otherwise `request`'s own result.
    pub async fn run<T, F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let Some(cancelled) = self.begin() else {
            return Err(ApiError::Cancelled);
        };
        let request = pin!(request);
        match select(request, cancelled).await {
            Either::Left((result, _)) => {
                if self.is_cancelled() { Err(ApiError::Cancelled) } else { result }
            }
            Either::Right(_) => Err(ApiError::Cancelled),
        }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// `POST /api/login` with the form's credentials.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn login(config: &ClientConfig, scope: &RequestScope, credentials: &Credentials) -> Result<LoginReply, ApiError> {
    let (status, body) = scope.run(post_json(config, LOGIN_PATH, credentials)).await?;
    log::debug!("login replied with status {status}");
    parse_login_response(status, &body)
}

/// `POST /api/signup` with the full registration record.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn signup(config: &ClientConfig, scope: &RequestScope, registration: &Registration) -> Result<SignupReply, ApiError> {
    let (status, body) = scope.run(post_json(config, SIGNUP_PATH, registration)).await?;
    log::debug!("signup replied with status {status}");
    parse_signup_response(status, &body)
}

/// POST `payload` as JSON, returning the raw status and body text.
async fn post_json<T: Serialize>(config: &ClientConfig, path: &str, payload: &T) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(path);
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        let request = gloo_net::http::Request::post(&url)
            .abort_signal(signal.as_ref())
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let exchange = async {
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok((status, body))
        };

        let Some(timeout) = config.request_timeout else {
            return exchange.await;
        };
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let exchange = pin!(exchange);
        match select(exchange, gloo_timers::future::TimeoutFuture::new(millis)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                if let Some(controller) = controller {
                    controller.abort();
                }
                log::warn!("request to {url} timed out after {millis}ms");
                Err(ApiError::Timeout)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, path, payload);
        Err(ApiError::Unavailable)
    }
}
