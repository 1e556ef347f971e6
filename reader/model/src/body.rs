//! The request and response body edges.
//!
//! The HTTP layer owns requests, headers and transport. It calls into the
//! model layer exactly twice: [`to_vec`] before sending a request body and
//! [`from_slice`] (or [`decode_response`], which picks the shape from the
//! status code) after receiving a response body.

use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::BodyConfig;
use crate::error::BodyError;
use crate::wire::Wire;

/// Content type of every body this layer produces or accepts.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Parses a response body into `T`.
///
/// An empty (or whitespace-only) body is read as JSON `null`.
///
/// ## Errors
///
/// Returns [`BodyError::JsonParse`] for malformed JSON and
/// [`BodyError::Model`] when the value does not fit `T`.
///
/// ## Examples
///
/// ```
/// use reader_model::body;
///
/// let ports: Vec<u8> = body::from_slice(b"[1, 2, 3]").unwrap();
/// assert_eq!(ports, vec![1, 2, 3]);
///
/// let nothing: () = body::from_slice(b"").unwrap();
/// assert_eq!(nothing, ());
/// ```
pub fn from_slice<T: Wire>(body: &[u8]) -> Result<T, BodyError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(body)?
    };
    Ok(T::from_wire(&value)?)
}

/// Produces a request body from `value`.
///
/// ## Errors
///
/// Returns [`BodyError::Encode`] if JSON encoding fails.
pub fn to_vec<T: Wire>(value: &T, config: &BodyConfig) -> Result<Bytes, BodyError> {
    let wire = value.to_wire();
    let encoded = if config.is_pretty() {
        serde_json::to_vec_pretty(&wire)
    } else {
        serde_json::to_vec(&wire)
    };
    encoded.map(Bytes::from).map_err(BodyError::Encode)
}

/// Which response shape a status code selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Decode the success shape.
    Success,
    /// Decode the error shape.
    Failure,
    /// No shape is known for this status.
    Unexpected,
}

/// Status codes an endpoint documents, split by response shape.
///
/// ## Examples
///
/// ```
/// use reader_model::body::{Route, StatusRoutes};
///
/// const ROUTES: StatusRoutes = StatusRoutes::new(&[200], &[400, 500]);
/// assert_eq!(ROUTES.route(200), Route::Success);
/// assert_eq!(ROUTES.route(500), Route::Failure);
/// assert_eq!(ROUTES.route(302), Route::Unexpected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRoutes {
    success: &'static [u16],
    failure: &'static [u16],
}

impl StatusRoutes {
    /// Creates a route table.
    pub const fn new(success: &'static [u16], failure: &'static [u16]) -> Self {
        Self { success, failure }
    }

    /// Selects the shape for a status code.
    pub fn route(&self, status: u16) -> Route {
        if self.success.contains(&status) {
            Route::Success
        } else if self.failure.contains(&status) {
            Route::Failure
        } else {
            Route::Unexpected
        }
    }
}

/// A decoded response.
///
/// ## Type Parameters
///
/// - `S`: the success shape.
/// - `E`: the error shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<S, E> {
    /// A documented success status with its decoded body.
    Success(S),
    /// A documented failure status with its decoded error body.
    Failure {
        /// The HTTP status code.
        status: u16,
        /// The decoded error body.
        error: E,
    },
    /// An undocumented status; the body is left raw.
    Unexpected {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: Bytes,
    },
}

impl<S, E> Outcome<S, E> {
    /// Returns `true` for a decoded success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Attempt to get the success value.
    pub fn as_success(&self) -> Option<&S> {
        match self {
            Self::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Attempt to get the error body.
    pub fn as_failure(&self) -> Option<&E> {
        match self {
            Self::Failure { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Convert into the success value, returning `Err(self)` otherwise.
    pub fn into_success(self) -> Result<S, Self> {
        match self {
            Self::Success(v) => Ok(v),
            other => Err(other),
        }
    }
}

/// Decodes a response body into the shape its status code selects.
///
/// ## Errors
///
/// Returns a parse or model error when the body does not fit the selected
/// shape, and [`BodyError::UnexpectedStatus`] for an undocumented status when
/// `config` asks for it.
#[instrument(
    name = "decode_response",
    skip(routes, body, config),
    fields(http.status_code = status, body.len = body.len())
)]
pub fn decode_response<S: Wire, E: Wire>(
    routes: &StatusRoutes,
    status: u16,
    body: Bytes,
    config: &BodyConfig,
) -> Result<Outcome<S, E>, BodyError> {
    let route = routes.route(status);
    debug!(?route, "routing response body");
    match route {
        Route::Success => Ok(Outcome::Success(from_slice(&body)?)),
        Route::Failure => Ok(Outcome::Failure {
            status,
            error: from_slice(&body)?,
        }),
        Route::Unexpected if config.raises_on_unexpected_status() => {
            Err(BodyError::UnexpectedStatus { status, body })
        }
        Route::Unexpected => {
            warn!(status, "unexpected status, returning raw body");
            Ok(Outcome::Unexpected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    const ROUTES: StatusRoutes = StatusRoutes::new(&[200, 204], &[400, 403, 500]);

    #[test]
    fn test_from_slice_rejects_malformed_json() {
        let err = from_slice::<Value>(b"{\"a\":").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_from_slice_reports_model_errors() {
        let err = from_slice::<String>(b"42").unwrap_err();
        assert!(err.as_model_error().is_some());
    }

    #[test]
    fn test_to_vec_compact_and_pretty() {
        let value = json!({"a": [1, 2]});
        let compact = to_vec(&value, &BodyConfig::default()).unwrap();
        assert_eq!(&compact[..], br#"{"a":[1,2]}"#);

        let pretty = to_vec(&value, &BodyConfig::default().pretty(true)).unwrap();
        assert!(pretty.contains(&b'\n'));
        assert_eq!(serde_json::from_slice::<Value>(&pretty).unwrap(), value);
    }

    #[test]
    fn test_success_route() {
        let outcome: Outcome<Vec<u8>, String> =
            decode_response(&ROUTES, 200, Bytes::from_static(b"[1]"), &BodyConfig::default())
                .unwrap();
        assert_eq!(outcome.as_success(), Some(&vec![1]));
    }

    #[test]
    fn test_empty_success_body() {
        let outcome: Outcome<(), Value> =
            decode_response(&ROUTES, 204, Bytes::new(), &BodyConfig::default()).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn test_failure_route() {
        let outcome: Outcome<(), Value> = decode_response(
            &ROUTES,
            403,
            Bytes::from_static(br#"{"message":"forbidden"}"#),
            &BodyConfig::default(),
        )
        .unwrap();
        assert_eq!(
            outcome.as_failure(),
            Some(&json!({"message": "forbidden"}))
        );
    }

    #[test]
    #[traced_test]
    fn test_unexpected_status_returns_raw_body_by_default() {
        let outcome: Outcome<(), Value> = decode_response(
            &ROUTES,
            302,
            Bytes::from_static(b"moved"),
            &BodyConfig::default(),
        )
        .unwrap();
        assert_eq!(
            outcome,
            Outcome::Unexpected {
                status: 302,
                body: Bytes::from_static(b"moved"),
            }
        );
        assert!(logs_contain("unexpected status"));
    }

    #[test]
    fn test_unexpected_status_raises_when_configured() {
        let config = BodyConfig::default().raise_on_unexpected_status(true);
        let err = decode_response::<(), Value>(&ROUTES, 302, Bytes::from_static(b"moved"), &config)
            .unwrap_err();
        assert_eq!(err.status_code(), Some(302));
    }

    #[test]
    fn test_success_body_mismatch_is_an_error() {
        let err = decode_response::<Vec<u8>, Value>(
            &ROUTES,
            200,
            Bytes::from_static(br#"{"not":"a list"}"#),
            &BodyConfig::default(),
        )
        .unwrap_err();
        assert!(err.as_model_error().is_some());
    }
}
