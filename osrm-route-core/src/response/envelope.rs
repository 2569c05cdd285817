//! The `code` envelope around every route service response.
//!
//! A response tree ends in one of three ways:
//!
//! - `code` is `"Ok"`: routes and waypoints are decoded into a [`RouteResult`].
//! - `code` is anything else: the service refused the request and the code,
//!   message and raw tree come back as a [`ServiceFailure`]. This is data,
//!   not an error.
//! - `code` is missing or the tree breaks the contract: [`DecodeError`].

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use super::error::DecodeError;
use super::fields::{Decode, Fields, ROOT_PATH};
use super::route::Route;
use super::waypoint::Waypoint;

/// The success marker in the `code` field.
pub const CODE_OK: &str = "Ok";

/// A successfully decoded route response.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteResult {
    /// Always [`CODE_OK`].
    pub code: String,
    /// Routes ranked by the service, best first.
    pub routes: Vec<Route>,
    /// Snapped input coordinates, in input order.
    pub waypoints: Vec<Waypoint>,
    /// Timestamp of the map data, when the server reports it.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data_version: Option<String>,
}

impl Decode for RouteResult {
    const ENTITY: &'static str = "RouteResponse";

    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            code: fields.required("code")?,
            routes: fields.entity_list("routes")?,
            waypoints: fields.entity_list("waypoints")?,
            data_version: fields.optional("data_version")?,
        })
    }
}

/// The service answered with a code other than `"Ok"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route service returned {code}{}", message_suffix(.message.as_deref()))]
pub struct ServiceFailure {
    /// The failure code, e.g. `NoRoute`.
    pub code: String,
    /// Human-readable explanation, when the service sent one.
    pub message: Option<String>,
    /// The full response tree.
    pub payload: Value,
}

impl ServiceFailure {
    /// No route could be found between the coordinates.
    pub const NO_ROUTE: &'static str = "NoRoute";
    /// An input coordinate could not be snapped to the network.
    pub const NO_SEGMENT: &'static str = "NoSegment";
    /// The request URL could not be parsed.
    pub const INVALID_URL: &'static str = "InvalidUrl";
    /// The service name is not recognised.
    pub const INVALID_SERVICE: &'static str = "InvalidService";
    /// The API version is not supported.
    pub const INVALID_VERSION: &'static str = "InvalidVersion";
    /// The options are invalid for this service.
    pub const INVALID_OPTIONS: &'static str = "InvalidOptions";
    /// The query string is syntactically wrong.
    pub const INVALID_QUERY: &'static str = "InvalidQuery";
    /// The number of coordinates or their values are out of range.
    pub const INVALID_VALUE: &'static str = "InvalidValue";
    /// The request exceeds a server-side size limit.
    pub const TOO_BIG: &'static str = "TooBig";

    /// `true` when no route connects the coordinates.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        self.code == Self::NO_ROUTE
    }

    /// `true` when a coordinate is too far from any road.
    #[must_use]
    pub fn is_no_segment(&self) -> bool {
        self.code == Self::NO_SEGMENT
    }

    /// `true` for codes that blame the request itself rather than the data.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        [
            Self::INVALID_URL,
            Self::INVALID_SERVICE,
            Self::INVALID_VERSION,
            Self::INVALID_OPTIONS,
            Self::INVALID_QUERY,
            Self::INVALID_VALUE,
            Self::TOO_BIG,
        ]
        .contains(&self.code.as_str())
    }
}

fn message_suffix(message: Option<&str>) -> String {
    message.map(|text| format!(": {text}")).unwrap_or_default()
}

/// Outcome of decoding a structurally valid response.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResponse {
    /// The service found routes.
    Ok(RouteResult),
    /// The service refused or could not satisfy the request.
    Failed(ServiceFailure),
}

impl RouteResponse {
    /// The success payload, if any.
    #[must_use]
    pub const fn as_result(&self) -> Option<&RouteResult> {
        match self {
            Self::Ok(result) => Some(result),
            Self::Failed(_) => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&ServiceFailure> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// The `code` the service sent.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Ok(result) => &result.code,
            Self::Failed(failure) => &failure.code,
        }
    }

    /// Convert into a `Result` so service failures propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceFailure`] when the service did not answer `Ok`.
    pub fn into_result(self) -> Result<RouteResult, ServiceFailure> {
        match self {
            Self::Ok(result) => Ok(result),
            Self::Failed(failure) => Err(failure),
        }
    }
}

/// Decode a parsed route service response.
///
/// # Errors
///
/// Returns [`DecodeError::MissingCode`] when the tree has no `code`, and any
/// other [`DecodeError`] when a successful response breaks the contract.
///
/// # Examples
///
/// ```
/// use osrm_route_core::response::{RouteResponse, decode_route_response};
/// use serde_json::json;
///
/// let tree = json!({ "code": "NoRoute", "message": "Impossible route between points" });
/// let response = decode_route_response(&tree)?;
/// let failure = response.as_failure().expect("service failure");
/// assert!(failure.is_no_route());
/// assert_eq!(failure.message.as_deref(), Some("Impossible route between points"));
/// # Ok::<(), osrm_route_core::response::DecodeError>(())
/// ```
pub fn decode_route_response(tree: &Value) -> Result<RouteResponse, DecodeError> {
    let fields = Fields::new(RouteResult::ENTITY, tree, ROOT_PATH.to_owned())?;
    let code: String = fields
        .get("code")
        .ok_or(DecodeError::MissingCode)
        .and_then(|value| {
            value
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| fields.invalid("code", "expected a string"))
        })?;
    debug!("route response code {code}");

    if code != CODE_OK {
        let message = fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);
        warn!(
            "route service failure {code}: {}",
            message.as_deref().unwrap_or("no message")
        );
        return Ok(RouteResponse::Failed(ServiceFailure {
            code,
            message,
            payload: tree.clone(),
        }));
    }

    RouteResult::decode(&fields).map(RouteResponse::Ok)
}

/// Failure to turn raw bytes into a [`RouteResponse`].
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The JSON does not honour the route service contract.
    #[error(transparent)]
    Protocol(#[from] DecodeError),
}

/// Parse a raw response body and decode it.
///
/// # Errors
///
/// [`ResponseError::Syntax`] when `bytes` is not JSON,
/// [`ResponseError::Protocol`] when decoding fails.
pub fn decode_route_response_slice(bytes: &[u8]) -> Result<RouteResponse, ResponseError> {
    let tree: Value = serde_json::from_slice(bytes)?;
    Ok(decode_route_response(&tree)?)
}
