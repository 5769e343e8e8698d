use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

pub const ENV_VAR_ERROR: i32 = 1;
pub const DATABASE_ERROR: i32 = 2;
pub const REQWEST_ERROR: i32 = 3;
pub const UPSTREAM_ERROR: i32 = 4;
pub const UNEXPECTED_ERROR: i32 = 5;
pub const INVALID_CONFIG_ERROR: i32 = 6;

pub const INVALID_INPUT_ERROR: i32 = 101;
pub const NOT_FOUND_ERROR: i32 = 102;
pub const INVALID_COORDINATE_FORMAT_ERROR: i32 = 110;
pub const PERMISSION_DENIED_ERROR: i32 = 111;
pub const POSITION_UNAVAILABLE_ERROR: i32 = 112;
pub const MALFORMED_POLYLINE_ERROR: i32 = 113;
pub const NO_ROUTE_FOUND_ERROR: i32 = 114;

impl Error {
    /// Failures that stop a route from being requested at all. These are
    /// surfaced to the user; everything the resolver sees is recovered.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self.code,
            INVALID_COORDINATE_FORMAT_ERROR | PERMISSION_DENIED_ERROR | POSITION_UNAVAILABLE_ERROR
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!("failed to decode json: {}", err);
        upstream_error()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            NOT_FOUND_ERROR => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: INVALID_INPUT_ERROR,
        message: "invalid input".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: NOT_FOUND_ERROR,
        message: "not found".into(),
    }
}

pub fn invalid_coordinate_format_error() -> Error {
    Error {
        code: INVALID_COORDINATE_FORMAT_ERROR,
        message: "location must be a \"latitude,longitude\" pair within valid ranges".into(),
    }
}

pub fn permission_denied_error() -> Error {
    Error {
        code: PERMISSION_DENIED_ERROR,
        message: "permission to access location was denied, enable location access".into(),
    }
}

pub fn position_unavailable_error() -> Error {
    Error {
        code: POSITION_UNAVAILABLE_ERROR,
        message: "current position is unavailable, check that location services are on".into(),
    }
}

pub fn malformed_polyline_error() -> Error {
    Error {
        code: MALFORMED_POLYLINE_ERROR,
        message: "malformed polyline".into(),
    }
}

pub fn no_route_found_error() -> Error {
    Error {
        code: NO_ROUTE_FOUND_ERROR,
        message: "no route found".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: ENV_VAR_ERROR,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!("database error: {:?}", err);

    Error {
        code: DATABASE_ERROR,
        message: "database error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::warn!("request failed: {}", err);

    Error {
        code: REQWEST_ERROR,
        message: "reqwest error".into(),
    }
}

/// The directions service answered, but not with anything usable.
pub fn upstream_error() -> Error {
    Error {
        code: UPSTREAM_ERROR,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: UNEXPECTED_ERROR,
        message: "unexpected error".into(),
    }
}

pub fn invalid_config_error(name: &str) -> Error {
    Error {
        code: INVALID_CONFIG_ERROR,
        message: format!("invalid configuration value for {}", name),
    }
}
