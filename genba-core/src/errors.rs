//! # Errors
//!
//! Structured errors for the Genba CRUD seam.
//! Core goals:
//! - consistent status codes + class names
//! - can be carried through anyhow::Error (record services, app container)
//! - transport-agnostic (an adapter crate decides how to serialize)

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for genba-core APIs.
pub type GenbaResult<T> = std::result::Result<T, AnyError>;

/// Error classes + status codes, trimmed to what the suite's
/// record-service seam can actually produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,       // 400
    NotAuthenticated, // 401
    Forbidden,        // 403
    NotFound,         // 404
    MethodNotAllowed, // 405
    Conflict,         // 409
    Unprocessable,    // 422
    GeneralError,     // 500
    NotImplemented,   // 501
    Unavailable,      // 503
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotAuthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::Conflict => 409,
            ErrorKind::Unprocessable => 422,
            ErrorKind::GeneralError => 500,
            ErrorKind::NotImplemented => 501,
            ErrorKind::Unavailable => 503,
        }
    }

    /// Error `name` (e.g. "NotFound")
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::MethodNotAllowed => "MethodNotAllowed",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unprocessable => "Unprocessable",
            ErrorKind::GeneralError => "GeneralError",
            ErrorKind::NotImplemented => "NotImplemented",
            ErrorKind::Unavailable => "Unavailable",
        }
    }

    /// Error `className` (kebab-cased)
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad-request",
            ErrorKind::NotAuthenticated => "not-authenticated",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not-found",
            ErrorKind::MethodNotAllowed => "method-not-allowed",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::GeneralError => "general-error",
            ErrorKind::NotImplemented => "not-implemented",
            ErrorKind::Unavailable => "unavailable",
        }
    }
}

/// A structured Genba error that can live inside `anyhow::Error`.
///
/// Fields:
/// - name / class_name / code (derived from kind)
/// - message
/// - data (optional JSON payload)
/// - errors (optional per-field validation detail)
#[derive(Debug)]
pub struct GenbaError {
    pub kind: ErrorKind,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub errors: Option<serde_json::Value>,
    pub source: Option<AnyError>,
}

impl GenbaError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            data: None,
            errors: None,
            source: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_errors(mut self, errors: serde_json::Value) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Convert into `anyhow::Error` so it flows through service calls.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Downcast an `anyhow::Error` to a `GenbaError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&GenbaError> {
        err.downcast_ref::<GenbaError>()
    }

    /// Turn any error into a GenbaError:
    /// - if it's already a GenbaError, keep it (lossless)
    /// - otherwise wrap as GeneralError
    pub fn normalize(err: AnyError) -> GenbaError {
        match err.downcast::<GenbaError>() {
            Ok(genba) => genba,
            Err(other) => {
                GenbaError::new(ErrorKind::GeneralError, other.to_string()).with_source(other)
            }
        }
    }

    /// A version suitable for returning to clients:
    /// keeps kind/message/data/errors, drops the inner `source`.
    pub fn sanitize_for_client(&self) -> GenbaError {
        GenbaError {
            kind: self.kind,
            message: self.message.clone(),
            data: self.data.clone(),
            errors: self.errors.clone(),
            source: None,
        }
    }

    /// JSON payload in the shape the suite's frontends expect.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut base = json!({
            "name": self.name(),
            "message": self.message,
            "code": self.code(),
            "className": self.class_name(),
        });

        if let Some(d) = &self.data {
            base["data"] = d.clone();
        }
        if let Some(e) = &self.errors {
            base["errors"] = e.clone();
        }
        base
    }

    // ---- Constructors ----

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, msg)
    }
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unprocessable, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, msg)
    }
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, msg)
    }
}

impl fmt::Display for GenbaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for GenbaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_keeps_structured_errors() {
        let err = GenbaError::not_found("no such customer").into_anyhow();
        let norm = GenbaError::normalize(err);
        assert_eq!(norm.kind, ErrorKind::NotFound);
        assert_eq!(norm.code(), 404);
    }

    #[test]
    fn normalize_wraps_plain_errors_as_general() {
        let norm = GenbaError::normalize(anyhow::anyhow!("boom"));
        assert_eq!(norm.kind, ErrorKind::GeneralError);
        assert!(norm.source.is_some());
    }

    #[test]
    fn json_shape_matches_frontend_contract() {
        let err = GenbaError::unprocessable("invalid record")
            .with_errors(json!({"name": ["required"]}));
        let body = err.to_json();
        assert_eq!(body["name"], "Unprocessable");
        assert_eq!(body["code"], 422);
        assert_eq!(body["className"], "unprocessable");
        assert_eq!(body["errors"], json!({"name": ["required"]}));
    }

    #[test]
    fn sanitize_drops_source() {
        let err = GenbaError::general_error("oops").with_source(anyhow::anyhow!("secret detail"));
        let safe = err.sanitize_for_client();
        assert!(safe.source.is_none());
        assert_eq!(safe.message, "oops");
    }
}
