//! Platform errors.

use reqwest::Response;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while talking to the backend platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform answered with a non-2xx status.
    #[error("platform rejected request with status {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// A row did not match its record schema.
    #[error("row failed schema validation: {0}")]
    Decode(#[from] serde_json::Error),

    /// The platform returned a 2xx response with an unexpected shape.
    #[error("unexpected response from platform: {0}")]
    UnexpectedResponse(String),
}

/// Classification of a [`PlatformError`], mirroring database error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    UniqueViolation,
    ForeignKeyViolation,
    NotNullViolation,
    CheckViolation,
    NotFound,
    Unauthorized,
    Other,
}

impl PlatformError {
    #[must_use]
    pub fn api(status: u16, code: &str, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: Some(code.to_string()),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlatformErrorKind {
        let Self::Api { status, code, .. } = self else {
            return PlatformErrorKind::Other;
        };

        match code.as_deref() {
            Some("23505") => PlatformErrorKind::UniqueViolation,
            Some("23503") => PlatformErrorKind::ForeignKeyViolation,
            Some("23502") => PlatformErrorKind::NotNullViolation,
            Some("23514" | "22P02") => PlatformErrorKind::CheckViolation,
            Some("PGRST116") => PlatformErrorKind::NotFound,
            Some("PGRST301" | "invalid_grant" | "invalid_credentials" | "bad_jwt") => {
                PlatformErrorKind::Unauthorized
            }
            _ => match status {
                401 | 403 => PlatformErrorKind::Unauthorized,
                404 => PlatformErrorKind::NotFound,
                _ => PlatformErrorKind::Other,
            },
        }
    }

    /// Build an error from a non-2xx platform response.
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_default();

        let code = body
            .error_code
            .or_else(|| match body.code {
                Some(Value::String(code)) => Some(code),
                _ => None,
            })
            .or_else(|| body.error_description.as_ref().and(body.error.clone()));

        let message = body
            .message
            .or(body.msg)
            .or(body.error_description)
            .or(body.error)
            .unwrap_or(text);

        Self::Api {
            status,
            code,
            message,
        }
    }
}

/// Union of the error bodies returned by the table, storage and auth APIs.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<Value>,
    error_code: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_postgres_codes() {
        let cases = [
            ("23505", PlatformErrorKind::UniqueViolation),
            ("23503", PlatformErrorKind::ForeignKeyViolation),
            ("23502", PlatformErrorKind::NotNullViolation),
            ("23514", PlatformErrorKind::CheckViolation),
            ("PGRST116", PlatformErrorKind::NotFound),
        ];

        for (code, kind) in cases {
            assert_eq!(
                PlatformError::api(409, code, "boom").kind(),
                kind,
                "code {code}"
            );
        }
    }

    #[test]
    fn falls_back_to_status_when_code_is_unknown() {
        let unauthorized = PlatformError::Api {
            status: 401,
            code: None,
            message: "JWT expired".to_string(),
        };

        let missing = PlatformError::Api {
            status: 404,
            code: Some("XX000".to_string()),
            message: "gone".to_string(),
        };

        assert_eq!(unauthorized.kind(), PlatformErrorKind::Unauthorized);
        assert_eq!(missing.kind(), PlatformErrorKind::NotFound);
    }

    #[test]
    fn non_api_errors_are_other() {
        let error = PlatformError::UnexpectedResponse("no rows".to_string());

        assert_eq!(error.kind(), PlatformErrorKind::Other);
    }
}
