//! Error types for the realmctl core crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error type for all realmctl core operations.
#[derive(Debug, Error)]
pub enum RealmctlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Cached credential content exists but cannot be parsed. Distinct from
    /// an absent cache, which is not an error at all.
    #[error("token cache decode error: {0}")]
    Decode(String),

    /// The identity service rejected or failed the credential exchange.
    #[error("token issuance failed with status {status}: {body}")]
    Issuance { status: StatusCode, body: String },

    #[error("admin API error: {0}")]
    Admin(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// A convenience Result alias that defaults to [`RealmctlError`].
pub type Result<T> = std::result::Result<T, RealmctlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = RealmctlError::Config("missing field".into());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = RealmctlError::from(io_err);
        assert!(matches!(err, RealmctlError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn serialization_error_display() {
        let err = RealmctlError::Serialization("invalid JSON".into());
        assert_eq!(err.to_string(), "serialization error: invalid JSON");
    }

    #[test]
    fn decode_error_display() {
        let err = RealmctlError::Decode("invalid JSON".into());
        assert_eq!(err.to_string(), "token cache decode error: invalid JSON");
    }

    #[test]
    fn issuance_error_display() {
        let err = RealmctlError::Issuance {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid_client".into(),
        };
        assert_eq!(
            err.to_string(),
            "token issuance failed with status 401 Unauthorized: invalid_client"
        );
    }

    #[test]
    fn not_found_display() {
        let err = RealmctlError::NotFound("user jdoe".into());
        assert_eq!(err.to_string(), "not found: user jdoe");
    }

    #[test]
    fn result_alias_works() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());

        let err: Result<i32> = Err(RealmctlError::Admin("bad".into()));
        assert!(err.is_err());
    }
}
