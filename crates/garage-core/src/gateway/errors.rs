use garage_protocol::CarId;

use crate::errors::GarageError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Car '{id}' not found")]
    NotFound { id: CarId, detail: Option<String> },

    #[error("Backend rejected the request ({status}): {detail}")]
    Validation { status: u16, detail: String },

    #[error("Backend returned HTTP {status}{}", format_detail(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Request to backend failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode backend response: {message}")]
    Decode { message: String },
}

fn format_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl GatewayError {
    /// Human-readable detail carried by the backend's error payload, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            GatewayError::Validation { detail, .. } => Some(detail),
            GatewayError::NotFound { detail, .. } | GatewayError::Status { detail, .. } => {
                detail.as_deref()
            }
            GatewayError::Transport { .. } | GatewayError::Decode { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}

impl GarageError for GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            GatewayError::NotFound { .. } => "CAR_NOT_FOUND",
            GatewayError::Validation { .. } => "CAR_VALIDATION_FAILED",
            GatewayError::Status { .. } => "BACKEND_STATUS_ERROR",
            GatewayError::Transport { .. } => "BACKEND_UNREACHABLE",
            GatewayError::Decode { .. } => "BACKEND_DECODE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            GatewayError::NotFound { .. } | GatewayError::Validation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = GatewayError::NotFound {
            id: CarId::new(5),
            detail: None,
        };
        assert_eq!(err.to_string(), "Car '5' not found");
        assert_eq!(err.error_code(), "CAR_NOT_FOUND");
        assert!(err.is_user_error());
        assert!(err.is_not_found());
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_not_found_keeps_backend_detail() {
        let err = GatewayError::NotFound {
            id: CarId::new(5),
            detail: Some("Car not found".to_string()),
        };
        assert_eq!(err.detail(), Some("Car not found"));
        assert_eq!(err.to_string(), "Car '5' not found");
    }

    #[test]
    fn test_validation_exposes_detail() {
        let err = GatewayError::Validation {
            status: 422,
            detail: "rok_produkcji invalid".to_string(),
        };
        assert_eq!(err.detail(), Some("rok_produkcji invalid"));
        assert_eq!(
            err.to_string(),
            "Backend rejected the request (422): rok_produkcji invalid"
        );
    }

    #[test]
    fn test_status_display_with_and_without_detail() {
        let with = GatewayError::Status {
            status: 500,
            detail: Some("boom".to_string()),
        };
        let without = GatewayError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(with.to_string(), "Backend returned HTTP 500: boom");
        assert_eq!(without.to_string(), "Backend returned HTTP 502");
        assert!(!with.is_user_error());
    }

    #[test]
    fn test_decode_is_not_user_error() {
        let err = GatewayError::Decode {
            message: "expected value".to_string(),
        };
        assert_eq!(err.error_code(), "BACKEND_DECODE_ERROR");
        assert!(!err.is_user_error());
    }
}
