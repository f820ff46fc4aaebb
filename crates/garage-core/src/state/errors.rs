use crate::errors::GarageError;
use crate::gateway::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl DispatchError {
    /// Backend-provided detail suitable for inline display.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DispatchError::Gateway(e) => e.detail(),
        }
    }
}

impl GarageError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Gateway(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Gateway(e) => e.is_user_error(),
        }
    }
}
