use std::fmt;
use std::str::FromStr;

use garage_protocol::{CarId, ParseCarIdError};

use crate::errors::GarageError;

/// Client-side navigable paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/add`
    Add,
    /// `/edit/{id}`
    Edit(CarId),
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown path '{path}'. Valid: /, /add, /edit/<id>")]
    UnknownPath { path: String },

    #[error("Invalid record id in path '{path}': {source}")]
    InvalidId {
        path: String,
        #[source]
        source: ParseCarIdError,
    },
}

impl GarageError for RouteError {
    fn error_code(&self) -> &'static str {
        match self {
            RouteError::UnknownPath { .. } => "UNKNOWN_ROUTE",
            RouteError::InvalidId { .. } => "INVALID_ROUTE_ID",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Ok(Route::List),
            "/add" => Ok(Route::Add),
            _ => match trimmed.strip_prefix("/edit/") {
                Some(raw) if !raw.is_empty() && !raw.contains('/') => raw
                    .parse::<CarId>()
                    .map(Route::Edit)
                    .map_err(|source| RouteError::InvalidId {
                        path: path.to_string(),
                        source,
                    }),
                _ => Err(RouteError::UnknownPath {
                    path: path.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str("/"),
            Route::Add => f.write_str("/add"),
            Route::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}
