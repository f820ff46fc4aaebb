//! Headless view models: the list, the record form, routing and the root app.
//!
//! Views own their state and are driven through `async fn(&mut self, ..)`.
//! Backend failures never surface as `Err`; they become notifications on
//! the shell and, for the form, an inline error.

mod app;
mod form;
mod list;
pub mod messages;
mod route;

pub use app::{ActiveView, App};
pub use form::{FieldEdit, FieldError, FormMode, FormView, SubmitOutcome};
pub use list::{CarTile, ListView, LoadPhase};
pub use route::{Route, RouteError};
