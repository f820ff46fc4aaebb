//! garage-core: Core library for the car-record client
//!
//! This library holds everything behind the `garage` front end: talking to
//! the REST backend, tracking busy/notification state, and the headless
//! views that drive listing, editing and deleting records.
//!
//! # Main Entry Points
//!
//! - [`views`] - List view, record form, routing and the root [`App`]
//! - [`gateway`] - Backend access over HTTP
//! - [`state`] - Command dispatch between views and gateway
//! - [`shell`] - Busy flag and notification slot
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod gateway;
pub mod logging;
pub mod shell;
pub mod state;
pub mod views;

// Re-export commonly used types at crate root for convenience
pub use config::GarageConfig;
pub use errors::{ConfigError, GarageError};
pub use gateway::{CarGateway, GatewayError, HttpGateway, TrackedGateway};
pub use shell::{BusyGuard, BusyTracker, Notification, NotificationSlot, Shell};
pub use state::{CarStore, Command, DispatchError, Event, Store};
pub use views::{
    ActiveView, App, CarTile, FieldEdit, FieldError, FormMode, FormView, ListView, LoadPhase,
    Route, RouteError, SubmitOutcome,
};

// Re-export logging initialization
pub use logging::init_logging;
