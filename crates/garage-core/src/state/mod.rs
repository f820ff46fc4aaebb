//! Command/event layer between the views and the backend gateway.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::CarStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
