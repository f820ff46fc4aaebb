//! Backend access: the [`CarGateway`] seam, its reqwest implementation and
//! the busy-tracking wrapper.

mod errors;
mod http;
mod tracked;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::GatewayError;
pub use http::HttpGateway;
pub use tracked::TrackedGateway;
pub use traits::CarGateway;
