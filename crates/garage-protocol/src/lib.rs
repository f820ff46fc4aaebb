//! garage-protocol: wire types for the car-record REST API.
//!
//! Field names on the wire follow the backend (`marka_model`,
//! `rok_produkcji`, `czy_na_chodzie`); Rust code uses `model`, `year` and
//! `operational`.

mod error_body;
mod types;

pub use error_body::{ErrorBody, ErrorDetail, ErrorItem};
pub use types::{
    CarFields, CarFilter, CarId, CarRecord, DEFAULT_YEAR, ListQuery, ParseCarIdError,
    ParseFilterError,
};
