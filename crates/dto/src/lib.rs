//! Data transfer objects for API communication.
//!
//! Request and response types for the deck API, serializable via `serde`.
//! These types bridge the gap between the deck repository and JSON payloads;
//! they carry no rules of their own.
mod request;
mod response;

pub use request::*;
pub use response::*;
