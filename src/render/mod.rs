//! Rendering of built documents for the storage layer.

mod json;

pub use json::{to_json, JsonFormat};
