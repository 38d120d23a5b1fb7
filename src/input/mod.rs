pub mod json;

pub use crate::error::LoadError;
pub use json::{load_json, parse_json};
