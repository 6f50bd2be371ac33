//! API key authentication for mutating endpoints

pub mod api_key;

pub use api_key::{require_api_key, ApiKeyError, API_KEY_HEADER};
