pub mod dtos;
pub mod errors;
pub mod handlers;

pub use errors::ApiError;
pub use handlers::{ApiDoc, get_config, openapi_json, submit, update_config};
