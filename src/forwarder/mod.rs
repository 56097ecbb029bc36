pub mod client;
pub mod errors;
pub mod submission;

pub use client::WebhookClient;
pub use errors::{ForwardError, SubmitError};
pub use submission::{ForwardSuccess, SubmissionForwarder};
