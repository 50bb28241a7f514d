mod client;
pub use client::ApiClient;
pub use client::Credentials;

mod payload;
pub use payload::LogEntry;
pub use payload::PayloadMode;

mod errors;
pub use errors::ClientError;
