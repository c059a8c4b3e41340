//! Thin Rust client for the Semaphore SMS gateway HTTP API.
//!
//! The crate only assembles and authenticates requests: a domain layer of small
//! validated types, a transport layer that knows the endpoint paths and parameter
//! names, and a client layer that dispatches and hands back the raw response body.
//!
//! ```rust,no_run
//! use semaphore_sms::{ApiKey, SemaphoreClient, SendMessage, SenderName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), semaphore_sms::SemaphoreError> {
//!     let client = SemaphoreClient::builder(ApiKey::new("...")?)
//!         .sender_name(SenderName::new("MYBRAND")?)
//!         .build()?;
//!     let request = SendMessage::new(vec!["09171234567", "09181234567"], "hello")?;
//!     let body = client.send_message(request).await?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{SemaphoreClient, SemaphoreClientBuilder, SemaphoreError};
pub use domain::{
    ApiKey, DEFAULT_LIST_LIMIT, DEFAULT_LIST_PAGE, MessageId, MessageListOptions, RawBody,
    Recipients, SEND_MESSAGE_MAX_RECIPIENTS, SendMessage, SenderName, ValidationError,
};
