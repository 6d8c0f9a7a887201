//! Typed Rust client for the PossiNote SMS and email API.
//!
//! The crate is layered: a domain layer of plain request/response types, a transport layer
//! for the JSON wire shapes, a client layer that owns authentication and maps HTTP outcomes
//! to [`PossinoteError`], and the service types ([`Sms`], [`Email`], [`Scheduling`]) with
//! one method per endpoint.
//!
//! ```rust,no_run
//! use possinote::{Possinote, PossinoteError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PossinoteError> {
//!     let client = Possinote::new("your-api-key");
//!     let sent = client.sms.send("+15551234567", "hello", "ACME").await?;
//!     println!("{:?}", sent.data);
//!
//!     match client.email.send("a@b.com", "Hi", "Body", None).await {
//!         Ok(resp) => println!("queued: {}", resp.success),
//!         Err(PossinoteError::RateLimit { .. }) => eprintln!("slow down"),
//!         Err(err) => return Err(err),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod service;
mod transport;

pub use client::{DEFAULT_BASE_URL, PossinoteClient, PossinoteClientBuilder, PossinoteError};
pub use domain::{
    ApiKey, ApiResponse, BulkSmsMessage, HistoryParams, ScheduleBulkEmail, ScheduleBulkSms,
    ScheduleEmail, ScheduleSms, SendBulkEmail, SendBulkSms, SendEmail, SendSms,
};
pub use reqwest::Method;
pub use service::{Email, Possinote, Scheduling, Sms};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
