//! # record-form-api
//!
//! Client for a remote name/age record collection exposed over HTTP/JSON.
//!
//! | Operation | Method | Path | Request body | Response |
//! |-----------|--------|------|--------------|----------|
//! | list      | GET    | `/`    | none         | array of [`Record`] |
//! | create    | POST   | `/`    | [`RecordPayload`] | created [`Record`] |
//! | update    | PUT    | `/:id` | [`RecordPayload`] | updated [`Record`] |
//! | delete    | DELETE | `/:id` | none         | ignored |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use record_form_api::{Age, HttpRecordApi, RecordApi, RecordPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpRecordApi::new("https://example.com/api/")?;
//!
//!     let created = api
//!         .create(&RecordPayload::new("Ana", Age::parse("30")?))
//!         .await?;
//!
//!     for record in api.list().await? {
//!         println!("{} - {}", record.name, record.age);
//!     }
//!
//!     api.delete(&created.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Nothing is retried;
//! a non-2xx status surfaces as [`ApiError::HttpStatus`] with the body attached.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

pub use client::{normalize_base_url, HttpRecordApi, DEFAULT_BASE_URL};

pub use traits::RecordApi;

pub use types::{Age, InvalidAge, Record, RecordPayload};

pub use utils::log_sanitizer;
