//! NetBox REST API Client
//!
//! A read-only Rust client library for the NetBox REST API, built for
//! dynamic-inventory tooling. Provides type-safe models and query methods
//! for the DCIM and IPAM endpoints an inventory needs: devices, device
//! detail, interfaces, and interface-bound IP addresses.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::NetBoxClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // List devices (first page, as returned by NetBox)
//! let devices = client.query_devices(&[], false).await?;
//!
//! // Enumerate a device's interfaces
//! for device in &devices {
//!     let id = device.id.to_string();
//!     let interfaces = client.query_interfaces(&[("device_id", &id)], false).await?;
//!     println!("{}: {} interfaces", device.name, interfaces.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **DCIM Operations**: Query devices and interfaces, fetch device detail
//! - **IPAM Operations**: Query IP-address records bound to an interface
//! - **Pagination**: Optional traversal of all pages of large result sets
//! - **Mocking**: `NetBoxClientTrait` plus an in-memory mock behind the
//!   `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetBoxClient;
