//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock
//! implementations.

use crate::error::NetBoxError;
use crate::models::{Device, Interface};

/// Trait for the read-only NetBox API operations the inventory consumes
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    // DCIM Operations
    async fn query_devices(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Device>, NetBoxError>;
    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError>;
    async fn query_interfaces(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Interface>, NetBoxError>;

    // IPAM Operations
    async fn query_ip_addresses(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError>;
}
