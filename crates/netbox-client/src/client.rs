//! NetBox API client
//!
//! Implements the read-only NetBox REST API client used to build dynamic
//! inventories. Covers /api/dcim/devices/, /api/dcim/interfaces/ and
//! /api/ipam/ip-addresses/.

use crate::common::HttpClient;
use crate::error::NetBoxError;
use crate::models::{Device, Interface};
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// NetBox API client
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// Makes a lightweight request to the NetBox status endpoint to test
    /// connectivity and token validity before proceeding with operations.
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");

        self.http.get::<serde_json::Value>("/api/status/").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    /// Query devices by filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("name", "router-01")])
    /// * `fetch_all` - If true, fetch all pages (default: false, returns first page only)
    pub async fn query_devices(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Device>, NetBoxError> {
        debug!("Querying devices with filters: {:?}", filters);
        self.http.query("dcim/devices", filters, fetch_all).await
    }

    /// Get a device by ID
    ///
    /// The detail serializer carries `primary_ip` and `custom_fields`.
    pub async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        debug!("Fetching device {} from NetBox", id);
        self.http.get(&format!("/api/dcim/devices/{}/", id)).await
    }

    /// Query interfaces by filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("device_id", "1")])
    /// * `fetch_all` - If true, fetch all pages (default: false, returns first page only)
    pub async fn query_interfaces(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Interface>, NetBoxError> {
        debug!("Querying interfaces with filters: {:?}", filters);
        self.http.query("dcim/interfaces", filters, fetch_all).await
    }

    /// Query IP addresses by filters
    ///
    /// Records are returned as raw JSON values: the inventory document
    /// carries them through exactly as NetBox serialized them.
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("interface_id", "10")])
    /// * `fetch_all` - If true, fetch all pages (default: false, returns first page only)
    pub async fn query_ip_addresses(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        debug!("Querying IP addresses with filters: {:?}", filters);
        self.http.query("ipam/ip-addresses", filters, fetch_all).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.validate_token().await
    }

    async fn query_devices(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Device>, NetBoxError> {
        self.query_devices(filters, fetch_all).await
    }

    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        self.get_device(id).await
    }

    async fn query_interfaces(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<Interface>, NetBoxError> {
        self.query_interfaces(filters, fetch_all).await
    }

    async fn query_ip_addresses(
        &self,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        self.query_ip_addresses(filters, fetch_all).await
    }
}
