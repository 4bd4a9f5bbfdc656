//! Mock NetBoxClient for unit testing
//!
//! Provides an in-memory implementation of NetBoxClientTrait that can be
//! used in unit tests without a running NetBox instance. Stores are keyed
//! the way the inventory queries them: interfaces by owning device,
//! IP-address records by owning interface.

use crate::error::NetBoxError;
use crate::models::{Device, Interface, NestedDevice, NestedIPAddress, NestedVlan};
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock NetBoxClient for testing
///
/// The mock honours the `device_id` and `interface_id` filters the
/// aggregation path uses; other filters are ignored.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    base_url: String,
    devices: Arc<Mutex<HashMap<u64, Device>>>,
    interfaces: Arc<Mutex<HashMap<u64, Interface>>>,
    // IP-address records keyed by interface id
    ip_addresses: Arc<Mutex<HashMap<u64, Vec<serde_json::Value>>>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            devices: Arc::new(Mutex::new(HashMap::new())),
            interfaces: Arc::new(Mutex::new(HashMap::new())),
            ip_addresses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a device to the mock store (for test setup)
    pub fn add_device(&self, device: Device) {
        self.devices.lock().unwrap().insert(device.id, device);
    }

    /// Add an interface to the mock store (for test setup)
    pub fn add_interface(&self, interface: Interface) {
        self.interfaces
            .lock()
            .unwrap()
            .insert(interface.id, interface);
    }

    /// Set the IP-address records bound to an interface (for test setup)
    pub fn set_interface_addresses(&self, interface_id: u64, records: Vec<serde_json::Value>) {
        self.ip_addresses
            .lock()
            .unwrap()
            .insert(interface_id, records);
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        Ok(())
    }

    async fn query_devices(
        &self,
        _filters: &[(&str, &str)],
        _fetch_all: bool,
    ) -> Result<Vec<Device>, NetBoxError> {
        let devices = self.devices.lock().unwrap();
        let mut all: Vec<Device> = devices.values().cloned().collect();
        // HashMap order is arbitrary; the API returns a stable ordering
        all.sort_by_key(|d| d.id);
        Ok(all)
    }

    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        self.devices
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| NetBoxError::NotFound(format!("Device {} not found", id)))
    }

    async fn query_interfaces(
        &self,
        filters: &[(&str, &str)],
        _fetch_all: bool,
    ) -> Result<Vec<Interface>, NetBoxError> {
        let device_id = filter_value(filters, "device_id");
        let interfaces = self.interfaces.lock().unwrap();
        let mut matching: Vec<Interface> = interfaces
            .values()
            .filter(|i| match device_id {
                Some(id) => i.device.id.to_string() == id,
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by_key(|i| i.id);
        Ok(matching)
    }

    async fn query_ip_addresses(
        &self,
        filters: &[(&str, &str)],
        _fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        match filter_value(filters, "interface_id") {
            Some(id) => {
                let id: u64 = id
                    .parse()
                    .map_err(|_| NetBoxError::Api(format!("bad interface_id filter: {}", id)))?;
                Ok(self
                    .ip_addresses
                    .lock()
                    .unwrap()
                    .get(&id)
                    .cloned()
                    .unwrap_or_default())
            }
            None => Ok(self
                .ip_addresses
                .lock()
                .unwrap()
                .values()
                .flatten()
                .cloned()
                .collect()),
        }
    }
}

fn filter_value<'a>(filters: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    filters.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Helper functions for creating model values in tests
#[derive(Debug)]
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Helper to create a Device
    pub fn create_device(&self, id: u64, name: &str) -> Device {
        Device {
            id,
            url: format!("{}/api/dcim/devices/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
            primary_ip: None,
            custom_fields: serde_json::Value::Null,
            created: "2025-01-01T00:00:00Z".to_string(),
            last_updated: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    /// Helper to create an Interface belonging to a device
    pub fn create_interface(&self, id: u64, name: &str, device: &Device) -> Interface {
        Interface {
            id,
            url: format!("{}/api/dcim/interfaces/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
            mac_address: None,
            device: NestedDevice {
                id: device.id,
                url: device.url.clone(),
                display: device.display.clone(),
                name: device.name.clone(),
            },
            tagged_vlans: Vec::new(),
            untagged_vlan: None,
        }
    }

    /// Helper to create a NestedVlan
    pub fn create_nested_vlan(&self, id: u64, vid: u16) -> NestedVlan {
        NestedVlan {
            id,
            url: format!("{}/api/ipam/vlans/{}/", self.base_url, id),
            display: format!("VLAN {}", vid),
            vid,
            name: format!("VLAN {}", vid),
        }
    }

    /// Helper to create a NestedIPAddress
    pub fn create_nested_ip(&self, id: u64, address: &str) -> NestedIPAddress {
        NestedIPAddress {
            id,
            url: format!("{}/api/ipam/ip-addresses/{}/", self.base_url, id),
            display: address.to_string(),
            address: address.to_string(),
        }
    }
}
