//! NetBox API models
//!
//! These models cover the subset of the NetBox REST API serializers that
//! inventory tooling reads. Unknown response fields are ignored; opaque
//! payloads (`custom_fields`, raw IP-address records) stay as
//! `serde_json::Value` and flow through untouched.

use serde::{Deserialize, Serialize};

/// Device model (from DCIM API)
///
/// Returned by both the device list and the device detail endpoint.
/// `primary_ip` is the designated management address, with prefix length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Device {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub primary_ip: Option<NestedIPAddress>,
    /// Free-form custom attribute mapping; null when the device has none.
    #[serde(default)]
    pub custom_fields: serde_json::Value,
    pub created: String,
    pub last_updated: String,
}

/// Interface model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Interface {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub mac_address: Option<String>,
    pub device: NestedDevice,
    #[serde(default)]
    pub tagged_vlans: Vec<NestedVlan>,
    pub untagged_vlan: Option<NestedVlan>,
}

// Nested serializers (simplified versions for references)

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedDevice {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedVlan {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub vid: u16,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedIPAddress {
    pub id: u64,
    pub url: String,
    pub display: String,
    /// Address with prefix length, e.g. "192.0.2.1/24"
    pub address: String,
}

impl NestedIPAddress {
    /// The address with the prefix length stripped.
    pub fn bare_address(&self) -> &str {
        self.address.split('/').next().unwrap_or(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(address: &str) -> NestedIPAddress {
        NestedIPAddress {
            id: 1,
            url: "http://netbox/api/ipam/ip-addresses/1/".to_string(),
            display: address.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_bare_address_strips_prefix_length() {
        assert_eq!(ip("10.0.0.1/24").bare_address(), "10.0.0.1");
        assert_eq!(ip("2001:db8::1/64").bare_address(), "2001:db8::1");
    }

    #[test]
    fn test_bare_address_without_prefix_is_unchanged() {
        assert_eq!(ip("10.0.0.1").bare_address(), "10.0.0.1");
    }

    #[test]
    fn test_device_decodes_without_custom_fields() {
        let device: Device = serde_json::from_value(serde_json::json!({
            "id": 1,
            "url": "http://netbox/api/dcim/devices/1/",
            "display": "sw1",
            "name": "sw1",
            "primary_ip": null,
            "created": "2025-01-01T00:00:00Z",
            "last_updated": "2025-06-01T00:00:00Z"
        }))
        .unwrap();

        assert!(device.custom_fields.is_null());
        assert!(device.primary_ip.is_none());
    }
}
