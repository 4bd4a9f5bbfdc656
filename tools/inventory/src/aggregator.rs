//! Per-device aggregation.
//!
//! Joins four independent NetBox queries into one denormalized record per
//! device: the device list, each device's interfaces, each interface's
//! bound IP addresses, and the device detail (management IP plus the
//! SSH-port custom field). Everything runs sequentially; devices are
//! independent of each other.

use netbox_client::{Device, NetBoxClientTrait, NetBoxError};
use serde::Serialize;
use tracing::debug;

/// One interface with its bound IP-address records.
///
/// `ip_address` carries the NetBox records verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceRecord {
    pub interface_name: String,
    pub interface_id: u64,
    pub ip_address: Vec<serde_json::Value>,
}

/// VLAN assignments for one interface.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceVlans {
    pub interface: String,
    pub int_id: u64,
    pub untagged_vlan: Option<u16>,
    pub tagged_vlans: Vec<u16>,
}

/// Fully-populated per-device record, ready for the inventory formatter.
#[derive(Debug, Clone)]
pub struct DeviceRecord {
    pub id: u64,
    pub name: String,
    pub ansible_host: Option<String>,
    /// SSH-port override, carried verbatim (string or number)
    pub ansible_port: Option<serde_json::Value>,
    pub interfaces: Vec<InterfaceRecord>,
    pub vlans: Vec<InterfaceVlans>,
}

/// Build one record per device known to NetBox, in the order the API
/// returned them.
pub async fn collect_devices(
    client: &dyn NetBoxClientTrait,
    ssh_port_field: &str,
) -> Result<Vec<DeviceRecord>, NetBoxError> {
    let devices = client.query_devices(&[], false).await?;

    let mut records = Vec::with_capacity(devices.len());
    for device in devices {
        records.push(collect_device(client, device, ssh_port_field).await?);
    }
    Ok(records)
}

/// Aggregate a single device.
///
/// One pass over the interface list yields both output sequences: the
/// addressing records and the VLAN assignments stay separate in the
/// final document but are derived together.
async fn collect_device(
    client: &dyn NetBoxClientTrait,
    device: Device,
    ssh_port_field: &str,
) -> Result<DeviceRecord, NetBoxError> {
    debug!("Aggregating device {} ({})", device.name, device.id);

    let device_id = device.id.to_string();
    let interfaces = client
        .query_interfaces(&[("device_id", &device_id)], false)
        .await?;

    let mut interface_records = Vec::with_capacity(interfaces.len());
    let mut vlan_records = Vec::with_capacity(interfaces.len());
    for interface in interfaces {
        let interface_id = interface.id.to_string();
        let ip_address = client
            .query_ip_addresses(&[("interface_id", &interface_id)], false)
            .await?;

        interface_records.push(InterfaceRecord {
            interface_name: interface.name.clone(),
            interface_id: interface.id,
            ip_address,
        });
        vlan_records.push(InterfaceVlans {
            interface: interface.name,
            int_id: interface.id,
            untagged_vlan: interface.untagged_vlan.map(|v| v.vid),
            tagged_vlans: interface.tagged_vlans.iter().map(|v| v.vid).collect(),
        });
    }

    // The detail serializer carries primary_ip and custom_fields; the
    // list entry the loop started from does not reliably have either.
    let detail = client.get_device(device.id).await?;
    let ansible_host = detail
        .primary_ip
        .as_ref()
        .map(|ip| ip.bare_address().to_string());
    let ansible_port = ssh_port_override(&detail.custom_fields, ssh_port_field);

    Ok(DeviceRecord {
        id: device.id,
        name: device.name,
        ansible_host,
        ansible_port,
        interfaces: interface_records,
        vlans: vlan_records,
    })
}

/// Read the SSH-port override from the configured custom-field slot.
///
/// A missing custom-field block, a missing slot, and an explicit null all
/// mean "no override". The value is not coerced: NetBox may store it as a
/// string or a number and the inventory carries it as-is.
fn ssh_port_override(custom_fields: &serde_json::Value, field: &str) -> Option<serde_json::Value> {
    custom_fields
        .get(field)
        .filter(|value| !value.is_null())
        .cloned()
}
