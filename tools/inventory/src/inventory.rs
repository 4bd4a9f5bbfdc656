//! Inventory document formatting.
//!
//! Folds the aggregated device records into the two-section JSON document
//! Ansible's dynamic-inventory protocol expects: an `all` group listing
//! every host plus shared connection vars, and a `_meta.hostvars` map
//! carrying the per-host variables so Ansible never has to call back with
//! `--host`.

use crate::aggregator::DeviceRecord;
use crate::config::ConnectionVars;
use serde::Serialize;
use serde_json::json;

/// The complete inventory document.
#[derive(Debug, Serialize)]
pub struct Inventory {
    /// Omitted entirely (not null) in the degenerate document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<AllGroup>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// The `all` group: every host name plus shared connection vars.
#[derive(Debug, Serialize)]
pub struct AllGroup {
    pub hosts: Vec<String>,
    pub vars: ConnectionVars,
}

/// The `_meta` section.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub hostvars: serde_json::Map<String, serde_json::Value>,
}

/// Fold device records into the inventory document.
///
/// Hosts appear in the order the records arrived. A device name seen
/// twice overwrites the earlier hostvars entry without adding a second
/// `hosts` row, so `all.hosts` and the `_meta.hostvars` keys always
/// form a bijection.
pub fn build_inventory(devices: Vec<DeviceRecord>, defaults: &ConnectionVars) -> Inventory {
    let mut hosts = Vec::with_capacity(devices.len());
    let mut hostvars = serde_json::Map::new();

    for device in devices {
        let entry = json!({
            "ansible_host": device.ansible_host,
            "ansible_port": device.ansible_port,
            "interfaces": device.interfaces,
            "vlans": device.vlans,
        });
        if hostvars.insert(device.name.clone(), entry).is_none() {
            hosts.push(device.name);
        }
    }

    Inventory {
        all: Some(AllGroup {
            hosts,
            vars: defaults.clone(),
        }),
        meta: Meta { hostvars },
    }
}

/// The degenerate document served for `--host` and flag-less invocations:
/// `{"_meta": {"hostvars": {}}}`.
pub fn empty_inventory() -> Inventory {
    Inventory {
        all: None,
        meta: Meta {
            hostvars: serde_json::Map::new(),
        },
    }
}
