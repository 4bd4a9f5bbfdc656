//! Runtime configuration, loaded from environment variables.
//!
//! Nothing here is hard-coded into the binary: the NetBox endpoint, the
//! API token, the custom-field slot carrying the SSH-port override, and
//! the static connection defaults emitted under `all.vars` are all
//! environment-supplied, with defaults matching the lab setup this tool
//! grew out of.

use crate::error::InventoryError;
use serde::Serialize;
use std::env;

/// Static connection defaults emitted under `all.vars`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionVars {
    pub ansible_ssh_user: String,
    pub ansible_network_os: String,
    pub ansible_ssh_private_key_file: String,
}

/// Inventory tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NetBox base URL (scheme + host + port)
    pub netbox_url: String,
    /// NetBox API token
    pub netbox_token: String,
    /// Name of the device custom field holding the SSH-port override
    pub ssh_port_field: String,
    /// Connection defaults for the `all` group
    pub connection: ConnectionVars,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `NETBOX_TOKEN` is required; everything else has a default.
    pub fn from_env() -> Result<Self, InventoryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, InventoryError> {
        let netbox_token = get("NETBOX_TOKEN").ok_or_else(|| {
            InventoryError::InvalidConfig(
                "NETBOX_TOKEN environment variable is required".to_string(),
            )
        })?;

        Ok(Self {
            netbox_url: get("NETBOX_URL").unwrap_or_else(|| "http://localhost:8000".to_string()),
            netbox_token,
            ssh_port_field: get("NETBOX_SSH_PORT_FIELD").unwrap_or_else(|| "ssh_port".to_string()),
            connection: ConnectionVars {
                ansible_ssh_user: get("ANSIBLE_SSH_USER").unwrap_or_else(|| "vagrant".to_string()),
                ansible_network_os: get("ANSIBLE_NETWORK_OS").unwrap_or_else(|| "eos".to_string()),
                ansible_ssh_private_key_file: get("ANSIBLE_SSH_PRIVATE_KEY_FILE")
                    .unwrap_or_else(|| "~/.vagrant.d/insecure_private_key".to_string()),
            },
        })
    }
}
