//! netbox-inventory
//!
//! Ansible dynamic inventory backed by the NetBox DCIM/IPAM API.
//!
//! `--list` queries NetBox and emits the full inventory document on
//! stdout; `--host <name>` (and the flag-less case) emit the degenerate
//! `{"_meta": {"hostvars": {}}}` document without touching the network,
//! per the `_meta` dynamic-inventory convention.

mod aggregator;
mod cli;
mod config;
mod error;
mod inventory;
#[cfg(test)]
mod inventory_test;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::InventoryError;
use clap::Parser;
use netbox_client::NetBoxClient;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), InventoryError> {
    // Logs go to stderr: stdout is reserved for the inventory document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let document = if cli.list {
        let config = Config::from_env()?;
        info!("Building inventory from {}", config.netbox_url);

        let client = NetBoxClient::new(config.netbox_url.clone(), config.netbox_token.clone())?;
        let devices = aggregator::collect_devices(&client, &config.ssh_port_field).await?;
        info!("Aggregated {} devices", devices.len());

        inventory::build_inventory(devices, &config.connection)
    } else {
        // --host and the flag-less case: per-host variables are served
        // through _meta during --list, never individually.
        if let Some(host) = &cli.host {
            debug!("Per-host lookup for {} served from _meta", host);
        }
        inventory::empty_inventory()
    };

    println!("{}", serde_json::to_string(&document)?);
    Ok(())
}
