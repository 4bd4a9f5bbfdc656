//! Inventory-specific error types.
//!
//! Failures are fatal by design: the inventory document is emitted whole
//! or not at all.

use netbox_client::NetBoxError;
use thiserror::Error;

/// Errors that can occur while building the inventory document.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// NetBox API error
    #[error("NetBox error: {0}")]
    NetBox(#[from] NetBoxError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
