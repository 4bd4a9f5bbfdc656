//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.

use netbox_client::NetBoxClient;

fn live_client() -> NetBoxClient {
    let url = std::env::var("NETBOX_URL").unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token =
        std::env::var("NETBOX_TOKEN").expect("NETBOX_TOKEN environment variable must be set");
    NetBoxClient::new(url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_client_connectivity() {
    let client = live_client();
    client.validate_token().await.expect("Token validation failed");
}

#[tokio::test]
#[ignore]
async fn test_query_devices() {
    let client = live_client();

    let devices = client
        .query_devices(&[], false)
        .await
        .expect("Failed to query devices");

    println!("Found {} devices", devices.len());
}

#[tokio::test]
#[ignore]
async fn test_query_device_interfaces() {
    let client = live_client();

    let devices = client
        .query_devices(&[], false)
        .await
        .expect("Failed to query devices");

    if let Some(device) = devices.first() {
        let id = device.id.to_string();
        let interfaces = client
            .query_interfaces(&[("device_id", &id)], false)
            .await
            .expect("Failed to query interfaces");
        println!("Device {} has {} interfaces", device.name, interfaces.len());
    }
}

#[tokio::test]
#[ignore]
async fn test_query_ip_addresses() {
    let client = live_client();

    let ips = client
        .query_ip_addresses(&[], false)
        .await
        .expect("Failed to query IP addresses");

    println!("Found {} IP addresses", ips.len());
}
