//! Unit tests for the inventory formatter.

#[cfg(test)]
mod tests {
    use crate::aggregator::DeviceRecord;
    use crate::config::ConnectionVars;
    use crate::inventory::{build_inventory, empty_inventory};
    use serde_json::json;

    fn defaults() -> ConnectionVars {
        ConnectionVars {
            ansible_ssh_user: "vagrant".to_string(),
            ansible_network_os: "eos".to_string(),
            ansible_ssh_private_key_file: "~/.vagrant.d/insecure_private_key".to_string(),
        }
    }

    fn record(id: u64, name: &str) -> DeviceRecord {
        DeviceRecord {
            id,
            name: name.to_string(),
            ansible_host: None,
            ansible_port: None,
            interfaces: Vec::new(),
            vlans: Vec::new(),
        }
    }

    #[test]
    fn test_empty_inventory_document_shape() {
        let doc = serde_json::to_value(empty_inventory()).unwrap();
        assert_eq!(doc, json!({"_meta": {"hostvars": {}}}));
    }

    #[test]
    fn test_hosts_and_hostvars_are_a_bijection() {
        let devices = vec![record(1, "sw1"), record(2, "sw2"), record(3, "sw3")];
        let inventory = build_inventory(devices, &defaults());

        let all = inventory.all.as_ref().unwrap();
        assert_eq!(all.hosts.len(), inventory.meta.hostvars.len());
        for host in &all.hosts {
            assert!(inventory.meta.hostvars.contains_key(host));
        }
    }

    #[test]
    fn test_colliding_names_are_last_write_wins() {
        let mut first = record(1, "sw1");
        first.ansible_host = Some("10.0.0.1".to_string());
        let mut second = record(2, "sw1");
        second.ansible_host = Some("10.0.0.2".to_string());

        let inventory = build_inventory(vec![first, second], &defaults());

        let all = inventory.all.as_ref().unwrap();
        assert_eq!(all.hosts, vec!["sw1"]);
        assert_eq!(inventory.meta.hostvars.len(), 1);
        assert_eq!(
            inventory.meta.hostvars["sw1"]["ansible_host"],
            json!("10.0.0.2")
        );
    }

    #[test]
    fn test_device_without_primary_ip_serializes_null_host() {
        let inventory = build_inventory(vec![record(1, "sw1")], &defaults());

        let hostvars = &inventory.meta.hostvars["sw1"];
        assert_eq!(hostvars["ansible_host"], json!(null));
        assert_eq!(hostvars["ansible_port"], json!(null));
        assert_eq!(hostvars["interfaces"], json!([]));
        assert_eq!(hostvars["vlans"], json!([]));
    }

    #[test]
    fn test_connection_defaults_land_in_all_vars() {
        let inventory = build_inventory(vec![record(1, "sw1")], &defaults());
        let doc = serde_json::to_value(&inventory).unwrap();

        assert_eq!(
            doc["all"]["vars"],
            json!({
                "ansible_ssh_user": "vagrant",
                "ansible_network_os": "eos",
                "ansible_ssh_private_key_file": "~/.vagrant.d/insecure_private_key"
            })
        );
        assert_eq!(doc["all"]["hosts"], json!(["sw1"]));
    }
}
