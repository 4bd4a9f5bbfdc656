//! Clap derive structures for the `netbox-inventory` CLI.
//!
//! The two flags mirror Ansible's dynamic-inventory protocol: the consumer
//! invokes `--list` once, and `--host <name>` only when `_meta` is absent
//! from the list output (it never is here, so `--host` stays degenerate).

use clap::Parser;

/// netbox-inventory -- Ansible dynamic inventory backed by NetBox
#[derive(Debug, Parser)]
#[command(
    name = "netbox-inventory",
    version,
    about = "Emit an Ansible dynamic inventory built from the NetBox API"
)]
pub struct Cli {
    /// Emit the full inventory document
    #[arg(long)]
    pub list: bool,

    /// Emit variables for a single host (always empty; per-host variables
    /// are folded into the `_meta` block of `--list` output)
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_flag() {
        let cli = Cli::try_parse_from(["netbox-inventory", "--list"]).unwrap();
        assert!(cli.list);
        assert!(cli.host.is_none());
    }

    #[test]
    fn test_parse_host_flag() {
        let cli = Cli::try_parse_from(["netbox-inventory", "--host", "sw1"]).unwrap();
        assert!(!cli.list);
        assert_eq!(cli.host.as_deref(), Some("sw1"));
    }

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::try_parse_from(["netbox-inventory"]).unwrap();
        assert!(!cli.list);
        assert!(cli.host.is_none());
    }
}
