//! First IP-enabled network adapter

use std::path::Path;

use tracing::debug;

use crate::constants::{NET_PATH, NULL_MAC};
use crate::sysfs::{read_dir_attr, sorted_entries};

/// MAC of the first interface that is up and has a hardware address.
///
/// Interfaces backed by a physical device are preferred over virtual ones
/// (bridges, tunnels, containers); within each group the order is by name.
pub(crate) fn first_ip_enabled_mac(root: &Path) -> Option<String> {
    let net = root.join(NET_PATH);
    let names: Vec<String> = sorted_entries(&net)
        .into_iter()
        .filter(|name| name != "lo")
        .collect();

    let (physical, virtual_): (Vec<&String>, Vec<&String>) = names
        .iter()
        .partition(|name| net.join(name.as_str()).join("device").exists());

    physical
        .into_iter()
        .chain(virtual_)
        .find_map(|name| {
            let iface = net.join(name.as_str());
            if read_dir_attr(&iface, "operstate").as_deref() != Some("up") {
                return None;
            }
            let mac = read_dir_attr(&iface, "address")?;
            if mac == NULL_MAC {
                return None;
            }
            debug!(interface = %name, "Selected network adapter");
            Some(mac.to_ascii_uppercase())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_iface(root: &Path, name: &str, state: &str, mac: &str, physical: bool) {
        let iface = root.join(NET_PATH).join(name);
        fs::create_dir_all(&iface).unwrap();
        fs::write(iface.join("operstate"), format!("{}\n", state)).unwrap();
        fs::write(iface.join("address"), format!("{}\n", mac)).unwrap();
        if physical {
            fs::create_dir_all(iface.join("device")).unwrap();
        }
    }

    #[test]
    fn test_prefers_physical_up_interface() {
        let root = TempDir::new().unwrap();
        add_iface(root.path(), "lo", "unknown", NULL_MAC, false);
        add_iface(root.path(), "docker0", "up", "02:42:ac:11:00:01", false);
        add_iface(root.path(), "enp3s0", "down", "3c:7c:3f:00:00:01", true);
        add_iface(root.path(), "wlp2s0", "up", "a4:c3:f0:12:34:56", true);

        assert_eq!(
            first_ip_enabled_mac(root.path()).as_deref(),
            Some("A4:C3:F0:12:34:56")
        );
    }

    #[test]
    fn test_falls_back_to_virtual_interface() {
        let root = TempDir::new().unwrap();
        add_iface(root.path(), "eth0", "down", "3c:7c:3f:00:00:01", true);
        add_iface(root.path(), "br0", "up", "02:00:00:00:00:0a", false);

        assert_eq!(
            first_ip_enabled_mac(root.path()).as_deref(),
            Some("02:00:00:00:00:0A")
        );
    }

    #[test]
    fn test_no_adapter() {
        let root = TempDir::new().unwrap();
        add_iface(root.path(), "lo", "up", NULL_MAC, false);
        add_iface(root.path(), "tun0", "up", NULL_MAC, false);
        assert_eq!(first_ip_enabled_mac(root.path()), None);

        let empty = TempDir::new().unwrap();
        assert_eq!(first_ip_enabled_mac(empty.path()), None);
    }
}
