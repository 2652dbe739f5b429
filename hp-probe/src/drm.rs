//! Video controllers from DRM cards

use std::fs;
use std::path::Path;

use hp_core::constants::property;

use crate::constants::{DRM_PATH, MODULE_PATH, OSRELEASE_PATH};
use crate::sysfs::{parse_key_values, read_attr, set, sorted_entries, Instance};

/// One instance per `cardN` (connector entries like `card0-HDMI-A-1` are
/// skipped), ordered by card number.
pub(crate) fn video_controllers(root: &Path) -> Vec<Instance> {
    let drm = root.join(DRM_PATH);

    let mut cards: Vec<(u32, String)> = sorted_entries(&drm)
        .into_iter()
        .filter_map(|name| {
            let index = name.strip_prefix("card")?.parse::<u32>().ok()?;
            Some((index, name))
        })
        .collect();
    cards.sort();

    cards
        .into_iter()
        .map(|(_, card)| controller_instance(root, &drm.join(card)))
        .filter(|instance| !instance.is_empty())
        .collect()
}

fn controller_instance(root: &Path, card_path: &Path) -> Instance {
    let uevent = fs::read_to_string(card_path.join("device/uevent"))
        .map(|text| parse_key_values(&text))
        .unwrap_or_default();

    let driver = uevent.get("DRIVER").filter(|d| !d.is_empty());
    let pci_id = uevent.get("PCI_ID").filter(|p| !p.is_empty());

    let name = match (driver, pci_id) {
        (Some(d), Some(p)) => Some(format!("{} {}", d, p)),
        (Some(d), None) => Some(d.clone()),
        (None, Some(p)) => Some(p.clone()),
        (None, None) => None,
    };

    let driver_version = driver.and_then(|d| {
        read_attr(&root.join(MODULE_PATH).join(d).join("version"))
            .or_else(|| read_attr(&root.join(OSRELEASE_PATH)))
    });

    let mut instance = Instance::new();
    set(&mut instance, property::DRIVER_VERSION, driver_version);
    set(&mut instance, property::NAME, name);
    instance
}
