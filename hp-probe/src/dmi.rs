//! BIOS and base board identity from the DMI/SMBIOS tables
//!
//! `product_serial` and `board_serial` are readable by root only; as an
//! unprivileged user they are silently absent.

use std::path::Path;

use hp_core::constants::property;

use crate::constants::DMI_ID_PATH;
use crate::sysfs::{read_dir_attr, set, Instance};

/// (property, DMI attribute) for the BIOS. SMBIOS has no identification code.
const BIOS_ATTRS: &[(&str, &str)] = &[
    (property::MANUFACTURER, "bios_vendor"),
    (property::FIRMWARE_VERSION, "bios_version"),
    (property::SERIAL_NUMBER, "product_serial"),
    (property::RELEASE_DATE, "bios_date"),
    (property::VERSION, "bios_release"),
];

const BASE_BOARD_ATTRS: &[(&str, &str)] = &[
    (property::MODEL, "board_version"),
    (property::MANUFACTURER, "board_vendor"),
    (property::NAME, "board_name"),
    (property::SERIAL_NUMBER, "board_serial"),
];

pub(crate) fn bios(root: &Path) -> Vec<Instance> {
    read_instance(root, BIOS_ATTRS)
}

pub(crate) fn base_board(root: &Path) -> Vec<Instance> {
    read_instance(root, BASE_BOARD_ATTRS)
}

fn read_instance(root: &Path, attrs: &[(&'static str, &str)]) -> Vec<Instance> {
    let dmi = root.join(DMI_ID_PATH);
    if !dmi.is_dir() {
        return Vec::new();
    }

    let mut instance = Instance::new();
    for &(prop, attr) in attrs {
        set(&mut instance, prop, read_dir_attr(&dmi, attr));
    }
    vec![instance]
}
