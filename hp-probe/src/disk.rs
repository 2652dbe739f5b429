//! System disk correlation
//!
//! Walks from the OS root mount to the physical disk underneath it:
//! mount table -> block device -> partition -> whole disk, following
//! device-mapper slaves (LVM, dm-crypt) down to real hardware.

use std::fs;
use std::path::Path;

use hp_error::{FingerprintError, Result};
use tracing::debug;

use crate::constants::{BLOCK_PATH, MAX_SLAVE_DEPTH, MOUNTS_PATH, VPD_PG80_HEADER_LEN};
use crate::sysfs::{read_attr, read_dir_attr, sorted_entries};

/// Serial of the disk backing `system_root`.
///
/// `Ok(None)` when the root is not backed by a block device we can place
/// (tmpfs, overlay, network filesystems). A disk without any serial
/// attribute yields `Ok(Some(""))`.
pub(crate) fn system_disk_serial(root: &Path, system_root: &Path) -> Result<Option<String>> {
    let mounts_path = root.join(MOUNTS_PATH);
    let mounts = fs::read_to_string(&mounts_path)
        .map_err(|e| FingerprintError::file_read(&mounts_path, e))?;

    let wanted = system_root.to_string_lossy();
    let Some(device) = mount_source(&mounts, &wanted) else {
        debug!(root = %wanted, "No block device mounted at system root");
        return Ok(None);
    };

    let Some(block) = block_name(root, &device) else {
        debug!(device = %device, "Mount source is not a known block device");
        return Ok(None);
    };

    let Some(disk) = whole_disk(root, &block, 0) else {
        debug!(block = %block, "No disk owns block device");
        return Ok(None);
    };

    debug!(device = %device, disk = %disk, "Resolved system disk");
    Ok(Some(read_serial(root, &disk).unwrap_or_default()))
}

/// Source device of the last mount at `mount_point` (later mounts shadow
/// earlier ones). Only `/dev/...` sources are considered.
fn mount_source(mounts: &str, mount_point: &str) -> Option<String> {
    let wanted = normalize_mount_point(mount_point);
    mounts
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let source = fields.next()?;
            let target = unescape_mount_field(fields.next()?);
            (normalize_mount_point(&target) == wanted).then(|| source.to_string())
        })
        .last()
        .filter(|source| source.starts_with("/dev/"))
}

fn normalize_mount_point(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Decode the octal escapes (`\040` for space) used in /proc/mounts
fn unescape_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() {
            let digits = std::str::from_utf8(&bytes[i + 1..i + 4]).unwrap_or("");
            if let Ok(value) = u8::from_str_radix(digits, 8) {
                out.push(value);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Kernel block device name for a `/dev/...` path
fn block_name(root: &Path, device: &str) -> Option<String> {
    let rel = device.strip_prefix("/dev/")?;

    if let Some(dm_name) = rel.strip_prefix("mapper/") {
        let block = root.join(BLOCK_PATH);
        return sorted_entries(&block)
            .into_iter()
            .filter(|name| name.starts_with("dm-"))
            .find(|name| read_attr(&block.join(name).join("dm/name")).as_deref() == Some(dm_name));
    }

    if rel.contains('/') {
        // by-uuid, by-label and friends are symlinks into /dev
        let resolved = fs::canonicalize(root.join("dev").join(rel)).ok()?;
        return resolved.file_name().map(|n| n.to_string_lossy().into_owned());
    }

    Some(rel.to_string())
}

/// Whole physical disk holding `block`
fn whole_disk(root: &Path, block: &str, depth: usize) -> Option<String> {
    if depth > MAX_SLAVE_DEPTH {
        return None;
    }
    let sys_block = root.join(BLOCK_PATH);

    if sys_block.join(block).is_dir() {
        let slaves = sorted_entries(&sys_block.join(block).join("slaves"));
        return match slaves.first() {
            Some(slave) => whole_disk(root, slave, depth + 1),
            None => Some(block.to_string()),
        };
    }

    sorted_entries(&sys_block)
        .into_iter()
        .find(|disk| sys_block.join(disk).join(block).join("partition").exists())
        .and_then(|disk| {
            // A partition of a device-mapper volume still needs its slaves followed
            if sys_block.join(&disk).join("slaves").is_dir() {
                whole_disk(root, &disk, depth + 1)
            } else {
                Some(disk)
            }
        })
}

fn read_serial(root: &Path, disk: &str) -> Option<String> {
    let disk_dir = root.join(BLOCK_PATH).join(disk);

    read_dir_attr(&disk_dir, "device/serial")
        .or_else(|| read_dir_attr(&disk_dir, "serial"))
        .or_else(|| read_vpd_serial(&disk_dir.join("device/vpd_pg80")))
}

/// SCSI/SATA unit serial number page: 4 header bytes, then ASCII
fn read_vpd_serial(path: &Path) -> Option<String> {
    let raw = fs::read(path).ok()?;
    let payload = raw.get(VPD_PG80_HEADER_LEN..)?;
    let serial = String::from_utf8_lossy(payload)
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string();
    (!serial.is_empty()).then_some(serial)
}
