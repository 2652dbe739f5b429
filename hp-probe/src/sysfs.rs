//! Small helpers for reading sysfs/procfs attributes

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::trace;

/// Properties read for one device instance, keyed by property name
pub(crate) type Instance = HashMap<&'static str, String>;

/// Read an attribute file, trimmed. Missing, unreadable or empty files
/// yield `None`.
pub(crate) fn read_attr(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => {
            let value = s.trim_matches(|c: char| c.is_whitespace() || c == '\0');
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        Err(e) => {
            trace!(path = %path.display(), error = %e, "Attribute not readable");
            None
        }
    }
}

/// Read `attr` below `dir`, refusing attribute names that escape the directory
pub(crate) fn read_dir_attr(dir: &Path, attr: &str) -> Option<String> {
    if attr.contains("..") || attr.contains('\0') || attr.starts_with('/') {
        return None;
    }
    read_attr(&dir.join(attr))
}

/// Entry names of a directory, sorted. Unreadable directories are empty.
pub(crate) fn sorted_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(e) => {
            trace!(path = %dir.display(), error = %e, "Directory not readable");
            Vec::new()
        }
    };
    names.sort();
    names
}

/// Parse `KEY=value` lines (uevent files)
pub(crate) fn parse_key_values(text: &str) -> HashMap<String, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

/// Copy `value` into `instance` under `property` when present
pub(crate) fn set(instance: &mut Instance, property: &'static str, value: Option<String>) {
    if let Some(v) = value {
        instance.insert(property, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_attr_trims_and_filters() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vendor"), "  LENOVO \n").unwrap();
        fs::write(dir.path().join("empty"), "\n").unwrap();
        fs::write(dir.path().join("model"), "Raspberry Pi 4\0").unwrap();

        assert_eq!(read_dir_attr(dir.path(), "vendor").as_deref(), Some("LENOVO"));
        assert_eq!(read_dir_attr(dir.path(), "empty"), None);
        assert_eq!(read_dir_attr(dir.path(), "missing"), None);
        assert_eq!(read_dir_attr(dir.path(), "model").as_deref(), Some("Raspberry Pi 4"));
        assert_eq!(read_dir_attr(dir.path(), "../vendor"), None);
    }

    #[test]
    fn test_sorted_entries() {
        let dir = TempDir::new().unwrap();
        for name in ["wlan0", "eth0", "lo"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        assert_eq!(sorted_entries(dir.path()), vec!["eth0", "lo", "wlan0"]);
        assert!(sorted_entries(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_parse_key_values() {
        let kv = parse_key_values("DRIVER=i915\nPCI_ID=8086:3E9B\nnoise\n");
        assert_eq!(kv.get("DRIVER").map(String::as_str), Some("i915"));
        assert_eq!(kv.get("PCI_ID").map(String::as_str), Some("8086:3E9B"));
        assert_eq!(kv.len(), 2);
    }
}
