//! Hardware inventory capability
//!
//! The engine never talks to the OS directly. Every hardware fact it hashes
//! comes through a [`HardwareInfoSource`], so a backend can be swapped per
//! platform (sysfs on Linux, management instrumentation elsewhere) or faked
//! in tests.

use std::path::{Path, PathBuf};

use hp_error::Result;

/// Answers property queries about the host's hardware.
///
/// Implementations must be deterministic for an unchanged host: the same
/// query returns the same values in the same order.
#[cfg_attr(test, mockall::automock)]
pub trait HardwareInfoSource {
    /// Return every non-empty value found for `properties` across all
    /// instances of `class`, instance by instance, in property order.
    ///
    /// Properties that cannot be read are skipped. An unknown class yields
    /// an empty vector. `Err` is reserved for failures of the backend as a
    /// whole.
    fn query_properties(&self, class: &str, properties: &[&'static str]) -> Result<Vec<String>>;

    /// MAC address of the first network adapter configuration that is
    /// IP-enabled, if any.
    fn query_ip_enabled_mac(&self) -> Result<Option<String>>;

    /// Serial number of the physical disk backing `system_root`.
    ///
    /// `None` when no disk correlates with the root. A disk that was found
    /// but reports no serial yields `Some` with an empty string.
    fn query_system_disk_serial(&self, system_root: &Path) -> Result<Option<String>>;
}

impl<T: HardwareInfoSource + ?Sized> HardwareInfoSource for &T {
    fn query_properties(&self, class: &str, properties: &[&'static str]) -> Result<Vec<String>> {
        (**self).query_properties(class, properties)
    }

    fn query_ip_enabled_mac(&self) -> Result<Option<String>> {
        (**self).query_ip_enabled_mac()
    }

    fn query_system_disk_serial(&self, system_root: &Path) -> Result<Option<String>> {
        (**self).query_system_disk_serial(system_root)
    }
}

/// Root path of the volume the operating system runs from.
#[cfg(windows)]
pub fn system_root_path() -> PathBuf {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    PathBuf::from(format!("{}\\", drive.trim_end_matches('\\')))
}

/// Root path of the volume the operating system runs from.
#[cfg(not(windows))]
pub fn system_root_path() -> PathBuf {
    PathBuf::from("/")
}
